//! Album Catalog API
//!
//! A small Rust microservice exposing CRUD operations on music albums,
//! organised along Clean/Hexagonal Architecture lines.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
