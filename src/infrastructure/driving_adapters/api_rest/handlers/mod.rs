//! HTTP Handlers

pub mod albums;
