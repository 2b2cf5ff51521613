//! Data Transfer Objects
//!
//! Request and response DTOs for the REST API.

pub mod album;

pub use album::{AlbumRequestDto, AlbumResponseDto};
