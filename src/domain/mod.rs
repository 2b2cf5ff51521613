//! Domain Layer
//!
//! Contains the core domain model and gateway traits (ports).
//! This layer has no dependencies on infrastructure.

pub mod gateways;
pub mod models;

pub use gateways::album_repository::AlbumRepository;
pub use models::album::{Album, AlbumData, AlbumId};
