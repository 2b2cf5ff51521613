//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - Database repositories
//! - Configuration

pub mod album_repository;
pub mod config;
pub mod database;

pub use album_repository::PostgresAlbumRepository;
pub use config::AppConfig;
