//! Domain Models

pub mod album;

pub use album::{Album, AlbumData, AlbumId, ALBUM_ID_PREFIX};
