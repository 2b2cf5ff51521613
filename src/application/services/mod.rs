//! Application Services

mod album_id_generator;

pub use album_id_generator::AlbumIdGenerator;
