//! Album Repository Adapters

mod postgres;

pub use postgres::PostgresAlbumRepository;
