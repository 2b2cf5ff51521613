//! Use Cases
//!
//! Application-specific business rules.
//! Each use case is a single-purpose struct with an execute() method.

pub mod albums;

pub use albums::{
    CreateAlbumUseCase, DeleteAlbumUseCase, GetAlbumByIdUseCase, ListAlbumsUseCase, UpdateAlbumUseCase,
};
