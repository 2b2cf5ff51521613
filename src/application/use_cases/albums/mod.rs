//! Album Use Cases
//!
//! One use case per CRUD operation on albums.

mod create_album;
mod delete_album;
mod get_album_by_id;
mod list_albums;
mod update_album;

pub use create_album::CreateAlbumUseCase;
pub use delete_album::DeleteAlbumUseCase;
pub use get_album_by_id::GetAlbumByIdUseCase;
pub use list_albums::ListAlbumsUseCase;
pub use update_album::UpdateAlbumUseCase;
