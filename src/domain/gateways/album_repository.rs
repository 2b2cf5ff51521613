//! Album Repository Gateway
//!
//! Abstract trait defining the contract for album persistence operations.

use async_trait::async_trait;

use crate::domain::models::album::{Album, AlbumData, AlbumId};
use crate::shared::errors::RepositoryError;

/// Repository trait for Album persistence operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AlbumRepository: Send + Sync {
    /// List every album, in whatever order the database returns them
    async fn list_all(&self) -> Result<Vec<Album>, RepositoryError>;

    /// Find an album by its ID
    async fn find_by_id(&self, id: &AlbumId) -> Result<Option<Album>, RepositoryError>;

    /// Insert a new album
    ///
    /// A duplicate id is reported as `RepositoryError::Conflict`.
    async fn insert(&self, album: &Album) -> Result<(), RepositoryError>;

    /// Overwrite title, artist and price of an album, returning the number of affected rows
    async fn update(&self, id: &AlbumId, data: &AlbumData) -> Result<u64, RepositoryError>;

    /// Delete an album, returning the number of affected rows
    async fn delete(&self, id: &AlbumId) -> Result<u64, RepositoryError>;

    /// Check whether an album with the given ID exists
    async fn exists(&self, id: &AlbumId) -> Result<bool, RepositoryError>;
}
