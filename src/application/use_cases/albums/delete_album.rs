//! Delete Album Use Case
//!
//! Permanently removes an album row.

use std::sync::Arc;

use crate::domain::gateways::AlbumRepository;
use crate::domain::models::album::AlbumId;
use crate::shared::errors::UseCaseError;

/// Use case for deleting an album
pub struct DeleteAlbumUseCase {
    album_repository: Arc<dyn AlbumRepository>,
}

impl DeleteAlbumUseCase {
    /// Create a new DeleteAlbumUseCase
    #[must_use]
    pub fn new(album_repository: Arc<dyn AlbumRepository>) -> Self {
        Self { album_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the album doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: &AlbumId) -> Result<(), UseCaseError> {
        tracing::info!(album_id = %id, "Deleting album");

        let affected = self.album_repository.delete(id).await?;

        if affected == 0 {
            tracing::warn!(album_id = %id, "Album not found for deletion");
            return Err(UseCaseError::NotFound {
                resource: "Album".to_string(),
                id: id.to_string(),
            });
        }

        tracing::info!(album_id = %id, "Album deleted successfully");
        Ok(())
    }
}
