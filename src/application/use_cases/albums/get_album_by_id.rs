//! Get Album By ID Use Case
//!
//! Retrieves a single album by its ID.

use std::sync::Arc;

use crate::domain::gateways::AlbumRepository;
use crate::domain::models::album::{Album, AlbumId};
use crate::shared::errors::UseCaseError;

/// Use case for getting an album by ID
pub struct GetAlbumByIdUseCase {
    album_repository: Arc<dyn AlbumRepository>,
}

impl GetAlbumByIdUseCase {
    /// Create a new GetAlbumByIdUseCase
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
    pub async fn execute(&self, id: &AlbumId) -> Result<Album, UseCaseError> {
        tracing::debug!(album_id = %id, "Getting album by ID");

        let album = self.album_repository.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(album_id = %id, "Album not found");
            UseCaseError::NotFound {
                resource: "Album".to_string(),
                id: id.to_string(),
            }
        })?;

        tracing::debug!(album_id = %id, "Album found");
        Ok(album)
    }
}
