//! Update Album Use Case (PUT)
//!
//! Replaces title, artist and price of an existing album. The id never changes.

use std::sync::Arc;

use crate::domain::gateways::AlbumRepository;
use crate::domain::models::album::{Album, AlbumData, AlbumId};
use crate::shared::errors::UseCaseError;

/// Use case for full album update (PUT)
pub struct UpdateAlbumUseCase {
    album_repository: Arc<dyn AlbumRepository>,
}

impl UpdateAlbumUseCase {
    /// Create a new UpdateAlbumUseCase
    #[must_use]
    pub fn new(album_repository: Arc<dyn AlbumRepository>) -> Self {
        Self { album_repository }
    }

    /// Execute the use case
    ///
    /// The returned album is built from the requested id and data, not re-read.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if no row matched the id.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: &AlbumId, data: AlbumData) -> Result<Album, UseCaseError> {
        tracing::info!(album_id = %id, "Updating album");

        let affected = self.album_repository.update(id, &data).await?;

        if affected == 0 {
            tracing::warn!(album_id = %id, "Album not found for update");
            return Err(UseCaseError::NotFound {
                resource: "Album".to_string(),
                id: id.to_string(),
            });
        }

        tracing::info!(album_id = %id, "Album updated successfully");
        Ok(Album::new(id.clone(), data))
    }
}
