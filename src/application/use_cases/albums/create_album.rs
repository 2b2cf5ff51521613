//! Create Album Use Case
//!
//! Assigns a fresh id to a new album and stores it.

use std::sync::Arc;

use crate::application::services::AlbumIdGenerator;
use crate::domain::gateways::AlbumRepository;
use crate::domain::models::album::{Album, AlbumData};
use crate::shared::errors::{RepositoryError, UseCaseError};

/// Use case for creating a new album
pub struct CreateAlbumUseCase {
    album_repository: Arc<dyn AlbumRepository>,
    id_generator: Arc<AlbumIdGenerator>,
}

impl CreateAlbumUseCase {
    /// Create a new CreateAlbumUseCase
    #[must_use]
    pub fn new(album_repository: Arc<dyn AlbumRepository>, id_generator: Arc<AlbumIdGenerator>) -> Self {
        Self {
            album_repository,
            id_generator,
        }
    }

    /// Execute the use case
    ///
    /// The existence check and the insert are not atomic. When a concurrent
    /// create grabs the same id in between, the insert conflicts and the
    /// whole id-then-insert step is repeated, up to the generator's budget.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::IdGeneration` or `UseCaseError::IdSpaceExhausted` if no id could be picked.
    /// Returns `UseCaseError::InsertConflicts` if every insert hit a concurrent duplicate.
    /// Returns `UseCaseError::Repository` if the insert fails.
    pub async fn execute(&self, data: AlbumData) -> Result<Album, UseCaseError> {
        tracing::info!(title = %data.title, artist = %data.artist, "Creating new album");

        let max_attempts = self.id_generator.max_attempts();
        for attempt in 1..=max_attempts {
            let id = self.id_generator.generate_unique_id().await?;
            let album = Album::new(id, data.clone());

            match self.album_repository.insert(&album).await {
                Ok(()) => {
                    tracing::info!(album_id = %album.id(), "Album created successfully");
                    return Ok(album);
                }
                Err(RepositoryError::Conflict(detail)) => {
                    tracing::warn!(album_id = %album.id(), attempt, %detail, "Album id taken concurrently, retrying");
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(UseCaseError::InsertConflicts {
            attempts: max_attempts,
        })
    }
}
