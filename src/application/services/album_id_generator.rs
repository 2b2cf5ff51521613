//! Album ID Generator
//!
//! Picks a random album id and probes the repository until an unused one
//! turns up. The number of probes is bounded.

use std::sync::Arc;

use crate::domain::gateways::AlbumRepository;
use crate::domain::models::album::AlbumId;
use crate::shared::errors::UseCaseError;

/// Generates album ids that are not yet present in storage
pub struct AlbumIdGenerator {
    album_repository: Arc<dyn AlbumRepository>,
    max_attempts: u32,
}

impl AlbumIdGenerator {
    /// Probe budget used when configuration does not say otherwise
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 8;

    /// Create a new AlbumIdGenerator
    ///
    /// A budget of zero is raised to one so that at least one id is tried.
    #[must_use]
    pub fn new(album_repository: Arc<dyn AlbumRepository>, max_attempts: u32) -> Self {
        Self {
            album_repository,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Maximum number of candidates drawn per call
    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Produce an id that was absent from storage at the time of the check
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::IdGeneration` if the existence check fails.
    /// Returns `UseCaseError::IdSpaceExhausted` if every candidate collided.
    pub async fn generate_unique_id(&self) -> Result<AlbumId, UseCaseError> {
        for attempt in 1..=self.max_attempts {
            let candidate = AlbumId::random();

            let taken = self
                .album_repository
                .exists(&candidate)
                .await
                .map_err(UseCaseError::IdGeneration)?;

            if !taken {
                tracing::debug!(album_id = %candidate, attempt, "Generated unique album id");
                return Ok(candidate);
            }

            tracing::warn!(album_id = %candidate, attempt, "Album id already taken, drawing another");
        }

        tracing::error!(attempts = self.max_attempts, "Could not find a free album id");
        Err(UseCaseError::IdSpaceExhausted {
            attempts: self.max_attempts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::album_repository::MockAlbumRepository;
    use crate::domain::models::album::ALBUM_ID_PREFIX;
    use crate::shared::errors::RepositoryError;

    #[tokio::test]
    async fn should_return_first_free_candidate() {
        let mut repo = MockAlbumRepository::new();
        repo.expect_exists().times(1).returning(|_| Ok(false));

        let generator = AlbumIdGenerator::new(Arc::new(repo), 8);
        let id = generator.generate_unique_id().await.unwrap();

        assert!(id.as_str().starts_with(ALBUM_ID_PREFIX));
        assert_eq!(id.as_str().len(), ALBUM_ID_PREFIX.len() + 16);
    }

    #[tokio::test]
    async fn should_retry_on_collision() {
        let mut repo = MockAlbumRepository::new();
        let mut calls = 0;
        repo.expect_exists().times(3).returning(move |_| {
            calls += 1;
            Ok(calls < 3)
        });

        let generator = AlbumIdGenerator::new(Arc::new(repo), 8);
        let result = generator.generate_unique_id().await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_give_up_after_max_attempts() {
        let mut repo = MockAlbumRepository::new();
        repo.expect_exists().times(4).returning(|_| Ok(true));

        let generator = AlbumIdGenerator::new(Arc::new(repo), 4);
        let result = generator.generate_unique_id().await;

        assert!(matches!(
            result.unwrap_err(),
            UseCaseError::IdSpaceExhausted { attempts: 4 }
        ));
    }

    #[tokio::test]
    async fn should_propagate_storage_failure() {
        let mut repo = MockAlbumRepository::new();
        repo.expect_exists()
            .times(1)
            .returning(|_| Err(RepositoryError::Database(sqlx::Error::PoolTimedOut)));

        let generator = AlbumIdGenerator::new(Arc::new(repo), 8);
        let result = generator.generate_unique_id().await;

        assert!(matches!(result.unwrap_err(), UseCaseError::IdGeneration(_)));
    }

    #[test]
    fn should_try_at_least_once() {
        let generator = AlbumIdGenerator::new(Arc::new(MockAlbumRepository::new()), 0);
        assert_eq!(generator.max_attempts(), 1);
    }
}
