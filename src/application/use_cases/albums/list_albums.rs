//! List Albums Use Case

use std::sync::Arc;

use crate::domain::gateways::AlbumRepository;
use crate::domain::models::album::Album;
use crate::shared::errors::UseCaseError;

/// Use case for listing every album
pub struct ListAlbumsUseCase {
    album_repository: Arc<dyn AlbumRepository>,
}

impl ListAlbumsUseCase {
    /// Create a new ListAlbumsUseCase
    #[must_use]
    pub fn new(album_repository: Arc<dyn AlbumRepository>) -> Self {
        Self { album_repository }
    }

    /// Execute the use case
    ///
    /// An empty catalog is a valid, empty result.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self) -> Result<Vec<Album>, UseCaseError> {
        tracing::debug!("Listing albums");

        let albums = self.album_repository.list_all().await?;

        tracing::debug!(count = albums.len(), "Albums retrieved");
        Ok(albums)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::album_repository::MockAlbumRepository;
    use crate::domain::models::album::{AlbumData, AlbumId};
    use crate::shared::errors::RepositoryError;

    #[tokio::test]
    async fn should_return_empty_list() {
        let mut repo = MockAlbumRepository::new();
        repo.expect_list_all().returning(|| Ok(vec![]));

        let use_case = ListAlbumsUseCase::new(Arc::new(repo));
        let result = use_case.execute().await;

        assert!(result.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_return_all_albums() {
        let mut repo = MockAlbumRepository::new();
        repo.expect_list_all().returning(|| {
            Ok(vec![
                Album::new(
                    AlbumId::from("album-0000000000000001"),
                    AlbumData {
                        title: "Jeru".to_string(),
                        artist: "Gerry Mulligan".to_string(),
                        price: 17.99,
                    },
                ),
                Album::new(
                    AlbumId::from("album-0000000000000002"),
                    AlbumData {
                        title: "Sarah Vaughan and Clifford Brown".to_string(),
                        artist: "Sarah Vaughan".to_string(),
                        price: 39.99,
                    },
                ),
            ])
        });

        let use_case = ListAlbumsUseCase::new(Arc::new(repo));
        let albums = use_case.execute().await.unwrap();

        assert_eq!(albums.len(), 2);
        assert_eq!(albums[0].artist(), "Gerry Mulligan");
    }

    #[tokio::test]
    async fn should_return_repository_error_on_database_failure() {
        let mut repo = MockAlbumRepository::new();
        repo.expect_list_all()
            .returning(|| Err(RepositoryError::Database(sqlx::Error::PoolClosed)));

        let use_case = ListAlbumsUseCase::new(Arc::new(repo));
        let result = use_case.execute().await;

        assert!(matches!(result.unwrap_err(), UseCaseError::Repository(_)));
    }
}
