//! PostgreSQL Album Repository Implementation
//!
//! Implements the AlbumRepository trait using SQLx for PostgreSQL.
//! `price` is stored as NUMERIC. It crosses the boundary as text holding the
//! shortest decimal form of the `f64`, so reads give back the exact value written.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::gateways::AlbumRepository;
use crate::domain::models::album::{Album, AlbumData, AlbumId};
use crate::shared::errors::RepositoryError;

/// Database row representation for albums table (`price` selected as `price::text`)
#[derive(Debug, sqlx::FromRow)]
struct AlbumRow {
    id: String,
    title: String,
    artist: String,
    price: String,
}

impl TryFrom<AlbumRow> for Album {
    type Error = RepositoryError;

    fn try_from(row: AlbumRow) -> Result<Self, Self::Error> {
        let price = row
            .price
            .parse::<f64>()
            .map_err(|e| RepositoryError::Mapping(format!("Price '{}' is not a number: {}", row.price, e)))?;

        Ok(Album::new(
            AlbumId::from(row.id),
            AlbumData {
                title: row.title,
                artist: row.artist,
                price,
            },
        ))
    }
}

/// Render a domain price as a NUMERIC literal
fn price_to_numeric(price: f64) -> Result<String, RepositoryError> {
    if !price.is_finite() {
        return Err(RepositoryError::Mapping(format!("Price {} is not finite", price)));
    }
    Ok(price.to_string())
}

/// PostgreSQL implementation of AlbumRepository
pub struct PostgresAlbumRepository {
    pool: PgPool,
}

impl PostgresAlbumRepository {
    /// Create a new PostgresAlbumRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AlbumRepository for PostgresAlbumRepository {
    async fn list_all(&self) -> Result<Vec<Album>, RepositoryError> {
        let rows = sqlx::query_as::<_, AlbumRow>(
            r#"
            SELECT id, title, artist, price::text AS price
            FROM albums
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Album::try_from).collect()
    }

    async fn find_by_id(&self, id: &AlbumId) -> Result<Option<Album>, RepositoryError> {
        let row = sqlx::query_as::<_, AlbumRow>(
            r#"
            SELECT id, title, artist, price::text AS price
            FROM albums
            WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Album::try_from).transpose()
    }

    async fn insert(&self, album: &Album) -> Result<(), RepositoryError> {
        let price = price_to_numeric(album.price())?;

        let result = sqlx::query(
            r#"
            INSERT INTO albums (id, title, artist, price)
            VALUES ($1, $2, $3, $4::numeric)
            "#,
        )
        .bind(album.id().as_str())
        .bind(album.title())
        .bind(album.artist())
        .bind(price)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(RepositoryError::Conflict(format!("album id {} already exists", album.id())))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn update(&self, id: &AlbumId, data: &AlbumData) -> Result<u64, RepositoryError> {
        let price = price_to_numeric(data.price)?;

        let result = sqlx::query(
            r#"
            UPDATE albums
            SET title = $2,
                artist = $3,
                price = $4::numeric
            WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .bind(&data.title)
        .bind(&data.artist)
        .bind(price)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: &AlbumId) -> Result<u64, RepositoryError> {
        let result = sqlx::query(
            r#"
            DELETE FROM albums
            WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn exists(&self, id: &AlbumId) -> Result<bool, RepositoryError> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM albums WHERE id = $1
            )
            "#,
        )
        .bind(id.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }
}
