//! Album DTOs
//!
//! Data transfer objects for album API endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::album::{Album, AlbumData};

/// Validates that the price is a finite number
fn validate_price(dto: &AlbumRequestDto) -> Result<(), validator::ValidationError> {
    if !dto.price.is_finite() {
        let mut error = validator::ValidationError::new("price");
        error.message = Some("price must be a finite number".into());
        return Err(error);
    }
    Ok(())
}

/// Request body for creating (POST) and replacing (PUT) an album
///
/// A client-supplied `id` is not part of the shape and is ignored.
/// Missing fields take their zero value (`""` or `0`).
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
#[validate(schema(function = "validate_price"))]
pub struct AlbumRequestDto {
    pub title: String,
    pub artist: String,
    pub price: f64,
}

impl From<AlbumRequestDto> for AlbumData {
    fn from(dto: AlbumRequestDto) -> Self {
        Self {
            title: dto.title,
            artist: dto.artist,
            price: dto.price,
        }
    }
}

/// Album response DTO
#[derive(Debug, Clone, Serialize)]
pub struct AlbumResponseDto {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub price: f64,
}

impl From<Album> for AlbumResponseDto {
    fn from(album: Album) -> Self {
        Self::from(&album)
    }
}

impl From<&Album> for AlbumResponseDto {
    fn from(album: &Album) -> Self {
        Self {
            id: album.id().to_string(),
            title: album.title().to_string(),
            artist: album.artist().to_string(),
            price: album.price(),
        }
    }
}
