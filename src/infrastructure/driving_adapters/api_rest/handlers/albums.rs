//! Album Handlers
//!
//! HTTP handlers for album CRUD operations.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::domain::models::album::AlbumId;
use crate::infrastructure::driving_adapters::api_rest::dto::album::{AlbumRequestDto, AlbumResponseDto};
use crate::infrastructure::driving_adapters::api_rest::extractors::ValidatedJson;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::{ApiError, MessageResponse};

/// Create the router for album endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/albums", get(list_albums).post(create_album))
        .route(
            "/albums/{id}",
            get(get_album_by_id).put(update_album).delete(delete_album),
        )
}

/// GET /albums - List all albums
///
/// # Responses
///
/// * 200 OK - Every stored album, in database order (possibly empty)
/// * 500 Internal Server Error - Storage failure
#[axum::debug_handler]
async fn list_albums(State(state): State<AppState>) -> Result<Json<Vec<AlbumResponseDto>>, ApiError> {
    let albums = state
        .list_albums_use_case
        .execute()
        .await
        .map_err(|e| ApiError::from_use_case(e, "Error querying database"))?;

    let response: Vec<AlbumResponseDto> = albums.into_iter().map(AlbumResponseDto::from).collect();
    Ok(Json(response))
}

/// GET /albums/{id} - Get an album by ID
///
/// # Responses
///
/// * 200 OK - Album found
/// * 404 Not Found - Album does not exist
/// * 500 Internal Server Error - Storage failure
#[axum::debug_handler]
async fn get_album_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AlbumResponseDto>, ApiError> {
    let album = state
        .get_album_by_id_use_case
        .execute(&AlbumId::from(id))
        .await
        .map_err(|e| ApiError::from_use_case(e, "failed to retrieve album"))?;

    Ok(Json(AlbumResponseDto::from(album)))
}

/// POST /albums - Create a new album
///
/// # Responses
///
/// * 201 Created - Album stored with a server-generated id
/// * 400 Bad Request - Body is not a JSON object with string `title`/`artist` and numeric `price`
/// * 500 Internal Server Error - Id generation or insert failed
#[axum::debug_handler]
async fn create_album(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<AlbumRequestDto>,
) -> Result<(StatusCode, Json<AlbumResponseDto>), ApiError> {
    let album = state
        .create_album_use_case
        .execute(dto.into())
        .await
        .map_err(|e| {
            let message = if e.is_id_generation() {
                "Failed to generate unique ID"
            } else {
                "Failed to insert album into database"
            };
            ApiError::from_use_case(e, message)
        })?;

    Ok((StatusCode::CREATED, Json(AlbumResponseDto::from(album))))
}

/// PUT /albums/{id} - Replace title, artist and price of an album
///
/// # Responses
///
/// * 200 OK - Album updated; the id in the response is the one from the path
/// * 400 Bad Request - Body is not a JSON object with string `title`/`artist` and numeric `price`
/// * 404 Not Found - Album does not exist
/// * 500 Internal Server Error - Storage failure
#[axum::debug_handler]
async fn update_album(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(dto): ValidatedJson<AlbumRequestDto>,
) -> Result<Json<AlbumResponseDto>, ApiError> {
    let album = state
        .update_album_use_case
        .execute(&AlbumId::from(id), dto.into())
        .await
        .map_err(|e| ApiError::from_use_case(e, "Failed to update album"))?;

    Ok(Json(AlbumResponseDto::from(album)))
}

/// DELETE /albums/{id} - Delete an album
///
/// # Responses
///
/// * 200 OK - `{"message": "album deleted"}`
/// * 404 Not Found - Album does not exist
/// * 500 Internal Server Error - Storage failure
#[axum::debug_handler]
async fn delete_album(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .delete_album_use_case
        .execute(&AlbumId::from(id))
        .await
        .map_err(|e| ApiError::from_use_case(e, "failed to delete album"))?;

    Ok(Json(MessageResponse {
        message: "album deleted".to_string(),
    }))
}
