//! REST API Module
//!
//! Contains HTTP handlers, DTOs, and extractors for the REST API.

pub mod dto;
pub mod extractors;
pub mod handlers;

use std::sync::Arc;

use axum::{
    body::Body,
    http::{HeaderName, Request},
    Router,
};
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::Span;

use crate::application::services::AlbumIdGenerator;
use crate::application::use_cases::albums::{
    CreateAlbumUseCase, DeleteAlbumUseCase, GetAlbumByIdUseCase, ListAlbumsUseCase, UpdateAlbumUseCase,
};
use crate::domain::gateways::AlbumRepository;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub list_albums_use_case: Arc<ListAlbumsUseCase>,
    pub get_album_by_id_use_case: Arc<GetAlbumByIdUseCase>,
    pub create_album_use_case: Arc<CreateAlbumUseCase>,
    pub update_album_use_case: Arc<UpdateAlbumUseCase>,
    pub delete_album_use_case: Arc<DeleteAlbumUseCase>,
}

impl AppState {
    /// Wire every use case over one repository
    #[must_use]
    pub fn new(album_repository: Arc<dyn AlbumRepository>, max_id_attempts: u32) -> Self {
        let id_generator = Arc::new(AlbumIdGenerator::new(album_repository.clone(), max_id_attempts));

        Self {
            list_albums_use_case: Arc::new(ListAlbumsUseCase::new(album_repository.clone())),
            get_album_by_id_use_case: Arc::new(GetAlbumByIdUseCase::new(album_repository.clone())),
            create_album_use_case: Arc::new(CreateAlbumUseCase::new(album_repository.clone(), id_generator)),
            update_album_use_case: Arc::new(UpdateAlbumUseCase::new(album_repository.clone())),
            delete_album_use_case: Arc::new(DeleteAlbumUseCase::new(album_repository)),
        }
    }
}

/// Header carrying the request id, kept from the client or generated
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Per-request span; every log line of the request carries its id
fn request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    tracing::info_span!(
        "request",
        request_id,
        method = %request.method(),
        uri = %request.uri(),
    )
}

/// Build the full HTTP application: album routes plus tracing and request-id layers
pub fn router(state: AppState) -> Router {
    let request_id_header = HeaderName::from_static(REQUEST_ID_HEADER);

    // Outermost last: the id is set before the trace span opens
    Router::new()
        .merge(handlers::albums::router())
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .with_state(state)
}
