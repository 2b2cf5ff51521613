//! Request Extractors
//!
//! `ValidatedJson` reads the raw body and parses it as JSON whatever the
//! `Content-Type` header says, then runs the DTO's `Validate` rules.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::shared::errors::ApiError;

/// A JSON body that has been parsed and validated
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(request, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        let value: T = serde_json::from_slice(&bytes)?;
        value.validate()?;

        Ok(Self(value))
    }
}
