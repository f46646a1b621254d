//! Request guards that run before a handler body.
//!
//! Both guards are axum extractors, so a rejection short-circuits the route
//! and the service is never called.

use axum::{
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::error::ApiError;
use crate::model::{NewTodo, TodoPatch};

/// The `{id}` path segment, checked to be one or more decimal digits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TodoId(pub u64);

impl TodoId {
    pub fn parse(raw: &str) -> Result<Self, ApiError> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ApiError::InvalidId(raw.to_string()));
        }
        // All digits but wider than u64: well-formed, and no stored item can carry it.
        raw.parse()
            .map(Self)
            .map_err(|_| ApiError::NotFound(raw.to_string()))
    }
}

impl<S> FromRequestParts<S> for TodoId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(raw)) => raw,
            Err(rejection) => {
                debug!(%rejection, "undecodable id param");
                // Echo the segment as sent, still percent-encoded.
                let segment = parts.uri.path().rsplit('/').next().unwrap_or_default();
                return Err(ApiError::InvalidId(segment.to_string()));
            }
        };
        Self::parse(&raw).inspect_err(|err| debug!(%raw, %err, "rejected id param"))
    }
}

/// Semantic checks applied after a body deserializes.
pub trait Validate {
    fn validate(&self) -> Result<(), ApiError>;
}

impl Validate for NewTodo {
    fn validate(&self) -> Result<(), ApiError> {
        if self.task.is_empty() {
            return Err(ApiError::InvalidBody);
        }
        Ok(())
    }
}

impl Validate for TodoPatch {
    fn validate(&self) -> Result<(), ApiError> {
        if self.task.as_deref() == Some("") {
            return Err(ApiError::InvalidBody);
        }
        Ok(())
    }
}

/// A JSON body that deserialized into `T` and passed `T::validate`.
#[derive(Debug)]
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(raw) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| {
                debug!(%rejection, "rejected body");
                ApiError::InvalidBody
            })?;
        // Serde would accept a JSON array for a struct; only objects qualify.
        if !raw.is_object() {
            return Err(ApiError::InvalidBody);
        }
        let value = serde_json::from_value::<T>(raw).map_err(|err| {
            debug!(%err, "body shape mismatch");
            ApiError::InvalidBody
        })?;
        value.validate()?;
        Ok(Self(value))
    }
}
