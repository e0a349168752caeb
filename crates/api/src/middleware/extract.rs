//! Request extractors whose rejections use the error envelope.
//!
//! axum's own `Query` and `Bytes` reject with a plain-text status (400,
//! 413, ...). These wrappers turn every rejection into
//! [`AppError::BadRequest`] so clients only ever see the envelope.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use crate::error::AppError;
use crate::state::AppState;

/// Query string deserialized into `T`.
///
/// ```ignore
/// async fn get(ApiQuery(params): ApiQuery<IdParams>) -> AppResult<Json<()>> { ... }
/// ```
#[derive(Debug)]
pub struct ApiQuery<T>(pub T);

impl<T> FromRequestParts<AppState> for ApiQuery<T>
where
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        Ok(ApiQuery(value))
    }
}

/// Raw request body, decoded later by the service layer.
#[derive(Debug)]
pub struct RawBody(pub Bytes);

impl FromRequest<AppState> for RawBody {
    type Rejection = AppError;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await?;
        Ok(RawBody(bytes))
    }
}
