use axum::extract::{FromRequest, FromRequestParts, OriginalUri};
use axum::http::request::Parts;

use crate::Error;

#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct Json<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(Error))]
pub struct Query<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(Error))]
pub struct Path<T>(pub T);

/// Method and path of the current request, echoed back in every response envelope.
#[derive(Debug, Clone)]
pub struct Endpoint(pub String);

impl<S: Send + Sync> FromRequestParts<S> for Endpoint {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        let path = parts
            .extensions
            .get::<OriginalUri>()
            .map_or_else(|| parts.uri.path(), |uri| uri.path());
        Ok(Self(format!("{} {}", parts.method, path)))
    }
}
