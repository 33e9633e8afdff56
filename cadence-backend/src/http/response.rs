use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use super::extract::Endpoint;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Success<T> {
    msg: String,
    msg_code: &'static str,
    code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
}

impl Endpoint {
    pub fn ok<T: Serialize>(self, data: T) -> Success<T> {
        Success {
            msg: self.0,
            msg_code: "success",
            code: StatusCode::OK.as_u16(),
            data: Some(data),
        }
    }

    pub fn done(self) -> Success<()> {
        Success { msg: self.0, msg_code: "success", code: StatusCode::OK.as_u16(), data: None }
    }
}

impl<T: Serialize> IntoResponse for Success<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}
