use std::borrow::Cow;

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::database::Entity;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    InvalidParameter(&'static str),
    #[error(transparent)]
    ExtractRequestBody(#[from] JsonRejection),
    #[error(transparent)]
    ExtractRequestQuery(#[from] QueryRejection),
    #[error(transparent)]
    ExtractRequestPath(#[from] PathRejection),

    #[error("{0} not found")]
    NotFound(Entity),
    #[error("{0} with the same id already exists")]
    AlreadyExists(Entity),

    #[error("Email is already registered")]
    EmailAlreadyRegistered,
    #[error("History tracking is disabled for this user")]
    HistoryTrackingDisabled,
    #[error("User is already a contributor to this playlist")]
    AlreadyContributor,
    #[error("User is not a contributor to this playlist")]
    NotContributor,

    #[error("Could not login due to bad credentials")]
    Unauthenticated,
    #[error("You are not allowed to {0}")]
    Forbidden(&'static str),

    #[error(transparent)]
    Internal(#[from] color_eyre::Report),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Failure {
    msg: Cow<'static, str>,
    msg_code: Cow<'static, str>,
    code: u16,
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidParameter(_)
            | Error::ExtractRequestBody(_)
            | Error::ExtractRequestQuery(_)
            | Error::ExtractRequestPath(_)
            | Error::AlreadyExists(_)
            | Error::EmailAlreadyRegistered
            | Error::HistoryTrackingDisabled
            | Error::AlreadyContributor
            | Error::NotContributor => StatusCode::BAD_REQUEST,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Unauthenticated => StatusCode::UNAUTHORIZED,
            Error::Forbidden(_) => StatusCode::FORBIDDEN,
            Error::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn msg_code(&self) -> Cow<'static, str> {
        match self {
            Error::InvalidParameter(_) => "invalid_parameter".into(),
            Error::ExtractRequestBody(_) => "invalid_request_body".into(),
            Error::ExtractRequestQuery(_) => "invalid_request_query".into(),
            Error::ExtractRequestPath(_) => "invalid_request_path".into(),
            Error::NotFound(entity) => format!("{entity}_not_found").into(),
            Error::AlreadyExists(entity) => format!("{entity}_already_exists").into(),
            Error::EmailAlreadyRegistered => "email_already_registered".into(),
            Error::HistoryTrackingDisabled => "history_tracking_disabled".into(),
            Error::AlreadyContributor => "already_contributor".into(),
            Error::NotContributor => "not_contributor".into(),
            Error::Unauthenticated => "bad_credentials".into(),
            Error::Forbidden(_) => "forbidden".into(),
            Error::Internal(_) => "internal_error".into(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        let msg = if status_code.is_server_error() {
            tracing::error!(error = ?self);
            "Internal server error".into()
        } else {
            tracing::warn!(error = %self);
            self.to_string().into()
        };
        let failure = Failure { msg, msg_code: self.msg_code(), code: status_code.as_u16() };
        (status_code, Json(failure)).into_response()
    }
}
