//! HTTP mapping for `LatmonError`.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use latmon_core::error::{ClientCode, LatmonError};

/// Error returned by handlers; renders as `{"code": ..., "msg": ...}`.
#[derive(Debug)]
pub struct ApiError(pub LatmonError);

impl ApiError {
    pub fn code(&self) -> ClientCode {
        self.0.client_code()
    }

    pub fn status(&self) -> StatusCode {
        match self.code() {
            ClientCode::BadRequest | ClientCode::UnsupportedVersion => StatusCode::BAD_REQUEST,
            ClientCode::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ClientCode::DataSource | ClientCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return Self(LatmonError::PayloadTooLarge);
        }
        Self(LatmonError::BadRequest(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({
            "code": self.code().as_str(),
            "msg": self.0.to_string(),
        });
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_follows_client_code() {
        assert_eq!(ApiError(LatmonError::BadRequest("x".into())).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError(LatmonError::PayloadTooLarge).status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(
            ApiError(LatmonError::DataSource("gone".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
