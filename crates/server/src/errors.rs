use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::{debug, error};

/// Errors surfaced by HTTP handlers; every variant renders as
/// `{"error": <category>, "message": <detail>}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Service(#[from] ServiceError),
    /// Rejected before reaching the service (unreadable body, path/body id mismatch).
    #[error("{0}")]
    BadRequest(String),
}

impl From<JsonRejection> for ApiError {
    fn from(r: JsonRejection) -> Self {
        ApiError::BadRequest(r.body_text())
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::Service(ServiceError::BadRequest(_)) => StatusCode::BAD_REQUEST,
            ApiError::Service(ServiceError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Service(ServiceError::Conflict(_)) => StatusCode::CONFLICT,
            ApiError::Service(ServiceError::Db(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn category(&self) -> &'static str {
        match self.status() {
            StatusCode::BAD_REQUEST => "bad_request",
            StatusCode::NOT_FOUND => "not_found",
            StatusCode::CONFLICT => "conflict",
            _ => "internal",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            ApiError::Service(ServiceError::Db(msg)) => {
                error!(error = %msg, "request failed on database");
                // 不向客户端暴露数据库细节
                "internal server error".to_string()
            }
            ApiError::Service(e @ (ServiceError::BadRequest(m) | ServiceError::NotFound(m) | ServiceError::Conflict(m))) => {
                debug!(code = e.code(), error = %e, "request rejected");
                m.clone()
            }
            ApiError::BadRequest(msg) => {
                debug!(error = %msg, "request rejected");
                msg.clone()
            }
        };
        (status, Json(serde_json::json!({"error": self.category(), "message": message}))).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("runtime check failed: {0}")]
    Runtime(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_status_codes() {
        let cases = [
            (ServiceError::BadRequest("x".into()), StatusCode::BAD_REQUEST),
            (ServiceError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (ServiceError::Conflict("x".into()), StatusCode::CONFLICT),
            (ServiceError::Db("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).into_response().status(), status);
        }
        assert_eq!(ApiError::BadRequest("id mismatch".into()).into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn categories_follow_status() {
        assert_eq!(ApiError::from(ServiceError::Conflict("x".into())).category(), "conflict");
        assert_eq!(ApiError::from(ServiceError::Db("x".into())).category(), "internal");
        assert_eq!(ApiError::BadRequest("x".into()).category(), "bad_request");
    }
}
