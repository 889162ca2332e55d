use axum::extract::rejection::{FormRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use tracing::error;

/// JSON error body returned by the admin routes.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: &'static str,
    pub detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &'static str, detail: Option<String>) -> Self {
        Self { status, error, detail }
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Bad Request", Some(detail.into()))
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, "Not Found", Some(detail.into()))
    }

    /// Extractor failures keep axum's status but use the JSON body.
    fn rejected(status: StatusCode, detail: String) -> Self {
        Self::new(status, status.canonical_reason().unwrap_or("Bad Request"), Some(detail))
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({"error": self.error, "detail": self.detail});
        (self.status, Json(body)).into_response()
    }
}

impl From<PathRejection> for JsonApiError {
    fn from(r: PathRejection) -> Self { JsonApiError::rejected(r.status(), r.body_text()) }
}

impl From<QueryRejection> for JsonApiError {
    fn from(r: QueryRejection) -> Self { JsonApiError::rejected(r.status(), r.body_text()) }
}

impl From<FormRejection> for JsonApiError {
    fn from(r: FormRejection) -> Self { JsonApiError::rejected(r.status(), r.body_text()) }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(m) => JsonApiError::bad_request(m),
            ServiceError::InvalidForm(errors) => {
                let detail = errors
                    .iter()
                    .map(|f| format!("{}: {}", f.field, f.message))
                    .collect::<Vec<_>>()
                    .join("; ");
                JsonApiError::new(StatusCode::UNPROCESSABLE_ENTITY, "Validation Error", Some(detail))
            }
            ServiceError::NotFound(m) => JsonApiError::not_found(m),
            ServiceError::Db(m) => {
                error!(err = %m, "storage failure");
                JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_statuses() {
        let nf: JsonApiError = ServiceError::not_found("house").into();
        assert_eq!(nf.status, StatusCode::NOT_FOUND);

        let bad: JsonApiError = ServiceError::Validation("unknown sort field: x".into()).into();
        assert_eq!(bad.status, StatusCode::BAD_REQUEST);

        let db: JsonApiError = ServiceError::Db("connection refused".into()).into();
        assert_eq!(db.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(db.detail.is_none());
    }
}
