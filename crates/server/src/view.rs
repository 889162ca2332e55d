//! View envelope handed to whatever renders the admin pages.
//!
//! Handlers pick a view name and fill a model map; the response body is
//! `{"view": ..., "model": {...}}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::warn;

pub const INDEX: &str = "admin/houses/index";
pub const SHOW: &str = "admin/houses/show";
pub const REGISTER: &str = "admin/houses/register";
pub const EDIT: &str = "admin/houses/edit";

#[derive(Debug, Serialize)]
pub struct View {
    #[serde(skip)]
    status: StatusCode,
    view: &'static str,
    model: Map<String, Value>,
}

impl View {
    pub fn new(view: &'static str) -> Self {
        Self { status: StatusCode::OK, view, model: Map::new() }
    }

    pub fn status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    pub fn with<T: Serialize + ?Sized>(mut self, key: &str, value: &T) -> Self {
        let value = serde_json::to_value(value).unwrap_or_else(|e| {
            warn!(key, error = %e, "view model attribute not serializable");
            Value::Null
        });
        self.model.insert(key.to_string(), value);
        self
    }

    /// Attach a consumed flash message under `success_message`.
    pub fn with_flash(self, message: Option<String>) -> Self {
        match message {
            Some(m) => self.with("success_message", &m),
            None => self,
        }
    }

    pub fn name(&self) -> &'static str { self.view }

    pub fn model(&self) -> &Map<String, Value> { &self.model }
}

impl IntoResponse for View {
    fn into_response(self) -> Response {
        let status = self.status;
        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_carries_name_model_and_flash() {
        let v = View::new(INDEX).with("keyword", &Some("sea")).with_flash(Some("done".into()));
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json["view"], INDEX);
        assert_eq!(json["model"]["keyword"], "sea");
        assert_eq!(json["model"]["success_message"], "done");
        assert!(json.get("status").is_none());
    }

    #[test]
    fn no_flash_leaves_model_untouched() {
        let v = View::new(SHOW).with_flash(None);
        assert!(v.model().is_empty());
        assert_eq!(v.name(), SHOW);
    }
}
