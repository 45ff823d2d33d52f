use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// One-time notification messages, shown on the next rendered page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    #[serde(default)]
    pub success: Vec<String>,
    #[serde(default)]
    pub error: Vec<String>,
}

/// A rendered view: the view name, its flash messages and the view data.
///
/// Serialized as `{"view": ..., "flash": {...}, ...data}`.
#[derive(Serialize)]
pub struct Page<T> {
    pub view: &'static str,
    pub flash: Flash,
    #[serde(flatten)]
    pub data: T,
    #[serde(skip)]
    status: StatusCode,
}

impl<T> Page<T> {
    pub fn new(view: &'static str, flash: Flash, data: T) -> Self {
        Self {
            view,
            flash,
            data,
            status: StatusCode::OK,
        }
    }

    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }
}

impl<T: Serialize> IntoResponse for Page<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}
