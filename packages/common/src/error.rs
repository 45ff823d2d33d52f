use std::fmt;

use serde::Serialize;

/// Coarse classification shared by every error type in the workspace.
///
/// Callers branch on the kind rather than on the concrete error type:
/// validation failures are recovered locally (the form is shown again),
/// not-found aborts the request, and infrastructure errors go to the
/// generic error response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorKind {
    Validation,
    NotFound,
    Infrastructure,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::NotFound => "notFound",
            Self::Infrastructure => "infrastructure",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
