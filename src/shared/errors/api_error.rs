use super::app_error::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Error body handed to the request-handling layer.
///
/// Field names and order are a fixed external contract:
/// `status, error, message, path, errorCode, timestamp`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    pub status: u16,
    pub error: String,
    pub message: String,
    pub path: String,
    pub error_code: String,
    pub timestamp: DateTime<Utc>,
}

impl ApiError {
    pub fn from_app_error(err: &AppError, path: impl Into<String>) -> Self {
        Self::at(err, path, Utc::now())
    }

    pub fn at(err: &AppError, path: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            status: err.status(),
            error: err.reason_phrase().to_string(),
            message: err.message(),
            path: path.into(),
            error_code: err.code().as_str().to_string(),
            timestamp,
        }
    }

    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
