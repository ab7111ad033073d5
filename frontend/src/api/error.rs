use leptos::{IntoView, View};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Closed classification of everything that can go wrong between the UI
/// and the backends. Display strings are user-facing.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ApiError {
    #[error("Invalid username or password. Please try again.")]
    Unauthorized,
    #[error("Username already exists. Please choose a different username.")]
    DuplicateUser,
    #[error("Cannot connect to server. Please make sure the backend is running.")]
    Network(String),
    #[error("Request timed out. Please check your connection and try again.")]
    Timeout,
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Unexpected(String),
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn unexpected(msg: impl Into<String>) -> Self {
        Self::Unexpected(msg.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",
            Self::DuplicateUser => "DUPLICATE_USER",
            Self::Network(_) => "NETWORK_ERROR",
            Self::Timeout => "TIMEOUT",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Unexpected(_) => "UNKNOWN",
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            return Self::Timeout;
        }
        #[cfg(not(target_arch = "wasm32"))]
        if error.is_connect() {
            return Self::Network(error.to_string());
        }
        if error.is_request() {
            Self::Network(error.to_string())
        } else {
            Self::Unexpected(format!("Request failed: {}", error))
        }
    }
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.to_string()
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.to_string().into_view()
    }
}
