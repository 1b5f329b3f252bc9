//! Custom error types for the common library
//!
//! This module defines the error taxonomy every API call resolves into.
//! Display strings are the user-facing messages shown in banners, so they
//! are written in the application language.

use thiserror::Error;

/// Custom error type for API operations
#[derive(Error, Debug)]
pub enum ApiError {
    /// No token is stored; no network call was attempted
    #[error("Anda belum login. Silakan login terlebih dahulu.")]
    Unauthenticated,

    /// The backend answered 401; the token has been cleared
    #[error("Sesi telah berakhir. Silakan login kembali.")]
    SessionExpired,

    /// The backend answered 404
    #[error("{0}")]
    NotFound(String),

    /// The input was rejected, either by a local pre-submit check or by a
    /// backend 400/422
    #[error("{0}")]
    Validation(String),

    /// Any other non-2xx response, or a 2xx envelope with `success: false`
    #[error("{message}")]
    Api { status: u16, message: String },

    /// No response was received at all
    #[error("Gagal terhubung ke server. Coba lagi.")]
    Network(#[source] reqwest::Error),

    /// The response body could not be parsed
    #[error("Respons server tidak dapat dibaca.")]
    Decode(#[source] serde_json::Error),
}

impl ApiError {
    /// Whether this error means the session is gone and a redirect to the
    /// login route has been scheduled
    pub fn is_session_expired(&self) -> bool {
        matches!(self, ApiError::SessionExpired)
    }
}

/// Type alias for Result with ApiError
pub type ApiResult<T> = Result<T, ApiError>;
