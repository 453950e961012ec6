//! Error taxonomy for the profile client.
//!
//! Two failures never reach the network (missing token, invalid image);
//! the rest are classified from the HTTP status so the UI can show a
//! normalized message instead of whatever the backend happened to return.

use reqwest::StatusCode;
use thiserror::Error;

/// Shown for any 401, whichever operation hit it.
pub const SESSION_EXPIRED: &str = "Your session has expired. Please log in again.";

/// Shown when the password change comes back 400, regardless of body.
pub const CURRENT_PASSWORD_INCORRECT: &str = "Current password is incorrect";

#[derive(Debug, Error)]
pub enum ApiError {
    /// No bearer token in the session store; the request was never sent.
    #[error("Authentication required. Please log in.")]
    MissingToken,

    /// The selected file failed client-side checks; the request was never sent.
    #[error("{0}")]
    InvalidImage(String),

    /// The backend rejected the token (HTTP 401).
    #[error("{SESSION_EXPIRED}")]
    SessionExpired,

    /// The backend rejected the current password (HTTP 400 on the change).
    #[error("{CURRENT_PASSWORD_INCORRECT}")]
    InvalidCurrentPassword,

    /// Any other HTTP failure, with the server's message or a fallback.
    #[error("{0}")]
    Server(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl ApiError {
    /// Classify a non-success HTTP status.
    ///
    /// `password_op` marks the password change, whose 400 means "wrong
    /// current password" rather than a generic validation failure.
    pub fn from_status(
        status: StatusCode,
        server_msg: Option<String>,
        fallback: &str,
        password_op: bool,
    ) -> Self {
        if status == StatusCode::UNAUTHORIZED {
            return Self::SessionExpired;
        }
        if password_op && status == StatusCode::BAD_REQUEST {
            return Self::InvalidCurrentPassword;
        }
        Self::Server(server_msg.unwrap_or_else(|| fallback.to_string()))
    }

    pub fn is_session_expired(&self) -> bool {
        matches!(self, Self::SessionExpired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_normalizes_regardless_of_body() {
        let err = ApiError::from_status(
            StatusCode::UNAUTHORIZED,
            Some("token invalid".into()),
            "Failed to load profile",
            false,
        );
        assert!(err.is_session_expired());
        assert_eq!(err.to_string(), SESSION_EXPIRED);
    }

    #[test]
    fn bad_request_on_password_change_normalizes() {
        let err = ApiError::from_status(
            StatusCode::BAD_REQUEST,
            Some("whatever the server said".into()),
            "Failed to change password",
            true,
        );
        assert_eq!(err.to_string(), CURRENT_PASSWORD_INCORRECT);
    }

    #[test]
    fn bad_request_elsewhere_uses_server_message() {
        let err = ApiError::from_status(
            StatusCode::BAD_REQUEST,
            Some("fullName must not be empty".into()),
            "Failed to update profile",
            false,
        );
        assert_eq!(err.to_string(), "fullName must not be empty");
    }

    #[test]
    fn server_error_without_body_falls_back() {
        let err = ApiError::from_status(
            StatusCode::INTERNAL_SERVER_ERROR,
            None,
            "Failed to upload profile picture",
            false,
        );
        assert_eq!(err.to_string(), "Failed to upload profile picture");
    }
}
