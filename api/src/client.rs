//! The five profile REST calls.
//!
//! Every request carries `Authorization: Bearer <token>`; JSON bodies are
//! `application/json`, the image upload is `multipart/form-data` with the
//! boundary derived by reqwest. Two checks run before anything touches
//! the network: the image preconditions and the token lookup. There are
//! no retries and no client-side timeout; a failure is terminal and the
//! user resubmits.

use reqwest::multipart;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{ApiMessage, ImageFile, ProfileUpdate, UserProfile};
use crate::session::SessionStore;

const FETCH_FALLBACK: &str = "Failed to load profile";
const UPDATE_FALLBACK: &str = "Failed to update profile";
const UPLOAD_FALLBACK: &str = "Failed to upload profile picture";
const DELETE_FALLBACK: &str = "Failed to remove profile picture";
const PASSWORD_FALLBACK: &str = "Failed to change password";

/// Error payload shape the backend uses; either field may carry the text.
#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

/// Client for the `/user-profile` endpoints.
#[derive(Clone, Debug)]
pub struct ProfileClient {
    http: reqwest::Client,
    config: ApiConfig,
    session: SessionStore,
}

impl ProfileClient {
    pub fn new(config: ApiConfig, session: SessionStore) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            session,
        }
    }

    /// `GET /user-profile`
    pub async fn fetch_profile(&self) -> Result<UserProfile, ApiError> {
        let token = self.bearer()?;
        let resp = self
            .http
            .get(self.config.endpoint("user-profile"))
            .bearer_auth(token)
            .send()
            .await?;
        parse(resp, FETCH_FALLBACK, false).await
    }

    /// `PUT /user-profile`
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile, ApiError> {
        let token = self.bearer()?;
        let resp = self
            .http
            .put(self.config.endpoint("user-profile"))
            .bearer_auth(token)
            .json(update)
            .send()
            .await?;
        parse(resp, UPDATE_FALLBACK, false).await
    }

    /// `POST /user-profile/image`, multipart field `file`.
    ///
    /// The returned profile is the server's updated record, including the
    /// new picture URL.
    pub async fn upload_image(&self, file: ImageFile) -> Result<UserProfile, ApiError> {
        file.validate()?;
        let token = self.bearer()?;

        let part = multipart::Part::bytes(file.bytes)
            .file_name(file.name)
            .mime_str(&file.mime)?;
        let form = multipart::Form::new().part("file", part);

        let resp = self
            .http
            .post(self.config.endpoint("user-profile/image"))
            .bearer_auth(token)
            .multipart(form)
            .send()
            .await?;
        parse(resp, UPLOAD_FALLBACK, false).await
    }

    /// `DELETE /user-profile/image`
    pub async fn delete_image(&self) -> Result<UserProfile, ApiError> {
        let token = self.bearer()?;
        let resp = self
            .http
            .delete(self.config.endpoint("user-profile/image"))
            .bearer_auth(token)
            .send()
            .await?;
        parse(resp, DELETE_FALLBACK, false).await
    }

    /// `PUT /user-profile/password`, credentials in query parameters with
    /// an empty body, kept exactly as the backend expects it, query
    /// string and all.
    pub async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<ApiMessage, ApiError> {
        let token = self.bearer()?;
        let resp = self
            .http
            .put(self.config.endpoint("user-profile/password"))
            .bearer_auth(token)
            .query(&[
                ("currentPassword", current_password),
                ("newPassword", new_password),
            ])
            .send()
            .await?;
        parse(resp, PASSWORD_FALLBACK, true).await
    }

    fn bearer(&self) -> Result<String, ApiError> {
        self.session.token().ok_or(ApiError::MissingToken)
    }
}

/// Decode a success body, or classify the failure status.
async fn parse<T: DeserializeOwned>(
    resp: reqwest::Response,
    fallback: &str,
    password_op: bool,
) -> Result<T, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp.json::<T>().await?);
    }

    tracing::warn!(status = %status, "profile request failed");
    let server_msg = resp
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.error.or(body.message));
    Err(ApiError::from_status(status, server_msg, fallback, password_op))
}
