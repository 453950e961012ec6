//! Wire types for the profile endpoints.
//!
//! The backend speaks camelCase JSON; every boundary type carries a
//! `rename_all` so the Rust side stays snake_case. [`UserProfile`] is a
//! cached copy of server truth; the client replaces it wholesale with
//! whatever the last successful response returned.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// The profile record as the backend returns it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub full_name: String,
    /// Immutable from the client; the UI renders it disabled.
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_pic_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_name: Option<String>,
    /// Full name of this user's manager, where one is assigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager: Option<String>,
    pub role: String,
}

impl UserProfile {
    /// Display name, falling back to the email address.
    pub fn display_name(&self) -> &str {
        if self.full_name.trim().is_empty() {
            &self.email
        } else {
            &self.full_name
        }
    }
}

/// Body of `PUT /user-profile`. The email travels along but the server
/// ignores changes to it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub full_name: String,
    pub email: String,
}

/// Confirmation payload from the password change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiMessage {
    pub message: String,
}

/// A picked image, read out of the browser's file engine.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageFile {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    /// Upload cap, enforced before any request is built.
    pub const MAX_BYTES: usize = 5 * 1024 * 1024;

    /// Client-side checks: image MIME type, 5 MiB cap.
    pub fn validate(&self) -> Result<(), ApiError> {
        if !self.mime.starts_with("image/") {
            return Err(ApiError::InvalidImage(
                "Please select an image file".to_string(),
            ));
        }
        if self.bytes.len() > Self::MAX_BYTES {
            return Err(ApiError::InvalidImage(
                "Image must be 5 MB or smaller".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image_of(mime: &str, len: usize) -> ImageFile {
        ImageFile {
            name: "pic".to_string(),
            mime: mime.to_string(),
            bytes: vec![0u8; len],
        }
    }

    #[test]
    fn profile_round_trips_camel_case() {
        let json = r#"{
            "id": "u-17",
            "fullName": "Jane Doe",
            "email": "jane@example.com",
            "profilePicUrl": "https://cdn.example.com/u-17.png",
            "departmentName": "Engineering",
            "manager": "Sam Lee",
            "role": "employee"
        }"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.full_name, "Jane Doe");
        assert_eq!(profile.department_name.as_deref(), Some("Engineering"));

        let back = serde_json::to_value(&profile).unwrap();
        assert_eq!(back["fullName"], "Jane Doe");
        assert_eq!(back["profilePicUrl"], "https://cdn.example.com/u-17.png");
    }

    #[test]
    fn profile_optional_fields_default() {
        let json = r#"{"id":"u-1","fullName":"A","email":"a@b.c","role":"admin"}"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert!(profile.profile_pic_url.is_none());
        assert!(profile.manager.is_none());
    }

    #[test]
    fn display_name_falls_back_to_email() {
        let mut profile: UserProfile =
            serde_json::from_str(r#"{"id":"u","fullName":"  ","email":"a@b.c","role":"r"}"#)
                .unwrap();
        assert_eq!(profile.display_name(), "a@b.c");
        profile.full_name = "Jane".into();
        assert_eq!(profile.display_name(), "Jane");
    }

    #[test]
    fn image_size_boundary_is_exact() {
        assert!(image_of("image/png", ImageFile::MAX_BYTES).validate().is_ok());
        assert!(image_of("image/png", ImageFile::MAX_BYTES + 1)
            .validate()
            .is_err());
    }

    #[test]
    fn non_image_mime_is_rejected() {
        let err = image_of("application/pdf", 10).validate().unwrap_err();
        assert_eq!(err.to_string(), "Please select an image file");
        assert!(image_of("image/webp", 10).validate().is_ok());
    }
}
