//! Base URL configuration for the profile endpoints.
//!
//! Defaults to a relative `/api` prefix so the web build talks to whatever
//! origin served it. Native builds (desktop shells, tests against a local
//! backend) can point elsewhere with the `ORGBOOK_API_URL` environment
//! variable.

/// Where the profile REST endpoints live.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "/api".to_string(),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Resolve the config from the environment where one exists.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        match std::env::var("ORGBOOK_API_URL") {
            Ok(url) if !url.trim().is_empty() => Self::new(url.trim().to_string()),
            _ => Self::default(),
        }
    }

    /// The browser has no environment; always use the default prefix.
    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        Self::default()
    }

    /// Join the base URL and an endpoint path without doubling slashes.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slash() {
        let config = ApiConfig::new("https://example.com/api/");
        assert_eq!(
            config.endpoint("/user-profile"),
            "https://example.com/api/user-profile"
        );
        assert_eq!(
            config.endpoint("user-profile/image"),
            "https://example.com/api/user-profile/image"
        );
    }

    #[test]
    fn default_is_relative_prefix() {
        assert_eq!(ApiConfig::default().endpoint("user-profile"), "/api/user-profile");
    }
}
