//! # Client configuration: `mindcheck.toml`
//!
//! Defines the TOML configuration file read by the native launchers
//! (filename: [`AppConfig::filename`] = `"mindcheck.toml"`). The web build
//! has no filesystem and always runs with [`AppConfig::default`].
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://127.0.0.1:8000"
//! login_route = "token"        # or "auth-login"
//! ```
//!
//! ## Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`AppConfig`] | Top-level config. Builder helpers, TOML (de)serialisation, file loading with fallback. |
//! | [`ApiConfig`] | API section: server base URL and which login endpoint to call. |
//! | [`LoginRoute`] | `/token` (form-encoded) or `/auth/login` (JSON). |
//!
//! All structs derive `Default`, so a missing or empty file is equivalent to
//! the default configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Environment variable that overrides [`ApiConfig::base_url`].
pub const API_URL_ENV: &str = "MINDCHECK_API_URL";

/// Top-level configuration stored in `mindcheck.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

/// Remote API settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub login_route: LoginRoute,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            login_route: LoginRoute::default(),
        }
    }
}

/// Which endpoint exchanges credentials for a bearer token.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoginRoute {
    /// `POST /token`, form-encoded `username` / `password`.
    #[default]
    Token,
    /// `POST /auth/login`, JSON `email` / `password`.
    AuthLogin,
}

impl LoginRoute {
    pub fn path(&self) -> &'static str {
        match self {
            LoginRoute::Token => "/token",
            LoginRoute::AuthLogin => "/auth/login",
        }
    }
}

impl AppConfig {
    /// Create a config pointing at the given API base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.into(),
                login_route: LoginRoute::default(),
            },
        }
    }

    /// Builder method to select the login endpoint.
    pub fn with_login_route(mut self, route: LoginRoute) -> Self {
        self.api.login_route = route;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "mindcheck.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Load from a file. A missing file yields the defaults; an unreadable or
    /// malformed one is logged and also yields the defaults.
    pub fn load_from(path: &Path) -> Self {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file, using defaults");
                return Self::default();
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read config");
                return Self::default();
            }
        };

        match Self::from_toml(&text) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Malformed config, using defaults");
                Self::default()
            }
        }
    }

    /// Apply an explicit base URL override, ignoring blank values.
    pub fn with_base_url_override(mut self, url: Option<String>) -> Self {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            self.api.base_url = url.trim().to_string();
        }
        self
    }

    /// Load `<config_dir>/mindcheck/mindcheck.toml`, then apply
    /// [`API_URL_ENV`] if set.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_native() -> Self {
        let config = match dirs::config_dir() {
            Some(dir) => Self::load_from(&dir.join(crate::file_store::APP_DIR).join(Self::filename())),
            None => Self::default(),
        };
        config.with_base_url_override(std::env::var(API_URL_ENV).ok())
    }
}
