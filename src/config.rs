//! Client Configuration
//!
//! Values baked in at build time. A static wasm bundle has no process
//! environment, so `option_env!` is the only knob.

use crate::api::Method;

/// Local storage key for the raw bearer token
pub const TOKEN_KEY: &str = "agenda_facil_token";
/// Local storage key for the JSON user profile
pub const USER_KEY: &str = "agenda_facil_user";

const DEFAULT_API_BASE_URL: &str = "https://localhost:7268/api";
const DEFAULT_SPECIALITY_PATH: &str = "/serviceProvider/specialities";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Backend root, no trailing slash
    pub api_base_url: String,
    /// Endpoint used to read and write the provider speciality
    pub speciality_path: String,
    /// Write verb for the speciality endpoint (backends disagree)
    pub speciality_write: Method,
    pub log_level: log::LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            speciality_path: DEFAULT_SPECIALITY_PATH.to_string(),
            speciality_write: Method::Post,
            log_level: log::LevelFilter::Info,
        }
    }
}

impl Config {
    /// Build from `AGENDA_*` variables captured at compile time
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("AGENDA_API_BASE_URL"),
            option_env!("AGENDA_SPECIALITY_PATH"),
            option_env!("AGENDA_SPECIALITY_WRITE_METHOD"),
            option_env!("AGENDA_LOG_LEVEL"),
        )
    }

    fn from_values(
        base_url: Option<&str>,
        speciality_path: Option<&str>,
        speciality_write: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: base_url
                .map(|url| url.trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty())
                .unwrap_or(defaults.api_base_url),
            speciality_path: speciality_path
                .filter(|path| path.starts_with('/'))
                .map(str::to_string)
                .unwrap_or(defaults.speciality_path),
            speciality_write: match speciality_write.map(str::to_ascii_uppercase).as_deref() {
                Some("PUT") => Method::Put,
                _ => Method::Post,
            },
            log_level: log_level
                .and_then(|level| level.parse().ok())
                .unwrap_or(defaults.log_level),
        }
    }

    /// Absolute URL for an endpoint path
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_base_url, endpoint)
    }
}
