//! Client configuration resolved from flags and the environment.

use municipal_api::DEFAULT_BASE_URL;
use url::Url;

use crate::error::MunicipalError;

/// Environment variable holding the backend base URL.
pub const BASE_URL_ENV: &str = "MUNICIPAL_API_BASE_URL";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Resolves the base URL: explicit flag, then environment, then the default.
    pub fn resolve(flag: Option<&str>) -> Result<Self, MunicipalError> {
        let env = std::env::var(BASE_URL_ENV).ok();
        Self::from_sources(flag, env.as_deref())
    }

    fn from_sources(flag: Option<&str>, env: Option<&str>) -> Result<Self, MunicipalError> {
        let base_url = flag
            .or(env)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_BASE_URL);

        let parsed = Url::parse(base_url)
            .map_err(|e| MunicipalError::Config(format!("invalid base URL '{}': {}", base_url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(MunicipalError::Config(format!(
                "base URL must use http or https, got '{}'",
                parsed.scheme()
            )));
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}
