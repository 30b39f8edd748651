use std::env;
use std::fmt;

use crate::modules::integrations::{omdb, tmdb};

#[derive(Clone)]
pub struct Config {
    pub port: u16,
    pub tmdb_api_key: String,
    pub omdb_api_key: String,
    pub tmdb_base_url: String,
    pub omdb_base_url: String,
    pub static_dir: String,
    pub cors_allowed_origins: Vec<String>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is missing or blank
    MissingVar(&'static str),
    /// A base URL variable does not parse as an absolute URL
    InvalidUrl(&'static str, String),
    /// The outbound HTTP client could not be built
    HttpClient(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingVar(name) => write!(f, "{} is not set", name),
            ConfigError::InvalidUrl(name, reason) => write!(f, "{} is invalid: {}", name, reason),
            ConfigError::HttpClient(msg) => write!(f, "Failed to build HTTP client: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

// Keys stay out of Debug output
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("port", &self.port)
            .field("tmdb_base_url", &self.tmdb_base_url)
            .field("omdb_base_url", &self.omdb_base_url)
            .field("static_dir", &self.static_dir)
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .finish_non_exhaustive()
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from any variable source; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            tmdb_api_key: lookup("TMDB_API_KEY").unwrap_or_default(),
            omdb_api_key: lookup("OMDB_API_KEY").unwrap_or_default(),
            tmdb_base_url: lookup("TMDB_BASE_URL")
                .unwrap_or_else(|| tmdb::DEFAULT_BASE_URL.to_string()),
            omdb_base_url: lookup("OMDB_BASE_URL")
                .unwrap_or_else(|| omdb::DEFAULT_BASE_URL.to_string()),
            static_dir: lookup("STATIC_DIR").unwrap_or_else(|| "../frontend".to_string()),
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                .map(|s| {
                    s.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_else(Vec::new),
        }
    }

    /// Both API keys are required; the server refuses to start without them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tmdb_api_key.trim().is_empty() {
            return Err(ConfigError::MissingVar("TMDB_API_KEY"));
        }
        if self.omdb_api_key.trim().is_empty() {
            return Err(ConfigError::MissingVar("OMDB_API_KEY"));
        }
        Ok(())
    }
}
