//! Backend endpoint configuration.
//!
//! The hosted service URL and publishable anon key are baked in at build
//! time, the Trunk equivalent of the usual `import.meta.env` setup for
//! statically hosted single-page apps.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use thiserror::Error;

/// Build-time environment variable holding the backend project URL.
pub const URL_VAR: &str = "AGENDA_SUPABASE_URL";
/// Build-time environment variable holding the publishable anon key.
pub const ANON_KEY_VAR: &str = "AGENDA_SUPABASE_ANON_KEY";

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing build-time environment variable {0}")]
    MissingVar(&'static str),
}

/// Connection settings for the hosted backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendConfig {
    pub url: String,
    pub anon_key: String,
}

impl BackendConfig {
    pub fn new(url: &str, anon_key: &str) -> Self {
        Self {
            url: url.trim_end_matches('/').to_owned(),
            anon_key: anon_key.to_owned(),
        }
    }

    /// Read the backend URL and anon key baked in at compile time.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVar`] if either variable was not set
    /// when the binary was built.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        let url = option_env!("AGENDA_SUPABASE_URL").ok_or(ConfigError::MissingVar(URL_VAR))?;
        let anon_key =
            option_env!("AGENDA_SUPABASE_ANON_KEY").ok_or(ConfigError::MissingVar(ANON_KEY_VAR))?;
        Ok(Self::new(url, anon_key))
    }
}
