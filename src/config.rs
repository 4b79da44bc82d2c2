use crate::case::is_http_token;
use crate::constants::method;
use crate::origin::AllowedOrigins;
use thiserror::Error;

/// Immutable CORS configuration, created once at process start and shared
/// read-only by every request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origins: AllowedOrigins,
    pub credentials: bool,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub exposed_headers: Vec<String>,
    /// Lifetime of a cached preflight result, in seconds.
    pub max_age_secs: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: AllowedOrigins::Any,
            credentials: false,
            allowed_methods: vec![
                method::GET.into(),
                method::HEAD.into(),
                method::PUT.into(),
                method::PATCH.into(),
                method::POST.into(),
                method::DELETE.into(),
            ],
            allowed_headers: Vec::new(),
            exposed_headers: Vec::new(),
            max_age_secs: 600,
        }
    }
}

/// Errors detected while validating a [`CorsConfig`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("allowed method list must not be empty")]
    EmptyAllowedMethods,
    #[error("allowed method {0:?} is not a valid HTTP token")]
    InvalidMethodToken(String),
    #[error("origin allow-list must not contain \"*\"; use AllowedOrigins::Any instead")]
    WildcardInOriginList,
}

impl CorsConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.allowed_methods.is_empty() {
            return Err(ValidationError::EmptyAllowedMethods);
        }
        if let Some(invalid) = self
            .allowed_methods
            .iter()
            .find(|candidate| !is_http_token(candidate))
        {
            return Err(ValidationError::InvalidMethodToken(invalid.clone()));
        }
        if self.allowed_origins.contains_wildcard_entry() {
            return Err(ValidationError::WildcardInOriginList);
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
