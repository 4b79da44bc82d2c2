use crate::config::{CorsConfig, ValidationError};
use crate::constants::header;
use crate::headers::HeaderSet;
use crate::origin::OriginDecision;

/// Pure policy evaluator: turns the configuration plus one request origin
/// into the ordered header set to inject.
pub struct CorsPolicy {
    config: CorsConfig,
}

impl CorsPolicy {
    pub fn new(config: CorsConfig) -> Result<Self, ValidationError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &CorsConfig {
        &self.config
    }

    /// Resolves the access-control headers for one request.
    ///
    /// No error conditions and no side effects: an empty set means the
    /// origin was denied, which the browser enforces on its own.
    pub fn resolve(&self, origin: Option<&str>) -> HeaderSet {
        let mut headers = HeaderSet::new();

        match self
            .config
            .allowed_origins
            .resolve(origin, self.config.credentials)
        {
            OriginDecision::Any => {
                headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*");
            }
            OriginDecision::Mirror => {
                headers.add_vary(header::ORIGIN);
                if let Some(origin) = origin {
                    headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
                }
            }
            OriginDecision::Disallow => {
                if self.config.allowed_origins.vary_on_disallow() {
                    headers.add_vary(header::ORIGIN);
                }
            }
            OriginDecision::Skip => {}
        }

        if self.config.credentials {
            headers.push(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
        }
        if !self.config.allowed_methods.is_empty() {
            headers.push(
                header::ACCESS_CONTROL_ALLOW_METHODS,
                self.config.allowed_methods.join(","),
            );
        }
        if !self.config.allowed_headers.is_empty() {
            headers.push(
                header::ACCESS_CONTROL_ALLOW_HEADERS,
                self.config.allowed_headers.join(","),
            );
        }
        if !self.config.exposed_headers.is_empty() {
            headers.push(
                header::ACCESS_CONTROL_EXPOSE_HEADERS,
                self.config.exposed_headers.join(","),
            );
        }

        headers
    }

    /// Resolved set for a preflight response: the full set plus max-age.
    pub fn preflight_header_set(&self, origin: Option<&str>) -> HeaderSet {
        let mut headers = self.resolve(origin);
        headers.push(
            header::ACCESS_CONTROL_MAX_AGE,
            self.config.max_age_secs.to_string(),
        );
        headers
    }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
