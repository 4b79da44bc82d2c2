use crate::constants::{header, method};
use crate::request::Request;

/// Borrowed per-request view consumed by the policy evaluator and the
/// preflight check. Lifetime is one request.
#[derive(Debug, Clone)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub origin: Option<&'a str>,
    pub access_control_request_method: Option<&'a str>,
}

impl<'a> RequestContext<'a> {
    pub fn of(request: &'a Request) -> Self {
        Self {
            method: request.method(),
            origin: request.origin(),
            access_control_request_method: request.header(header::ACCESS_CONTROL_REQUEST_METHOD),
        }
    }

    /// True preflight: OPTIONS carrying `Access-Control-Request-Method`.
    /// An ordinary OPTIONS endpoint without that header is not short-circuited.
    pub fn is_preflight(&self) -> bool {
        self.method.eq_ignore_ascii_case(method::OPTIONS)
            && self
                .access_control_request_method
                .is_some_and(|value| !value.trim().is_empty())
    }
}

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;
