use crate::context::RequestContext;
use crate::headers::Header;
use crate::policy::CorsPolicy;

const PREFLIGHT_STATUS: u16 = 200;

/// Terminal response synthesized for a CORS preflight request. The body is
/// always empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreflightResponse {
    pub status: u16,
    pub headers: Vec<Header>,
}

/// Intercepts OPTIONS requests carrying preflight signaling headers.
///
/// On a match the returned response is terminal: the downstream handler is
/// never invoked and no exception handling applies. Any other request
/// returns `None` and proceeds to the interceptor.
pub fn try_handle_preflight(
    policy: &CorsPolicy,
    ctx: &RequestContext<'_>,
) -> Option<PreflightResponse> {
    if !ctx.is_preflight() {
        return None;
    }

    Some(PreflightResponse {
        status: PREFLIGHT_STATUS,
        headers: policy.preflight_header_set(ctx.origin).to_headers(),
    })
}

#[cfg(test)]
#[path = "preflight_test.rs"]
mod preflight_test;
