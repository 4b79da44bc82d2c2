pub mod constants;

mod case;
mod channel;
mod config;
mod context;
mod handler;
mod headers;
mod interceptor;
mod origin;
mod policy;
mod preflight;
mod request;
mod service;

pub use channel::{ChannelError, ResponseChannel, ResponseEvent};
pub use config::{CorsConfig, ValidationError};
pub use context::RequestContext;
pub use handler::{ErrorBody, Handler, HandlerError};
pub use headers::{Header, HeaderSet};
pub use interceptor::{ChannelState, CorsInterceptor};
pub use origin::{AllowedOrigins, OriginDecision};
pub use policy::CorsPolicy;
pub use preflight::{PreflightResponse, try_handle_preflight};
pub use request::Request;
pub use service::CorsService;
