//! HTTP server adapters
//!
//! Translates between an HTTP framework and the HTTP-agnostic API layer.
//!
//! - `router` - Framework-independent routing over method, path and body
//! - `tiny_http` - Serve loop and request/response conversion

mod router;
mod tiny_http;

pub use self::tiny_http::{bind, handle_request, serve, serve_on};
pub use router::{HttpReply, NOT_FOUND_MESSAGE, error_reply, route};
