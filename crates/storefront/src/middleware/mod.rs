//! HTTP middleware for the storefront.

pub mod request_id;
pub mod security_headers;
pub mod theme_hint;

pub use request_id::request_id_middleware;
pub use security_headers::security_headers_middleware;
pub use theme_hint::{PrefersDark, client_hints_middleware};
