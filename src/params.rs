//! Protocol parameter value types, token unions, and HTTP methods.

pub mod method;
pub mod token;
pub mod value;

pub use method::*;
pub use token::*;
pub use value::*;

/// Value emitted for `oauth_version` when a flow opts into version information.
pub const OAUTH_VERSION: &str = "1.0";
