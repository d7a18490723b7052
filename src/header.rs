//! OAuth header field model and the signing header builder.
//!
//! [`HeaderField`] and [`HeaderFields`] carry the protocol and service-provider parameters of a
//! single request. [`HeaderFieldsBuilder`] assembles the full set for one flow phase, stamps
//! timestamp and nonce, and appends the percent-encoded `oauth_signature`.

pub mod builder;
pub mod callback;
pub mod field;
pub mod fields;
pub mod values;

pub use builder::*;
pub use callback::*;
pub use field::*;
pub use fields::*;
pub use values::*;

/// Protocol parameter names emitted by the header builder.
pub mod keys {
	/// `oauth_consumer_key`
	pub const CONSUMER_KEY: &str = "oauth_consumer_key";
	/// `oauth_token`
	pub const TOKEN: &str = "oauth_token";
	/// `oauth_signature_method`
	pub const SIGNATURE_METHOD: &str = "oauth_signature_method";
	/// `oauth_signature`
	pub const SIGNATURE: &str = "oauth_signature";
	/// `oauth_timestamp`
	pub const TIMESTAMP: &str = "oauth_timestamp";
	/// `oauth_nonce`
	pub const NONCE: &str = "oauth_nonce";
	/// `oauth_version`
	pub const VERSION: &str = "oauth_version";
	/// `oauth_callback`
	pub const CALLBACK: &str = "oauth_callback";
	/// `oauth_verifier`
	pub const VERIFIER: &str = "oauth_verifier";
	/// `realm`; never part of the signature base string.
	pub const REALM: &str = "realm";
	/// Prefix shared by every protocol parameter.
	pub const PROTOCOL_PREFIX: &str = "oauth_";
}
