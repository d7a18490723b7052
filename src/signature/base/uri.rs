//! Request URL normalization (OAuth Core 1.0a §9.1.2).

// std
use std::sync::OnceLock;
// self
use crate::{
	_prelude::*,
	util::{Identifiable, Lookup},
};

/// Errors raised while normalizing an endpoint URI.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum UriError {
	/// The URI carries an explicit port but its scheme has no registered default port.
	#[error("Scheme `{scheme}` has no registered default port.")]
	UnsupportedScheme {
		/// Offending scheme.
		scheme: String,
	},
	/// The URI has no host component.
	#[error("URI `{uri}` has no host.")]
	MissingHost {
		/// Offending URI.
		uri: String,
	},
}

/// Schemes whose default port is elided from normalized URIs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NormalizedPort {
	/// `http`, port 80.
	Http,
	/// `https`, port 443.
	Https,
}
impl NormalizedPort {
	/// Finds the entry registered for `scheme` (case-insensitive).
	pub fn lookup(scheme: &str) -> Option<Self> {
		static LOOKUP: OnceLock<Lookup<NormalizedPort>> = OnceLock::new();

		LOOKUP.get_or_init(Lookup::build).lookup(&scheme.to_ascii_lowercase())
	}

	/// Default port of the scheme.
	pub const fn default_port(self) -> u16 {
		match self {
			NormalizedPort::Http => 80,
			NormalizedPort::Https => 443,
		}
	}

	/// Renders the `:port` suffix, empty when `port` is the default.
	pub fn normalize(self, port: u16) -> String {
		if port == self.default_port() { String::new() } else { format!(":{port}") }
	}
}
impl Identifiable for NormalizedPort {
	const ALL: &'static [Self] = &[NormalizedPort::Http, NormalizedPort::Https];

	fn identifier(self) -> &'static str {
		match self {
			NormalizedPort::Http => "http",
			NormalizedPort::Https => "https",
		}
	}
}

/// Produces `scheme://host[:port]/path` in lowercase, dropping query and fragment.
///
/// The port is kept only when it differs from the scheme default. An explicit port on a scheme
/// without a registered default fails with [`UriError::UnsupportedScheme`].
pub fn normalize_uri(uri: &Url) -> Result<String, UriError> {
	let host = uri.host_str().ok_or_else(|| UriError::MissingHost { uri: uri.to_string() })?;
	let port = match uri.port() {
		Some(port) => NormalizedPort::lookup(uri.scheme())
			.ok_or_else(|| UriError::UnsupportedScheme { scheme: uri.scheme().to_owned() })?
			.normalize(port),
		None => String::new(),
	};

	Ok(format!("{}://{host}{port}{}", uri.scheme(), uri.path()).to_lowercase())
}
