//! Engine-level error types shared across parameters, signing, and flow phases.

// self
use crate::{
	_prelude::*, header::HeaderFieldError, signature::SigningError, signature::base::uri::UriError,
};

/// Engine-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn StdError + Send + Sync>;

/// Canonical engine error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// A header field set under construction rejected an insertion.
	#[error(transparent)]
	Header(#[from] HeaderFieldError),
	/// Endpoint URI could not be normalized.
	#[error(transparent)]
	Uri(#[from] UriError),
	/// Signature could not be produced.
	#[error(transparent)]
	Signing(#[from] SigningError),
	/// Local configuration or provider response problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// A caller-supplied collaborator failed.
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// Service provider did not confirm the callback during the request token exchange.
	#[error("Service provider did not confirm the callback for the request token.")]
	CallbackNotAccepted,
}

/// Configuration and validation failures raised while assembling inputs.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// A URL supplied as a string could not be parsed.
	#[error("The {what} URL is invalid.")]
	InvalidUrl {
		/// Which URL failed to parse.
		what: &'static str,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Provider token response omitted a mandatory field.
	#[error("Token response is missing the `{field}` field.")]
	MissingResponseField {
		/// Name of the absent field.
		field: &'static str,
	},
	/// Provider token response carried a field with an unusable value.
	#[error("Token response field `{field}` has an invalid value: {value}.")]
	InvalidResponseField {
		/// Name of the offending field.
		field: &'static str,
		/// Value received from the provider.
		value: String,
	},
}
impl ConfigError {
	/// Wraps a URL parsing failure for the named input.
	pub fn invalid_url(what: &'static str, source: url::ParseError) -> Self {
		Self::InvalidUrl { what, source }
	}
}

/// Failures reported by caller-supplied collaborators (token exchanges, user authorization).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// The collaborator for the named phase failed.
	#[error("The {phase} collaborator failed.")]
	Collaborator {
		/// Phase label of the failing collaborator.
		phase: &'static str,
		/// Collaborator-specific failure.
		#[source]
		source: BoxError,
	},
}
impl TransportError {
	/// Wraps a collaborator failure for the given phase label.
	pub fn collaborator(
		phase: &'static str,
		src: impl 'static + Send + Sync + StdError,
	) -> Self {
		Self::Collaborator { phase, source: Box::new(src) }
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn transport_error_exposes_collaborator_source() {
		let io = std::io::Error::other("connection reset");
		let err: Error = TransportError::collaborator("request_token", io).into();

		assert!(matches!(err, Error::Transport(TransportError::Collaborator { .. })));
		assert_eq!(err.to_string(), "The request_token collaborator failed.");

		let source = StdError::source(&err)
			.expect("Collaborator error should expose the original failure as its source.");

		assert_eq!(source.to_string(), "connection reset");
	}

	#[test]
	fn config_errors_render_field_names() {
		let err = ConfigError::MissingResponseField { field: "oauth_token" };

		assert_eq!(err.to_string(), "Token response is missing the `oauth_token` field.");

		let parse = Url::parse("not a url").expect_err("Fixture should fail to parse.");
		let err: Error = ConfigError::invalid_url("callback", parse).into();

		assert!(matches!(err, Error::Config(ConfigError::InvalidUrl { what: "callback", .. })));
	}
}
