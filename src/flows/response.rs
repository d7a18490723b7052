//! Token responses returned by the caller's exchange collaborators.

// crates.io
use url::form_urlencoded;
// self
use crate::{
	_prelude::*,
	error::ConfigError,
	params::{AccessToken, AccessTokenSecret, RequestToken, RequestTokenSecret},
};

const TOKEN: &str = "oauth_token";
const TOKEN_SECRET: &str = "oauth_token_secret";
const CALLBACK_CONFIRMED: &str = "oauth_callback_confirmed";

/// Result of the request token exchange.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestTokenResponse {
	/// Unauthorized request token.
	pub token: RequestToken,
	/// Secret paired with the request token.
	pub token_secret: RequestTokenSecret,
	/// Whether the service provider confirmed the `oauth_callback`.
	pub callback_confirmed: bool,
}
impl RequestTokenResponse {
	/// Creates a response from its parts.
	pub fn new(
		token: RequestToken,
		token_secret: RequestTokenSecret,
		callback_confirmed: bool,
	) -> Self {
		Self { token, token_secret, callback_confirmed }
	}

	/// Parses an `application/x-www-form-urlencoded` provider response body.
	///
	/// `oauth_token` and `oauth_token_secret` are mandatory. An absent `oauth_callback_confirmed`
	/// reads as `false`; any value other than `true` or `false` is rejected.
	pub fn from_form(body: &str) -> Result<Self> {
		let form = Form::parse(body);
		let callback_confirmed = match form.get(CALLBACK_CONFIRMED) {
			None | Some("false") => false,
			Some("true") => true,
			Some(other) =>
				return Err(ConfigError::InvalidResponseField {
					field: CALLBACK_CONFIRMED,
					value: other.to_owned(),
				}
				.into()),
		};

		Ok(Self {
			token: RequestToken::new(form.require(TOKEN)?),
			token_secret: RequestTokenSecret::new(form.require(TOKEN_SECRET)?),
			callback_confirmed,
		})
	}
}

/// Result of the access token exchange.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessTokenResponse {
	/// Access token.
	pub token: AccessToken,
	/// Secret paired with the access token.
	pub token_secret: AccessTokenSecret,
}
impl AccessTokenResponse {
	/// Creates a response from its parts.
	pub fn new(token: AccessToken, token_secret: AccessTokenSecret) -> Self {
		Self { token, token_secret }
	}

	/// Parses an `application/x-www-form-urlencoded` provider response body.
	pub fn from_form(body: &str) -> Result<Self> {
		let form = Form::parse(body);

		Ok(Self {
			token: AccessToken::new(form.require(TOKEN)?),
			token_secret: AccessTokenSecret::new(form.require(TOKEN_SECRET)?),
		})
	}
}

struct Form(HashMap<String, String>);
impl Form {
	fn parse(body: &str) -> Self {
		// First occurrence wins.
		let mut pairs = HashMap::new();

		for (key, value) in form_urlencoded::parse(body.trim().as_bytes()) {
			pairs.entry(key.into_owned()).or_insert_with(|| value.into_owned());
		}

		Self(pairs)
	}

	fn get(&self, key: &str) -> Option<&str> {
		self.0.get(key).map(String::as_str)
	}

	fn require(&self, field: &'static str) -> Result<&str, ConfigError> {
		self.get(field).ok_or(ConfigError::MissingResponseField { field })
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn request_token_form_is_parsed() {
		let response = RequestTokenResponse::from_form(
			"oauth_token=hh5s93j4hdidpola&oauth_token_secret=hdhd0244k9j7ao03&oauth_callback_confirmed=true",
		)
		.expect("Appendix response should parse.");

		assert_eq!(response.token.as_str(), "hh5s93j4hdidpola");
		assert_eq!(response.token_secret.expose(), "hdhd0244k9j7ao03");
		assert!(response.callback_confirmed);
	}

	#[test]
	fn callback_confirmation_defaults_to_false_and_rejects_garbage() {
		let response = RequestTokenResponse::from_form("oauth_token=a&oauth_token_secret=b")
			.expect("Confirmation flag is optional.");

		assert!(!response.callback_confirmed);

		let err = RequestTokenResponse::from_form(
			"oauth_token=a&oauth_token_secret=b&oauth_callback_confirmed=yes",
		)
		.expect_err("Unknown confirmation value should fail.");

		assert!(matches!(
			err,
			Error::Config(ConfigError::InvalidResponseField { field: "oauth_callback_confirmed", .. })
		));
	}

	#[test]
	fn access_token_form_requires_both_fields() {
		let response = AccessTokenResponse::from_form(
			"oauth_token=nnch734d00sl2jdk&oauth_token_secret=pfkkdhi9sl3r4s00\n",
		)
		.expect("Appendix response should parse.");

		assert_eq!(response.token.as_str(), "nnch734d00sl2jdk");
		assert_eq!(response.token_secret.expose(), "pfkkdhi9sl3r4s00");

		let err = AccessTokenResponse::from_form("oauth_token=nnch734d00sl2jdk")
			.expect_err("Missing secret should fail.");

		assert!(matches!(
			err,
			Error::Config(ConfigError::MissingResponseField { field: "oauth_token_secret" })
		));
	}

	#[test]
	fn encoded_values_are_decoded() {
		let response = AccessTokenResponse::from_form("oauth_token=a%2Bb&oauth_token_secret=c%26d")
			.expect("Encoded response should parse.");

		assert_eq!(response.token.as_str(), "a+b");
		assert_eq!(response.token_secret.expose(), "c&d");
	}
}
