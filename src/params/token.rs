//! Token and token-secret unions accepted by the header builder.
//!
//! Only request and access tokens (and their secrets) convert into these unions, which keeps
//! consumer credentials out of token positions at compile time.

// self
use crate::{
	_prelude::*,
	params::{AccessToken, AccessTokenSecret, RequestToken, RequestTokenSecret},
};

/// Either kind of token that may appear as `oauth_token`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Token {
	/// Request token (request-token and access-token phases).
	Request(RequestToken),
	/// Access token (protected resource access).
	Access(AccessToken),
}
impl Token {
	/// Returns the token value emitted as `oauth_token`.
	pub fn as_str(&self) -> &str {
		match self {
			Token::Request(token) => token.as_str(),
			Token::Access(token) => token.as_str(),
		}
	}
}
impl From<RequestToken> for Token {
	fn from(value: RequestToken) -> Self {
		Self::Request(value)
	}
}
impl From<&RequestToken> for Token {
	fn from(value: &RequestToken) -> Self {
		Self::Request(value.clone())
	}
}
impl From<AccessToken> for Token {
	fn from(value: AccessToken) -> Self {
		Self::Access(value)
	}
}
impl From<&AccessToken> for Token {
	fn from(value: &AccessToken) -> Self {
		Self::Access(value.clone())
	}
}

/// Either kind of token secret that participates in signing.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum TokenSecret {
	/// Secret paired with a request token.
	Request(RequestTokenSecret),
	/// Secret paired with an access token.
	Access(AccessTokenSecret),
}
impl TokenSecret {
	/// Returns the inner secret. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		match self {
			TokenSecret::Request(secret) => secret.expose(),
			TokenSecret::Access(secret) => secret.expose(),
		}
	}
}
impl Debug for TokenSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		match self {
			TokenSecret::Request(secret) => f.debug_tuple("Request").field(secret).finish(),
			TokenSecret::Access(secret) => f.debug_tuple("Access").field(secret).finish(),
		}
	}
}
impl From<RequestTokenSecret> for TokenSecret {
	fn from(value: RequestTokenSecret) -> Self {
		Self::Request(value)
	}
}
impl From<&RequestTokenSecret> for TokenSecret {
	fn from(value: &RequestTokenSecret) -> Self {
		Self::Request(value.clone())
	}
}
impl From<AccessTokenSecret> for TokenSecret {
	fn from(value: AccessTokenSecret) -> Self {
		Self::Access(value)
	}
}
impl From<&AccessTokenSecret> for TokenSecret {
	fn from(value: &AccessTokenSecret) -> Self {
		Self::Access(value.clone())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn token_secret_debug_stays_redacted() {
		let secret = TokenSecret::from(RequestTokenSecret::new("hdhd0244k9j7ao03"));

		assert_eq!(format!("{secret:?}"), "Request(RequestTokenSecret(\"<redacted>\"))");
		assert_eq!(secret.expose(), "hdhd0244k9j7ao03");
	}

	#[test]
	fn tokens_expose_their_wire_value() {
		assert_eq!(Token::from(RequestToken::new("request")).as_str(), "request");
		assert_eq!(Token::from(&AccessToken::new("access")).as_str(), "access");
	}
}
