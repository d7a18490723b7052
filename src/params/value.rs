//! Nominal wrappers around protocol strings.
//!
//! Each wrapper owns one immutable string. Empty strings are accepted; absence is expressed
//! with `Option` at the use site. Wrappers never convert into each other, so a
//! [`ConsumerSecret`] cannot be passed where a token secret is expected.

// std
use std::{borrow::Borrow, ops::Deref};
// self
use crate::_prelude::*;

macro_rules! def_param {
	($name:ident, $doc:literal, $kind:literal) => {
		#[doc = $doc]
		#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
		#[serde(transparent)]
		pub struct $name(String);
		impl $name {
			/// Wraps the provided protocol value.
			pub fn new(value: impl Into<String>) -> Self {
				Self(value.into())
			}

			/// Returns the wrapped value.
			pub fn as_str(&self) -> &str {
				&self.0
			}
		}
		impl Deref for $name {
			type Target = str;

			fn deref(&self) -> &Self::Target {
				&self.0
			}
		}
		impl AsRef<str> for $name {
			fn as_ref(&self) -> &str {
				&self.0
			}
		}
		impl Borrow<str> for $name {
			fn borrow(&self) -> &str {
				&self.0
			}
		}
		impl From<$name> for String {
			fn from(value: $name) -> Self {
				value.0
			}
		}
		impl Debug for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				write!(f, concat!($kind, "({})"), self.0)
			}
		}
		impl Display for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				f.write_str(&self.0)
			}
		}
	};
}

macro_rules! def_secret {
	($name:ident, $doc:literal, $kind:literal) => {
		#[doc = $doc]
		///
		/// Formatting redacts the value so secrets stay out of logs.
		#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
		#[serde(transparent)]
		pub struct $name(String);
		impl $name {
			/// Wraps the provided secret.
			pub fn new(value: impl Into<String>) -> Self {
				Self(value.into())
			}

			/// Returns the inner secret. Callers must avoid logging this string.
			pub fn expose(&self) -> &str {
				&self.0
			}
		}
		impl AsRef<str> for $name {
			fn as_ref(&self) -> &str {
				self.expose()
			}
		}
		impl Debug for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				f.debug_tuple($kind).field(&"<redacted>").finish()
			}
		}
		impl Display for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				f.write_str("<redacted>")
			}
		}
	};
}

def_param! { ConsumerKey, "Identifier the consumer uses to identify itself to the service provider.", "ConsumerKey" }
def_param! { RequestToken, "Unauthorized (later authorized) token issued in the request token phase.", "RequestToken" }
def_param! { AccessToken, "Token granting access to protected resources on behalf of the user.", "AccessToken" }
def_param! { VerificationCode, "Verifier bound to an authorized request token (`oauth_verifier`).", "VerificationCode" }
def_param! { Signature, "Signature value produced by a signature method, before percent-encoding.", "Signature" }
def_param! { SignatureBaseString, "Canonical byte string that text-signing methods sign.", "SignatureBaseString" }

def_secret! { ConsumerSecret, "Secret the consumer uses to establish ownership of its consumer key.", "ConsumerSecret" }
def_secret! { RequestTokenSecret, "Secret establishing ownership of a request token.", "RequestTokenSecret" }
def_secret! { AccessTokenSecret, "Secret establishing ownership of an access token.", "AccessTokenSecret" }

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn values_accept_empty_strings() {
		let key = ConsumerKey::new("");

		assert_eq!(key.as_str(), "");
		assert!(key.is_empty());
	}

	#[test]
	fn secret_formatters_redact() {
		let secret = ConsumerSecret::new("kd94hf93k423kf44");

		assert_eq!(format!("{secret:?}"), "ConsumerSecret(\"<redacted>\")");
		assert_eq!(format!("{secret}"), "<redacted>");
		assert_eq!(secret.expose(), "kd94hf93k423kf44");
	}

	#[test]
	fn plain_values_format_verbatim() {
		let token = RequestToken::new("hh5s93j4hdidpola");

		assert_eq!(format!("{token:?}"), "RequestToken(hh5s93j4hdidpola)");
		assert_eq!(token.to_string(), "hh5s93j4hdidpola");
	}

	#[test]
	fn serde_uses_plain_strings() {
		let token = AccessToken::new("nnch734d00sl2jdk");
		let payload =
			serde_json::to_string(&token).expect("Access token should serialize to JSON.");

		assert_eq!(payload, "\"nnch734d00sl2jdk\"");

		let secret: AccessTokenSecret = serde_json::from_str("\"pfkkdhi9sl3r4s00\"")
			.expect("Access token secret should deserialize from JSON.");

		assert_eq!(secret.expose(), "pfkkdhi9sl3r4s00");
	}

	#[test]
	fn borrow_supports_fast_lookup() {
		let map: HashMap<VerificationCode, u8> =
			HashMap::from_iter([(VerificationCode::new("hfdp7dh39dks9884"), 7_u8)]);

		assert_eq!(map.get("hfdp7dh39dks9884"), Some(&7));
	}
}
