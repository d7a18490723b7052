//! OAuth Core 1.0a three-legged flow engine: drive the request-token, user-authorization, and
//! access-token phases with caller-supplied transports, then sign protected-resource requests with
//! PLAINTEXT or HMAC-SHA1.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod encode;
pub mod error;
pub mod flows;
pub mod header;
pub mod obs;
pub mod params;
pub mod signature;
pub mod util;
#[cfg(any(test, feature = "test"))]
pub mod _preludet {
	//! Convenience re-exports and OAuth Core 1.0a appendix fixtures for tests; enabled via
	//! `cfg(test)` or the `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{
		header::{FixedHeaderValues, HeaderField, HeaderFields},
		params::{
			AccessToken, AccessTokenSecret, ConsumerKey, ConsumerSecret, HttpMethod, RequestToken,
			RequestTokenSecret, VerificationCode,
		},
		signature::SignatureMethod,
	};

	/// Consumer key used throughout the OAuth Core 1.0a appendix.
	pub const CONSUMER_KEY: &str = "dpf43f3p2l4k3l03";
	/// Consumer secret used throughout the OAuth Core 1.0a appendix.
	pub const CONSUMER_SECRET: &str = "kd94hf93k423kf44";
	/// Unauthorized request token issued in the appendix walkthrough.
	pub const REQUEST_TOKEN: &str = "hh5s93j4hdidpola";
	/// Request token secret issued in the appendix walkthrough.
	pub const REQUEST_TOKEN_SECRET: &str = "hdhd0244k9j7ao03";
	/// Verification code returned after user authorization.
	pub const VERIFIER: &str = "hfdp7dh39dks9884";
	/// Access token issued in the appendix walkthrough.
	pub const ACCESS_TOKEN: &str = "nnch734d00sl2jdk";
	/// Access token secret issued in the appendix walkthrough.
	pub const ACCESS_TOKEN_SECRET: &str = "pfkkdhi9sl3r4s00";
	/// Timestamp pinned by the appendix protected-resource request.
	pub const TIMESTAMP: &str = "1191242096";
	/// Nonce pinned by the appendix protected-resource request.
	pub const NONCE: &str = "kllo9940pd9333jh";
	/// Protected resource endpoint of the appendix.
	pub const PHOTOS_ENDPOINT: &str = "http://photos.example.net/photos";
	/// Access token endpoint of the appendix.
	pub const ACCESS_TOKEN_ENDPOINT: &str = "https://photos.example.net/access_token";

	/// Consumer key fixture.
	pub fn consumer_key() -> ConsumerKey {
		ConsumerKey::new(CONSUMER_KEY)
	}

	/// Consumer secret fixture.
	pub fn consumer_secret() -> ConsumerSecret {
		ConsumerSecret::new(CONSUMER_SECRET)
	}

	/// Request token fixture.
	pub fn request_token() -> RequestToken {
		RequestToken::new(REQUEST_TOKEN)
	}

	/// Request token secret fixture.
	pub fn request_token_secret() -> RequestTokenSecret {
		RequestTokenSecret::new(REQUEST_TOKEN_SECRET)
	}

	/// Verification code fixture.
	pub fn verifier() -> VerificationCode {
		VerificationCode::new(VERIFIER)
	}

	/// Access token fixture.
	pub fn access_token() -> AccessToken {
		AccessToken::new(ACCESS_TOKEN)
	}

	/// Access token secret fixture.
	pub fn access_token_secret() -> AccessTokenSecret {
		AccessTokenSecret::new(ACCESS_TOKEN_SECRET)
	}

	/// Timestamp + nonce pinned to the appendix protected-resource request.
	pub fn appendix_values() -> FixedHeaderValues {
		FixedHeaderValues::new(TIMESTAMP, NONCE)
	}

	/// Parses a fixture URL.
	pub fn url(value: &str) -> Url {
		Url::parse(value).expect("Fixture URL should parse successfully.")
	}

	/// HMAC-SHA1 method signing `GET http://photos.example.net/photos`.
	pub fn photos_hmac_sha1() -> SignatureMethod {
		SignatureMethod::hmac_sha1(url(PHOTOS_ENDPOINT), HttpMethod::Get, consumer_secret())
	}

	/// `file=vacation.jpg` + `size=original` request parameters from the appendix.
	pub fn photo_params() -> HeaderFields {
		HeaderFields::new([
			HeaderField::new("file", "vacation.jpg"),
			HeaderField::new("size", "original"),
		])
	}
}

mod _prelude {
	pub use std::{
		collections::{BTreeSet, HashMap},
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		str::FromStr,
		sync::Arc,
	};

	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use url;
#[cfg(test)] use serde_json as _;
