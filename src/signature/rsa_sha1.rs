//! RSA-SHA1 signature method placeholder; signing is not implemented.

// self
use crate::{
	_prelude::*,
	params::{ConsumerSecret, HttpMethod, Signature},
	signature::{SignatureMethodName, SignatureParams, SigningError},
};

/// `RSA-SHA1` signature method placeholder.
///
/// Accessors behave like the other methods, but signing always fails with
/// [`SigningError::Unimplemented`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RsaSha1Signature {
	endpoint: Url,
	method: HttpMethod,
	consumer_secret: ConsumerSecret,
}
impl RsaSha1Signature {
	/// Creates the method for `method` requests against `endpoint`.
	pub fn new(endpoint: Url, method: HttpMethod, consumer_secret: ConsumerSecret) -> Self {
		Self { endpoint, method, consumer_secret }
	}

	/// Endpoint folded into the signature base string.
	pub fn endpoint(&self) -> &Url {
		&self.endpoint
	}

	/// HTTP method folded into the signature base string.
	pub fn method(&self) -> HttpMethod {
		self.method
	}

	/// Consumer secret of the consumer.
	pub fn consumer_secret(&self) -> &ConsumerSecret {
		&self.consumer_secret
	}

	/// Always fails.
	pub fn sign(&self, _: &SignatureParams) -> Result<Signature, SigningError> {
		Err(SigningError::Unimplemented { method: SignatureMethodName::RsaSha1 })
	}
}
