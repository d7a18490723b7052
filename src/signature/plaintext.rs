//! PLAINTEXT signature method (OAuth Core 1.0a §9.4).

// self
use crate::{
	params::{ConsumerSecret, Signature},
	signature::{SignatureParams, signing_key},
};

/// `PLAINTEXT` signature method (OAuth Core 1.0a §9.4).
///
/// The signature is `enc(consumer secret)&enc(token secret)`; any [`SignatureParams`] kind is
/// accepted since the base string is never consulted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlainTextSignature {
	consumer_secret: ConsumerSecret,
}
impl PlainTextSignature {
	/// Creates the method for `consumer_secret`.
	pub fn new(consumer_secret: ConsumerSecret) -> Self {
		Self { consumer_secret }
	}

	/// Consumer secret used in the signature.
	pub fn consumer_secret(&self) -> &ConsumerSecret {
		&self.consumer_secret
	}

	/// Produces the signature for `params`.
	pub fn sign(&self, params: &SignatureParams) -> Signature {
		Signature::new(signing_key(&self.consumer_secret, params.token_secret()))
	}
}
