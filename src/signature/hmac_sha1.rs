//! HMAC-SHA1 signature method (OAuth Core 1.0a §9.2).

// crates.io
use base64::{Engine, engine::general_purpose::STANDARD};
use hmac::{Hmac, Mac};
use sha1::Sha1;
// self
use crate::{
	_prelude::*,
	params::{ConsumerSecret, HttpMethod, Signature, SignatureBaseString, TokenSecret},
	signature::{SignatureMethodName, SignatureParams, SigningError, signing_key},
	util::Cached,
};

type HmacSha1 = Hmac<Sha1>;

/// `HMAC-SHA1` signature method (OAuth Core 1.0a §9.2) bound to one endpoint and HTTP method.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HmacSha1Signature {
	endpoint: Url,
	method: HttpMethod,
	consumer_secret: ConsumerSecret,
}
impl HmacSha1Signature {
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

	/// Consumer secret used in the signing key.
	pub fn consumer_secret(&self) -> &ConsumerSecret {
		&self.consumer_secret
	}

	/// Opens a signing operation over `params`.
	///
	/// Fails with [`SigningError::ParamsMismatch`] unless `params` carries a base string.
	pub fn signing<'a>(
		&'a self,
		params: &'a SignatureParams,
	) -> Result<HmacSha1Signing<'a>, SigningError> {
		match params {
			SignatureParams::SignedText { base_string, token_secret } => Ok(HmacSha1Signing {
				consumer_secret: &self.consumer_secret,
				base_string,
				token_secret: token_secret.as_ref(),
				signature: Cached::new(),
			}),
			SignatureParams::PlainText { .. } =>
				Err(SigningError::ParamsMismatch { method: SignatureMethodName::HmacSha1 }),
		}
	}

	/// Produces the base64 signature for `params`.
	pub fn sign(&self, params: &SignatureParams) -> Result<Signature, SigningError> {
		self.signing(params)?.signature()
	}
}

/// One HMAC-SHA1 signing operation.
///
/// The MAC is computed on first access and reused afterwards; the operation is `Sync`, so it may
/// be shared by concurrent readers.
#[derive(Debug)]
pub struct HmacSha1Signing<'a> {
	consumer_secret: &'a ConsumerSecret,
	base_string: &'a SignatureBaseString,
	token_secret: Option<&'a TokenSecret>,
	signature: Cached<Result<Signature, SigningError>>,
}
impl HmacSha1Signing<'_> {
	/// Returns the signature, computing it once.
	pub fn signature(&self) -> Result<Signature, SigningError> {
		self.signature.get_or_supply(|| self.compute()).clone()
	}

	fn compute(&self) -> Result<Signature, SigningError> {
		let key = signing_key(self.consumer_secret, self.token_secret);
		let mut mac = HmacSha1::new_from_slice(key.as_bytes()).map_err(|e| {
			SigningError::Compute { method: SignatureMethodName::HmacSha1, reason: e.to_string() }
		})?;

		mac.update(self.base_string.as_bytes());

		Ok(Signature::new(STANDARD.encode(mac.finalize().into_bytes())))
	}
}
