//! Signature methods and the parameters they sign.
//!
//! [`SignatureMethod`] is a closed set of strategies. PLAINTEXT derives the signature from the
//! secrets alone, HMAC-SHA1 signs the signature base string, and RSA-SHA1 is declared for
//! completeness but always fails with [`SigningError::Unimplemented`].

pub mod base;

mod hmac_sha1;
mod plaintext;
mod rsa_sha1;

pub use hmac_sha1::*;
pub use plaintext::*;
pub use rsa_sha1::*;

// std
use std::sync::OnceLock;
// self
use crate::{
	_prelude::*,
	encode,
	header::{HeaderField, HeaderFields, keys},
	params::{ConsumerSecret, HttpMethod, Signature, SignatureBaseString, TokenSecret},
	signature::base::SignatureBaseStringBuilder,
	util::{Identifiable, Lookup},
};

/// Wire names of the supported signature methods.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignatureMethodName {
	/// `PLAINTEXT`
	#[serde(rename = "PLAINTEXT")]
	PlainText,
	/// `HMAC-SHA1`
	#[serde(rename = "HMAC-SHA1")]
	HmacSha1,
	/// `RSA-SHA1`
	#[serde(rename = "RSA-SHA1")]
	RsaSha1,
}
impl SignatureMethodName {
	/// Value emitted as `oauth_signature_method`.
	pub const fn as_str(self) -> &'static str {
		match self {
			SignatureMethodName::PlainText => "PLAINTEXT",
			SignatureMethodName::HmacSha1 => "HMAC-SHA1",
			SignatureMethodName::RsaSha1 => "RSA-SHA1",
		}
	}
}
impl Identifiable for SignatureMethodName {
	const ALL: &'static [Self] = &[
		SignatureMethodName::PlainText,
		SignatureMethodName::HmacSha1,
		SignatureMethodName::RsaSha1,
	];

	fn identifier(self) -> &'static str {
		self.as_str()
	}
}
impl Display for SignatureMethodName {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for SignatureMethodName {
	type Err = SigningError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		static LOOKUP: OnceLock<Lookup<SignatureMethodName>> = OnceLock::new();

		LOOKUP
			.get_or_init(Lookup::build)
			.lookup(s)
			.ok_or_else(|| SigningError::UnknownMethod { name: s.to_owned() })
	}
}

/// Errors raised while producing a signature.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum SigningError {
	/// The underlying primitive failed.
	#[error("Could not compute the {method} signature: {reason}.")]
	Compute {
		/// Method that failed.
		method: SignatureMethodName,
		/// Primitive failure description.
		reason: String,
	},
	/// The method is declared but not implemented.
	#[error("The {method} signature method is not implemented.")]
	Unimplemented {
		/// Method that was selected.
		method: SignatureMethodName,
	},
	/// A text-signing method received parameters without a signature base string.
	#[error("The {method} signature method requires a signature base string.")]
	ParamsMismatch {
		/// Method that rejected the parameters.
		method: SignatureMethodName,
	},
	/// `oauth_signature_method` names no known method.
	#[error("Signature method `{name}` is not recognized.")]
	UnknownMethod {
		/// Rejected name.
		name: String,
	},
}

/// Inputs of one signing operation.
#[derive(Clone, Debug)]
pub enum SignatureParams {
	/// Secrets only.
	PlainText {
		/// Token secret, absent during the request token phase.
		token_secret: Option<TokenSecret>,
	},
	/// Secrets plus the signature base string to sign.
	SignedText {
		/// Canonical request representation.
		base_string: SignatureBaseString,
		/// Token secret, absent during the request token phase.
		token_secret: Option<TokenSecret>,
	},
}
impl SignatureParams {
	/// Token secret participating in the signing key.
	pub fn token_secret(&self) -> Option<&TokenSecret> {
		match self {
			SignatureParams::PlainText { token_secret }
			| SignatureParams::SignedText { token_secret, .. } => token_secret.as_ref(),
		}
	}

	/// Signature base string, for text-signing methods.
	pub fn base_string(&self) -> Option<&SignatureBaseString> {
		match self {
			SignatureParams::PlainText { .. } => None,
			SignatureParams::SignedText { base_string, .. } => Some(base_string),
		}
	}
}

/// Closed set of signature methods.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignatureMethod {
	/// `PLAINTEXT`
	PlainText(PlainTextSignature),
	/// `HMAC-SHA1`
	HmacSha1(HmacSha1Signature),
	/// `RSA-SHA1` (always fails to sign).
	RsaSha1(RsaSha1Signature),
}
impl SignatureMethod {
	/// PLAINTEXT method keyed by `consumer_secret`.
	pub fn plaintext(consumer_secret: ConsumerSecret) -> Self {
		Self::PlainText(PlainTextSignature::new(consumer_secret))
	}

	/// HMAC-SHA1 method signing `method` requests against `endpoint`.
	pub fn hmac_sha1(endpoint: Url, method: HttpMethod, consumer_secret: ConsumerSecret) -> Self {
		Self::HmacSha1(HmacSha1Signature::new(endpoint, method, consumer_secret))
	}

	/// RSA-SHA1 placeholder for `method` requests against `endpoint`.
	pub fn rsa_sha1(endpoint: Url, method: HttpMethod, consumer_secret: ConsumerSecret) -> Self {
		Self::RsaSha1(RsaSha1Signature::new(endpoint, method, consumer_secret))
	}

	/// Wire name of the method.
	pub fn name(&self) -> SignatureMethodName {
		match self {
			SignatureMethod::PlainText(_) => SignatureMethodName::PlainText,
			SignatureMethod::HmacSha1(_) => SignatureMethodName::HmacSha1,
			SignatureMethod::RsaSha1(_) => SignatureMethodName::RsaSha1,
		}
	}

	/// Consumer secret used in the signing key.
	pub fn consumer_secret(&self) -> &ConsumerSecret {
		match self {
			SignatureMethod::PlainText(method) => method.consumer_secret(),
			SignatureMethod::HmacSha1(method) => method.consumer_secret(),
			SignatureMethod::RsaSha1(method) => method.consumer_secret(),
		}
	}

	/// Prepares the parameters this method signs from the request's header fields.
	///
	/// Text-signing methods fold `fields` into a signature base string for their endpoint;
	/// PLAINTEXT only carries the token secret.
	pub fn signature_params<'a, I>(
		&self,
		fields: I,
		token_secret: Option<&TokenSecret>,
	) -> Result<SignatureParams>
	where
		I: IntoIterator<Item = &'a HeaderField>,
	{
		let token_secret = token_secret.cloned();
		let (endpoint, method) = match self {
			SignatureMethod::PlainText(_) => return Ok(SignatureParams::PlainText { token_secret }),
			SignatureMethod::HmacSha1(method) => (method.endpoint(), method.method()),
			SignatureMethod::RsaSha1(method) => (method.endpoint(), method.method()),
		};
		let base_string =
			SignatureBaseStringBuilder::new(method, endpoint.clone()).add_all(fields)?.build()?;

		Ok(SignatureParams::SignedText { base_string, token_secret })
	}

	/// Computes the signature (not yet percent-encoded).
	pub fn sign(&self, params: &SignatureParams) -> Result<Signature, SigningError> {
		match self {
			SignatureMethod::PlainText(method) => Ok(method.sign(params)),
			SignatureMethod::HmacSha1(method) => method.sign(params),
			SignatureMethod::RsaSha1(method) => method.sign(params),
		}
	}

	/// Recomputes the signature of a built field set and compares it with its `oauth_signature`.
	///
	/// Returns `Ok(false)` when the set is unsigned or the signature differs.
	pub fn verify(&self, fields: &HeaderFields, token_secret: Option<&TokenSecret>) -> Result<bool> {
		let Some(expected) = fields.signature() else {
			return Ok(false);
		};
		let unsigned = fields.iter().filter(|field| field.key() != keys::SIGNATURE);
		let params = self.signature_params(unsigned, token_secret)?;
		let signature = self.sign(&params)?;

		Ok(encode::percent_encode(signature.as_str()) == expected)
	}
}
impl From<PlainTextSignature> for SignatureMethod {
	fn from(value: PlainTextSignature) -> Self {
		Self::PlainText(value)
	}
}
impl From<HmacSha1Signature> for SignatureMethod {
	fn from(value: HmacSha1Signature) -> Self {
		Self::HmacSha1(value)
	}
}
impl From<RsaSha1Signature> for SignatureMethod {
	fn from(value: RsaSha1Signature) -> Self {
		Self::RsaSha1(value)
	}
}

/// Builds the `enc(consumer secret)&enc(token secret)` key shared by PLAINTEXT and HMAC-SHA1.
fn signing_key(consumer_secret: &ConsumerSecret, token_secret: Option<&TokenSecret>) -> String {
	format!(
		"{}&{}",
		encode::percent_encode(consumer_secret.expose()),
		encode::percent_encode(token_secret.map(TokenSecret::expose).unwrap_or_default())
	)
}
