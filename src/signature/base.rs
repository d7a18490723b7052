//! Signature base string construction (OAuth Core 1.0a §9.1).

pub mod uri;

// self
use crate::{
	_prelude::*,
	encode,
	header::{HeaderField, HeaderFieldError, keys},
	params::{HttpMethod, SignatureBaseString},
	signature::base::uri::UriError,
};

const DELIMITER: &str = "&";

/// Collects request parameters and renders the signature base string.
#[derive(Clone, Debug)]
pub struct SignatureBaseStringBuilder {
	method: HttpMethod,
	endpoint: Url,
	parameters: BTreeSet<HeaderField>,
}
impl SignatureBaseStringBuilder {
	/// Starts a base string for `method` against `endpoint`.
	pub fn new(method: HttpMethod, endpoint: Url) -> Self {
		Self { method, endpoint, parameters: BTreeSet::new() }
	}

	/// Adds a parameter; `realm` is skipped and exact duplicates are rejected.
	pub fn add(mut self, field: &HeaderField) -> Result<Self, HeaderFieldError> {
		if field.key() == keys::REALM {
			#[cfg(feature = "tracing")]
			tracing::trace!("Skipped `realm` while building the signature base string.");

			return Ok(self);
		}
		if !self.parameters.insert(field.clone()) {
			return Err(HeaderFieldError::duplicate(field));
		}

		Ok(self)
	}

	/// Adds every parameter of `fields`.
	pub fn add_all<'a, I>(self, fields: I) -> Result<Self, HeaderFieldError>
	where
		I: IntoIterator<Item = &'a HeaderField>,
	{
		fields.into_iter().try_fold(self, Self::add)
	}

	/// Renders `METHOD&enc(normalized uri)&enc(pairs)`.
	///
	/// Each key and value is percent-encoded first; the encoded pairs are sorted by key, then
	/// value, and joined as `key=value` with `&` before the whole list is encoded again.
	pub fn build(&self) -> Result<SignatureBaseString, UriError> {
		let uri = uri::normalize_uri(&self.endpoint)?;
		let mut pairs = self.parameters.iter().map(HeaderField::encoded).collect::<Vec<_>>();

		pairs.sort();

		let parameters = pairs
			.into_iter()
			.map(|(key, value)| format!("{key}={value}"))
			.collect::<Vec<_>>()
			.join(DELIMITER);

		Ok(SignatureBaseString::new(format!(
			"{}{DELIMITER}{}{DELIMITER}{}",
			self.method.as_str(),
			encode::percent_encode(&uri),
			encode::percent_encode(&parameters),
		)))
	}
}
