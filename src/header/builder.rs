//! Single-use builder for a signed header field set.

// self
use crate::{
	_prelude::*,
	encode,
	header::{
		CallbackParameter, HeaderFieldError, HeaderFields, HeaderValues, OrderedHeaderFields,
		SystemHeaderValues, keys,
	},
	params::{ConsumerKey, OAUTH_VERSION, Token, TokenSecret, VerificationCode},
	signature::SignatureMethod,
};

/// Assembles the OAuth header fields of one request and signs them.
///
/// Fields accumulate in canonical order; inserting the same key and value twice fails. The token
/// secret is held aside: it keys the signature but never appears in the output.
/// [`build`](Self::build) applies the callback policy, stamps `oauth_timestamp`, `oauth_nonce`
/// and `oauth_signature_method`, then appends the percent-encoded `oauth_signature`.
pub struct HeaderFieldsBuilder {
	fields: OrderedHeaderFields,
	token_secret: Option<TokenSecret>,
	callback: CallbackParameter,
	values: Arc<dyn HeaderValues>,
}
impl HeaderFieldsBuilder {
	/// Creates a builder with the given callback policy and system timestamp/nonce source.
	pub fn new(callback: CallbackParameter) -> Self {
		Self {
			fields: OrderedHeaderFields::new(),
			token_secret: None,
			callback,
			values: Arc::new(SystemHeaderValues),
		}
	}

	/// Builder that emits no `oauth_callback`.
	pub fn without_callback() -> Self {
		Self::new(CallbackParameter::None)
	}

	/// Builder that emits `oauth_callback` with `callback`.
	pub fn with_callback(callback: Url) -> Self {
		Self::new(CallbackParameter::Uri(callback))
	}

	/// Builder that emits `oauth_callback=oob`.
	pub fn with_out_of_band_callback() -> Self {
		Self::new(CallbackParameter::OutOfBand)
	}

	/// Replaces the timestamp/nonce source.
	pub fn with_values(mut self, values: Arc<dyn HeaderValues>) -> Self {
		self.values = values;

		self
	}

	/// Adds `oauth_consumer_key`.
	pub fn consumer_key(mut self, consumer_key: &ConsumerKey) -> Result<Self, HeaderFieldError> {
		self.fields.add(keys::CONSUMER_KEY, consumer_key.as_str())?;

		Ok(self)
	}

	/// Adds `oauth_version=1.0`.
	pub fn version_information(mut self) -> Result<Self, HeaderFieldError> {
		self.fields.add(keys::VERSION, OAUTH_VERSION)?;

		Ok(self)
	}

	/// Adds `oauth_token`.
	pub fn token(mut self, token: impl Into<Token>) -> Result<Self, HeaderFieldError> {
		self.fields.add(keys::TOKEN, token.into().as_str())?;

		Ok(self)
	}

	/// Sets the token secret used for signing.
	pub fn token_secret(mut self, token_secret: impl Into<TokenSecret>) -> Self {
		self.token_secret = Some(token_secret.into());

		self
	}

	/// Adds `oauth_verifier`.
	pub fn verifier(mut self, verifier: &VerificationCode) -> Result<Self, HeaderFieldError> {
		self.fields.add(keys::VERIFIER, verifier.as_str())?;

		Ok(self)
	}

	/// Adds service-provider specific parameters.
	pub fn additional_params(mut self, params: &HeaderFields) -> Result<Self, HeaderFieldError> {
		self.fields.extend_from(params)?;

		Ok(self)
	}

	/// Finalizes and signs the field set with `signature_method`.
	pub fn build(mut self, signature_method: &SignatureMethod) -> Result<HeaderFields> {
		if let Some(callback) = self.callback.field() {
			self.fields.insert(callback)?;
		}

		self.fields.add(keys::TIMESTAMP, self.values.timestamp())?;
		self.fields.add(keys::NONCE, self.values.nonce())?;
		self.fields.add(keys::SIGNATURE_METHOD, signature_method.name().as_str())?;

		let params =
			signature_method.signature_params(self.fields.iter(), self.token_secret.as_ref())?;
		let signature = signature_method.sign(&params)?;

		self.fields.add(keys::SIGNATURE, encode::percent_encode(signature.as_str()))?;

		Ok(self.fields.into_header_fields())
	}
}
impl Debug for HeaderFieldsBuilder {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("HeaderFieldsBuilder")
			.field("fields", &self.fields)
			.field("token_secret", &self.token_secret)
			.field("callback", &self.callback)
			.finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::{
		_preludet::*,
		error::Error,
		header::HeaderField,
		params::{HttpMethod, TokenSecret},
		signature::SignatureMethod,
	};

	fn appendix_builder() -> HeaderFieldsBuilder {
		HeaderFieldsBuilder::without_callback().with_values(Arc::new(appendix_values()))
	}

	#[test]
	fn appendix_protected_request_is_signed() {
		let fields = appendix_builder()
			.consumer_key(&consumer_key())
			.and_then(|b| b.token(access_token()))
			.and_then(HeaderFieldsBuilder::version_information)
			.and_then(|b| b.additional_params(&photo_params()))
			.expect("Appendix fields are unique.")
			.token_secret(access_token_secret())
			.build(&photos_hmac_sha1())
			.expect("Appendix request should sign.");

		assert_eq!(fields.signature(), Some("tR3%2BTy81lMeYAr%2FFid0kMTYa%2FWM%3D"));
		assert_eq!(fields.value_of("oauth_signature_method"), Some("HMAC-SHA1"));
		assert_eq!(fields.value_of("oauth_timestamp"), Some(TIMESTAMP));
		assert_eq!(fields.value_of("oauth_nonce"), Some(NONCE));
		assert!(!fields.contains_key("oauth_callback"));
		assert!(
			fields.iter().all(|field| field.value() != Some(ACCESS_TOKEN_SECRET)),
			"Token secret must never be emitted."
		);

		let keys = fields.iter().map(HeaderField::key).collect::<Vec<_>>();

		assert_eq!(
			keys,
			[
				"file",
				"oauth_consumer_key",
				"oauth_nonce",
				"oauth_signature",
				"oauth_signature_method",
				"oauth_timestamp",
				"oauth_token",
				"oauth_version",
				"size",
			]
		);
	}

	#[test]
	fn realm_is_emitted_but_not_signed() {
		let with_realm = HeaderFields::new([
			HeaderField::new("file", "vacation.jpg"),
			HeaderField::new("size", "original"),
			HeaderField::new("realm", "http://photos.example.net/"),
		]);
		let fields = appendix_builder()
			.consumer_key(&consumer_key())
			.and_then(|b| b.token(access_token()))
			.and_then(HeaderFieldsBuilder::version_information)
			.and_then(|b| b.additional_params(&with_realm))
			.expect("Fields are unique.")
			.token_secret(access_token_secret())
			.build(&photos_hmac_sha1())
			.expect("Request should sign.");

		assert_eq!(fields.value_of("realm"), Some("http://photos.example.net/"));
		assert_eq!(fields.signature(), Some("tR3%2BTy81lMeYAr%2FFid0kMTYa%2FWM%3D"));
	}

	#[test]
	fn out_of_band_plaintext_request_token_fields() {
		let fields = HeaderFieldsBuilder::with_out_of_band_callback()
			.with_values(Arc::new(appendix_values()))
			.consumer_key(&consumer_key())
			.expect("Consumer key is the first field.")
			.build(&SignatureMethod::plaintext(consumer_secret()))
			.expect("PLAINTEXT never fails.");

		assert_eq!(fields.value_of("oauth_callback"), Some("oob"));
		assert_eq!(fields.signature(), Some("kd94hf93k423kf44%26"));
		assert_eq!(fields.value_of("oauth_signature_method"), Some("PLAINTEXT"));
	}

	#[test]
	fn duplicate_insertions_fail() {
		let err = HeaderFieldsBuilder::without_callback()
			.consumer_key(&consumer_key())
			.and_then(|b| b.consumer_key(&consumer_key()))
			.expect_err("Second identical consumer key should fail.");

		assert_eq!(
			err,
			HeaderFieldError::Duplicate {
				key: "oauth_consumer_key".into(),
				value: Some(CONSUMER_KEY.into())
			}
		);
	}

	#[test]
	fn caller_supplied_protocol_field_collides_with_stamped_one() {
		let clash = HeaderFields::new([HeaderField::new("oauth_timestamp", TIMESTAMP)]);
		let err = appendix_builder()
			.additional_params(&clash)
			.expect("First insertion succeeds.")
			.build(&SignatureMethod::plaintext(consumer_secret()))
			.expect_err("Stamped timestamp duplicates the caller's.");

		assert!(matches!(err, Error::Header(HeaderFieldError::Duplicate { .. })));
	}

	#[test]
	fn signed_fields_verify_and_resign_identically() {
		let secret = TokenSecret::from(request_token_secret());
		let method = SignatureMethod::hmac_sha1(
			url(ACCESS_TOKEN_ENDPOINT),
			HttpMethod::Post,
			consumer_secret(),
		);
		let build = || {
			appendix_builder()
				.consumer_key(&consumer_key())
				.and_then(|b| b.token(request_token()))
				.and_then(|b| b.verifier(&verifier()))
				.expect("Fields are unique.")
				.token_secret(secret.clone())
				.build(&method)
				.expect("Request should sign.")
		};
		let fields = build();

		assert_eq!(fields, build());
		assert!(method.verify(&fields, Some(&secret)).expect("Verification should run."));
		assert!(!method.verify(&fields, None).expect("Verification should run."));
	}
}
