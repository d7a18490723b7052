//! Single key/value header parameter.

// self
use crate::{_prelude::*, encode, header::keys};

/// A request parameter with an optional value.
///
/// Ordering compares the raw key first, then the raw value, byte-wise; a missing value sorts
/// before any present one. The signature base string re-sorts on the encoded pairs.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HeaderField {
	key: String,
	value: Option<String>,
}
impl HeaderField {
	/// Creates a field carrying `value`.
	pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
		Self { key: key.into(), value: Some(value.into()) }
	}

	/// Creates a field without a value.
	pub fn key_only(key: impl Into<String>) -> Self {
		Self { key: key.into(), value: None }
	}

	/// Parameter name.
	pub fn key(&self) -> &str {
		&self.key
	}

	/// Parameter value, if any.
	pub fn value(&self) -> Option<&str> {
		self.value.as_deref()
	}

	/// Returns `true` for `oauth_`-prefixed protocol parameters.
	pub fn is_protocol(&self) -> bool {
		self.key.starts_with(keys::PROTOCOL_PREFIX)
	}

	/// Renders `key=value`, or `key=` when the value is absent.
	pub fn normalized(&self) -> String {
		format!("{}={}", self.key, self.value.as_deref().unwrap_or_default())
	}

	/// Percent-encoded `(key, value)` pair; an absent value encodes as the empty string.
	pub fn encoded(&self) -> (String, String) {
		(
			encode::percent_encode(&self.key),
			encode::percent_encode(self.value.as_deref().unwrap_or_default()),
		)
	}
}
impl Display for HeaderField {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.normalized())
	}
}

/// Errors raised while collecting header fields.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum HeaderFieldError {
	/// The exact key and value pair was inserted twice.
	#[error("Header field `{key}` was already added with the same value.")]
	Duplicate {
		/// Key of the rejected field.
		key: String,
		/// Value of the rejected field.
		value: Option<String>,
	},
}
impl HeaderFieldError {
	pub(crate) fn duplicate(field: &HeaderField) -> Self {
		Self::Duplicate { key: field.key.clone(), value: field.value.clone() }
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn ordering_compares_key_then_value_bytewise() {
		let mut fields = vec![
			HeaderField::new("b", "1"),
			HeaderField::new("a", "2"),
			HeaderField::new("a", "10"),
			HeaderField::key_only("a"),
			HeaderField::new("B", "z"),
		];

		fields.sort();

		let rendered = fields.iter().map(HeaderField::normalized).collect::<Vec<_>>();

		assert_eq!(rendered, ["B=z", "a=", "a=10", "a=2", "b=1"]);
	}

	#[test]
	fn encoded_pairs_escape_key_and_value() {
		assert_eq!(
			HeaderField::new("c@", "=%3D").encoded(),
			("c%40".to_owned(), "%3D%253D".to_owned())
		);
		assert_eq!(HeaderField::key_only("flag").encoded(), ("flag".to_owned(), String::new()));
	}

	#[test]
	fn protocol_fields_are_detected_by_prefix() {
		assert!(HeaderField::new("oauth_token", "x").is_protocol());
		assert!(!HeaderField::new("file", "vacation.jpg").is_protocol());
		assert!(!HeaderField::new("realm", "Photos").is_protocol());
	}
}
