//! Header field collections.

// std
use std::collections::btree_set;
// self
use crate::{
	_prelude::*,
	encode,
	header::{HeaderField, HeaderFieldError, keys},
};

/// Immutable, deduplicated set of header fields in canonical order.
///
/// Exact duplicates collapse silently; fields sharing a key with different values coexist.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeaderFields {
	fields: BTreeSet<HeaderField>,
}
impl HeaderFields {
	/// Collects `fields` into a set.
	pub fn new<I>(fields: I) -> Self
	where
		I: IntoIterator<Item = HeaderField>,
	{
		Self { fields: fields.into_iter().collect() }
	}

	/// Returns an empty set.
	pub fn empty() -> Self {
		Self::default()
	}

	/// Number of fields.
	pub fn len(&self) -> usize {
		self.fields.len()
	}

	/// Returns `true` if no field is present.
	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	/// Iterates the fields in canonical order.
	pub fn iter(&self) -> btree_set::Iter<'_, HeaderField> {
		self.fields.iter()
	}

	/// Returns `true` if the exact field is present.
	pub fn contains(&self, field: &HeaderField) -> bool {
		self.fields.contains(field)
	}

	/// Returns `true` if any field uses `key`.
	pub fn contains_key(&self, key: &str) -> bool {
		self.fields_for(key).next().is_some()
	}

	/// Iterates every field using `key`.
	pub fn fields_for<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a HeaderField> {
		self.fields.iter().filter(move |field| field.key() == key)
	}

	/// Returns the value of the first field using `key`.
	pub fn value_of(&self, key: &str) -> Option<&str> {
		self.fields.iter().filter(|field| field.key() == key).find_map(HeaderField::value)
	}

	/// Returns the percent-encoded `oauth_signature`, if the set has been signed.
	pub fn signature(&self) -> Option<&str> {
		self.value_of(keys::SIGNATURE)
	}

	/// Iterates the service-provider parameters, i.e. every field except `realm` and the
	/// `oauth_`-prefixed ones.
	///
	/// These belong in the query string or request body rather than the `Authorization` header.
	pub fn non_protocol(&self) -> impl Iterator<Item = &HeaderField> {
		self.fields.iter().filter(|field| !field.is_protocol() && field.key() != keys::REALM)
	}

	/// Renders the `Authorization` header value (OAuth Core 1.0a §5.4.1).
	///
	/// Only `oauth_` fields are rendered, preceded by the optional `realm` as an escaped
	/// quoted-string. The stored `oauth_signature` is already percent-encoded and is emitted
	/// verbatim; every other value is percent-encoded here.
	pub fn authorization_header(&self, realm: Option<&str>) -> String {
		let mut parts = Vec::with_capacity(self.fields.len() + 1);

		if let Some(realm) = realm {
			parts.push(format!("{}=\"{}\"", keys::REALM, quote_realm(realm)));
		}

		for field in self.fields.iter().filter(|field| field.is_protocol()) {
			let value = field.value().unwrap_or_default();
			let value = if field.key() == keys::SIGNATURE {
				value.to_owned()
			} else {
				encode::percent_encode(value)
			};

			parts.push(format!("{}=\"{value}\"", field.key()));
		}

		format!("OAuth {}", parts.join(", "))
	}
}
impl FromIterator<HeaderField> for HeaderFields {
	fn from_iter<T>(iter: T) -> Self
	where
		T: IntoIterator<Item = HeaderField>,
	{
		Self::new(iter)
	}
}
impl IntoIterator for HeaderFields {
	type IntoIter = btree_set::IntoIter<HeaderField>;
	type Item = HeaderField;

	fn into_iter(self) -> Self::IntoIter {
		self.fields.into_iter()
	}
}
impl<'a> IntoIterator for &'a HeaderFields {
	type IntoIter = btree_set::Iter<'a, HeaderField>;
	type Item = &'a HeaderField;

	fn into_iter(self) -> Self::IntoIter {
		self.fields.iter()
	}
}

/// Ordered field set used while composing one request; rejects exact duplicates.
#[derive(Clone, Debug, Default)]
pub struct OrderedHeaderFields {
	fields: BTreeSet<HeaderField>,
}
impl OrderedHeaderFields {
	/// Creates an empty set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Inserts `field`, failing if the same key and value is already present.
	pub fn insert(&mut self, field: HeaderField) -> Result<(), HeaderFieldError> {
		if self.fields.contains(&field) {
			#[cfg(feature = "tracing")]
			tracing::debug!(key = field.key(), "Rejected duplicate header field.");

			return Err(HeaderFieldError::duplicate(&field));
		}

		self.fields.insert(field);

		Ok(())
	}

	/// Inserts a `key=value` field.
	pub fn add(
		&mut self,
		key: impl Into<String>,
		value: impl Into<String>,
	) -> Result<(), HeaderFieldError> {
		self.insert(HeaderField::new(key, value))
	}

	/// Inserts every field of `fields`, stopping at the first duplicate.
	pub fn extend_from(&mut self, fields: &HeaderFields) -> Result<(), HeaderFieldError> {
		fields.iter().cloned().try_for_each(|field| self.insert(field))
	}

	/// Number of fields.
	pub fn len(&self) -> usize {
		self.fields.len()
	}

	/// Returns `true` if no field is present.
	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	/// Iterates the fields in canonical order.
	pub fn iter(&self) -> btree_set::Iter<'_, HeaderField> {
		self.fields.iter()
	}

	/// Freezes the set.
	pub fn into_header_fields(self) -> HeaderFields {
		HeaderFields { fields: self.fields }
	}
}

// RFC 2617 quoted-string: backslash-escape `"` and `\`.
fn quote_realm(realm: &str) -> String {
	let mut quoted = String::with_capacity(realm.len());

	for c in realm.chars() {
		if matches!(c, '"' | '\\') {
			quoted.push('\\');
		}

		quoted.push(c);
	}

	quoted
}
