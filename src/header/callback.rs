//! `oauth_callback` policies.

// self
use crate::{
	_prelude::*,
	header::{HeaderField, keys},
};

/// Callback value used when the consumer cannot receive callbacks.
pub const OUT_OF_BAND: &str = "oob";

/// Controls whether and how `oauth_callback` is emitted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CallbackParameter {
	/// No `oauth_callback` field.
	#[default]
	None,
	/// Explicit callback URI.
	Uri(Url),
	/// The literal out-of-band marker `oob`.
	OutOfBand,
}
impl CallbackParameter {
	/// Returns the `oauth_callback` field this policy contributes, if any.
	pub fn field(&self) -> Option<HeaderField> {
		match self {
			CallbackParameter::None => None,
			CallbackParameter::Uri(uri) => Some(HeaderField::new(keys::CALLBACK, uri.as_str())),
			CallbackParameter::OutOfBand => Some(HeaderField::new(keys::CALLBACK, OUT_OF_BAND)),
		}
	}
}
impl From<Url> for CallbackParameter {
	fn from(value: Url) -> Self {
		Self::Uri(value)
	}
}
