//! Sources for the per-request `oauth_timestamp` and `oauth_nonce` values.

// crates.io
use rand::Rng;
use time::OffsetDateTime;
// self
use crate::encode;

const NONCE_LEN: usize = 8;
const NONCE_LOWER: u8 = b'a';
const NONCE_UPPER: u8 = b'z';

/// Supplies the timestamp and nonce stamped onto each request.
pub trait HeaderValues
where
	Self: Send + Sync,
{
	/// Value for `oauth_timestamp`.
	fn timestamp(&self) -> String;

	/// Value for `oauth_nonce`.
	fn nonce(&self) -> String;
}

/// Wall-clock timestamps and random lowercase nonces.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemHeaderValues;
impl HeaderValues for SystemHeaderValues {
	fn timestamp(&self) -> String {
		OffsetDateTime::now_utc().unix_timestamp().to_string()
	}

	fn nonce(&self) -> String {
		let mut rng = rand::rng();
		let nonce = (0..NONCE_LEN)
			.map(|_| char::from(rng.random_range(NONCE_LOWER..=NONCE_UPPER)))
			.collect::<String>();

		encode::percent_encode(&nonce)
	}
}

/// Pinned timestamp and nonce, for reproducible signatures.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedHeaderValues {
	/// Value returned for `oauth_timestamp`.
	pub timestamp: String,
	/// Value returned for `oauth_nonce`.
	pub nonce: String,
}
impl FixedHeaderValues {
	/// Pins both values.
	pub fn new(timestamp: impl Into<String>, nonce: impl Into<String>) -> Self {
		Self { timestamp: timestamp.into(), nonce: nonce.into() }
	}
}
impl HeaderValues for FixedHeaderValues {
	fn timestamp(&self) -> String {
		self.timestamp.clone()
	}

	fn nonce(&self) -> String {
		self.nonce.clone()
	}
}
