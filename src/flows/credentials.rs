//! Consumer identity shared by every phase.

// self
use crate::{
	_prelude::*,
	header::{
		CallbackParameter, HeaderFieldError, HeaderFieldsBuilder, HeaderValues, SystemHeaderValues,
	},
	params::ConsumerKey,
};

/// Consumer identity retained unchanged from the entry phase through protected access.
#[derive(Clone)]
pub struct FlowCredentials {
	consumer_key: ConsumerKey,
	include_version: bool,
	header_values: Arc<dyn HeaderValues>,
}
impl FlowCredentials {
	/// Creates credentials for `consumer_key`, without `oauth_version`.
	pub fn new(consumer_key: ConsumerKey) -> Self {
		Self { consumer_key, include_version: false, header_values: Arc::new(SystemHeaderValues) }
	}

	/// Toggles emission of `oauth_version=1.0` in every phase.
	pub fn include_version(mut self, include_version: bool) -> Self {
		self.include_version = include_version;

		self
	}

	/// Replaces the timestamp/nonce source used by every phase.
	pub fn with_header_values(mut self, header_values: Arc<dyn HeaderValues>) -> Self {
		self.header_values = header_values;

		self
	}

	/// Consumer key sent as `oauth_consumer_key`.
	pub fn consumer_key(&self) -> &ConsumerKey {
		&self.consumer_key
	}

	/// Whether `oauth_version` is emitted.
	pub fn includes_version(&self) -> bool {
		self.include_version
	}

	/// Starts a header builder seeded with the consumer key and optional version.
	pub(crate) fn header_builder(
		&self,
		callback: CallbackParameter,
	) -> Result<HeaderFieldsBuilder, HeaderFieldError> {
		let builder = HeaderFieldsBuilder::new(callback)
			.with_values(self.header_values.clone())
			.consumer_key(&self.consumer_key)?;

		if self.include_version { builder.version_information() } else { Ok(builder) }
	}
}
impl Debug for FlowCredentials {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("FlowCredentials")
			.field("consumer_key", &self.consumer_key)
			.field("include_version", &self.include_version)
			.finish_non_exhaustive()
	}
}
