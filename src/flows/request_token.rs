//! Entry phase: signs the request token request and hands it to the caller's transport.
//!
//! [`OAuthFlow`] is built from a [`RequestTokenFlowParam`]. By default the request carries
//! `oauth_callback=oob` and an unconfirmed callback aborts with
//! [`Error::CallbackNotAccepted`].

// self
use crate::{
	_prelude::*,
	error::ConfigError,
	flows::{FlowCredentials, ObtainRequestToken, UserAuthorizationFlowFactory},
	header::{CallbackParameter, HeaderFields, HeaderValues},
	obs::{self, FlowKind},
	params::ConsumerKey,
	signature::SignatureMethod,
};

const KIND: FlowKind = FlowKind::RequestToken;

/// Entry parameters of the three-legged flow.
#[derive(Clone)]
pub struct RequestTokenFlowParam {
	/// Consumer identity propagated to every later phase.
	pub credentials: FlowCredentials,
	/// Method signing the request token request.
	pub signature_method: SignatureMethod,
	/// `oauth_callback` policy.
	pub callback: CallbackParameter,
	/// Service-provider specific parameters of the request token request.
	pub additional_params: HeaderFields,
	/// Fail with [`Error::CallbackNotAccepted`] unless the provider confirms the callback.
	pub require_callback_confirmation: bool,
	/// Performs the exchange.
	pub obtain_request_token: Arc<dyn ObtainRequestToken>,
}
impl RequestTokenFlowParam {
	/// Starts a builder with the mandatory inputs.
	pub fn builder(
		consumer_key: ConsumerKey,
		signature_method: SignatureMethod,
		obtain_request_token: impl 'static + ObtainRequestToken,
	) -> RequestTokenFlowParamBuilder {
		RequestTokenFlowParamBuilder::new(consumer_key, signature_method, obtain_request_token)
	}
}
impl Debug for RequestTokenFlowParam {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("RequestTokenFlowParam")
			.field("credentials", &self.credentials)
			.field("signature_method", &self.signature_method.name())
			.field("callback", &self.callback)
			.field("additional_params", &self.additional_params)
			.field("require_callback_confirmation", &self.require_callback_confirmation)
			.finish_non_exhaustive()
	}
}

/// Builder for [`RequestTokenFlowParam`].
///
/// Defaults: no `oauth_version`, the out-of-band callback, no additional parameters, and a
/// mandatory callback confirmation.
pub struct RequestTokenFlowParamBuilder {
	credentials: FlowCredentials,
	signature_method: SignatureMethod,
	callback: CallbackParameter,
	additional_params: HeaderFields,
	require_callback_confirmation: bool,
	obtain_request_token: Arc<dyn ObtainRequestToken>,
}
impl RequestTokenFlowParamBuilder {
	/// Creates a builder with the mandatory inputs.
	pub fn new(
		consumer_key: ConsumerKey,
		signature_method: SignatureMethod,
		obtain_request_token: impl 'static + ObtainRequestToken,
	) -> Self {
		Self {
			credentials: FlowCredentials::new(consumer_key),
			signature_method,
			callback: CallbackParameter::OutOfBand,
			additional_params: HeaderFields::empty(),
			require_callback_confirmation: true,
			obtain_request_token: Arc::new(obtain_request_token),
		}
	}

	/// Toggles `oauth_version=1.0` for the whole flow.
	pub fn include_version(mut self, include_version: bool) -> Self {
		self.credentials = self.credentials.include_version(include_version);

		self
	}

	/// Sets the callback URI the provider redirects to after authorization.
	pub fn callback(mut self, callback: Url) -> Self {
		self.callback = CallbackParameter::Uri(callback);

		self
	}

	/// Parses and sets the callback URI.
	pub fn callback_url(self, callback: &str) -> Result<Self> {
		let callback =
			Url::parse(callback).map_err(|e| ConfigError::invalid_url("callback", e))?;

		Ok(self.callback(callback))
	}

	/// Overrides the callback policy, e.g. [`CallbackParameter::None`] for providers that reject
	/// `oauth_callback`.
	pub fn callback_policy(mut self, callback: CallbackParameter) -> Self {
		self.callback = callback;

		self
	}

	/// Sets service-provider specific parameters for the request token request.
	pub fn additional_params(mut self, additional_params: HeaderFields) -> Self {
		self.additional_params = additional_params;

		self
	}

	/// Controls whether an unconfirmed callback aborts the flow.
	pub fn require_callback_confirmation(mut self, require: bool) -> Self {
		self.require_callback_confirmation = require;

		self
	}

	/// Replaces the timestamp/nonce source for the whole flow.
	pub fn header_values(mut self, header_values: Arc<dyn HeaderValues>) -> Self {
		self.credentials = self.credentials.with_header_values(header_values);

		self
	}

	/// Finishes the parameters.
	pub fn build(self) -> RequestTokenFlowParam {
		RequestTokenFlowParam {
			credentials: self.credentials,
			signature_method: self.signature_method,
			callback: self.callback,
			additional_params: self.additional_params,
			require_callback_confirmation: self.require_callback_confirmation,
			obtain_request_token: self.obtain_request_token,
		}
	}
}
impl Debug for RequestTokenFlowParamBuilder {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("RequestTokenFlowParamBuilder")
			.field("credentials", &self.credentials)
			.field("callback", &self.callback)
			.finish_non_exhaustive()
	}
}

/// Entry point of the three-legged flow.
#[derive(Clone, Debug)]
pub struct OAuthFlow {
	param: RequestTokenFlowParam,
}
impl OAuthFlow {
	/// Creates the flow from its entry parameters.
	pub fn new(param: RequestTokenFlowParam) -> Self {
		Self { param }
	}

	/// Enters the request token phase.
	pub fn request_token_flow(&self) -> RequestTokenFlow {
		RequestTokenFlow { param: self.param.clone() }
	}
}

/// Request token phase.
#[derive(Clone, Debug)]
pub struct RequestTokenFlow {
	param: RequestTokenFlowParam,
}
impl RequestTokenFlow {
	/// Signs the request token request, runs the exchange, and unlocks user authorization.
	///
	/// Each call performs a fresh exchange.
	pub fn obtain_request_token(&self) -> Result<UserAuthorizationFlowFactory> {
		obs::observe(KIND, "obtain_request_token", || {
			let param = &self.param;
			let fields = param
				.credentials
				.header_builder(param.callback.clone())?
				.additional_params(&param.additional_params)?
				.build(&param.signature_method)?;
			let response = param.obtain_request_token.obtain_request_token(&fields)?;

			if param.require_callback_confirmation && !response.callback_confirmed {
				return Err(Error::CallbackNotAccepted);
			}

			Ok(UserAuthorizationFlowFactory::new(param.credentials.clone(), response))
		})
	}
}
