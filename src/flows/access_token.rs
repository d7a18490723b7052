//! Access token exchange, signed with the request token and its secret.
//!
//! The request carries `oauth_token` and `oauth_verifier` but never `oauth_callback`.

// self
use crate::{
	_prelude::*,
	flows::{FlowCredentials, ObtainAccessToken, ProtectedAccessFlowFactory},
	header::CallbackParameter,
	obs::{self, FlowKind},
	params::{RequestToken, RequestTokenSecret, VerificationCode},
	signature::SignatureMethod,
};

const KIND: FlowKind = FlowKind::AccessToken;

/// Unlocked after user authorization; selects how the access token exchange is signed and sent.
#[derive(Clone, Debug)]
pub struct AccessTokenFlowFactory {
	credentials: FlowCredentials,
	request_token: RequestToken,
	request_token_secret: RequestTokenSecret,
	verifier: VerificationCode,
}
impl AccessTokenFlowFactory {
	pub(crate) fn new(
		credentials: FlowCredentials,
		request_token: RequestToken,
		request_token_secret: RequestTokenSecret,
		verifier: VerificationCode,
	) -> Self {
		Self { credentials, request_token, request_token_secret, verifier }
	}

	/// Verifier returned by the user authorization.
	pub fn verifier(&self) -> &VerificationCode {
		&self.verifier
	}

	/// Enters the access token phase.
	pub fn access_token_flow(&self, param: AccessTokenFlowFactoryParam) -> AccessTokenFlow {
		AccessTokenFlow::new(AccessTokenFlowParam {
			credentials: self.credentials.clone(),
			request_token: self.request_token.clone(),
			request_token_secret: self.request_token_secret.clone(),
			verifier: self.verifier.clone(),
			signature_method: param.signature_method,
			obtain_access_token: param.obtain_access_token,
		})
	}
}

/// Inputs newly supplied when entering the access token phase.
#[derive(Clone)]
pub struct AccessTokenFlowFactoryParam {
	/// Method signing the access token request.
	pub signature_method: SignatureMethod,
	/// Performs the exchange.
	pub obtain_access_token: Arc<dyn ObtainAccessToken>,
}
impl AccessTokenFlowFactoryParam {
	/// Bundles the signature method and the exchange collaborator.
	pub fn new(
		signature_method: SignatureMethod,
		obtain_access_token: impl 'static + ObtainAccessToken,
	) -> Self {
		Self { signature_method, obtain_access_token: Arc::new(obtain_access_token) }
	}
}
impl Debug for AccessTokenFlowFactoryParam {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("AccessTokenFlowFactoryParam")
			.field("signature_method", &self.signature_method.name())
			.finish_non_exhaustive()
	}
}

/// Full inputs of the access token phase.
#[derive(Clone)]
pub struct AccessTokenFlowParam {
	/// Consumer identity from the entry phase.
	pub credentials: FlowCredentials,
	/// Authorized request token.
	pub request_token: RequestToken,
	/// Secret paired with the request token.
	pub request_token_secret: RequestTokenSecret,
	/// Verifier bound to the request token.
	pub verifier: VerificationCode,
	/// Method signing the access token request.
	pub signature_method: SignatureMethod,
	/// Performs the exchange.
	pub obtain_access_token: Arc<dyn ObtainAccessToken>,
}
impl AccessTokenFlowParam {
	/// Assembles the parameters, e.g. from a persisted request token and verifier.
	pub fn new(
		credentials: FlowCredentials,
		request_token: RequestToken,
		request_token_secret: RequestTokenSecret,
		verifier: VerificationCode,
		factory_param: AccessTokenFlowFactoryParam,
	) -> Self {
		Self {
			credentials,
			request_token,
			request_token_secret,
			verifier,
			signature_method: factory_param.signature_method,
			obtain_access_token: factory_param.obtain_access_token,
		}
	}
}
impl Debug for AccessTokenFlowParam {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("AccessTokenFlowParam")
			.field("credentials", &self.credentials)
			.field("request_token", &self.request_token)
			.field("request_token_secret", &self.request_token_secret)
			.field("verifier", &self.verifier)
			.field("signature_method", &self.signature_method.name())
			.finish_non_exhaustive()
	}
}

/// Access token phase.
#[derive(Clone, Debug)]
pub struct AccessTokenFlow {
	param: AccessTokenFlowParam,
}
impl AccessTokenFlow {
	fn new(param: AccessTokenFlowParam) -> Self {
		Self { param }
	}

	/// Signs the access token request, runs the exchange, and unlocks protected access.
	pub fn token_exchange(&self) -> Result<ProtectedAccessFlowFactory> {
		obs::observe(KIND, "token_exchange", || {
			let param = &self.param;
			let fields = param
				.credentials
				.header_builder(CallbackParameter::None)?
				.token(&param.request_token)?
				.verifier(&param.verifier)?
				.token_secret(&param.request_token_secret)
				.build(&param.signature_method)?;
			let response = param.obtain_access_token.obtain_access_token(&fields)?;

			Ok(ProtectedAccessFlowFactory::new(param.credentials.clone(), response))
		})
	}
}

/// Re-enters the flow at the access token exchange with an authorized request token obtained
/// earlier.
#[derive(Clone, Debug)]
pub struct AccessTokenIntermediateFactory {
	param: AccessTokenFlowParam,
}
impl AccessTokenIntermediateFactory {
	/// Wraps the phase parameters.
	pub fn new(param: AccessTokenFlowParam) -> Self {
		Self { param }
	}

	/// Enters the access token phase.
	pub fn access_token_flow(&self) -> AccessTokenFlow {
		AccessTokenFlow::new(self.param.clone())
	}
}
