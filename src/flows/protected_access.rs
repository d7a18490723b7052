//! Reusable signer for protected resource requests.
//!
//! Every [`ProtectedAccess::header_fields`] call stamps a fresh timestamp and nonce.

// self
use crate::{
	_prelude::*,
	flows::{AccessTokenResponse, FlowCredentials},
	header::{CallbackParameter, HeaderFields},
	obs::{self, FlowKind},
	params::{AccessToken, AccessTokenSecret},
	signature::SignatureMethod,
};

const KIND: FlowKind = FlowKind::ProtectedAccess;

/// Unlocked after the access token exchange; produces signers for protected requests.
#[derive(Clone, Debug)]
pub struct ProtectedAccessFlowFactory {
	credentials: FlowCredentials,
	access_token: AccessTokenResponse,
}
impl ProtectedAccessFlowFactory {
	pub(crate) fn new(credentials: FlowCredentials, access_token: AccessTokenResponse) -> Self {
		Self { credentials, access_token }
	}

	/// Access token issued by the provider, e.g. for persisting.
	pub fn access_token(&self) -> &AccessToken {
		&self.access_token.token
	}

	/// Secret paired with the access token, e.g. for persisting.
	pub fn access_token_secret(&self) -> &AccessTokenSecret {
		&self.access_token.token_secret
	}

	/// Creates a signer for one kind of protected request. May be called repeatedly.
	pub fn protected_access(&self, param: ProtectedAccessFlowFactoryParam) -> ProtectedAccess {
		ProtectedAccess::new(ProtectedAccessParam {
			credentials: self.credentials.clone(),
			access_token: self.access_token.token.clone(),
			access_token_secret: self.access_token.token_secret.clone(),
			signature_method: param.signature_method,
			additional_params: param.additional_params,
		})
	}
}

/// Inputs newly supplied for one kind of protected request.
#[derive(Clone, Debug)]
pub struct ProtectedAccessFlowFactoryParam {
	/// Method signing the protected request.
	pub signature_method: SignatureMethod,
	/// Request parameters that take part in the signature.
	pub additional_params: HeaderFields,
}
impl ProtectedAccessFlowFactoryParam {
	/// Bundles the signature method and the request parameters.
	pub fn new(signature_method: SignatureMethod, additional_params: HeaderFields) -> Self {
		Self { signature_method, additional_params }
	}
}

/// Full inputs of a protected request signer.
#[derive(Clone, Debug)]
pub struct ProtectedAccessParam {
	/// Consumer identity from the entry phase.
	pub credentials: FlowCredentials,
	/// Access token.
	pub access_token: AccessToken,
	/// Secret paired with the access token.
	pub access_token_secret: AccessTokenSecret,
	/// Method signing the protected request.
	pub signature_method: SignatureMethod,
	/// Request parameters that take part in the signature.
	pub additional_params: HeaderFields,
}
impl ProtectedAccessParam {
	/// Assembles the parameters, e.g. from a persisted access token.
	pub fn new(
		credentials: FlowCredentials,
		access_token: AccessToken,
		access_token_secret: AccessTokenSecret,
		factory_param: ProtectedAccessFlowFactoryParam,
	) -> Self {
		Self {
			credentials,
			access_token,
			access_token_secret,
			signature_method: factory_param.signature_method,
			additional_params: factory_param.additional_params,
		}
	}
}

/// Signer for protected resource requests.
#[derive(Clone, Debug)]
pub struct ProtectedAccess {
	param: ProtectedAccessParam,
}
impl ProtectedAccess {
	fn new(param: ProtectedAccessParam) -> Self {
		Self { param }
	}

	/// Builds a freshly stamped and signed field set. Every call yields a new timestamp and nonce.
	pub fn header_fields(&self) -> Result<HeaderFields> {
		obs::observe(KIND, "header_fields", || {
			let param = &self.param;

			param
				.credentials
				.header_builder(CallbackParameter::None)?
				.additional_params(&param.additional_params)?
				.token(&param.access_token)?
				.token_secret(&param.access_token_secret)
				.build(&param.signature_method)
		})
	}
}

/// Re-enters the flow at protected access with an access token obtained earlier.
#[derive(Clone, Debug)]
pub struct ProtectedAccessIntermediateFactory {
	param: ProtectedAccessParam,
}
impl ProtectedAccessIntermediateFactory {
	/// Wraps the signer parameters.
	pub fn new(param: ProtectedAccessParam) -> Self {
		Self { param }
	}

	/// Creates the signer.
	pub fn protected_access(&self) -> ProtectedAccess {
		ProtectedAccess::new(self.param.clone())
	}
}
