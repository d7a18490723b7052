//! User authorization of the request token; yields the verifier for the access token exchange.

// self
use crate::{
	_prelude::*,
	flows::{AccessTokenFlowFactory, AuthorizeUser, FlowCredentials, RequestTokenResponse},
	obs::{self, FlowKind},
	params::{RequestToken, RequestTokenSecret},
};

const KIND: FlowKind = FlowKind::UserAuthorization;

/// Unlocked after the request token exchange; selects how the user authorizes the token.
#[derive(Clone, Debug)]
pub struct UserAuthorizationFlowFactory {
	credentials: FlowCredentials,
	request_token: RequestTokenResponse,
}
impl UserAuthorizationFlowFactory {
	pub(crate) fn new(credentials: FlowCredentials, request_token: RequestTokenResponse) -> Self {
		Self { credentials, request_token }
	}

	/// Request token issued by the provider, e.g. for building the authorization redirect.
	pub fn request_token(&self) -> &RequestToken {
		&self.request_token.token
	}

	/// Secret paired with the request token, e.g. for persisting a paused flow.
	pub fn request_token_secret(&self) -> &RequestTokenSecret {
		&self.request_token.token_secret
	}

	/// Enters the user authorization phase with the `authorize` collaborator.
	pub fn user_authorization_flow(
		&self,
		authorize: impl 'static + AuthorizeUser,
	) -> UserAuthorizationFlow {
		UserAuthorizationFlow::new(UserAuthorizationFlowParam {
			credentials: self.credentials.clone(),
			request_token: self.request_token.token.clone(),
			request_token_secret: self.request_token.token_secret.clone(),
			authorize: Arc::new(authorize),
		})
	}
}

/// Inputs of the user authorization phase.
#[derive(Clone)]
pub struct UserAuthorizationFlowParam {
	/// Consumer identity from the entry phase.
	pub credentials: FlowCredentials,
	/// Request token awaiting authorization.
	pub request_token: RequestToken,
	/// Secret paired with the request token.
	pub request_token_secret: RequestTokenSecret,
	/// Obtains the verifier.
	pub authorize: Arc<dyn AuthorizeUser>,
}
impl UserAuthorizationFlowParam {
	/// Assembles the parameters, e.g. from a persisted request token.
	pub fn new(
		credentials: FlowCredentials,
		request_token: RequestToken,
		request_token_secret: RequestTokenSecret,
		authorize: impl 'static + AuthorizeUser,
	) -> Self {
		Self { credentials, request_token, request_token_secret, authorize: Arc::new(authorize) }
	}
}
impl Debug for UserAuthorizationFlowParam {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("UserAuthorizationFlowParam")
			.field("credentials", &self.credentials)
			.field("request_token", &self.request_token)
			.field("request_token_secret", &self.request_token_secret)
			.finish_non_exhaustive()
	}
}

/// User authorization phase.
#[derive(Clone, Debug)]
pub struct UserAuthorizationFlow {
	param: UserAuthorizationFlowParam,
}
impl UserAuthorizationFlow {
	fn new(param: UserAuthorizationFlowParam) -> Self {
		Self { param }
	}

	/// Obtains the verifier for the request token and unlocks the access token exchange.
	pub fn user_authorization(&self) -> Result<AccessTokenFlowFactory> {
		obs::observe(KIND, "user_authorization", || {
			let param = &self.param;
			let verifier = param.authorize.authorize(&param.request_token)?;

			Ok(AccessTokenFlowFactory::new(
				param.credentials.clone(),
				param.request_token.clone(),
				param.request_token_secret.clone(),
				verifier,
			))
		})
	}
}

/// Re-enters the flow at user authorization with a request token obtained earlier.
#[derive(Clone, Debug)]
pub struct UserAuthorizationIntermediateFactory {
	param: UserAuthorizationFlowParam,
}
impl UserAuthorizationIntermediateFactory {
	/// Wraps the phase parameters.
	pub fn new(param: UserAuthorizationFlowParam) -> Self {
		Self { param }
	}

	/// Enters the user authorization phase.
	pub fn user_authorization_flow(&self) -> UserAuthorizationFlow {
		UserAuthorizationFlow::new(self.param.clone())
	}
}
