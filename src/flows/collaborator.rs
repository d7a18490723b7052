//! Caller-supplied operations that perform the wire exchanges.
//!
//! The engine never performs I/O. Each phase hands its signed [`HeaderFields`] to one of these
//! collaborators and continues with whatever it returns. Closures with the matching signature
//! implement the traits directly; failures should be wrapped with
//! [`TransportError::collaborator`](crate::error::TransportError::collaborator).

// self
use crate::{
	_prelude::*,
	flows::{AccessTokenResponse, RequestTokenResponse},
	header::HeaderFields,
	params::{RequestToken, VerificationCode},
};

/// Performs the request token exchange.
pub trait ObtainRequestToken
where
	Self: Send + Sync,
{
	/// Sends the signed request token request and parses the provider's answer.
	fn obtain_request_token(&self, fields: &HeaderFields) -> Result<RequestTokenResponse>;
}
impl<F> ObtainRequestToken for F
where
	F: Send + Sync + Fn(&HeaderFields) -> Result<RequestTokenResponse>,
{
	fn obtain_request_token(&self, fields: &HeaderFields) -> Result<RequestTokenResponse> {
		self(fields)
	}
}

/// Obtains the user's authorization for a request token.
pub trait AuthorizeUser
where
	Self: Send + Sync,
{
	/// Redirects the user (or otherwise asks them) and returns the verifier bound to `request_token`.
	fn authorize(&self, request_token: &RequestToken) -> Result<VerificationCode>;
}
impl<F> AuthorizeUser for F
where
	F: Send + Sync + Fn(&RequestToken) -> Result<VerificationCode>,
{
	fn authorize(&self, request_token: &RequestToken) -> Result<VerificationCode> {
		self(request_token)
	}
}

/// Performs the access token exchange.
pub trait ObtainAccessToken
where
	Self: Send + Sync,
{
	/// Sends the signed access token request and parses the provider's answer.
	fn obtain_access_token(&self, fields: &HeaderFields) -> Result<AccessTokenResponse>;
}
impl<F> ObtainAccessToken for F
where
	F: Send + Sync + Fn(&HeaderFields) -> Result<AccessTokenResponse>,
{
	fn obtain_access_token(&self, fields: &HeaderFields) -> Result<AccessTokenResponse> {
		self(fields)
	}
}
