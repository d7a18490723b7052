//! Phase state machine of the three-legged flow.
//!
//! Each phase exposes one operation that consumes a caller-supplied collaborator and returns the
//! factory of the next phase:
//!
//! ```text
//! OAuthFlow ─► RequestTokenFlow::obtain_request_token
//!           ─► UserAuthorizationFlowFactory ─► UserAuthorizationFlow::user_authorization
//!           ─► AccessTokenFlowFactory ─► AccessTokenFlow::token_exchange
//!           ─► ProtectedAccessFlowFactory ─► ProtectedAccess::header_fields
//! ```
//!
//! The `*IntermediateFactory` types re-enter the machine at a later phase from persisted
//! artifacts. [`FlowCredentials`] travels unchanged through every phase.

pub mod collaborator;
pub mod response;

mod access_token;
mod credentials;
mod protected_access;
mod request_token;
mod user_authorization;

pub use access_token::*;
pub use collaborator::*;
pub use credentials::*;
pub use protected_access::*;
pub use request_token::*;
pub use response::*;
pub use user_authorization::*;

#[cfg(test)]
mod tests {
	// std
	use std::sync::Mutex;
	// self
	use super::*;
	use crate::{
		_preludet::*,
		error::{ConfigError, TransportError},
		header::{HeaderField, HeaderFields},
		params::{HttpMethod, RequestToken, TokenSecret, VerificationCode},
		signature::SignatureMethod,
	};

	fn confirmed(callback_confirmed: bool) -> RequestTokenResponse {
		RequestTokenResponse::new(request_token(), request_token_secret(), callback_confirmed)
	}

	fn unconfirmed(_: &HeaderFields) -> Result<RequestTokenResponse> {
		Ok(confirmed(false))
	}

	fn entry(obtain: impl 'static + ObtainRequestToken) -> RequestTokenFlowParamBuilder {
		RequestTokenFlowParam::builder(
			consumer_key(),
			SignatureMethod::plaintext(consumer_secret()),
			obtain,
		)
		.header_values(Arc::new(appendix_values()))
	}

	#[test]
	fn unconfirmed_callback_aborts_by_default() {
		let flow = OAuthFlow::new(entry(unconfirmed).build());
		let err = flow
			.request_token_flow()
			.obtain_request_token()
			.expect_err("Unconfirmed callback should abort.");

		assert!(matches!(err, Error::CallbackNotAccepted));
	}

	#[test]
	fn callback_confirmation_can_be_relaxed() {
		let flow = OAuthFlow::new(entry(unconfirmed).require_callback_confirmation(false).build());
		let factory = flow
			.request_token_flow()
			.obtain_request_token()
			.expect("Relaxed policy should accept the response.");

		assert_eq!(factory.request_token(), &request_token());
		assert_eq!(factory.request_token_secret(), &request_token_secret());
	}

	#[test]
	fn request_token_fields_default_to_out_of_band_callback() {
		let seen = Arc::new(Mutex::new(None));
		let sink = seen.clone();
		let flow = OAuthFlow::new(
			entry(move |fields: &HeaderFields| -> Result<RequestTokenResponse> {
				*sink.lock().expect("Mutex should not be poisoned.") = Some(fields.clone());

				Ok(confirmed(true))
			})
			.build(),
		);

		flow.request_token_flow().obtain_request_token().expect("Exchange should succeed.");

		let fields = seen
			.lock()
			.expect("Mutex should not be poisoned.")
			.take()
			.expect("Collaborator should have been invoked.");

		assert_eq!(fields.value_of("oauth_callback"), Some("oob"));
		assert_eq!(fields.signature(), Some("kd94hf93k423kf44%26"));
		assert!(!fields.contains_key("oauth_version"));
		assert!(!fields.contains_key("oauth_token"));
	}

	#[test]
	fn collaborator_failures_propagate() {
		let flow = OAuthFlow::new(
			entry(|_: &HeaderFields| -> Result<RequestTokenResponse> {
				Err(TransportError::collaborator(
					"request_token",
					std::io::Error::other("connection refused"),
				)
				.into())
			})
			.build(),
		);
		let err = flow
			.request_token_flow()
			.obtain_request_token()
			.expect_err("Transport failure should surface.");

		assert!(matches!(err, Error::Transport(TransportError::Collaborator { .. })));
	}

	#[test]
	fn invalid_callback_url_is_rejected() {
		let err = entry(unconfirmed)
			.callback_url("not a url")
			.expect_err("Relative callback should fail to parse.");

		assert!(matches!(
			err,
			Error::Config(ConfigError::InvalidUrl { what: "callback", .. })
		));
	}

	#[test]
	fn access_token_phase_signs_with_request_token_secret() {
		let credentials = FlowCredentials::new(consumer_key())
			.include_version(true)
			.with_header_values(Arc::new(appendix_values()));
		let method = SignatureMethod::hmac_sha1(
			url(ACCESS_TOKEN_ENDPOINT),
			HttpMethod::Post,
			consumer_secret(),
		);
		let verify_with = method.clone();
		let obtain = move |fields: &HeaderFields| -> Result<AccessTokenResponse> {
			assert_eq!(fields.value_of("oauth_token"), Some(REQUEST_TOKEN));
			assert_eq!(fields.value_of("oauth_verifier"), Some(VERIFIER));
			assert_eq!(fields.value_of("oauth_version"), Some("1.0"));
			assert!(!fields.contains_key("oauth_callback"));

			let secret = TokenSecret::from(request_token_secret());

			assert!(
				verify_with.verify(fields, Some(&secret)).expect("Verification should run."),
				"Access token request must be signed with the request token secret."
			);

			Ok(AccessTokenResponse::new(access_token(), access_token_secret()))
		};
		let param = AccessTokenFlowParam::new(
			credentials,
			request_token(),
			request_token_secret(),
			verifier(),
			AccessTokenFlowFactoryParam::new(method, obtain),
		);
		let factory = AccessTokenIntermediateFactory::new(param)
			.access_token_flow()
			.token_exchange()
			.expect("Exchange should succeed.");

		assert_eq!(factory.access_token(), &access_token());
	}

	#[test]
	fn user_authorization_receives_request_token() {
		let param = UserAuthorizationFlowParam::new(
			FlowCredentials::new(consumer_key()),
			request_token(),
			request_token_secret(),
			|token: &RequestToken| -> Result<VerificationCode> {
				assert_eq!(token.as_str(), REQUEST_TOKEN);

				Ok(VerificationCode::new(VERIFIER))
			},
		);
		let factory = UserAuthorizationIntermediateFactory::new(param)
			.user_authorization_flow()
			.user_authorization()
			.expect("Authorization should succeed.");

		assert_eq!(factory.verifier(), &verifier());
	}

	#[test]
	fn protected_access_stamps_fresh_values_per_call() {
		let param = ProtectedAccessParam::new(
			FlowCredentials::new(consumer_key()),
			access_token(),
			access_token_secret(),
			ProtectedAccessFlowFactoryParam::new(
				photos_hmac_sha1(),
				HeaderFields::new([HeaderField::new("file", "vacation.jpg")]),
			),
		);
		let access = ProtectedAccessIntermediateFactory::new(param).protected_access();
		let first = access.header_fields().expect("Signing should succeed.");
		let second = access.header_fields().expect("Signing should succeed.");

		assert_eq!(first.value_of("oauth_token"), Some(ACCESS_TOKEN));
		assert_ne!(first.value_of("oauth_nonce"), None);
		assert_eq!(first.value_of("file"), second.value_of("file"));
	}
}
