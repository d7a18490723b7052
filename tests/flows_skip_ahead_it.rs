// self
use oauth1_flow::{
	_preludet::*,
	flows::{
		AccessTokenFlowFactoryParam, AccessTokenFlowParam, AccessTokenIntermediateFactory,
		AccessTokenResponse, FlowCredentials, ProtectedAccessFlowFactoryParam, ProtectedAccessParam,
		ProtectedAccessIntermediateFactory, UserAuthorizationFlowParam,
		UserAuthorizationIntermediateFactory,
	},
	header::HeaderFields,
	params::{RequestToken, VerificationCode},
	signature::SignatureMethod,
};

fn credentials() -> FlowCredentials {
	FlowCredentials::new(consumer_key())
		.include_version(true)
		.with_header_values(Arc::new(appendix_values()))
}

#[test]
fn persisted_access_token_signs_without_replaying_earlier_phases() {
	let persisted = serde_json::json!({
		"token": ACCESS_TOKEN,
		"token_secret": ACCESS_TOKEN_SECRET,
	});
	let response: AccessTokenResponse =
		serde_json::from_value(persisted).expect("Persisted access token should deserialize.");
	let param = ProtectedAccessParam::new(
		credentials(),
		response.token,
		response.token_secret,
		ProtectedAccessFlowFactoryParam::new(photos_hmac_sha1(), photo_params()),
	);
	let fields = ProtectedAccessIntermediateFactory::new(param)
		.protected_access()
		.header_fields()
		.expect("Protected request should sign.");

	assert_eq!(fields.signature(), Some("tR3%2BTy81lMeYAr%2FFid0kMTYa%2FWM%3D"));
	assert_eq!(fields.value_of("oauth_consumer_key"), Some(CONSUMER_KEY));
	assert!(!fields.contains_key("oauth_verifier"));
}

#[test]
fn persisted_request_token_resumes_at_user_authorization() {
	let param = UserAuthorizationFlowParam::new(
		credentials(),
		request_token(),
		request_token_secret(),
		|_: &RequestToken| -> Result<VerificationCode> { Ok(verifier()) },
	);
	let access_token_factory = UserAuthorizationIntermediateFactory::new(param)
		.user_authorization_flow()
		.user_authorization()
		.expect("User authorization should succeed.");

	assert_eq!(access_token_factory.verifier().as_str(), VERIFIER);

	let protected = access_token_factory
		.access_token_flow(AccessTokenFlowFactoryParam::new(
			SignatureMethod::plaintext(consumer_secret()),
			|fields: &HeaderFields| -> Result<AccessTokenResponse> {
				assert_eq!(fields.signature(), Some("kd94hf93k423kf44%26hdhd0244k9j7ao03"));

				AccessTokenResponse::from_form(&format!(
					"oauth_token={ACCESS_TOKEN}&oauth_token_secret={ACCESS_TOKEN_SECRET}"
				))
			},
		))
		.token_exchange()
		.expect("Access token exchange should succeed.");

	assert_eq!(protected.access_token_secret().expose(), ACCESS_TOKEN_SECRET);
}

#[test]
fn persisted_verifier_resumes_at_access_token_exchange() {
	let param = AccessTokenFlowParam::new(
		credentials(),
		request_token(),
		request_token_secret(),
		verifier(),
		AccessTokenFlowFactoryParam::new(
			SignatureMethod::plaintext(consumer_secret()),
			|fields: &HeaderFields| -> Result<AccessTokenResponse> {
				assert_eq!(fields.value_of("oauth_verifier"), Some(VERIFIER));
				assert_eq!(fields.value_of("oauth_version"), Some("1.0"));

				Ok(AccessTokenResponse::new(access_token(), access_token_secret()))
			},
		),
	);
	let protected = AccessTokenIntermediateFactory::new(param)
		.access_token_flow()
		.token_exchange()
		.expect("Access token exchange should succeed.");

	assert_eq!(protected.access_token().as_str(), ACCESS_TOKEN);
}
