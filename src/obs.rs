//! Optional observability helpers for flow phases.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `oauth1_flow.phase` with the `phase` and
//!   `stage` (call site) fields.
//! - Enable `metrics` to increment the `oauth1_flow_phase_total` counter for every
//!   attempt/success/failure, labeled by `phase` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Phases of the three-legged flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlowKind {
	/// Request token exchange.
	RequestToken,
	/// User authorization of the request token.
	UserAuthorization,
	/// Access token exchange.
	AccessToken,
	/// Signing of protected resource requests.
	ProtectedAccess,
}
impl FlowKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			FlowKind::RequestToken => "request_token",
			FlowKind::UserAuthorization => "user_authorization",
			FlowKind::AccessToken => "access_token",
			FlowKind::ProtectedAccess => "protected_access",
		}
	}
}
impl Display for FlowKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlowOutcome {
	/// Entry to a phase operation.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl FlowOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			FlowOutcome::Attempt => "attempt",
			FlowOutcome::Success => "success",
			FlowOutcome::Failure => "failure",
		}
	}
}
impl Display for FlowOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Runs `op` inside a phase span and records its attempt and outcome.
pub fn observe<T, F>(kind: FlowKind, stage: &'static str, op: F) -> Result<T>
where
	F: FnOnce() -> Result<T>,
{
	let _guard = FlowSpan::new(kind, stage).entered();

	record_flow_outcome(kind, FlowOutcome::Attempt);

	let result = op();

	match result {
		Ok(_) => record_flow_outcome(kind, FlowOutcome::Success),
		Err(_) => record_flow_outcome(kind, FlowOutcome::Failure),
	}

	result
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn observe_passes_results_through() {
		let ok = observe(FlowKind::ProtectedAccess, "test", || Ok(7));
		let err = observe::<(), _>(FlowKind::RequestToken, "test", || Err(Error::CallbackNotAccepted));

		assert_eq!(ok.expect("Closure result should be returned."), 7);
		assert!(matches!(err, Err(Error::CallbackNotAccepted)));
	}
}
