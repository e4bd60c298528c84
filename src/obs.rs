//! Optional observability helpers for onboarding operations.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `hrms_signup.op` with the `op`, `stage` and
//!   `outcome` fields, plus the info/warn/debug events logged along the way.
//! - Enable `metrics` to increment the `hrms_signup_op_total` counter for every
//!   attempt/success/failure, labeled by `op` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

#[cfg(feature = "tracing")]
pub(crate) use ::tracing::{debug, info, warn};

#[cfg(not(feature = "tracing"))]
macro_rules! discard_event {
	($($arg:tt)*) => {};
}
#[cfg(not(feature = "tracing"))]
pub(crate) use {discard_event as debug, discard_event as info, discard_event as warn};

/// Onboarding operations observed by the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OpKind {
	/// Company + administrator creation.
	CreateCustomer,
	/// Verification email resend.
	ResendVerification,
	/// Corporate domain lock.
	RegisterDomain,
	/// Corporate domain release.
	ReleaseDomain,
}
impl OpKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			OpKind::CreateCustomer => "create_customer",
			OpKind::ResendVerification => "resend_verification",
			OpKind::RegisterDomain => "register_domain",
			OpKind::ReleaseDomain => "release_domain",
		}
	}
}
impl Display for OpKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OpOutcome {
	/// Entry to an operation.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl OpOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			OpOutcome::Attempt => "attempt",
			OpOutcome::Success => "success",
			OpOutcome::Failure => "failure",
		}
	}
}
impl Display for OpOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Runs one onboarding operation inside its span and counts its attempt and outcome.
pub(crate) async fn observe<T, E, Fut>(
	kind: OpKind,
	stage: &'static str,
	fut: Fut,
) -> Result<T, E>
where
	Fut: Future<Output = Result<T, E>>,
{
	let span = OpSpan::new(kind, stage);

	record_op_outcome(kind, OpOutcome::Attempt);

	let result = span.instrument(fut).await;
	let outcome = settled_outcome(&result);

	span.record_outcome(outcome);
	record_op_outcome(kind, outcome);

	result
}
