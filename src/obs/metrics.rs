// self
use crate::obs::{OpKind, OpOutcome};

/// Counter incremented once per attempt and once per settled outcome.
pub const OP_COUNTER: &str = "hrms_signup_op_total";

/// Increments [`OP_COUNTER`] for `kind` and `outcome` when the `metrics` feature is enabled.
pub fn record_op_outcome(kind: OpKind, outcome: OpOutcome) {
	#[cfg(feature = "metrics")]
	metrics::counter!(OP_COUNTER, "op" => kind.as_str(), "outcome" => outcome.as_str())
		.increment(1);
	#[cfg(not(feature = "metrics"))]
	let _ = (kind, outcome);
}

/// Maps a settled result to [`OpOutcome::Success`] or [`OpOutcome::Failure`].
pub fn settled_outcome<T, E>(result: &Result<T, E>) -> OpOutcome {
	if result.is_ok() { OpOutcome::Success } else { OpOutcome::Failure }
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn sign_up_outcomes_are_counted_without_a_recorder() {
		for kind in [OpKind::CreateCustomer, OpKind::ResendVerification] {
			record_op_outcome(kind, OpOutcome::Attempt);
			record_op_outcome(kind, OpOutcome::Failure);
		}
	}

	#[test]
	fn settled_results_map_to_outcomes() {
		assert_eq!(settled_outcome(&Ok::<_, ()>("t1")), OpOutcome::Success);
		assert_eq!(settled_outcome(&Err::<(), _>("disk full")), OpOutcome::Failure);
	}
}
