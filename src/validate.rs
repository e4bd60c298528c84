//! Pure input validators backing the sign-up screens.
//!
//! Every validator in this module is total: any string, including empty or malformed input,
//! produces a structured result instead of an error. Callers render `feedback` and `message`
//! directly as UI text and decide for themselves whether to block submission.

pub mod company;
pub mod email;
pub mod form;
pub mod password;

pub use company::*;
pub use email::*;
pub use form::*;
pub use password::*;

// self
use crate::_prelude::*;

/// Outcome of validating a single free-text field.
///
/// When `valid` is `false` the message explains the failure. When `valid` is `true` a message,
/// if present, is a non-blocking suggestion.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldValidation {
	/// Whether the field may be submitted.
	pub valid: bool,
	/// Error explanation or suggestion.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub message: Option<String>,
}
impl FieldValidation {
	/// Accepts the field without any message.
	pub fn ok() -> Self {
		Self { valid: true, message: None }
	}

	/// Accepts the field but attaches a suggestion for the user.
	pub fn suggest(message: impl Into<String>) -> Self {
		Self { valid: true, message: Some(message.into()) }
	}

	/// Rejects the field with the provided explanation.
	pub fn reject(message: impl Into<String>) -> Self {
		Self { valid: false, message: Some(message.into()) }
	}

	/// Returns `true` when the field is valid but carries a suggestion.
	pub fn has_suggestion(&self) -> bool {
		self.valid && self.message.is_some()
	}

	/// Message text, if any.
	pub fn message(&self) -> Option<&str> {
		self.message.as_deref()
	}
}
