//! Password wrapper that keeps plaintext out of logs and debug output.

// self
use crate::_prelude::*;

/// Plaintext password held only long enough to validate it and hand it to the identity provider.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Password(String);
impl Password {
	/// Wraps a password string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the plaintext. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl From<&str> for Password {
	fn from(value: &str) -> Self {
		Self::new(value)
	}
}
impl From<String> for Password {
	fn from(value: String) -> Self {
		Self(value)
	}
}
impl Debug for Password {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("Password").field(&"<redacted>").finish()
	}
}
impl Display for Password {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}
