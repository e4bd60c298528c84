//! Normalized email domains.

// std
use std::{ops::Deref, sync::LazyLock};
// crates.io
use regex::Regex;
// self
use crate::_prelude::*;

/// Longest domain the registry stores.
pub const DOMAIN_MAX_LEN: usize = 255;

static DOMAIN_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[a-z0-9.-]+\.[a-z]{2,}$").expect("DOMAIN_SHAPE is a valid regex pattern")
});

/// Errors raised while deriving or mutating email domains.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum DomainError {
	/// The email address has no `@` separator.
	#[error("Invalid email format: {email}.")]
	InvalidEmail {
		/// Offending email address.
		email: String,
	},
	/// The domain does not look like `name.tld`.
	#[error("Invalid domain format: {domain}.")]
	InvalidDomain {
		/// Offending domain, lowercased.
		domain: String,
	},
	/// Public domains are shared by every tenant and cannot be locked.
	#[error("Cannot lock public domain: {domain}.")]
	PublicDomainLock {
		/// Public domain that was targeted.
		domain: String,
	},
}

/// Lowercased email domain such as `systech.com`.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DomainName(String);
impl DomainName {
	/// Lowercases and validates a domain.
	pub fn new(value: impl AsRef<str>) -> Result<Self, DomainError> {
		let lowered = value.as_ref().to_lowercase();

		if lowered.len() > DOMAIN_MAX_LEN || !DOMAIN_SHAPE.is_match(&lowered) {
			return Err(DomainError::InvalidDomain { domain: lowered });
		}

		Ok(Self(lowered))
	}
}
impl Deref for DomainName {
	type Target = str;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
impl AsRef<str> for DomainName {
	fn as_ref(&self) -> &str {
		&self.0
	}
}
impl From<DomainName> for String {
	fn from(value: DomainName) -> Self {
		value.0
	}
}
impl TryFrom<String> for DomainName {
	type Error = DomainError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::new(value)
	}
}
impl FromStr for DomainName {
	type Err = DomainError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::new(s)
	}
}
impl Debug for DomainName {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "Domain({})", self.0)
	}
}
impl Display for DomainName {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}
