//! Crate-level error types shared by the directory, the domain registry, and sign-up.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical error exposed by the onboarding APIs.
///
/// The field validators never fail; these variants only come from the stateful layers.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Storage-layer failure.
	#[error("{0}")]
	Storage(
		#[from]
		#[source]
		crate::store::StoreError,
	),
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Identity provider call failed.
	#[error("Identity provider call failed.")]
	Identity(
		#[from]
		#[source]
		crate::identity::IdentityError,
	),
	/// A stored or supplied identifier is malformed.
	#[error(transparent)]
	Identifier(#[from] crate::tenant::IdentifierError),
	/// An email domain is malformed or cannot be locked.
	#[error(transparent)]
	Domain(#[from] crate::tenant::DomainError),
	/// The sign-up request violates one or more field constraints.
	#[error(transparent)]
	Validation(#[from] crate::validate::SignUpValidationError),
	/// The sign-up payload is not valid JSON for a request.
	#[error(transparent)]
	Parse(#[from] crate::validate::RequestParseError),

	/// The email is already registered, locally or at the identity provider.
	#[error("Email address already exists: {email}.")]
	EmailAlreadyExists {
		/// Email that was submitted.
		email: String,
	},
	/// Another company already uses this name (case-insensitive).
	#[error(
		"Company '{company_name}' already exists. Please contact the company administrator at {admin_email} to join the organization."
	)]
	CompanyNameAlreadyExists {
		/// Company name that was submitted.
		company_name: String,
		/// Admin email of the existing company.
		admin_email: String,
	},
	/// The corporate domain belongs to another tenant.
	#[error("Domain {domain} is already registered to another company.")]
	DomainLocked {
		/// Locked domain.
		domain: String,
	},
	/// Every generated tenant id collided with an existing one.
	#[error("Failed to generate unique tenant ID after {attempts} attempts.")]
	TenantIdExhausted {
		/// Number of ids drawn.
		attempts: usize,
	},
	/// No company is registered for the email.
	#[error("Email not found: {email}.")]
	EmailNotFound {
		/// Email that was looked up.
		email: String,
	},
}

/// Configuration failures raised while building generators and services.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum ConfigError {
	/// Tenant id length is zero or wider than the tenant column.
	#[error("Tenant id size {size} must be between 1 and {max}.")]
	InvalidTenantIdSize {
		/// Requested size.
		size: usize,
		/// Largest supported size.
		max: usize,
	},
	/// Tenant id alphabet is too small, repeats characters, or contains whitespace.
	#[error("Tenant id alphabet `{alphabet}` needs at least two distinct non-whitespace characters.")]
	InvalidTenantIdAlphabet {
		/// Rejected alphabet.
		alphabet: String,
	},
	/// Collision retry budget must allow at least one attempt.
	#[error("The tenant id attempt budget must be at least 1.")]
	ZeroTenantIdAttempts,
	/// A configured public domain is malformed.
	#[error("Public domain list contains an invalid entry.")]
	InvalidPublicDomain(#[source] crate::tenant::DomainError),
}

#[cfg(test)]
mod tests {
	// std
	use std::error::Error as StdError;
	// self
	use super::*;
	use crate::{identity::IdentityError, store::StoreError};

	#[test]
	fn store_error_converts_with_source() {
		let store_error = StoreError::Backend { message: "database unreachable".into() };
		let error: Error = store_error.clone().into();

		assert!(matches!(error, Error::Storage(_)));
		assert!(error.to_string().contains("database unreachable"));

		let source = StdError::source(&error)
			.expect("Error should expose the original store error as its source.");

		assert_eq!(source.to_string(), store_error.to_string());
	}

	#[test]
	fn identity_error_is_chained() {
		let error: Error = IdentityError::Unavailable { message: "timeout".into() }.into();

		assert_eq!(error.to_string(), "Identity provider call failed.");
		assert!(
			StdError::source(&error).is_some_and(|s| s.to_string().contains("timeout")),
			"Identity failures must keep their cause."
		);
	}

	#[test]
	fn company_conflict_names_the_admin() {
		let error = Error::CompanyNameAlreadyExists {
			company_name: "Acme".into(),
			admin_email: "owner@acme.io".into(),
		};

		assert_eq!(
			error.to_string(),
			"Company 'Acme' already exists. Please contact the company administrator at owner@acme.io to join the organization."
		);
	}
}
