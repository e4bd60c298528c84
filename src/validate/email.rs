//! Shallow email syntax checks with domain typo suggestions.

// std
use std::sync::LazyLock;
// crates.io
use regex::Regex;
// self
use crate::{
	_prelude::*,
	tenant::{DomainError, DomainName},
	validate::FieldValidation,
};

/// Misspelled domains mapped to the provider the user most likely meant.
pub const DOMAIN_TYPOS: [(&str, &str); 4] = [
	("gmial.com", "gmail.com"),
	("gmai.com", "gmail.com"),
	("yahooo.com", "yahoo.com"),
	("outlok.com", "outlook.com"),
];

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("EMAIL_SHAPE is a valid regex pattern")
});

/// Validates the shape of an email address and suggests fixes for common domain typos.
///
/// This is a local-part/domain/TLD shape check, not RFC 5322 parsing. A typo suggestion never
/// blocks submission.
pub fn validate_email(email: &str) -> FieldValidation {
	if email.is_empty() {
		return FieldValidation::reject("Email is required");
	}
	if !is_email_shaped(email) {
		return FieldValidation::reject("Please enter a valid email address");
	}

	let Some((local, domain)) = email.split_once('@') else {
		return FieldValidation::ok();
	};

	match suggest_domain(domain) {
		Some(corrected) => FieldValidation::suggest(format!("Did you mean {local}@{corrected}?")),
		None => FieldValidation::ok(),
	}
}

/// Returns `true` when the input has the `local@domain.tld` shape.
pub fn is_email_shaped(email: &str) -> bool {
	EMAIL_SHAPE.is_match(email)
}

/// Looks up the corrected spelling of a mistyped domain, ignoring case.
pub fn suggest_domain(domain: &str) -> Option<&'static str> {
	let lowered = domain.to_lowercase();

	DOMAIN_TYPOS.iter().find(|(typo, _)| *typo == lowered).map(|(_, fixed)| *fixed)
}

/// Extracts the lowercased domain that follows the first `@`.
pub fn email_domain(email: &str) -> Result<DomainName, DomainError> {
	let (_, domain) =
		email.split_once('@').ok_or_else(|| DomainError::InvalidEmail { email: email.to_owned() })?;

	DomainName::new(domain)
}
