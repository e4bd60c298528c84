//! Company name checks for the sign-up form.

// std
use std::sync::LazyLock;
// crates.io
use regex::Regex;
// self
use crate::validate::FieldValidation;

/// Minimum company name length, in characters.
pub const COMPANY_NAME_MIN_LEN: usize = 2;
/// Maximum company name length accepted by the form, in characters.
pub const COMPANY_NAME_MAX_LEN: usize = 100;

// Names at or beyond this length are not flagged as placeholders.
const PLACEHOLDER_NAME_LEN: usize = 10;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new("(?i)test|demo|sample|example").expect("PLACEHOLDER is a valid regex pattern")
});

/// Validates a free-text company name.
///
/// Short names that look like placeholders ("Test Co", "Demo") stay valid but carry a
/// confirmation prompt.
pub fn validate_company_name(name: &str) -> FieldValidation {
	if name.is_empty() {
		return FieldValidation::reject("Company name is required");
	}

	let length = name.chars().count();

	if length < COMPANY_NAME_MIN_LEN {
		return FieldValidation::reject("Company name must be at least 2 characters");
	}
	if length > COMPANY_NAME_MAX_LEN {
		return FieldValidation::reject("Company name is too long (max 100 characters)");
	}
	if length < PLACEHOLDER_NAME_LEN && PLACEHOLDER.is_match(name) {
		return FieldValidation::suggest("This looks like a test company name. Is this correct?");
	}

	FieldValidation::ok()
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn length_bounds() {
		assert_eq!(validate_company_name(""), FieldValidation::reject("Company name is required"));
		assert!(!validate_company_name("A").valid);
		assert!(validate_company_name("AB").valid);
		assert!(validate_company_name(&"x".repeat(COMPANY_NAME_MAX_LEN)).valid);
		assert_eq!(
			validate_company_name(&"x".repeat(COMPANY_NAME_MAX_LEN + 1)),
			FieldValidation::reject("Company name is too long (max 100 characters)")
		);
	}

	#[test]
	fn short_placeholder_names_get_a_prompt() {
		let result = validate_company_name("Test Co");

		assert!(result.valid);
		assert!(result.has_suggestion());
		assert!(validate_company_name("DEMO").has_suggestion());
	}

	#[test]
	fn long_names_are_never_flagged() {
		assert_eq!(validate_company_name("Example Holdings"), FieldValidation::ok());
		assert_eq!(validate_company_name("Acme Corporation International"), FieldValidation::ok());
	}
}
