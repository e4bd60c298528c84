//! Whole-form checks for the sign-up screen and the server-side request contract.
//!
//! The screen stops at the first problem so it can show a single banner, while the server
//! reports every violated constraint so a client can highlight all offending fields at once.

// std
use std::sync::LazyLock;
// crates.io
use regex::Regex;
// self
use crate::{
	_prelude::*,
	identity::Password,
	validate::{
		email_domain, is_email_shaped, score_password, validate_company_name, validate_email,
	},
};

/// Password length bounds enforced by the server.
pub const REQUEST_PASSWORD_LEN: (usize, usize) = (8, 100);
/// Company name length bounds enforced by the server.
pub const REQUEST_COMPANY_NAME_LEN: (usize, usize) = (2, 255);
/// Person name length bounds enforced by the server.
pub const REQUEST_PERSON_NAME_LEN: (usize, usize) = (1, 100);
/// Special characters the server's password rule accepts.
pub const REQUEST_PASSWORD_SPECIALS: &str = "@$!%*?&";

static PASSWORD_ALLOWED: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[A-Za-z0-9@$!%*?&]+$").expect("PASSWORD_ALLOWED is a valid regex pattern")
});
static PHONE: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[+]?[0-9]{10,15}$").expect("PHONE is a valid regex pattern")
});

/// First problem found by [`SignUpForm::check`].
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum FormError {
	/// Email is missing or malformed.
	#[error("{0}")]
	Email(String),
	/// Password scored below the strong threshold or failed a requirement.
	#[error("Password does not meet security requirements")]
	WeakPassword,
	/// Confirmation differs from the password.
	#[error("Passwords do not match")]
	PasswordMismatch,
	/// Company name is missing or out of bounds.
	#[error("{0}")]
	CompanyName(String),
	/// First or last name is blank.
	#[error("First name and last name are required")]
	MissingName,
}

/// State of the sign-up screen at submit time.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SignUpForm {
	/// Email typed by the user.
	pub email: String,
	/// Password typed by the user.
	pub password: Password,
	/// Password confirmation.
	pub confirm_password: Password,
	/// Company name.
	pub company_name: String,
	/// Administrator given name.
	pub first_name: String,
	/// Administrator family name.
	pub last_name: String,
	/// Optional contact phone; empty means absent.
	pub phone: String,
}
impl SignUpForm {
	/// Runs the screen's submit checks and returns the first failure.
	pub fn check(&self) -> Result<(), FormError> {
		let email = validate_email(&self.email);

		if !email.valid {
			return Err(FormError::Email(email.message.unwrap_or_default()));
		}
		if !score_password(self.password.expose()).is_strong {
			return Err(FormError::WeakPassword);
		}
		if self.password != self.confirm_password {
			return Err(FormError::PasswordMismatch);
		}

		let company = validate_company_name(&self.company_name);

		if !company.valid {
			return Err(FormError::CompanyName(company.message.unwrap_or_default()));
		}
		if self.first_name.trim().is_empty() || self.last_name.trim().is_empty() {
			return Err(FormError::MissingName);
		}

		Ok(())
	}

	/// Converts the form into the server payload, trimming text fields.
	pub fn into_request(self) -> SignUpRequest {
		let phone = self.phone.trim();

		SignUpRequest {
			email: self.email.trim().to_owned(),
			password: self.password,
			company_name: self.company_name.trim().to_owned(),
			first_name: self.first_name.trim().to_owned(),
			last_name: self.last_name.trim().to_owned(),
			phone: (!phone.is_empty()).then(|| phone.to_owned()),
		}
	}
}

/// Payload that creates a company and its first administrator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
	/// Company email; becomes the admin login.
	pub email: String,
	/// Admin password.
	pub password: Password,
	/// Company display name.
	pub company_name: String,
	/// Admin given name.
	pub first_name: String,
	/// Admin family name.
	pub last_name: String,
	/// Contact phone, digits with an optional leading `+`.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub phone: Option<String>,
}
impl SignUpRequest {
	/// Parses a JSON payload, reporting the path of the first malformed field.
	pub fn from_json(bytes: &[u8]) -> Result<Self, RequestParseError> {
		let mut deserializer = serde_json::Deserializer::from_slice(bytes);

		serde_path_to_error::deserialize(&mut deserializer).map_err(|e| RequestParseError {
			path: e.path().to_string(),
			source: e.into_inner(),
		})
	}

	/// Checks every field constraint and reports all violations.
	pub fn validate(&self) -> Result<(), SignUpValidationError> {
		let mut violations = Vec::new();
		let mut violate =
			|field: &'static str, message: &str| violations.push(FieldViolation::new(field, message));

		if self.email.trim().is_empty() {
			violate("email", "Email is required");
		} else if !is_email_shaped(&self.email) || email_domain(&self.email).is_err() {
			violate("email", "Invalid email format");
		}

		let password = self.password.expose();

		if password.trim().is_empty() {
			violate("password", "Password is required");
		} else {
			if !within(password, REQUEST_PASSWORD_LEN) {
				violate("password", "Password must be between 8 and 100 characters");
			}
			if !password_matches_policy(password) {
				violate(
					"password",
					"Password must contain at least one uppercase letter, one lowercase letter, one number, and one special character",
				);
			}
		}

		if self.company_name.trim().is_empty() {
			violate("companyName", "Company name is required");
		} else if !within(&self.company_name, REQUEST_COMPANY_NAME_LEN) {
			violate("companyName", "Company name must be between 2 and 255 characters");
		}

		for (field, value, label) in [
			("firstName", &self.first_name, "First name"),
			("lastName", &self.last_name, "Last name"),
		] {
			if value.trim().is_empty() {
				violate(field, &format!("{label} is required"));
			} else if !within(value, REQUEST_PERSON_NAME_LEN) {
				violate(field, &format!("{label} must be between 1 and 100 characters"));
			}
		}

		if let Some(phone) = &self.phone
			&& !PHONE.is_match(phone)
		{
			violate(
				"phone",
				"Invalid phone number format. Must be 10-15 digits, optionally starting with +",
			);
		}

		if violations.is_empty() { Ok(()) } else { Err(SignUpValidationError { violations }) }
	}
}

/// A single violated request constraint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
	/// JSON field name.
	pub field: String,
	/// User-facing explanation.
	pub message: String,
}
impl FieldViolation {
	fn new(field: &str, message: &str) -> Self {
		Self { field: field.to_owned(), message: message.to_owned() }
	}
}

/// Every constraint a [`SignUpRequest`] violated, in field order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
#[error("Invalid request data: {} field violation(s).", .violations.len())]
pub struct SignUpValidationError {
	/// Violations in field order.
	pub violations: Vec<FieldViolation>,
}
impl SignUpValidationError {
	/// Field name to message, keeping the first message per field.
	pub fn fields(&self) -> BTreeMap<&str, &str> {
		let mut fields = BTreeMap::new();

		for violation in &self.violations {
			fields.entry(violation.field.as_str()).or_insert(violation.message.as_str());
		}

		fields
	}
}

/// JSON payload could not be decoded into a [`SignUpRequest`].
#[derive(Debug, ThisError)]
#[error("Sign-up request is malformed at `{path}`.")]
pub struct RequestParseError {
	/// Path of the offending field, `.` for the document root.
	pub path: String,
	/// Underlying JSON failure.
	#[source]
	pub source: serde_json::Error,
}

fn within(value: &str, (min, max): (usize, usize)) -> bool {
	(min..=max).contains(&value.chars().count())
}

fn password_matches_policy(password: &str) -> bool {
	PASSWORD_ALLOWED.is_match(password)
		&& password.chars().any(|c| c.is_ascii_lowercase())
		&& password.chars().any(|c| c.is_ascii_uppercase())
		&& password.chars().any(|c| c.is_ascii_digit())
		&& password.chars().any(|c| REQUEST_PASSWORD_SPECIALS.contains(c))
}
