//! Sign-up outcome payload returned to the sign-up screen.

// self
use crate::{
	_prelude::*,
	tenant::{TenantId, UserId},
};

const CREATED_MESSAGE: &str =
	"Account created successfully. Please verify your email to continue.";
const IDENTITY_UNAVAILABLE_MESSAGE: &str =
	"Authentication service temporarily unavailable. Please try again later.";
const UNEXPECTED_MESSAGE: &str = "An unexpected error occurred. Please try again later.";

/// Result of a sign-up attempt as seen by the client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpResponse {
	/// Whether the company was created.
	pub success: bool,
	/// User-facing summary.
	pub message: String,
	/// Allocated tenant id, on success.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub tenant_id: Option<TenantId>,
	/// Identity provider user id, on success.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub user_id: Option<UserId>,
	/// Whether the client should route to the email verification screen.
	pub requires_email_verification: bool,
}
impl SignUpResponse {
	/// Successful sign-up awaiting email verification.
	pub fn success(tenant_id: TenantId, user_id: UserId) -> Self {
		Self {
			success: true,
			message: CREATED_MESSAGE.into(),
			tenant_id: Some(tenant_id),
			user_id: Some(user_id),
			requires_email_verification: true,
		}
	}

	/// Failed sign-up with a user-facing message.
	pub fn error(message: impl Into<String>) -> Self {
		Self {
			success: false,
			message: message.into(),
			tenant_id: None,
			user_id: None,
			requires_email_verification: false,
		}
	}

	/// Maps an error to the message shown to the user, hiding infrastructure details.
	pub fn from_error(error: &Error) -> Self {
		match error {
			Error::Identity(_) => Self::error(IDENTITY_UNAVAILABLE_MESSAGE),
			Error::Storage(_) | Error::Config(_) | Error::TenantIdExhausted { .. } =>
				Self::error(UNEXPECTED_MESSAGE),
			Error::Validation(_) | Error::Parse(_) => Self::error("Invalid request data"),
			other => Self::error(other.to_string()),
		}
	}
}
impl From<Result<SignUpResponse>> for SignUpResponse {
	fn from(result: Result<SignUpResponse>) -> Self {
		result.unwrap_or_else(|e| Self::from_error(&e))
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::{identity::IdentityError, store::StoreError};

	#[test]
	fn success_requires_verification() {
		let response = SignUpResponse::success(
			TenantId::new("a3b9c8d2e1f4").expect("Tenant fixture should be valid."),
			UserId::new("7f3c").expect("User fixture should be valid."),
		);
		let payload = serde_json::to_value(&response).expect("Response should serialize.");

		assert_eq!(payload["tenantId"], "a3b9c8d2e1f4");
		assert_eq!(payload["requiresEmailVerification"], true);
		assert_eq!(response.message, CREATED_MESSAGE);
	}

	#[test]
	fn errors_hide_infrastructure_details() {
		let identity = Error::Identity(IdentityError::Unavailable { message: "503".into() });
		let storage = Error::Storage(StoreError::Backend { message: "disk full".into() });
		let conflict = Error::EmailAlreadyExists { email: "a@b.io".into() };

		assert_eq!(SignUpResponse::from_error(&identity).message, IDENTITY_UNAVAILABLE_MESSAGE);
		assert_eq!(SignUpResponse::from_error(&storage).message, UNEXPECTED_MESSAGE);
		assert_eq!(
			SignUpResponse::from_error(&conflict).message,
			"Email address already exists: a@b.io."
		);

		let payload = serde_json::to_value(SignUpResponse::from_error(&conflict))
			.expect("Response should serialize.");

		assert!(payload.get("tenantId").is_none());
		assert_eq!(payload["success"], false);
	}
}
