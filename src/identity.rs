//! Identity provider seam used to provision sign-up administrators.
//!
//! The provider's protocol and client library live outside this crate; sign-up only needs the
//! handful of admin operations below. Implementations typically wrap an admin REST client.

pub mod secret;

pub use secret::Password;

// self
use crate::{
	_prelude::*,
	tenant::{TenantId, UserId},
};

/// Boxed future returned by [`IdentityProvisioner`] methods.
pub type IdentityFuture<'a, T> =
	Pin<Box<dyn Future<Output = Result<T, IdentityError>> + 'a + Send>>;

/// Role granted to the first user of every company.
pub const COMPANY_ADMIN_ROLE: &str = "company_admin";

/// Errors surfaced by identity provider implementations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum IdentityError {
	/// The provider refused to create the user.
	#[error("Identity provider rejected the user (status {status:?}): {message}.")]
	Rejected {
		/// HTTP status code, when available.
		status: Option<u16>,
		/// Provider-supplied reason.
		message: String,
	},
	/// No user exists for the email.
	#[error("No identity user found for {email}.")]
	UserNotFound {
		/// Email that was looked up.
		email: String,
	},
	/// The provider could not be reached or failed internally.
	#[error("Identity provider unavailable: {message}.")]
	Unavailable {
		/// Transport or provider message.
		message: String,
	},
}

/// Attributes of the administrator created during sign-up.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIdentityUser {
	/// Login email; also the username.
	pub email: String,
	/// Initial password.
	pub password: Password,
	/// Given name.
	pub first_name: String,
	/// Family name.
	pub last_name: String,
	/// Tenant stored as a user attribute so issued tokens carry it.
	pub tenant_id: TenantId,
	/// Realm role to assign.
	pub role: String,
	/// Company display name stored as a user attribute.
	pub company_name: String,
}

/// Admin operations sign-up needs from the identity provider.
pub trait IdentityProvisioner
where
	Self: Send + Sync,
{
	/// Creates a user and returns the provider-assigned id.
	fn create_user(&self, user: NewIdentityUser) -> IdentityFuture<'_, UserId>;

	/// Returns `true` when a user with the email already exists.
	fn user_exists_by_email<'a>(&'a self, email: &'a str) -> IdentityFuture<'a, bool>;

	/// Resolves the provider id for an email.
	fn find_user_by_email<'a>(&'a self, email: &'a str) -> IdentityFuture<'a, UserId>;

	/// Triggers the provider's verify-email message for a user.
	fn send_verify_email<'a>(&'a self, user: &'a UserId) -> IdentityFuture<'a, ()>;
}
