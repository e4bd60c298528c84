//! Company (tenant) master records and their lifecycle.

// self
use crate::{_prelude::*, tenant::TenantId, validate::SignUpRequest};

/// Account lifecycle of a company.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CompanyStatus {
	/// Record created, administrator not yet provisioned.
	#[default]
	PendingActivation,
	/// Administrator provisioned, waiting for the email link.
	PendingEmailVerification,
	/// Identity provider provisioning failed and needs operator follow-up.
	PendingIdentitySetup,
	/// Company can use the product.
	Active,
	/// Access temporarily revoked.
	Suspended,
	/// Company closed.
	Inactive,
}
impl CompanyStatus {
	/// Returns a stable label suitable for logs and storage.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::PendingActivation => "PENDING_ACTIVATION",
			Self::PendingEmailVerification => "PENDING_EMAIL_VERIFICATION",
			Self::PendingIdentitySetup => "PENDING_IDENTITY_SETUP",
			Self::Active => "ACTIVE",
			Self::Suspended => "SUSPENDED",
			Self::Inactive => "INACTIVE",
		}
	}
}
impl Display for CompanyStatus {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Billing tier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubscriptionPlan {
	/// Trial tier every new company starts on.
	#[default]
	Free,
	/// Entry paid tier.
	Basic,
	/// Mid paid tier.
	Professional,
	/// Top paid tier.
	Enterprise,
}

/// Master record of a company, keyed by its tenant id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRecord {
	/// Tenant id; primary key.
	pub tenant_id: TenantId,
	/// Display name, unique case-insensitively.
	pub company_name: String,
	/// Primary email, unique across the platform.
	pub email: String,
	/// Contact phone.
	pub phone: Option<String>,
	/// Lifecycle status.
	pub status: CompanyStatus,
	/// Billing tier.
	pub subscription_plan: SubscriptionPlan,
	/// Email of whoever created the record.
	pub created_by: String,
	/// Creation instant.
	pub created_at: OffsetDateTime,
	/// Last mutation instant.
	pub updated_at: OffsetDateTime,
}
impl CompanyRecord {
	/// Builds a fresh record for a sign-up request.
	pub fn new(tenant_id: TenantId, request: &SignUpRequest) -> Self {
		let now = OffsetDateTime::now_utc();

		Self {
			tenant_id,
			company_name: request.company_name.clone(),
			email: request.email.clone(),
			phone: request.phone.clone(),
			status: CompanyStatus::default(),
			subscription_plan: SubscriptionPlan::default(),
			created_by: request.email.clone(),
			created_at: now,
			updated_at: now,
		}
	}

	/// Moves the record to a new status.
	pub fn set_status(&mut self, status: CompanyStatus) {
		self.status = status;
		self.updated_at = OffsetDateTime::now_utc();
	}

	/// Marks the company active.
	pub fn activate(&mut self) {
		self.set_status(CompanyStatus::Active);
	}

	/// Suspends the company.
	pub fn suspend(&mut self) {
		self.set_status(CompanyStatus::Suspended);
	}

	/// Returns `true` when the company can use the product.
	pub fn is_active(&self) -> bool {
		self.status == CompanyStatus::Active
	}

	/// Returns `true` while the administrator has not confirmed their email.
	pub fn is_pending_email_verification(&self) -> bool {
		self.status == CompanyStatus::PendingEmailVerification
	}
}
