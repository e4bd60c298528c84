//! Email-domain registry entries.
//!
//! Public domains (gmail.com, yahoo.com) are shared by any number of tenants. Corporate domains
//! are locked to the tenant that registered them first.

// self
use crate::{
	_prelude::*,
	tenant::{DomainError, DomainName, TenantId},
};

/// Registry entry for one email domain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainRecord {
	/// Lowercased domain; primary key.
	pub domain: DomainName,
	/// Shared mailbox provider; never locked.
	pub is_public: bool,
	/// Reserved for `registered_tenant`.
	pub is_locked: bool,
	/// Owning tenant of a locked corporate domain.
	pub registered_tenant: Option<TenantId>,
	/// Creation instant.
	pub created_at: OffsetDateTime,
	/// Last mutation instant.
	pub updated_at: OffsetDateTime,
}
impl DomainRecord {
	/// Builds a public-domain entry.
	pub fn public(domain: DomainName) -> Self {
		Self::with_flags(domain, true, None)
	}

	/// Builds a corporate entry locked to `tenant`.
	pub fn corporate(domain: DomainName, tenant: TenantId) -> Self {
		Self::with_flags(domain, false, Some(tenant))
	}

	fn with_flags(domain: DomainName, is_public: bool, tenant: Option<TenantId>) -> Self {
		let now = OffsetDateTime::now_utc();

		Self {
			domain,
			is_public,
			is_locked: tenant.is_some(),
			registered_tenant: tenant,
			created_at: now,
			updated_at: now,
		}
	}

	/// Public, or corporate with no owner.
	pub fn is_available_for_registration(&self) -> bool {
		self.is_public || (!self.is_locked && self.registered_tenant.is_none())
	}

	/// Returns `true` when the domain is locked to exactly this tenant.
	pub fn is_locked_to_tenant(&self, tenant: &TenantId) -> bool {
		self.is_locked && self.registered_tenant.as_ref() == Some(tenant)
	}

	/// Reserves the domain for a tenant.
	pub fn lock_to_tenant(&mut self, tenant: TenantId) -> Result<(), DomainError> {
		if self.is_public {
			return Err(DomainError::PublicDomainLock { domain: self.domain.to_string() });
		}

		self.is_locked = true;
		self.registered_tenant = Some(tenant);
		self.updated_at = OffsetDateTime::now_utc();

		Ok(())
	}

	/// Releases the domain from its tenant.
	pub fn unlock(&mut self) {
		self.is_locked = false;
		self.registered_tenant = None;
		self.updated_at = OffsetDateTime::now_utc();
	}
}
