//! Email-domain locking rules for multi-tenant isolation.
//!
//! A corporate domain belongs to the first tenant that registers it, so colleagues signing up
//! later are routed to the existing company instead of creating a parallel one. Public mailbox
//! domains never lock.

// std
use std::collections::BTreeSet;
// self
use crate::{
	_prelude::*,
	directory::DomainRecord,
	obs::{self, OpKind},
	signup::DEFAULT_PUBLIC_DOMAINS,
	store::DirectoryStore,
	tenant::{DomainName, TenantId},
	validate::email_domain,
};

/// Domain registry backed by a [`DirectoryStore`].
#[derive(Clone)]
pub struct DomainRegistry {
	store: Arc<dyn DirectoryStore>,
	public: Arc<BTreeSet<DomainName>>,
}
impl DomainRegistry {
	/// Creates a registry that treats [`DEFAULT_PUBLIC_DOMAINS`] as public.
	pub fn new(store: Arc<dyn DirectoryStore>) -> Self {
		let public = DEFAULT_PUBLIC_DOMAINS.iter().filter_map(|d| DomainName::new(d).ok());

		Self { store, public: Arc::new(public.collect()) }
	}

	/// Replaces the configured public domains.
	pub fn with_public_domains(mut self, domains: impl IntoIterator<Item = DomainName>) -> Self {
		self.public = Arc::new(domains.into_iter().collect());

		self
	}

	/// Writes a public entry for every configured public domain missing from the store.
	pub async fn seed_public_domains(&self) -> Result<usize> {
		let mut seeded = 0;

		for domain in self.public.iter() {
			if self.store.domain(domain).await?.is_none() {
				self.store.save_domain(DomainRecord::public(domain.clone())).await?;

				seeded += 1;
			}
		}

		Ok(seeded)
	}

	/// Returns `true` for configured public domains and public registry entries.
	pub async fn is_public_domain(&self, domain: &DomainName) -> Result<bool> {
		if self.public.contains(domain) {
			return Ok(true);
		}

		Ok(self.store.domain(domain).await?.is_some_and(|d| d.is_public))
	}

	/// Returns `true` unless the domain is locked to some tenant.
	pub async fn is_available_for_registration(&self, domain: &DomainName) -> Result<bool> {
		if self.public.contains(domain) {
			return Ok(true);
		}

		Ok(self.store.domain(domain).await?.is_none_or(|d| d.is_available_for_registration()))
	}

	/// Locks a corporate domain to `tenant`, or confirms it is already shared or owned by it.
	pub async fn validate_and_register(&self, domain: &DomainName, tenant: &TenantId) -> Result<()> {
		obs::observe(
			OpKind::RegisterDomain,
			"validate_and_register",
			self.register_now(domain, tenant),
		)
		.await
	}

	async fn register_now(&self, domain: &DomainName, tenant: &TenantId) -> Result<()> {
		obs::info!(%domain, %tenant, "validating domain");

		if self.public.contains(domain) {
			obs::info!(%domain, "using public domain");

			return Ok(());
		}

		let Some(mut record) = self.store.domain(domain).await? else {
			obs::info!(%domain, "registering new corporate domain");

			self.store.save_domain(DomainRecord::corporate(domain.clone(), tenant.clone())).await?;

			return Ok(());
		};

		if record.is_public || record.is_locked_to_tenant(tenant) {
			return Ok(());
		}
		if record.is_locked {
			obs::warn!(%domain, "domain is locked to another tenant");

			return Err(Error::DomainLocked { domain: domain.to_string() });
		}

		obs::info!(%domain, %tenant, "locking domain to tenant");
		record.lock_to_tenant(tenant.clone())?;
		self.store.save_domain(record).await?;

		Ok(())
	}

	/// Unlocks a corporate domain; public and unknown domains are left untouched.
	pub async fn release(&self, domain: &DomainName) -> Result<()> {
		obs::observe(OpKind::ReleaseDomain, "release", async move {
			match self.store.domain(domain).await? {
				Some(mut record) if !record.is_public => {
					record.unlock();
					self.store.save_domain(record).await?;
					obs::info!(%domain, "domain released");
				},
				_ => {},
			}

			Ok(())
		})
		.await
	}

	/// Returns `true` when users with this email may join `tenant`.
	///
	/// Public domains may join any tenant; corporate domains only the tenant they are locked to.
	/// Unknown domains are rejected.
	pub async fn is_email_valid_for_tenant(&self, email: &str, tenant: &TenantId) -> Result<bool> {
		let domain = email_domain(email)?;

		if self.public.contains(&domain) {
			return Ok(true);
		}

		Ok(self
			.store
			.domain(&domain)
			.await?
			.is_some_and(|d| d.is_public || d.is_locked_to_tenant(tenant)))
	}
}
impl Debug for DomainRegistry {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("DomainRegistry").field("public", &self.public).finish()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::store::MemoryStore;

	fn registry() -> (DomainRegistry, Arc<MemoryStore>) {
		let store = Arc::new(MemoryStore::default());

		(DomainRegistry::new(store.clone()), store)
	}

	fn domain(raw: &str) -> DomainName {
		DomainName::new(raw).expect("Domain fixture should be valid.")
	}

	fn tenant(raw: &str) -> TenantId {
		TenantId::new(raw).expect("Tenant fixture should be valid.")
	}

	#[tokio::test]
	async fn first_tenant_locks_corporate_domain() {
		let (registry, _) = registry();
		let systech = domain("systech.com");

		assert!(registry.is_available_for_registration(&systech).await.expect("Lookup failed."));

		registry
			.validate_and_register(&systech, &tenant("t1"))
			.await
			.expect("First registration should lock the domain.");
		registry
			.validate_and_register(&systech, &tenant("t1"))
			.await
			.expect("Owner may register again.");

		let err = registry
			.validate_and_register(&systech, &tenant("t2"))
			.await
			.expect_err("Second tenant must be rejected.");

		assert!(matches!(err, Error::DomainLocked { ref domain } if domain == "systech.com"));
		assert!(!registry.is_available_for_registration(&systech).await.expect("Lookup failed."));
	}

	#[tokio::test]
	async fn public_domains_never_lock() {
		let (registry, store) = registry();
		let gmail = domain("gmail.com");

		registry.validate_and_register(&gmail, &tenant("t1")).await.expect("Public is shared.");
		registry.validate_and_register(&gmail, &tenant("t2")).await.expect("Public is shared.");

		assert!(registry.is_public_domain(&gmail).await.expect("Lookup failed."));
		assert_eq!(store.domain_count(), 0, "Configured public domains are not persisted.");
	}

	#[tokio::test]
	async fn release_unlocks_and_allows_new_owner() {
		let (registry, _) = registry();
		let acme = domain("acme.io");

		registry.validate_and_register(&acme, &tenant("t1")).await.expect("Lock should work.");
		registry.release(&acme).await.expect("Release should work.");
		registry.release(&domain("unknown.io")).await.expect("Unknown domains are ignored.");
		registry.validate_and_register(&acme, &tenant("t2")).await.expect("Relock should work.");

		assert!(
			registry
				.is_email_valid_for_tenant("dev@acme.io", &tenant("t2"))
				.await
				.expect("Lookup failed.")
		);
		assert!(
			!registry
				.is_email_valid_for_tenant("dev@acme.io", &tenant("t1"))
				.await
				.expect("Lookup failed.")
		);
	}

	#[tokio::test]
	async fn email_checks_cover_public_unknown_and_malformed() {
		let (registry, _) = registry();

		assert!(
			registry
				.is_email_valid_for_tenant("someone@gmail.com", &tenant("t1"))
				.await
				.expect("Lookup failed.")
		);
		assert!(
			!registry
				.is_email_valid_for_tenant("someone@nowhere.io", &tenant("t1"))
				.await
				.expect("Lookup failed.")
		);
		assert!(matches!(
			registry.is_email_valid_for_tenant("missing-at", &tenant("t1")).await,
			Err(Error::Domain(_))
		));
	}

	#[tokio::test]
	async fn seeding_persists_public_entries_once() {
		let (registry, store) = registry();
		let registry = registry.with_public_domains([domain("gmail.com"), domain("yahoo.com")]);

		assert_eq!(registry.seed_public_domains().await.expect("Seeding failed."), 2);
		assert_eq!(registry.seed_public_domains().await.expect("Seeding failed."), 0);
		assert_eq!(store.domain_count(), 2);
	}
}
