//! Thread-safe in-memory [`DirectoryStore`] implementation for local development and tests.

// self
use crate::{
	_prelude::*,
	directory::{CompanyRecord, DomainRecord},
	store::{DirectoryStore, DirectoryTables, StoreFuture},
	tenant::{DomainName, TenantId},
};

type Tables = Arc<RwLock<DirectoryTables>>;

/// Thread-safe storage backend that keeps records in-process for tests and demos.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore(Tables);
impl MemoryStore {
	/// Number of stored companies.
	pub fn company_count(&self) -> usize {
		self.0.read().companies.len()
	}

	/// Number of stored domain entries.
	pub fn domain_count(&self) -> usize {
		self.0.read().domains.len()
	}
}
impl DirectoryStore for MemoryStore {
	fn save_company(&self, record: CompanyRecord) -> StoreFuture<'_, ()> {
		let tables = self.0.clone();

		Box::pin(async move {
			tables.write().insert_company(record);

			Ok(())
		})
	}

	fn company_by_tenant<'a>(
		&'a self,
		tenant: &'a TenantId,
	) -> StoreFuture<'a, Option<CompanyRecord>> {
		Box::pin(async move { Ok(self.0.read().company_by_tenant(tenant)) })
	}

	fn company_by_email<'a>(&'a self, email: &'a str) -> StoreFuture<'a, Option<CompanyRecord>> {
		Box::pin(async move { Ok(self.0.read().company_by_email(email)) })
	}

	fn company_by_name<'a>(&'a self, name: &'a str) -> StoreFuture<'a, Option<CompanyRecord>> {
		Box::pin(async move { Ok(self.0.read().company_by_name(name)) })
	}

	fn tenant_exists<'a>(&'a self, tenant: &'a TenantId) -> StoreFuture<'a, bool> {
		Box::pin(async move { Ok(self.0.read().tenant_exists(tenant)) })
	}

	fn save_domain(&self, record: DomainRecord) -> StoreFuture<'_, ()> {
		let tables = self.0.clone();

		Box::pin(async move {
			tables.write().insert_domain(record);

			Ok(())
		})
	}

	fn domain<'a>(&'a self, domain: &'a DomainName) -> StoreFuture<'a, Option<DomainRecord>> {
		Box::pin(async move { Ok(self.0.read().domain(domain)) })
	}
}
