//! Storage contracts and built-in directory store implementations.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

// self
use crate::{
	_prelude::*,
	directory::{CompanyRecord, DomainRecord},
	tenant::{DomainName, TenantId},
};

/// Boxed future returned by [`DirectoryStore`] methods.
pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, StoreError>> + 'a + Send>>;

/// Persistence contract for company and domain records.
pub trait DirectoryStore
where
	Self: Send + Sync,
{
	/// Inserts or replaces a company keyed by its tenant id.
	fn save_company(&self, record: CompanyRecord) -> StoreFuture<'_, ()>;

	/// Fetches the company owning a tenant id.
	fn company_by_tenant<'a>(
		&'a self,
		tenant: &'a TenantId,
	) -> StoreFuture<'a, Option<CompanyRecord>>;

	/// Fetches the company registered with an email, ignoring case.
	fn company_by_email<'a>(&'a self, email: &'a str) -> StoreFuture<'a, Option<CompanyRecord>>;

	/// Fetches the company with a name, ignoring case.
	fn company_by_name<'a>(&'a self, name: &'a str) -> StoreFuture<'a, Option<CompanyRecord>>;

	/// Returns `true` when a company already uses the tenant id.
	fn tenant_exists<'a>(&'a self, tenant: &'a TenantId) -> StoreFuture<'a, bool>;

	/// Inserts or replaces a domain entry.
	fn save_domain(&self, record: DomainRecord) -> StoreFuture<'_, ()>;

	/// Fetches a domain entry.
	fn domain<'a>(&'a self, domain: &'a DomainName) -> StoreFuture<'a, Option<DomainRecord>>;
}

/// Error type produced by [`DirectoryStore`] implementations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum StoreError {
	/// Serialization failures surfaced by the backend.
	#[error("Serialization error: {message}.")]
	Serialization {
		/// Human-readable error payload.
		message: String,
	},
	/// Backend-level failure for the storage engine.
	#[error("Backend failure: {message}.")]
	Backend {
		/// Human-readable error payload.
		message: String,
	},
}

// In-process tables shared by the bundled stores.
#[derive(Clone, Debug, Default)]
pub(crate) struct DirectoryTables {
	companies: HashMap<TenantId, CompanyRecord>,
	domains: HashMap<DomainName, DomainRecord>,
}
impl DirectoryTables {
	fn insert_company(&mut self, record: CompanyRecord) {
		self.companies.insert(record.tenant_id.clone(), record);
	}

	fn company_by_tenant(&self, tenant: &TenantId) -> Option<CompanyRecord> {
		self.companies.get(tenant).cloned()
	}

	fn company_by_email(&self, email: &str) -> Option<CompanyRecord> {
		let email = email.to_lowercase();

		self.companies.values().find(|c| c.email.to_lowercase() == email).cloned()
	}

	fn company_by_name(&self, name: &str) -> Option<CompanyRecord> {
		let name = name.to_lowercase();

		self.companies.values().find(|c| c.company_name.to_lowercase() == name).cloned()
	}

	fn tenant_exists(&self, tenant: &TenantId) -> bool {
		self.companies.contains_key(tenant)
	}

	fn insert_domain(&mut self, record: DomainRecord) {
		self.domains.insert(record.domain.clone(), record);
	}

	fn domain(&self, domain: &DomainName) -> Option<DomainRecord> {
		self.domains.get(domain).cloned()
	}
}

// On-disk shape: plain record lists sorted by key so snapshots diff cleanly.
#[derive(Serialize, Deserialize)]
pub(crate) struct DirectorySnapshot {
	#[serde(default)]
	companies: Vec<CompanyRecord>,
	#[serde(default)]
	domains: Vec<DomainRecord>,
}
impl From<DirectorySnapshot> for DirectoryTables {
	fn from(snapshot: DirectorySnapshot) -> Self {
		let mut tables = Self::default();

		snapshot.companies.into_iter().for_each(|c| tables.insert_company(c));
		snapshot.domains.into_iter().for_each(|d| tables.insert_domain(d));

		tables
	}
}
impl From<DirectoryTables> for DirectorySnapshot {
	fn from(tables: DirectoryTables) -> Self {
		let mut companies = tables.companies.into_values().collect::<Vec<_>>();
		let mut domains = tables.domains.into_values().collect::<Vec<_>>();

		companies.sort_by(|a, b| a.tenant_id.cmp(&b.tenant_id));
		domains.sort_by(|a, b| a.domain.cmp(&b.domain));

		Self { companies, domains }
	}
}
