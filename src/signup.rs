//! Company onboarding: uniqueness checks, tenant allocation, domain locking, and administrator
//! provisioning.

pub mod registry;
pub mod response;

mod create;

pub use registry::*;
pub use response::*;

// self
use crate::{
	_prelude::*,
	error::ConfigError,
	identity::{COMPANY_ADMIN_ROLE, IdentityProvisioner},
	store::DirectoryStore,
	tenant::{DomainName, TenantIdConfig, TenantIdGenerator},
};

/// Mailbox providers shared by many companies unless configured otherwise.
pub const DEFAULT_PUBLIC_DOMAINS: [&str; 6] =
	["gmail.com", "yahoo.com", "outlook.com", "hotmail.com", "icloud.com", "proton.me"];

/// Tunables for [`SignUpService`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignUpConfig {
	/// Shape of generated tenant ids.
	pub tenant_id: TenantIdConfig,
	/// Ids drawn before giving up on collisions.
	pub max_tenant_id_attempts: usize,
	/// Lock corporate email domains to the registering tenant.
	pub enforce_domain_lock: bool,
	/// Domains treated as public even without a registry entry.
	pub public_domains: Vec<String>,
	/// Role granted to the first administrator.
	pub admin_role: String,
}
impl Default for SignUpConfig {
	fn default() -> Self {
		Self {
			tenant_id: TenantIdConfig::default(),
			max_tenant_id_attempts: 5,
			enforce_domain_lock: true,
			public_domains: DEFAULT_PUBLIC_DOMAINS.iter().map(|d| (*d).to_owned()).collect(),
			admin_role: COMPANY_ADMIN_ROLE.into(),
		}
	}
}

/// Creates companies and their first administrator.
///
/// Sign-ups are serialized through an async mutex so the email, company-name, tenant-id, and
/// domain checks observe each other's writes. The identity provider is only reached through
/// [`IdentityProvisioner`].
#[derive(Clone)]
pub struct SignUpService {
	/// Directory holding companies and domains.
	pub store: Arc<dyn DirectoryStore>,
	/// Identity provider seam.
	pub identity: Arc<dyn IdentityProvisioner>,
	/// Domain locking rules over the same store.
	pub domains: DomainRegistry,
	tenant_ids: TenantIdGenerator,
	config: SignUpConfig,
	guard: Arc<AsyncMutex<()>>,
}
impl SignUpService {
	/// Builds a service with the default configuration.
	pub fn new(store: Arc<dyn DirectoryStore>, identity: Arc<dyn IdentityProvisioner>) -> Self {
		Self {
			domains: DomainRegistry::new(store.clone()),
			store,
			identity,
			tenant_ids: TenantIdGenerator::default(),
			config: SignUpConfig::default(),
			guard: Default::default(),
		}
	}

	/// Builds a service after validating the provided configuration.
	pub fn with_config(
		store: Arc<dyn DirectoryStore>,
		identity: Arc<dyn IdentityProvisioner>,
		config: SignUpConfig,
	) -> Result<Self, ConfigError> {
		if config.max_tenant_id_attempts == 0 {
			return Err(ConfigError::ZeroTenantIdAttempts);
		}

		let tenant_ids = TenantIdGenerator::new(config.tenant_id.clone())?;
		let public = config
			.public_domains
			.iter()
			.map(DomainName::new)
			.collect::<Result<Vec<_>, _>>()
			.map_err(ConfigError::InvalidPublicDomain)?;

		Ok(Self {
			domains: DomainRegistry::new(store.clone()).with_public_domains(public),
			store,
			identity,
			tenant_ids,
			config,
			guard: Default::default(),
		})
	}

	/// Active configuration.
	pub fn config(&self) -> &SignUpConfig {
		&self.config
	}

	/// Returns `true` when a company already uses the email.
	pub async fn email_exists(&self, email: &str) -> Result<bool> {
		Ok(self.store.company_by_email(email).await?.is_some())
	}

	/// Returns `true` when a company already uses the name, ignoring case.
	pub async fn company_name_exists(&self, company_name: &str) -> Result<bool> {
		Ok(self.store.company_by_name(company_name).await?.is_some())
	}
}
impl Debug for SignUpService {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("SignUpService")
			.field("tenant_ids", &self.tenant_ids)
			.field("config", &self.config)
			.finish()
	}
}
