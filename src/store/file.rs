//! Simple file-backed [`DirectoryStore`] for single-node deployments.

// std
use std::{
	fs::{self, File},
	io::Write,
	path::{Path, PathBuf},
};
// self
use crate::{
	_prelude::*,
	directory::{CompanyRecord, DomainRecord},
	store::{DirectorySnapshot, DirectoryStore, DirectoryTables, StoreError, StoreFuture},
	tenant::{DomainName, TenantId},
};

/// Persists the directory to a JSON file after each mutation.
#[derive(Clone, Debug)]
pub struct FileStore {
	path: PathBuf,
	inner: Arc<RwLock<DirectoryTables>>,
}
impl FileStore {
	/// Opens (or creates) a store at the provided path, eagerly loading existing data.
	pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
		let path = path.into();

		Self::ensure_parent_exists(&path)?;

		let tables = Self::load_snapshot(&path)?;

		Ok(Self { path, inner: Arc::new(RwLock::new(tables)) })
	}

	/// Location of the JSON snapshot.
	pub fn path(&self) -> &Path {
		&self.path
	}

	fn load_snapshot(path: &Path) -> Result<DirectoryTables, StoreError> {
		if !path.exists() {
			return Ok(DirectoryTables::default());
		}

		let bytes = fs::read(path).map_err(|e| StoreError::Backend {
			message: format!("Failed to read {}: {e}", path.display()),
		})?;

		if bytes.is_empty() {
			return Ok(DirectoryTables::default());
		}

		let mut deserializer = serde_json::Deserializer::from_slice(&bytes);
		let snapshot: DirectorySnapshot = serde_path_to_error::deserialize(&mut deserializer)
			.map_err(|e| StoreError::Serialization {
				message: format!("Failed to parse {} at `{}`: {}", path.display(), e.path(), e.inner()),
			})?;

		Ok(snapshot.into())
	}

	fn ensure_parent_exists(path: &Path) -> Result<(), StoreError> {
		if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
			fs::create_dir_all(parent).map_err(|e| StoreError::Backend {
				message: format!("Failed to create store directory {}: {e}", parent.display()),
			})?;
		}

		Ok(())
	}

	fn persist_locked(&self, contents: &DirectoryTables) -> Result<(), StoreError> {
		Self::ensure_parent_exists(&self.path)?;

		let snapshot = DirectorySnapshot::from(contents.clone());
		let serialized =
			serde_json::to_vec_pretty(&snapshot).map_err(|e| StoreError::Serialization {
				message: format!("Failed to serialize directory snapshot: {e}"),
			})?;
		let mut tmp_path = self.path.clone();

		tmp_path.set_extension("tmp");

		{
			let mut file = File::create(&tmp_path).map_err(|e| StoreError::Backend {
				message: format!("Failed to create {}: {e}", tmp_path.display()),
			})?;

			file.write_all(&serialized).map_err(|e| StoreError::Backend {
				message: format!("Failed to write {}: {e}", tmp_path.display()),
			})?;
			file.sync_all().map_err(|e| StoreError::Backend {
				message: format!("Failed to sync {}: {e}", tmp_path.display()),
			})?;
		}

		fs::rename(&tmp_path, &self.path).map_err(|e| StoreError::Backend {
			message: format!("Failed to replace {}: {e}", self.path.display()),
		})
	}
}
impl DirectoryStore for FileStore {
	fn save_company(&self, record: CompanyRecord) -> StoreFuture<'_, ()> {
		Box::pin(async move {
			let mut guard = self.inner.write();

			guard.insert_company(record);
			self.persist_locked(&guard)
		})
	}

	fn company_by_tenant<'a>(
		&'a self,
		tenant: &'a TenantId,
	) -> StoreFuture<'a, Option<CompanyRecord>> {
		Box::pin(async move { Ok(self.inner.read().company_by_tenant(tenant)) })
	}

	fn company_by_email<'a>(&'a self, email: &'a str) -> StoreFuture<'a, Option<CompanyRecord>> {
		Box::pin(async move { Ok(self.inner.read().company_by_email(email)) })
	}

	fn company_by_name<'a>(&'a self, name: &'a str) -> StoreFuture<'a, Option<CompanyRecord>> {
		Box::pin(async move { Ok(self.inner.read().company_by_name(name)) })
	}

	fn tenant_exists<'a>(&'a self, tenant: &'a TenantId) -> StoreFuture<'a, bool> {
		Box::pin(async move { Ok(self.inner.read().tenant_exists(tenant)) })
	}

	fn save_domain(&self, record: DomainRecord) -> StoreFuture<'_, ()> {
		Box::pin(async move {
			let mut guard = self.inner.write();

			guard.insert_domain(record);
			self.persist_locked(&guard)
		})
	}

	fn domain<'a>(&'a self, domain: &'a DomainName) -> StoreFuture<'a, Option<DomainRecord>> {
		Box::pin(async move { Ok(self.inner.read().domain(domain)) })
	}
}
