//! Shared fixtures for the integration tests.

#![allow(dead_code)]

// std
use std::sync::{
	Arc,
	atomic::{AtomicBool, AtomicUsize, Ordering},
};
// crates.io
use parking_lot::Mutex;
// self
use hrms_signup::{
	directory::{CompanyRecord, DomainRecord},
	identity::{IdentityError, IdentityFuture, IdentityProvisioner, NewIdentityUser},
	signup::SignUpService,
	store::{DirectoryStore, MemoryStore, StoreError, StoreFuture},
	tenant::{DomainName, TenantId, UserId},
	validate::SignUpRequest,
};

/// Identity provider double that records every call.
#[derive(Debug, Default)]
pub struct MockIdentity {
	pub users: Mutex<Vec<NewIdentityUser>>,
	pub verify_emails: AtomicUsize,
	pub fail_create: AtomicBool,
	pub fail_verify: AtomicBool,
}
impl MockIdentity {
	pub fn created(&self) -> Vec<NewIdentityUser> {
		self.users.lock().clone()
	}

	fn user_id(email: &str) -> UserId {
		UserId::new(format!("kc-{}", email.to_lowercase()))
			.expect("Mock user id should be a valid identifier.")
	}
}
impl IdentityProvisioner for MockIdentity {
	fn create_user(&self, user: NewIdentityUser) -> IdentityFuture<'_, UserId> {
		Box::pin(async move {
			if self.fail_create.load(Ordering::SeqCst) {
				return Err(IdentityError::Rejected {
					status: Some(500),
					message: "realm unavailable".into(),
				});
			}

			let id = Self::user_id(&user.email);

			self.users.lock().push(user);

			Ok(id)
		})
	}

	fn user_exists_by_email<'a>(&'a self, email: &'a str) -> IdentityFuture<'a, bool> {
		Box::pin(async move {
			Ok(self.users.lock().iter().any(|u| u.email.eq_ignore_ascii_case(email)))
		})
	}

	fn find_user_by_email<'a>(&'a self, email: &'a str) -> IdentityFuture<'a, UserId> {
		Box::pin(async move {
			if self.users.lock().iter().any(|u| u.email.eq_ignore_ascii_case(email)) {
				Ok(Self::user_id(email))
			} else {
				Err(IdentityError::UserNotFound { email: email.to_owned() })
			}
		})
	}

	fn send_verify_email<'a>(&'a self, _user: &'a UserId) -> IdentityFuture<'a, ()> {
		Box::pin(async move {
			if self.fail_verify.load(Ordering::SeqCst) {
				return Err(IdentityError::Unavailable { message: "smtp down".into() });
			}

			self.verify_emails.fetch_add(1, Ordering::SeqCst);

			Ok(())
		})
	}
}

/// Memory store whose company writes fail while `fail_company_writes` is set.
#[derive(Debug, Default)]
pub struct FlakyStore {
	pub inner: MemoryStore,
	pub fail_company_writes: AtomicBool,
}
impl DirectoryStore for FlakyStore {
	fn save_company(&self, record: CompanyRecord) -> StoreFuture<'_, ()> {
		if self.fail_company_writes.load(Ordering::SeqCst) {
			return Box::pin(async {
				Err(StoreError::Backend { message: "disk full".into() })
			});
		}

		self.inner.save_company(record)
	}

	fn company_by_tenant<'a>(
		&'a self,
		tenant: &'a TenantId,
	) -> StoreFuture<'a, Option<CompanyRecord>> {
		self.inner.company_by_tenant(tenant)
	}

	fn company_by_email<'a>(&'a self, email: &'a str) -> StoreFuture<'a, Option<CompanyRecord>> {
		self.inner.company_by_email(email)
	}

	fn company_by_name<'a>(&'a self, name: &'a str) -> StoreFuture<'a, Option<CompanyRecord>> {
		self.inner.company_by_name(name)
	}

	fn tenant_exists<'a>(&'a self, tenant: &'a TenantId) -> StoreFuture<'a, bool> {
		self.inner.tenant_exists(tenant)
	}

	fn save_domain(&self, record: DomainRecord) -> StoreFuture<'_, ()> {
		self.inner.save_domain(record)
	}

	fn domain<'a>(&'a self, domain: &'a DomainName) -> StoreFuture<'a, Option<DomainRecord>> {
		self.inner.domain(domain)
	}
}

pub struct Harness {
	pub service: SignUpService,
	pub store: Arc<MemoryStore>,
	pub identity: Arc<MockIdentity>,
}

pub fn harness() -> Harness {
	let store = Arc::new(MemoryStore::default());
	let identity = Arc::new(MockIdentity::default());
	let service = SignUpService::new(store.clone(), identity.clone());

	Harness { service, store, identity }
}

pub fn request(email: &str, company_name: &str) -> SignUpRequest {
	SignUpRequest {
		email: email.into(),
		password: "Xk9$mQ7zVt2!".into(),
		company_name: company_name.into(),
		first_name: "Ada".into(),
		last_name: "Lovelace".into(),
		phone: Some("+919876543210".into()),
	}
}
