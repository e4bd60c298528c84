//! Customer creation and verification resend.
//!
//! [`SignUpService::create_customer`] runs the whole onboarding sequence under the service
//! mutex: request validation, email and company-name uniqueness (locally and at the identity
//! provider), tenant id allocation with collision retries, corporate domain locking, company
//! creation, and administrator provisioning. A company that cannot be saved releases the domain
//! it just locked. A provisioning failure leaves the company in
//! [`CompanyStatus::PendingIdentitySetup`] for operator follow-up; a failed verification email
//! does not fail the sign-up because the user can request a resend.

// self
use crate::{
	_prelude::*,
	directory::{CompanyRecord, CompanyStatus},
	identity::NewIdentityUser,
	obs::{self, OpKind},
	signup::{SignUpResponse, SignUpService},
	tenant::{DomainName, TenantId},
	validate::{SignUpRequest, email_domain},
};

impl SignUpService {
	/// Creates a company and its administrator.
	pub async fn create_customer(&self, request: SignUpRequest) -> Result<SignUpResponse> {
		obs::observe(OpKind::CreateCustomer, "create_customer", async move {
			let _serialized = self.guard.lock().await;

			self.create_now(request).await
		})
		.await
	}

	async fn create_now(&self, request: SignUpRequest) -> Result<SignUpResponse> {
		obs::info!(email = %request.email, "starting customer creation");

		request.validate()?;
		self.ensure_unique(&request).await?;

		let tenant_id = self.allocate_tenant_id().await?;

		obs::info!(%tenant_id, "allocated tenant id");

		let locked = if self.config.enforce_domain_lock {
			let domain = email_domain(&request.email)?;

			self.domains.validate_and_register(&domain, &tenant_id).await?;

			Some(domain)
		} else {
			None
		};
		let mut company = CompanyRecord::new(tenant_id.clone(), &request);

		if let Err(e) = self.store.save_company(company.clone()).await {
			obs::warn!(%tenant_id, error = %e, "failed to save company");

			if let Some(domain) = &locked {
				self.release_unsaved(domain).await;
			}

			return Err(e.into());
		}

		obs::info!(company = %company.company_name, %tenant_id, "company created");

		let user = NewIdentityUser {
			email: request.email.clone(),
			password: request.password,
			first_name: request.first_name,
			last_name: request.last_name,
			tenant_id: tenant_id.clone(),
			role: self.config.admin_role.clone(),
			company_name: company.company_name.clone(),
		};
		let user_id = match self.identity.create_user(user).await {
			Ok(user_id) => user_id,
			Err(e) => {
				obs::warn!(%tenant_id, error = %e, "identity user creation failed");
				company.set_status(CompanyStatus::PendingIdentitySetup);
				self.store.save_company(company).await?;

				return Err(e.into());
			},
		};

		obs::info!(%user_id, "identity user created");

		if let Err(e) = self.identity.send_verify_email(&user_id).await {
			obs::warn!(email = %request.email, error = %e, "failed to send verification email");
		}

		company.set_status(CompanyStatus::PendingEmailVerification);
		self.store.save_company(company).await?;

		Ok(SignUpResponse::success(tenant_id, user_id))
	}

	// The tenant is fresh, so a successful registration means the lock (if any) is ours.
	async fn release_unsaved(&self, domain: &DomainName) {
		if let Err(e) = self.domains.release(domain).await {
			obs::warn!(%domain, error = %e, "failed to release domain after company save failure");
		}
	}

	async fn ensure_unique(&self, request: &SignUpRequest) -> Result<()> {
		if self.email_exists(&request.email).await? {
			obs::warn!(email = %request.email, "email already exists in directory");

			return Err(Error::EmailAlreadyExists { email: request.email.clone() });
		}
		if self.identity.user_exists_by_email(&request.email).await? {
			obs::warn!(email = %request.email, "email already exists at identity provider");

			return Err(Error::EmailAlreadyExists { email: request.email.clone() });
		}
		if let Some(existing) = self.store.company_by_name(&request.company_name).await? {
			obs::warn!(company = %request.company_name, admin = %existing.email, "company name already exists");

			return Err(Error::CompanyNameAlreadyExists {
				company_name: request.company_name.clone(),
				admin_email: existing.email,
			});
		}

		Ok(())
	}

	async fn allocate_tenant_id(&self) -> Result<TenantId> {
		let attempts = self.config.max_tenant_id_attempts;

		for attempt in 1..=attempts {
			let candidate = self.tenant_ids.generate();

			if !self.store.tenant_exists(&candidate).await? {
				return Ok(candidate);
			}

			obs::warn!(attempt, "tenant id collision detected, retrying");
		}

		Err(Error::TenantIdExhausted { attempts })
	}

	/// Sends the verification email again for the company registered with `email`.
	pub async fn resend_verification(&self, email: &str) -> Result<()> {
		obs::observe(OpKind::ResendVerification, "resend_verification", async move {
			if self.store.company_by_email(email).await?.is_none() {
				return Err(Error::EmailNotFound { email: email.to_owned() });
			}

			let user_id = self.identity.find_user_by_email(email).await?;

			self.identity.send_verify_email(&user_id).await?;
			obs::info!(%user_id, "verification email resent");

			Ok(())
		})
		.await
	}
}
