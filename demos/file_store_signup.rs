//! Onboards a company into a JSON-backed directory with an identity provider stub that accepts
//! every user, then shows how the sign-up screen would render the outcome.

// std
use std::{env, sync::Arc};
// crates.io
use color_eyre::Result;
// self
use hrms_signup::{
	identity::{IdentityError, IdentityFuture, IdentityProvisioner, NewIdentityUser},
	signup::{SignUpResponse, SignUpService},
	store::FileStore,
	tenant::UserId,
	validate::{SignUpForm, score_password},
};

struct AcceptAll;
impl IdentityProvisioner for AcceptAll {
	fn create_user(&self, user: NewIdentityUser) -> IdentityFuture<'_, UserId> {
		Box::pin(async move {
			UserId::new(format!("demo-{}", user.tenant_id))
				.map_err(|e| IdentityError::Rejected { status: None, message: e.to_string() })
		})
	}

	fn user_exists_by_email<'a>(&'a self, _email: &'a str) -> IdentityFuture<'a, bool> {
		Box::pin(async { Ok(false) })
	}

	fn find_user_by_email<'a>(&'a self, email: &'a str) -> IdentityFuture<'a, UserId> {
		Box::pin(async move { Err(IdentityError::UserNotFound { email: email.to_owned() }) })
	}

	fn send_verify_email<'a>(&'a self, user: &'a UserId) -> IdentityFuture<'a, ()> {
		Box::pin(async move {
			println!("verification email queued for {user}");

			Ok(())
		})
	}
}

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let path = env::temp_dir().join("hrms_signup_demo.json");
	let store = Arc::new(FileStore::open(&path)?);
	let service = SignUpService::new(store, Arc::new(AcceptAll));
	let form = SignUpForm {
		email: "admin@systech-demo.com".into(),
		password: "Xk9$mQ7zVt2!".into(),
		confirm_password: "Xk9$mQ7zVt2!".into(),
		company_name: "Systech Solutions".into(),
		first_name: "Ada".into(),
		last_name: "Lovelace".into(),
		phone: String::new(),
	};
	let strength = score_password(form.password.expose());

	println!(
		"password strength: {} ({}/6) {:?}",
		strength.label(),
		strength.score,
		strength.feedback
	);

	form.check()?;

	let response = SignUpResponse::from(service.create_customer(form.into_request()).await);

	println!("{}", serde_json::to_string_pretty(&response)?);
	println!("directory snapshot written to {}", path.display());

	Ok(())
}
