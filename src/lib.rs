//! Sign-up core for a multi-tenant HRMS: password strength scoring, field and form validation,
//! tenant ids, corporate domain locking, and company onboarding behind pluggable stores and an
//! identity provider seam.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod directory;
pub mod error;
pub mod identity;
pub mod obs;
pub mod signup;
pub mod store;
pub mod tenant;
pub mod validate;

mod _prelude {
	pub use std::{
		collections::{BTreeMap, HashMap},
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	pub use async_lock::Mutex as AsyncMutex;
	pub use parking_lot::RwLock;
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::OffsetDateTime;

	pub use crate::error::{Error, Result};
}

#[cfg(test)] use color_eyre as _;
