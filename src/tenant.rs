//! Tenant-scoped identifiers, email domains, and tenant id generation.

pub mod domain;
pub mod generator;
pub mod id;

pub use domain::*;
pub use generator::*;
pub use id::*;
