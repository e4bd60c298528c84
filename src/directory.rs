//! Company and email-domain records persisted by the directory store.

pub mod company;
pub mod domain;

pub use company::*;
pub use domain::*;
