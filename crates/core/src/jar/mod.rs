//! Savings jars scoped to a budget.

pub mod error;
pub mod service;
pub mod status;
pub mod types;

#[cfg(test)]
mod status_props;

pub use error::JarError;
pub use service::{JarRepository, JarService};
pub use status::{JarStatus, derive_status};
pub use types::{Jar, JarPatch, NewJar};
