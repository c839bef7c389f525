//! Error types for uniqlock
//!
//! All errors surfaced by the locking library are variants of the closed
//! [`UniqlockError`] enum:
//! - domain errors (conflicts, duplicate registrations, invalid workers, ...)
//!   raised by the lock and worker-validation code
//! - translated script failures ([`UniqlockError::Script`]) and failures the
//!   translator left alone ([`UniqlockError::PassThrough`])
//!
//! Branch on [`UniqlockError::kind`] and display with [`UniqlockError::render`].

mod constructors;
mod kind;
mod types;

// Re-export all public types
pub use kind::ErrorKind;
pub use types::{UniqlockError, UniqlockResult, WorkerOptions};
