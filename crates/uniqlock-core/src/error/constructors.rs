//! Constructor methods for UniqlockError

use super::types::{UniqlockError, WorkerOptions};
use serde_json::Value;

impl UniqlockError {
    /// Create a conflict error for a lock digest
    pub fn conflict(digest: impl Into<String>) -> Self {
        Self::Conflict {
            digest: digest.into(),
        }
    }

    pub fn duplicate_lock(message: impl Into<String>) -> Self {
        Self::DuplicateLock {
            message: message.into(),
        }
    }

    pub fn duplicate_strategy(message: impl Into<String>) -> Self {
        Self::DuplicateStrategy {
            message: message.into(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an invalid worker error listing every validation problem
    pub fn invalid_worker<I, S>(worker_name: impl Into<String>, validation_errors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::InvalidWorker {
            worker_name: worker_name.into(),
            validation_errors: validation_errors.into_iter().map(Into::into).collect(),
        }
    }

    pub fn invalid_unique_arguments(
        worker_class: impl Into<String>,
        method_arity: i32,
        given_args: Vec<Value>,
    ) -> Self {
        Self::InvalidUniqueArguments {
            worker_class: worker_class.into(),
            method_arity,
            given_args,
        }
    }

    pub fn not_unique_worker(options: WorkerOptions) -> Self {
        Self::NotUniqueWorker { options }
    }

    pub fn unknown_lock(message: impl Into<String>) -> Self {
        Self::UnknownLock {
            message: message.into(),
        }
    }
}
