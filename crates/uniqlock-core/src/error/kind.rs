//! Error kinds for conditional handling

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fieldless mirror of [`UniqlockError`](super::UniqlockError)'s variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Conflict,
    DuplicateLock,
    DuplicateStrategy,
    InvalidArgument,
    InvalidWorker,
    InvalidUniqueArguments,
    NotUniqueWorker,
    UnknownLock,
    Script,
    PassThrough,
}

impl ErrorKind {
    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            Self::Conflict => "UNIQLOCK_CONFLICT",
            Self::DuplicateLock => "UNIQLOCK_DUPLICATE_LOCK",
            Self::DuplicateStrategy => "UNIQLOCK_DUPLICATE_STRATEGY",
            Self::InvalidArgument => "UNIQLOCK_INVALID_ARGUMENT",
            Self::InvalidWorker => "UNIQLOCK_INVALID_WORKER",
            Self::InvalidUniqueArguments => "UNIQLOCK_INVALID_UNIQUE_ARGUMENTS",
            Self::NotUniqueWorker => "UNIQLOCK_NOT_UNIQUE_WORKER",
            Self::UnknownLock => "UNIQLOCK_UNKNOWN_LOCK",
            Self::Script => "UNIQLOCK_SCRIPT",
            Self::PassThrough => "UNIQLOCK_PASS_THROUGH",
        }
    }

    /// Raised directly by lock or worker code rather than produced by
    /// script failure translation
    pub fn is_domain(&self) -> bool {
        !matches!(self, Self::Script | Self::PassThrough)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
