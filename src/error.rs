//! Error taxonomy for the simulation core
//!
//! Nothing in here is fatal to the tick loop. Per-entity failures are logged
//! and turned into no-ops; only setup paths (tuning, level files) surface a
//! `Result` to the caller.

use thiserror::Error;

use crate::sim::EntityKind;

/// Asset failure reported by the host's resource loader
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to load '{path}': {reason}")]
pub struct LoadError {
    pub path: String,
    pub reason: String,
}

impl LoadError {
    pub fn new(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum SimError {
    /// The entity's sprite has not finished loading yet
    #[error("{0:?} resource is not ready")]
    ResourceNotReady(EntityKind),

    /// The entity's sprite failed to load; it stays inert for its lifetime
    #[error(transparent)]
    LoadFailure(#[from] LoadError),

    /// A bounding box that cannot take part in an overlap test
    #[error("invalid collision operand: {0}")]
    InvalidCollisionOperand(String),

    #[error("invalid tuning: {0}")]
    Tuning(String),

    #[error("malformed config: {0}")]
    Config(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type SimResult<T> = Result<T, SimError>;
