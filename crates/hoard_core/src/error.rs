//! # Pool Error Types
//!
//! All errors that can occur when talking to a pool through its handles.

use thiserror::Error;

/// Errors that can occur in the pool.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    /// Dereferenced a handle whose element is dead or was reclaimed.
    #[error("invalid handle: mark {index} at generation {generation} is not alive")]
    InvalidHandle {
        /// Mark index stored in the handle.
        index: u32,
        /// Generation snapshot stored in the handle.
        generation: u32,
    },

    /// Destroyed through a handle that no longer matches its mark.
    ///
    /// The current occupant of the slot is left untouched.
    #[error("stale handle: mark {index} is at generation {current}, handle holds {generation}")]
    StaleHandle {
        /// Mark index stored in the handle.
        index: u32,
        /// Generation snapshot stored in the handle.
        generation: u32,
        /// Generation the mark currently holds (0 if the mark does not exist).
        current: u32,
    },

    /// Invalid configuration file or value.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// No more kind ids can be handed out.
    #[error("kind registry full: capacity {capacity}")]
    RegistryFull {
        /// Maximum number of kinds.
        capacity: usize,
    },
}

/// Result type for pool operations.
pub type PoolResult<T> = Result<T, PoolError>;
