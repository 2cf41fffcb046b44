//! # HOARD Core
//!
//! Generational handle pool designed for per-frame simulation state:
//! - Elements packed densely for linear iteration
//! - Stable, copyable handles that detect stale references
//! - O(1) destruction, reclamation deferred to one compaction pass per frame
//!
//! ## Architecture Rules
//!
//! 1. **Handles, not references** - Only handles survive `refresh` and growth
//! 2. **Deferred reclamation** - `destroy` flips a flag, `refresh` does the work
//! 3. **Frame-stable iteration** - Elements created mid-frame wait for the next
//!    `refresh` before `for_each` sees them
//!
//! ## Example
//!
//! ```rust
//! use hoard_core::HandlePool;
//!
//! let mut pool = HandlePool::new();
//! let bullet = pool.create((0.0_f32, 1.0_f32));
//! pool.refresh();
//!
//! pool.for_each(|(pos, vel)| *pos += *vel);
//! assert_eq!(pool.get(bullet).unwrap().0, 1.0);
//!
//! pool.destroy(bullet).unwrap();
//! pool.refresh();
//! assert!(!pool.is_alive(bullet));
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod error;
pub mod memory;
pub mod registry;
pub mod sync;

pub use config::{GrowthPolicy, PoolConfig};
pub use error::{PoolError, PoolResult};
pub use memory::{Atom, Handle, HandlePool, MAX_CAPACITY};
pub use registry::{Kind, KindId, KindRegistry, MAX_KINDS};
pub use sync::SharedPool;
