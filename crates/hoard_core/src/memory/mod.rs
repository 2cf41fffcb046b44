//! # Memory Management
//!
//! Dense slot storage behind an indirection table.
//!
//! ## Design Philosophy
//!
//! Elements are packed into one contiguous array so bulk iteration is a
//! linear walk. Callers never hold slot positions; they hold [`Handle`]s that
//! resolve through a table of generation-counted marks. This lets the pool:
//! - Relocate elements during compaction
//! - Detect stale references instead of reading reused memory
//! - Reclaim dead slots without auxiliary storage

mod atom;
mod handle;
mod pool;

pub use atom::Atom;
pub use handle::Handle;
pub use pool::{HandlePool, MAX_CAPACITY};
