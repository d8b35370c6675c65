//! School persistence
//!
//! The core never talks to storage directly. The HTTP layer holds a
//! `SchoolStore` and performs exactly one call per request: `insert` for a
//! validated write, `all` for a ranking.
//!
//! Implementations:
//!
//! - [`MemoryStore`]: volatile, for development and tests
//! - [`FileStore`]: append-only, checksum-verified file with fsync per insert

mod checksum;
mod errors;
mod file;
mod memory;
mod record;

pub use errors::{StoreError, StoreErrorCode, StoreResult};
pub use file::{FileStore, STORE_FILE_NAME};
pub use memory::MemoryStore;

use crate::school::{NewSchool, School, SchoolId};

/// Persistence collaborator for schools.
///
/// Each `insert` must be atomic and visible to any `all` call that starts
/// after it returns.
pub trait SchoolStore: Send + Sync {
    /// Store a validated school and return its assigned id.
    fn insert(&self, school: NewSchool) -> StoreResult<SchoolId>;

    /// Every stored school, in insertion order.
    fn all(&self) -> StoreResult<Vec<School>>;
}
