//! In-memory school store
//!
//! Used when no data directory is configured, and in tests.

use std::sync::RwLock;

use super::errors::{StoreError, StoreResult};
use super::SchoolStore;
use crate::school::{NewSchool, School, SchoolId};

/// Volatile store; ids start at 1 and increase monotonically.
#[derive(Debug, Default)]
pub struct MemoryStore {
    schools: RwLock<Vec<School>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SchoolStore for MemoryStore {
    fn insert(&self, school: NewSchool) -> StoreResult<SchoolId> {
        let mut schools = self.schools.write().map_err(|_| StoreError::poisoned())?;
        let id = schools.last().map(|s| s.id + 1).unwrap_or(1);
        schools.push(school.with_id(id));
        Ok(id)
    }

    fn all(&self) -> StoreResult<Vec<School>> {
        let schools = self.schools.read().map_err(|_| StoreError::poisoned())?;
        Ok(schools.clone())
    }
}
