//! Static Repository
//!
//! In-memory store seeded from the built-in records. Contents live for the
//! lifetime of the value and are never written anywhere.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::{DomainError, DomainResult, Entity, MapLocation, SavedResource};
use crate::seed;
use super::traits::ResourceRepository;

struct Contents {
    saved: Vec<SavedResource>,
    locations: Vec<MapLocation>,
}

/// Repository backed by in-memory vectors
pub struct StaticRepository {
    contents: RwLock<Contents>,
}

impl StaticRepository {
    pub fn new(saved: Vec<SavedResource>, locations: Vec<MapLocation>) -> Self {
        Self {
            contents: RwLock::new(Contents { saved, locations }),
        }
    }

    /// Repository holding the built-in records
    pub fn seeded() -> Self {
        Self::new(seed::saved_resources(), seed::map_locations())
    }

    fn read(&self) -> DomainResult<RwLockReadGuard<'_, Contents>> {
        self.contents
            .read()
            .map_err(|e| DomainError::Internal(format!("repository lock poisoned: {}", e)))
    }

    fn write(&self) -> DomainResult<RwLockWriteGuard<'_, Contents>> {
        self.contents
            .write()
            .map_err(|e| DomainError::Internal(format!("repository lock poisoned: {}", e)))
    }

    /// Poison the lock by panicking while holding the write guard
    #[cfg(test)]
    pub(crate) fn poison_lock(&self) {
        std::thread::scope(|scope| {
            let handle = scope.spawn(|| {
                let _guard = self.contents.write();
                panic!("writer panicked while holding the lock");
            });
            let _ = handle.join();
        });
    }
}

impl Default for StaticRepository {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}

#[async_trait]
impl ResourceRepository for StaticRepository {
    async fn list_saved_resources(&self) -> DomainResult<Vec<SavedResource>> {
        Ok(self.read()?.saved.clone())
    }

    async fn save_resource(&self, resource: SavedResource) -> DomainResult<SavedResource> {
        if resource.id.is_empty() {
            return Err(DomainError::InvalidInput("resource id is empty".to_string()));
        }

        let mut contents = self.write()?;
        if contents.saved.iter().any(|r| r.id == resource.id) {
            return Err(DomainError::Conflict(format!("resource {} already saved", resource.id)));
        }

        log::debug!("[REPO] Saving resource {} ({})", resource.id(), resource.name);
        contents.saved.insert(0, resource.clone());
        Ok(resource)
    }

    async fn unsave_resource(&self, id: &str) -> DomainResult<()> {
        let mut contents = self.write()?;
        let before = contents.saved.len();
        contents.saved.retain(|r| r.id != id);

        if contents.saved.len() == before {
            return Err(DomainError::NotFound(format!("saved resource {}", id)));
        }
        log::debug!("[REPO] Removed saved resource {}", id);
        Ok(())
    }

    async fn list_map_locations(&self) -> DomainResult<Vec<MapLocation>> {
        Ok(self.read()?.locations.clone())
    }
}
