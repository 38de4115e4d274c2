//! Repository Layer - Core Traits
//!
//! The screens only talk to this interface, so the origin of the data
//! (built-in records today, a hosted database later) stays swappable.

use async_trait::async_trait;
use crate::domain::{DomainResult, MapLocation, SavedResource};

/// Data access for saved resources and map locations
#[async_trait]
pub trait ResourceRepository: Send + Sync {
    /// List saved resources in stored order (newest first)
    async fn list_saved_resources(&self) -> DomainResult<Vec<SavedResource>>;

    /// Save a resource; it becomes the first entry
    ///
    /// Fails with `Conflict` when a resource with the same id is already saved.
    async fn save_resource(&self, resource: SavedResource) -> DomainResult<SavedResource>;

    /// Remove a saved resource by id
    ///
    /// Fails with `NotFound` when nothing with that id is saved.
    async fn unsave_resource(&self, id: &str) -> DomainResult<()>;

    /// List map locations in stored order
    async fn list_map_locations(&self) -> DomainResult<Vec<MapLocation>>;
}
