//! Scout Data Layer
//!
//! Layered architecture:
//! - domain: records shown by the Scout screens
//! - repository: data access abstraction plus the built-in static store
//! - seed: the built-in records the static store starts from

pub mod domain;
pub mod repository;
pub mod seed;

pub use domain::{
    resource_categories, DomainError, DomainResult, Entity, MapLocation, ResourceCategory,
    SavedResource,
};
pub use repository::{ResourceRepository, StaticRepository};
