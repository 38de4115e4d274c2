//! Domain Layer
//!
//! Plain value records with an opaque string id. No persistence lives here.

mod entity;
mod category;
mod saved_resource;
mod map_location;

pub use entity::{DomainError, DomainResult, Entity};
pub use category::{resource_categories, ResourceCategory};
pub use saved_resource::SavedResource;
pub use map_location::MapLocation;
