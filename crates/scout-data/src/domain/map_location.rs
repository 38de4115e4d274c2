//! Map Location Entity

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// A point of interest shown on the map screen
///
/// `lat`/`lng` are carried for a future mapping provider; pin placement
/// on the placeholder map does not read them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapLocation {
    pub id: String,
    pub name: String,
    pub category: String,
    pub lat: f64,
    pub lng: f64,
}

impl MapLocation {
    pub fn new(id: &str, name: &str, category: &str, lat: f64, lng: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            lat,
            lng,
        }
    }
}

impl Entity for MapLocation {
    type Id = String;

    fn id(&self) -> Self::Id {
        self.id.clone()
    }
}
