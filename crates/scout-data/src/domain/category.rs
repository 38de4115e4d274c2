//! Resource Category
//!
//! The fixed set of categories offered on the search screen.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// A browsable resource category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceCategory {
    pub id: String,
    pub name: String,
    /// Emoji glyph shown above the name
    pub icon: String,
}

impl ResourceCategory {
    pub fn new(id: &str, name: &str, icon: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
        }
    }
}

impl Entity for ResourceCategory {
    type Id = String;

    fn id(&self) -> Self::Id {
        self.id.clone()
    }
}

/// Category catalog, in display order
const CATALOG: &[(&str, &str, &str)] = &[
    ("food", "Food", "🍽"),
    ("shelter", "Shelter", "🏠"),
    ("medical", "Medical", "🏥"),
    ("employment", "Jobs", "💼"),
    ("legal", "Legal", "⚖️"),
    ("education", "Education", "📚"),
];

/// All resource categories, in display order
pub fn resource_categories() -> Vec<ResourceCategory> {
    CATALOG
        .iter()
        .map(|(id, name, icon)| ResourceCategory::new(id, name, icon))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order() {
        let names: Vec<String> = resource_categories().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Food", "Shelter", "Medical", "Jobs", "Legal", "Education"]);
    }

    #[test]
    fn test_jobs_uses_employment_id() {
        let jobs = resource_categories()
            .into_iter()
            .find(|c| c.name == "Jobs")
            .expect("Jobs category");
        assert_eq!(jobs.id(), "employment");
    }
}
