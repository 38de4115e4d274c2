//! Locker Filtering
//!
//! Category chips and the filtered view over saved resources.

use scout_data::SavedResource;

/// Filter value that shows every resource
pub const FILTER_ALL: &str = "all";

/// `"all"` followed by each distinct category, in first-occurrence order
pub fn filter_categories(resources: &[SavedResource]) -> Vec<String> {
    let mut categories = vec![FILTER_ALL.to_string()];
    for resource in resources {
        if !categories.iter().any(|c| *c == resource.category) {
            categories.push(resource.category.clone());
        }
    }
    categories
}

/// Resources matching `filter` exactly, order preserved
pub fn filter_resources(resources: &[SavedResource], filter: &str) -> Vec<SavedResource> {
    if filter == FILTER_ALL {
        return resources.to_vec();
    }
    resources
        .iter()
        .filter(|r| r.category == filter)
        .cloned()
        .collect()
}

/// Chip text for a filter value
pub fn chip_label(category: &str) -> &str {
    if category == FILTER_ALL { "All" } else { category }
}

/// "1 saved resource", otherwise "N saved resources"
pub fn count_label(count: usize) -> String {
    if count == 1 {
        "1 saved resource".to_string()
    } else {
        format!("{} saved resources", count)
    }
}
