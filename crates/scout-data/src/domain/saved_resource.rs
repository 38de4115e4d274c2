//! Saved Resource Entity
//!
//! A resource the user has bookmarked into their locker.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// A bookmarked resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedResource {
    pub id: String,
    pub name: String,
    /// Free-form category label (not tied to the search catalog)
    pub category: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub saved_at: NaiveDate,
}

impl SavedResource {
    pub fn new(id: &str, name: &str, category: &str, address: &str, saved_at: NaiveDate) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            address: address.to_string(),
            phone: None,
            saved_at,
        }
    }

    pub fn with_phone(mut self, phone: &str) -> Self {
        self.phone = Some(phone.to_string());
        self
    }

    /// Human-readable save date, e.g. "Saved Jan 15, 2024"
    pub fn saved_label(&self) -> String {
        format!("Saved {}", self.saved_at.format("%b %-d, %Y"))
    }
}

impl Entity for SavedResource {
    type Id = String;

    fn id(&self) -> Self::Id {
        self.id.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_resource_creation() {
        let r = SavedResource::new("9", "Clinic", "Medical", "1 Elm St", date(2024, 2, 1));
        assert_eq!(r.id(), "9");
        assert!(r.phone.is_none());

        let r = r.with_phone("(555) 000-0000");
        assert_eq!(r.phone.as_deref(), Some("(555) 000-0000"));
    }

    #[test]
    fn test_saved_label() {
        let r = SavedResource::new("1", "Food Bank", "Food", "123 Main St", date(2024, 1, 5));
        assert_eq!(r.saved_label(), "Saved Jan 5, 2024");
    }

    #[test]
    fn test_wire_shape() {
        let r = SavedResource::new("3", "Shelter", "Shelter", "789 Pine Rd", date(2024, 1, 10));
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["savedAt"], "2024-01-10");
        assert!(json.get("phone").is_none());
    }
}
