//! Repository Integration Tests
//!
//! Tests for StaticRepository through the ResourceRepository interface.

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::domain::{DomainError, SavedResource};
    use crate::repository::{ResourceRepository, StaticRepository};

    fn clinic() -> SavedResource {
        let saved_at = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        SavedResource::new("10", "Free Clinic", "Medical", "12 Elm St, Springfield", saved_at)
    }

    #[tokio::test]
    async fn test_seeded_lists() {
        let repo = StaticRepository::seeded();

        let saved = repo.list_saved_resources().await.expect("List failed");
        let names: Vec<&str> = saved.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Community Food Bank", "Veterans Support Center", "Emergency Shelter Network"]
        );

        let locations = repo.list_map_locations().await.expect("List failed");
        assert_eq!(locations.len(), 4);
        assert_eq!(locations[0].id, "1");
    }

    #[tokio::test]
    async fn test_save_puts_newest_first() {
        let repo = StaticRepository::seeded();

        let saved = repo.save_resource(clinic()).await.expect("Save failed");
        assert_eq!(saved.id, "10");

        let all = repo.list_saved_resources().await.unwrap();
        assert_eq!(all.len(), 4);
        assert_eq!(all[0].name, "Free Clinic");
    }

    #[tokio::test]
    async fn test_save_duplicate_conflicts() {
        let repo = StaticRepository::default();
        repo.save_resource(clinic()).await.unwrap();

        let err = repo.save_resource(clinic()).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
        assert_eq!(repo.list_saved_resources().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_save_rejects_empty_id() {
        let repo = StaticRepository::default();
        let mut resource = clinic();
        resource.id.clear();

        let err = repo.save_resource(resource).await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_unsave() {
        let repo = StaticRepository::seeded();

        repo.unsave_resource("2").await.expect("Unsave failed");
        let ids: Vec<String> = repo
            .list_saved_resources()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[tokio::test]
    async fn test_unsave_unknown_id() {
        let repo = StaticRepository::seeded();

        let err = repo.unsave_resource("missing").await.unwrap_err();
        assert_eq!(err, DomainError::NotFound("saved resource missing".to_string()));
        assert_eq!(repo.list_saved_resources().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_poisoned_lock_is_internal_error() {
        let repo = StaticRepository::seeded();
        repo.poison_lock();

        let err = repo.list_saved_resources().await.unwrap_err();
        assert!(matches!(err, DomainError::Internal(_)));

        let err = repo.list_map_locations().await.unwrap_err();
        assert!(matches!(err, DomainError::Internal(_)));

        let err = repo.save_resource(clinic()).await.unwrap_err();
        assert!(matches!(err, DomainError::Internal(_)));

        let err = repo.unsave_resource("1").await.unwrap_err();
        assert!(matches!(err, DomainError::Internal(_)));
    }
}
