//! Application Context
//!
//! The data source is injected once at the root and read by each screen.

use std::sync::Arc;

use leptos::prelude::*;
use scout_data::ResourceRepository;

/// Data access handle provided via context
#[derive(Clone)]
pub struct DataSource {
    repo: Arc<dyn ResourceRepository>,
}

impl DataSource {
    pub fn new(repo: Arc<dyn ResourceRepository>) -> Self {
        Self { repo }
    }

    /// Shared handle for use inside spawned tasks
    pub fn repo(&self) -> Arc<dyn ResourceRepository> {
        Arc::clone(&self.repo)
    }
}

/// Get the data source from context
pub fn use_data_source() -> DataSource {
    expect_context::<DataSource>()
}
