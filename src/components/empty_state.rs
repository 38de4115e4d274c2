use leptos::prelude::*;

use crate::components::{Icon, IconKind};

/// Placeholder shown when the filtered locker view is empty
#[component]
pub fn EmptyState() -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-state-icon">
                <Icon kind=IconKind::Locker class="icon-lg muted" />
            </div>
            <h3 class="empty-state-title">"No saved resources"</h3>
            <p class="empty-state-text">
                "Resources you save from Scout will appear here for quick access."
            </p>
        </div>
    }
}
