//! Quick Action Card Component

use leptos::prelude::*;

use crate::components::{Icon, IconKind};
use crate::models::QuickAction;

/// Shortcut row on the search screen; not wired to any destination yet
#[component]
pub fn QuickActionCard(action: QuickAction) -> impl IntoView {
    let title = action.title;

    view! {
        <button
            class="quick-action"
            on:click=move |_| log::debug!("[HOME] Quick action '{}' is not connected", title)
        >
            <div class="quick-action-icon">
                <Icon kind=action.icon class="icon-md" />
            </div>
            <div class="quick-action-text">
                <h3 class="card-title">{action.title}</h3>
                <p class="card-subtitle truncate">{action.description}</p>
            </div>
            <Icon kind=IconKind::ChevronRight class="icon-sm muted" />
        </button>
    }
}
