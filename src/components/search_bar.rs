//! Search Bar Component
//!
//! Text input with a leading search glyph. The query is only held, never
//! submitted.

use leptos::prelude::*;

use crate::components::{Icon, IconKind};

#[component]
pub fn SearchBar(
    #[prop(into)] placeholder: String,
    query: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div class="search-bar">
            <div class="search-bar-icon">
                <Icon kind=IconKind::Search class="icon-sm" />
            </div>
            <input
                type="text"
                class="search-input"
                placeholder=placeholder
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
        </div>
    }
}
