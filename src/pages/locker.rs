//! Locker Screen
//!
//! Saved resources with category filter chips.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{EmptyState, FilterChips, PageHeader, ResourceCard};
use crate::context::use_data_source;
use crate::filters::count_label;
use crate::store::{store_set_filter, store_set_saved, LockerState, LockerStateStoreFields};

#[component]
pub fn LockerPage() -> impl IntoView {
    let data = use_data_source();
    let store = Store::new(LockerState::new());

    // Load once per mount
    Effect::new(move |_| {
        let repo = data.repo();
        spawn_local(async move {
            match repo.list_saved_resources().await {
                Ok(saved) => {
                    log::debug!("[LOCKER] Loaded {} saved resources", saved.len());
                    store_set_saved(&store, saved);
                }
                Err(e) => {
                    log::error!("[LOCKER] Failed to load saved resources: {}", e);
                    store_set_saved(&store, Vec::new());
                }
            }
        });
    });

    let categories = Memo::new(move |_| store.read().categories());
    let filtered = Memo::new(move |_| store.read().filtered());
    let shows_empty_state = Memo::new(move |_| store.read().shows_empty_state());
    let active_filter = Signal::derive(move || store.filter().get());

    view! {
        <div class="page">
            <PageHeader title="Locker" subtitle="Your saved resources" />

            <FilterChips
                categories=categories
                active=active_filter
                on_select=move |filter: String| store_set_filter(&store, filter)
            />

            <p class="result-count">{move || count_label(filtered.with(|r| r.len()))}</p>

            <Show
                when=move || !shows_empty_state.get()
                fallback=|| view! { <EmptyState /> }
            >
                <div class="stack">
                    <For
                        each=move || filtered.get()
                        key=|resource| resource.id.clone()
                        children=|resource| view! { <ResourceCard resource=resource /> }
                    />
                </div>
            </Show>
        </div>
    }
}
