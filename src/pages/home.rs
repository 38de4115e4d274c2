//! Home / Search Screen
//!
//! Search input, category grid and quick actions. Neither the query nor the
//! selected category drives anything else yet.

use leptos::prelude::*;
use scout_data::resource_categories;

use crate::components::{CategoryGrid, PageHeader, QuickActionCard, SearchBar};
use crate::models::QUICK_ACTIONS;
use crate::store::toggle_category;

#[component]
pub fn HomePage() -> impl IntoView {
    let search_query = RwSignal::new(String::new());
    let (selected_category, set_selected_category) = signal::<Option<String>>(None);

    let on_toggle = move |id: String| {
        set_selected_category.update(|selected| {
            *selected = toggle_category(selected.as_deref(), &id);
            log::debug!("[HOME] Category selection: {:?}", selected);
        });
    };

    view! {
        <div class="page">
            <PageHeader title="Scout" subtitle="Find resources near you" />

            <SearchBar placeholder="Search resources..." query=search_query />

            <section class="section">
                <h2 class="section-title">"Categories"</h2>
                <CategoryGrid
                    categories=resource_categories()
                    selected=selected_category
                    on_toggle=on_toggle
                />
            </section>

            <section class="section">
                <h2 class="section-title">"Quick Actions"</h2>
                <div class="stack">
                    {QUICK_ACTIONS.iter().map(|action| view! {
                        <QuickActionCard action=*action />
                    }).collect_view()}
                </div>
            </section>
        </div>
    }
}
