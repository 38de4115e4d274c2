//! Category Grid Component
//!
//! Three-column grid of selectable resource categories.

use leptos::prelude::*;
use scout_data::ResourceCategory;

#[component]
pub fn CategoryGrid(
    categories: Vec<ResourceCategory>,
    selected: ReadSignal<Option<String>>,
    #[prop(into)] on_toggle: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="category-grid">
            {categories.into_iter().map(|category| {
                let id = category.id.clone();
                let is_selected = {
                    let id = id.clone();
                    move || selected.get().as_deref() == Some(id.as_str())
                };
                view! {
                    <button
                        class=move || if is_selected() { "category-btn selected" } else { "category-btn" }
                        on:click=move |_| on_toggle.run(id.clone())
                    >
                        <span class="category-icon">{category.icon}</span>
                        <span class="category-name">{category.name}</span>
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
