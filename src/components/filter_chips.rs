//! Filter Chips Component
//!
//! Horizontally scrolling chips; exactly one is active.

use leptos::prelude::*;

use crate::filters::chip_label;

#[component]
pub fn FilterChips(
    #[prop(into)] categories: Signal<Vec<String>>,
    #[prop(into)] active: Signal<String>,
    #[prop(into)] on_select: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="filter-chips">
            <For
                each=move || categories.get()
                key=|category| category.clone()
                children=move |category| {
                    let label = chip_label(&category).to_string();
                    let value = category.clone();
                    let is_active = move || active.get() == category;
                    view! {
                        <button
                            class=move || if is_active() { "chip active" } else { "chip" }
                            on:click=move |_| on_select.run(value.clone())
                        >
                            {label}
                        </button>
                    }
                }
            />
        </div>
    }
}
