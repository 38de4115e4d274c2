//! Location List Component
//!
//! List presentation of the map locations.

use leptos::prelude::*;
use scout_data::MapLocation;

use crate::components::{Icon, IconKind};
use crate::store::{map_locations_memo, MapState};

#[component]
pub fn LocationList(
    state: RwSignal<MapState>,
    #[prop(into)] on_select: Callback<MapLocation>,
) -> impl IntoView {
    let locations = map_locations_memo(state);

    view! {
        <div class="location-list">
            <For
                each=move || locations.get()
                key=|location| location.id.clone()
                children=move |location| {
                    let id = location.id.clone();
                    let is_selected = move || state.with(|s| s.is_selected(&id));
                    let category = location.category.clone();
                    let name = location.name.clone();
                    view! {
                        <button
                            class=move || if is_selected() { "location-row selected" } else { "location-row" }
                            on:click=move |_| on_select.run(location.clone())
                        >
                            <div class="location-row-icon">
                                <Icon kind=IconKind::PinSolid class="icon-sm" />
                            </div>
                            <div class="location-row-text">
                                <h3 class="card-title truncate">{name}</h3>
                                <p class="location-row-category">{category}</p>
                            </div>
                            <Icon kind=IconKind::ChevronRight class="icon-sm" />
                        </button>
                    }
                }
            />
        </div>
    }
}
