//! Map Surface Component
//!
//! Placeholder map with one pin per location. Pins are laid out by list
//! position until a mapping provider is integrated.

use leptos::prelude::*;
use scout_data::MapLocation;

use crate::components::{Icon, IconKind};
use crate::pin_layout::pin_position;
use crate::store::{map_locations_memo, MapState};

#[component]
pub fn MapSurface(
    state: RwSignal<MapState>,
    #[prop(into)] on_select: Callback<MapLocation>,
) -> impl IntoView {
    let locations = map_locations_memo(state);

    view! {
        <div class="map-surface">
            <div class="map-placeholder">
                <div class="map-placeholder-icon">
                    <Icon kind=IconKind::Map class="icon-lg muted" />
                </div>
                <p class="map-placeholder-title">"Map integration coming soon"</p>
                <p class="map-placeholder-hint">"Connect Firebase for live data"</p>
            </div>

            <div class="map-pins">
                <For
                    each=move || locations.get().into_iter().enumerate()
                    key=|(index, location)| (*index, location.id.clone())
                    children=move |(index, location)| {
                        let id = location.id.clone();
                        let name = location.name.clone();
                        let is_selected = move || state.with(|s| s.is_selected(&id));
                        view! {
                            <button
                                class=move || if is_selected() { "map-pin selected" } else { "map-pin" }
                                style=pin_position(index).style()
                                title=name
                                on:click=move |_| on_select.run(location.clone())
                            >
                                <div class="map-pin-head">
                                    <Icon kind=IconKind::PinSolid class="icon-xs" />
                                </div>
                            </button>
                        }
                    }
                />
            </div>

            <button
                class="locate-btn"
                on:click=|_| log::debug!("[MAP] Current location is not available yet")
            >
                <Icon kind=IconKind::Globe class="icon-md" />
            </button>
        </div>
    }
}
