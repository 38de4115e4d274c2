//! Map Screen
//!
//! Placeholder map and list presentations over the same locations, plus a
//! detail card for the selected location.

use leptos::prelude::*;
use leptos::task::spawn_local;
use scout_data::MapLocation;

use crate::components::{Icon, IconKind, LocationCard, LocationList, MapSurface, PageHeader, SearchBar};
use crate::context::use_data_source;
use crate::store::MapState;

#[component]
pub fn MapPage() -> impl IntoView {
    let data = use_data_source();
    let state = RwSignal::new(MapState::default());
    // Held for the input only; area search is not implemented
    let area_query = RwSignal::new(String::new());

    Effect::new(move |_| {
        let repo = data.repo();
        spawn_local(async move {
            match repo.list_map_locations().await {
                Ok(locations) => {
                    log::debug!("[MAP] Loaded {} locations", locations.len());
                    state.update(|s| s.locations = locations);
                }
                Err(e) => log::error!("[MAP] Failed to load locations: {}", e),
            }
        });
    });

    let is_list_view = Memo::new(move |_| state.with(|s| s.is_list_view));
    let card_location = Memo::new(move |_| state.with(|s| s.card_location().cloned()));

    let on_select = move |location: MapLocation| {
        log::debug!("[MAP] Selected location {}", location.id);
        state.update(|s| s.select(location));
    };

    view! {
        <div class="map-page">
            <header class="map-header">
                <div class="map-header-row">
                    <PageHeader title="Map" subtitle="Resources near you" />
                    <button class="icon-btn bordered" on:click=move |_| state.update(|s| s.toggle_view())>
                        // Shows the presentation the button switches to
                        {move || if is_list_view.get() {
                            view! { <Icon kind=IconKind::Map class="icon-sm" /> }.into_any()
                        } else {
                            view! { <Icon kind=IconKind::ListBullet class="icon-sm" /> }.into_any()
                        }}
                    </button>
                </div>
                <SearchBar placeholder="Search this area..." query=area_query />
            </header>

            <div class="map-body">
                {move || if is_list_view.get() {
                    view! { <LocationList state=state on_select=on_select /> }.into_any()
                } else {
                    view! { <MapSurface state=state on_select=on_select /> }.into_any()
                }}
            </div>

            {move || card_location.get().map(|location| view! {
                <LocationCard
                    location=location
                    on_close=move || state.update(|s| s.close_card())
                />
            })}
        </div>
    }
}
