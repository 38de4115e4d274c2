//! Location Card Component
//!
//! Detail sheet anchored to the bottom of the map screen.

use leptos::prelude::*;
use scout_data::MapLocation;

use crate::components::{Icon, IconKind};

#[component]
pub fn LocationCard(
    location: MapLocation,
    on_close: impl Fn() + 'static,
) -> impl IntoView {
    let name = location.name.clone();
    let on_directions = {
        let name = name.clone();
        move |_: web_sys::MouseEvent| log::debug!("[MAP] Directions to '{}' are not connected", name)
    };
    let on_save = {
        let id = location.id.clone();
        move |_: web_sys::MouseEvent| log::debug!("[MAP] Saving location {} is not connected", id)
    };

    view! {
        <div class="location-card">
            <div class="card-row">
                <div>
                    <h3 class="card-title">{name}</h3>
                    <span class="badge">{location.category}</span>
                </div>
                <button class="icon-btn" on:click=move |_| on_close()>
                    <Icon kind=IconKind::Close class="icon-sm" />
                </button>
            </div>
            <div class="card-actions">
                <button class="btn-primary" on:click=on_directions>"Get Directions"</button>
                <button class="btn-secondary" on:click=on_save>"Save"</button>
            </div>
        </div>
    }
}
