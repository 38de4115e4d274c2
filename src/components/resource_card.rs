//! Resource Card Component
//!
//! One saved resource in the locker list.

use leptos::prelude::*;
use scout_data::SavedResource;

use crate::components::{Icon, IconKind};

#[component]
pub fn ResourceCard(resource: SavedResource) -> impl IntoView {
    let saved_label = resource.saved_label();
    let name = resource.name.clone();
    let phone = resource.phone.clone();

    // Card actions stay inert until directions and telephony are integrated
    let on_menu = {
        let name = name.clone();
        move |_: web_sys::MouseEvent| log::debug!("[LOCKER] Menu for '{}' is not available yet", name)
    };
    let on_directions = {
        let address = resource.address.clone();
        move |_: web_sys::MouseEvent| log::debug!("[LOCKER] Directions to '{}' are not connected", address)
    };
    let on_call = {
        let phone = phone.clone();
        move |_: web_sys::MouseEvent| {
            log::debug!("[LOCKER] Calling {} is not connected", phone.as_deref().unwrap_or("(no number)"))
        }
    };

    view! {
        <div class="card resource-card">
            <div class="card-row">
                <div class="card-main">
                    <h3 class="card-title truncate">{name}</h3>
                    <span class="badge">{resource.category}</span>
                </div>
                <button class="icon-btn" on:click=on_menu>
                    <Icon kind=IconKind::DotsVertical class="icon-sm" />
                </button>
            </div>

            <div class="resource-details">
                <div class="detail-line">
                    <Icon kind=IconKind::MapPin class="icon-xs" />
                    <span class="truncate">{resource.address}</span>
                </div>
                {phone.map(|phone| view! {
                    <div class="detail-line">
                        <Icon kind=IconKind::Phone class="icon-xs" />
                        <span>{phone}</span>
                    </div>
                })}
                <div class="detail-line saved-at">{saved_label}</div>
            </div>

            <div class="card-actions">
                <button class="btn-primary" on:click=on_directions>"Get Directions"</button>
                <button class="btn-secondary" on:click=on_call>"Call"</button>
            </div>
        </div>
    }
}
