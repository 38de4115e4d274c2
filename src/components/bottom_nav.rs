//! Bottom Navigation Component
//!
//! Fixed bar linking the three top-level screens.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::{Icon, IconKind};
use crate::nav::{is_active, NavDestination, NavIcon, DESTINATIONS};

fn icon_kind(icon: NavIcon) -> IconKind {
    match icon {
        NavIcon::Search => IconKind::Search,
        NavIcon::Locker => IconKind::Locker,
        NavIcon::Map => IconKind::Map,
    }
}

/// One destination in the bar
#[component]
fn NavLink(destination: NavDestination, pathname: Memo<String>) -> impl IntoView {
    let active = Signal::derive(move || is_active(&pathname.get(), destination.path));

    view! {
        <a
            href=destination.path
            class=move || if active.get() { "nav-link active" } else { "nav-link" }
        >
            <Icon kind=icon_kind(destination.icon) class="icon-md" active=active />
            <span class="nav-label">{destination.label}</span>
        </a>
    }
}

/// Bottom navigation bar; links are intercepted by the router
#[component]
pub fn BottomNav() -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <nav class="bottom-nav">
            <div class="bottom-nav-inner">
                {DESTINATIONS.iter().map(|destination| view! {
                    <NavLink destination=*destination pathname=pathname />
                }).collect_view()}
            </div>
        </nav>
    }
}
