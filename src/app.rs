//! Scout Frontend App
//!
//! Router, root shell and data source injection.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};
use scout_data::StaticRepository;

use crate::components::BottomNav;
use crate::context::DataSource;
use crate::nav::HOME_PATH;
use crate::pages::{HomePage, LockerPage, MapPage};

#[component]
pub fn App() -> impl IntoView {
    // Built-in records until a hosted data source is connected
    provide_context(DataSource::new(Arc::new(StaticRepository::seeded())));
    log::info!("[APP] Scout started");

    view! {
        <Router>
            <RootShell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/locker") view=LockerPage />
                    <Route path=path!("/map") view=MapPage />
                </Routes>
            </RootShell>
        </Router>
    }
}

/// Page chrome: padded content region above a single bottom navigation bar
#[component]
pub fn RootShell(children: Children) -> impl IntoView {
    view! {
        <main class="page-content">
            {children()}
        </main>
        <BottomNav />
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page not-found">
            <h1 class="page-title">"Page not found"</h1>
            <a href=HOME_PATH class="btn-primary">"Back to Scout"</a>
        </div>
    }
}
