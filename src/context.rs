//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::route::Route;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Currently displayed route - read
    pub route: ReadSignal<Route>,
    /// Currently displayed route - write
    set_route: WriteSignal<Route>,
}

impl AppContext {
    pub fn new(route: (ReadSignal<Route>, WriteSignal<Route>)) -> Self {
        Self {
            route: route.0,
            set_route: route.1,
        }
    }

    /// Switch the view and push the address onto the history stack
    pub fn navigate(&self, route: Route) {
        #[cfg(target_arch = "wasm32")]
        crate::route::push_history(route);
        self.set_route.set(route);
    }

    /// Switch the view without touching history (popstate handler)
    pub fn sync_route(&self, route: Route) {
        self.set_route.set(route);
    }
}
