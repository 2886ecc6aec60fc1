//! Promo Interview Frontend App
//!
//! Top-level component: resolves the session, wires storage and global
//! state into context, and switches pages on the current route.

use std::rc::Rc;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{HomePage, InterviewPage, ResultPage};
use crate::context::AppContext;
use crate::logging;
use crate::route::Route;
use crate::session;
use crate::storage::app_storage;
use crate::store::{store_refresh_completion, AppState, AppStateStoreFields, AppStore};

#[component]
pub fn App() -> impl IntoView {
    // Session is resolved once; everything downstream takes the id
    // explicitly (storage) or reads it from the store (header).
    let session = session::active_session();
    logging::log(&format!("[APP] session user {}", session.user_id));
    let guest = session.is_guest();
    let storage = Rc::new(app_storage(session.user_id.clone()));

    let (route, set_route) = signal(initial_route());
    let ctx = AppContext::new((route, set_route));

    let store: AppStore = Store::new(AppState::new(&session));
    store_refresh_completion(&store, &storage);

    // Provide context to all children
    provide_context(ctx);
    provide_context(store);
    provide_context(storage);

    // Keep the view in sync with browser back/forward
    #[cfg(target_arch = "wasm32")]
    install_popstate(ctx);

    view! {
        <div class="app-shell">
            <header class="app-bar">
                <button class="app-title" on:click=move |_| ctx.navigate(Route::Home)>
                    "Promo Studio"
                </button>
                <span class="app-user">
                    {move || store.display_name().get().unwrap_or_else(|| store.user_id().get())}
                    {guest.then(|| view! { <em class="guest-hint">" (local)"</em> })}
                </span>
            </header>

            {move || match route.get() {
                Route::Home => view! { <HomePage /> }.into_any(),
                Route::Interview(kind) => view! { <InterviewPage kind=kind /> }.into_any(),
                Route::Result(kind) => view! { <ResultPage kind=kind /> }.into_any(),
            }}
        </div>
    }
}

fn initial_route() -> Route {
    #[cfg(target_arch = "wasm32")]
    {
        crate::route::from_location()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Route::Home
    }
}

#[cfg(target_arch = "wasm32")]
fn install_popstate(ctx: AppContext) {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |_| {
        ctx.sync_route(crate::route::from_location());
    });
    let _ = window.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
    // stays alive for the app's whole lifetime
    closure.forget();
}
