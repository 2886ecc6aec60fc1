//! Home Page Component
//!
//! Service selection grid with completion badges and per-service reset.

use std::rc::Rc;

use leptos::prelude::*;

use crate::context::AppContext;
use crate::dom;
use crate::logging;
use crate::route::Route;
use crate::services::SERVICES;
use crate::storage::AppStorage;
use crate::store::{store_refresh_completion, store_service_complete, use_app_store};

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let storage = expect_context::<Rc<AppStorage>>();

    // Badges can be stale after another page wrote a result
    {
        let storage = storage.clone();
        Effect::new(move |_| {
            store_refresh_completion(&store, &storage);
        });
    }

    view! {
        <main class="home-layout">
            <header class="home-header">
                <h1>"Promotion Consulting"</h1>
                <p>"Pick a service, answer a short interview, choose the proposal that fits."</p>
            </header>

            <div class="service-grid">
                {SERVICES.iter().map(|desc| {
                    let kind = desc.kind;
                    let storage = storage.clone();
                    let complete = move || store_service_complete(&store, kind);

                    let on_reset = move |ev: web_sys::MouseEvent| {
                        ev.stop_propagation();
                        if !dom::confirm(&format!("Reset {} and discard its draft?", desc.label)) {
                            return;
                        }
                        if let Err(e) = storage.reset_service(kind) {
                            logging::warn(&format!("[HOME] reset failed for {}: {}", kind.as_str(), e));
                        }
                        store_refresh_completion(&store, &storage);
                    };

                    view! {
                        <div class="service-card" on:click=move |_| ctx.navigate(Route::Interview(kind))>
                            <span class="service-icon">{desc.icon}</span>
                            <h2>{desc.label}</h2>
                            <p>{desc.desc}</p>
                            <div class="service-card-footer">
                                {move || if complete() {
                                    view! {
                                        <span class="service-badge">"done"</span>
                                        <button class="reset-btn" on:click=on_reset.clone()>
                                            "Reset"
                                        </button>
                                    }.into_any()
                                } else {
                                    view! { <span class="service-start">"Start"</span> }.into_any()
                                }}
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>
        </main>
    }
}
