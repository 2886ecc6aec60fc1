//! Service Panel Component
//!
//! Left-hand step strip: the four services with completion badges.
//! Clicking a non-active entry navigates to that service's interview.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::route::Route;
use crate::services::{ServiceKind, SERVICES};
use crate::store::{store_service_complete, use_app_store};

/// Step strip listing every service, highlighting the active one
#[component]
pub fn ServicePanel(active: ServiceKind) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    view! {
        <nav class="service-panel">
            {SERVICES.iter().map(|desc| {
                let kind = desc.kind;
                let is_active = kind == active;
                let entry_class = if is_active {
                    "service-entry active"
                } else {
                    "service-entry"
                };
                let complete = move || store_service_complete(&store, kind);

                view! {
                    <button
                        class=entry_class
                        disabled=is_active
                        on:click=move |_| {
                            if !is_active {
                                ctx.navigate(Route::Interview(kind));
                            }
                        }
                    >
                        <span class="service-icon">{desc.icon}</span>
                        <span class="service-label">{desc.label}</span>
                        <span class="service-desc">{desc.desc}</span>
                        {move || complete().then(|| view! {
                            <span class="service-badge">"done"</span>
                        })}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
