//! Result Page Component
//!
//! Shows the finalized record for one service: the chosen candidate with
//! its prompt and guidance. Degrades to an inert empty state when no
//! result has been saved yet.

use std::rc::Rc;

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::ResultRecord;
use crate::route::Route;
use crate::services::ServiceKind;
use crate::storage::AppStorage;

#[component]
pub fn ResultPage(kind: ServiceKind) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let storage = expect_context::<Rc<AppStorage>>();

    let (result, set_result) = signal::<Option<ResultRecord>>(None);

    {
        let storage = storage.clone();
        Effect::new(move |_| {
            set_result.set(storage.load_result(kind));
        });
    }

    view! {
        <main class="result-layout">
            <header class="result-header">
                <h1>{kind.label()} " Result"</h1>
                <button class="back-btn" on:click=move |_| ctx.navigate(Route::Home)>
                    "Back to services"
                </button>
            </header>

            {move || match result.get() {
                Some(record) => {
                    let selected = record
                        .selected
                        .clone()
                        .or_else(|| {
                            record
                                .candidates
                                .iter()
                                .find(|c| c.id == record.selected_id)
                                .cloned()
                        });
                    match selected {
                        Some(candidate) => view! {
                            <article class="result-card">
                                <h2>{candidate.name.clone()}</h2>
                                <ul>
                                    {candidate.summary.iter().map(|line| view! {
                                        <li>{line.clone()}</li>
                                    }).collect_view()}
                                </ul>
                                <pre class="result-prompt">{candidate.prompt.clone()}</pre>
                                <div class="result-guidance">
                                    <div>
                                        <h4>"Do"</h4>
                                        <ul>
                                            {candidate.do_list.iter().map(|line| view! {
                                                <li>{line.clone()}</li>
                                            }).collect_view()}
                                        </ul>
                                    </div>
                                    <div>
                                        <h4>"Don't"</h4>
                                        <ul>
                                            {candidate.dont_list.iter().map(|line| view! {
                                                <li>{line.clone()}</li>
                                            }).collect_view()}
                                        </ul>
                                    </div>
                                </div>
                            </article>
                        }.into_any(),
                        None => empty_state(ctx, kind),
                    }
                }
                None => empty_state(ctx, kind),
            }}
        </main>
    }
}

fn empty_state(ctx: crate::context::AppContext, kind: ServiceKind) -> AnyView {
    view! {
        <p class="result-empty">
            "No result saved for this service yet. "
            <button class="link-btn" on:click=move |_| ctx.navigate(Route::Interview(kind))>
                "Go to the interview"
            </button>
        </p>
    }
    .into_any()
}
