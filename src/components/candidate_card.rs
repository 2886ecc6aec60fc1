//! Candidate Card Component
//!
//! One generated proposal: name, summary bullets, prompt text, and the
//! do/don't guidance. Clicking the card selects it.

use leptos::prelude::*;

use crate::models::Candidate;

#[component]
pub fn CandidateCard(
    candidate: Candidate,
    selected_id: ReadSignal<String>,
    set_selected_id: WriteSignal<String>,
) -> impl IntoView {
    let id = candidate.id.clone();
    let id_for_class = id.clone();
    let card_class = move || {
        if selected_id.get() == id_for_class {
            "candidate-card selected"
        } else {
            "candidate-card"
        }
    };

    view! {
        <article class=card_class on:click=move |_| set_selected_id.set(id.clone())>
            <header class="candidate-header">
                <span class="candidate-id">{candidate.id.clone()}</span>
                <h3>{candidate.name.clone()}</h3>
            </header>

            <ul class="candidate-summary">
                {candidate.summary.iter().map(|line| view! {
                    <li>{line.clone()}</li>
                }).collect_view()}
            </ul>

            <pre class="candidate-prompt">{candidate.prompt.clone()}</pre>

            <div class="candidate-guidance">
                <div class="guidance-do">
                    <h4>"Do"</h4>
                    <ul>
                        {candidate.do_list.iter().map(|line| view! {
                            <li>{line.clone()}</li>
                        }).collect_view()}
                    </ul>
                </div>
                <div class="guidance-dont">
                    <h4>"Don't"</h4>
                    <ul>
                        {candidate.dont_list.iter().map(|line| view! {
                            <li>{line.clone()}</li>
                        }).collect_view()}
                    </ul>
                </div>
            </div>
        </article>
    }
}
