//! Interview Page Component
//!
//! The single wizard page, driven by the per-service schema: sectioned
//! form, debounced autosave, candidate generation, selection, and the
//! final jump to the result view.

use std::rc::Rc;

use leptos::prelude::*;

use crate::autosave::Debouncer;
use crate::candidates::make_candidates;
use crate::components::{CandidateCard, ServicePanel};
use crate::context::AppContext;
use crate::dom;
use crate::logging;
use crate::models::{Candidate, DraftRecord, FormRecord};
use crate::route::Route;
use crate::schema::ServiceSchema;
use crate::services::ServiceKind;
use crate::storage::{now_ms, AppStorage, SubmitError};
use crate::store::{store_refresh_completion, use_app_store};

/// Scroll target for the generated-candidates block
const CANDIDATES_SECTION_ID: &str = "candidates";

#[cfg(target_arch = "wasm32")]
fn clock_label() -> String {
    String::from(js_sys::Date::new_0().to_locale_time_string("en-US"))
}

#[cfg(not(target_arch = "wasm32"))]
fn clock_label() -> String {
    String::new()
}

#[component]
pub fn InterviewPage(kind: ServiceKind) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let storage = expect_context::<Rc<AppStorage>>();
    let schema = ServiceSchema::for_kind(kind);

    let (form, set_form) = signal(FormRecord::new());
    let (candidates, set_candidates) = signal(Vec::<Candidate>::new());
    let (selected_id, set_selected_id) = signal(String::new());
    let (save_status, set_save_status) = signal(String::new());
    let (hydrated, set_hydrated) = signal(false);
    let debouncer = StoredValue::new_local(Debouncer::default());

    // Load the draft once on mount, then the one-shot brand carryover
    // from the diagnosis page's draft.
    {
        let storage = storage.clone();
        Effect::new(move |_| {
            if hydrated.get_untracked() {
                return;
            }
            if let Some(draft) = storage.load_draft(kind) {
                logging::log(&format!("[INTERVIEW] resuming {} draft", kind.as_str()));
                set_form.set(draft.form);
                set_candidates.set(draft.candidates);
                set_selected_id.set(draft.selected_id);
            }
            if !form.get_untracked().is_filled("brandName") {
                if let Some(brand) = storage.carryover_brand_name() {
                    set_form.update(|f| f.set("brandName", brand));
                }
            }
            set_hydrated.set(true);
        });
    }

    // Snapshot current state and write it; reports success
    let write_now = {
        let storage = storage.clone();
        move || -> bool {
            let draft = DraftRecord {
                form: form.get_untracked(),
                candidates: candidates.get_untracked(),
                selected_id: selected_id.get_untracked(),
                updated_at: now_ms(),
            };
            match storage.save_draft(kind, &draft) {
                Ok(()) => true,
                Err(e) => {
                    logging::warn(&format!("[INTERVIEW] autosave failed: {}", e));
                    false
                }
            }
        }
    };

    let report_write = move |ok: bool| {
        if ok {
            set_save_status.set(format!("Saved {}", clock_label()));
        } else {
            set_save_status.set("Save failed".to_string());
        }
    };

    // Autosave: every qualifying change re-arms the debounce timer, so a
    // burst of edits produces a single write of the final state.
    {
        let write_now = write_now.clone();
        Effect::new(move |_| {
            form.track();
            candidates.track();
            selected_id.track();
            if !hydrated.get() {
                return;
            }
            let write_now = write_now.clone();
            debouncer.update_value(|d| {
                d.schedule(move || report_write(write_now()));
            });
        });
    }

    let on_temp_save = {
        let write_now = write_now.clone();
        move |_| {
            debouncer.update_value(|d| d.cancel());
            report_write(write_now());
        }
    };

    let on_analyze = {
        let write_now = write_now.clone();
        move |_| {
            let current = form.get_untracked();
            let missing = schema.missing_required(&current);
            if !missing.is_empty() {
                let labels: Vec<&str> = missing.iter().map(|f| f.label).collect();
                dom::alert(&format!("Please fill in: {}", labels.join(", ")));
                return;
            }
            set_candidates.set(make_candidates(schema, &current));
            set_selected_id.set(String::new());
            debouncer.update_value(|d| d.cancel());
            report_write(write_now());
            dom::scroll_to(CANDIDATES_SECTION_ID);
        }
    };

    let on_go_result = {
        let storage = storage.clone();
        move |_| {
            let submitted = storage.submit_result(
                kind,
                &form.get_untracked(),
                &candidates.get_untracked(),
                &selected_id.get_untracked(),
                now_ms(),
            );
            match submitted {
                Ok(_) => {
                    store_refresh_completion(&store, &storage);
                    ctx.navigate(Route::Result(kind));
                }
                Err(SubmitError::NothingSelected) => {
                    dom::alert("Select one of the candidates before moving on.");
                }
                Err(SubmitError::Store(e)) => {
                    set_save_status.set(format!("Save failed: {}", e));
                }
            }
        }
    };

    let on_next_section = move |_| {
        let section = schema.current_section(&form.get_untracked());
        dom::scroll_to(section.id);
    };

    view! {
        <div class="interview-layout">
            <ServicePanel active=kind />

            <main class="interview-main">
                <header class="interview-header">
                    <h1>{schema.title}</h1>
                    <p class="interview-intro">{schema.intro}</p>
                    <div class="interview-meta">
                        {schema.sections.iter().map(|section| {
                            let id = section.id;
                            view! {
                                <button
                                    class=move || {
                                        if form.with(|f| schema.current_section(f).id) == id {
                                            "section-chip current"
                                        } else {
                                            "section-chip"
                                        }
                                    }
                                    on:click=move |_| dom::scroll_to(id)
                                >
                                    {section.label}
                                </button>
                            }
                        }).collect_view()}
                        <span class="progress">
                            {move || {
                                let (filled, total) = form.with(|f| schema.progress(f));
                                format!("{}/{} required", filled, total)
                            }}
                        </span>
                        <button class="next-section-btn" on:click=on_next_section>
                            "Next section"
                        </button>
                        <span class="save-status">{move || save_status.get()}</span>
                    </div>
                </header>

                {schema.sections.iter().map(|section| view! {
                    <section class="form-section" id=section.id>
                        <h2>{section.label}</h2>
                        {section.fields.iter().map(|f| {
                            let key = f.key;
                            let control = if f.multiline {
                                view! {
                                    <textarea
                                        placeholder=f.placeholder
                                        prop:value=move || form.with(|fr| fr.value(key).to_string())
                                        on:input=move |ev| {
                                            set_form.update(|fr| fr.set(key, event_target_value(&ev)));
                                        }
                                    />
                                }.into_any()
                            } else {
                                view! {
                                    <input
                                        type="text"
                                        placeholder=f.placeholder
                                        prop:value=move || form.with(|fr| fr.value(key).to_string())
                                        on:input=move |ev| {
                                            set_form.update(|fr| fr.set(key, event_target_value(&ev)));
                                        }
                                    />
                                }.into_any()
                            };
                            view! {
                                <label class="form-field">
                                    <span class="field-label">
                                        {f.label}
                                        {f.required.then(|| view! { <em class="required-mark">"*"</em> })}
                                    </span>
                                    {control}
                                </label>
                            }
                        }).collect_view()}
                    </section>
                }).collect_view()}

                <div class="interview-actions">
                    <button class="temp-save-btn" on:click=on_temp_save>"Save draft"</button>
                    <button
                        class=move || {
                            if form.with(|f| schema.can_analyze(f)) {
                                "analyze-btn ready"
                            } else {
                                "analyze-btn"
                            }
                        }
                        on:click=on_analyze
                    >
                        "Analyze"
                    </button>
                </div>

                <section class="candidates-section" id=CANDIDATES_SECTION_ID>
                    {move || {
                        let list = candidates.get();
                        if list.is_empty() {
                            view! {
                                <p class="candidates-empty">
                                    "Fill in the required fields and run Analyze to get three proposals."
                                </p>
                            }.into_any()
                        } else {
                            view! {
                                <div class="candidate-list">
                                    {list.into_iter().map(|candidate| view! {
                                        <CandidateCard
                                            candidate=candidate
                                            selected_id=selected_id
                                            set_selected_id=set_selected_id
                                        />
                                    }).collect_view()}
                                </div>
                                <button class="go-result-btn" on:click=on_go_result.clone()>
                                    "Use selected candidate"
                                </button>
                            }.into_any()
                        }
                    }}
                </section>
            </main>
        </div>
    }
}
