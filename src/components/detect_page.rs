//! Detect Page
//!
//! Free-text symptom analyzer: sends the text to the analysis service and
//! lists the matched keywords with per-category counts.

use std::rc::Rc;

use dass_core::{HttpServices, Subscale, TextAnalyzer};
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::StatusBanner;
use crate::context::AppContext;
use crate::store::{AnalyzerState, AnalyzerStateStoreFields};
use crate::view::AnalyzerSignals;

struct AnalyzerSession {
    analyzer: TextAnalyzer<AnalyzerSignals>,
    services: HttpServices,
}

/// Element id of a category's count region
fn count_id(subscale: Subscale) -> &'static str {
    match subscale {
        Subscale::Depression => "depression-count",
        Subscale::Anxiety => "anxiety-count",
        Subscale::Stress => "stress-count",
    }
}

#[component]
pub fn DetectPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let services = match HttpServices::new(ctx.config()) {
        Ok(services) => services,
        Err(err) => {
            log::error!("could not create HTTP client: {}", err);
            let message = Signal::derive(move || Some(err.to_string()));
            return view! { <StatusBanner message=message /> }.into_any();
        }
    };

    let store = Store::new(AnalyzerState::default());
    let analyzer = TextAnalyzer::new(AnalyzerSignals { store });
    let session = StoredValue::new_local(Rc::new(AnalyzerSession { analyzer, services }));

    let (text, set_text) = signal(String::new());

    let on_analyze = move |_: web_sys::MouseEvent| {
        let session = session.get_value();
        let input = text.get_untracked();
        spawn_local(async move {
            if let Err(err) = session.analyzer.analyze(&input, &session.services).await {
                log::debug!("analysis did not complete: {}", err);
            }
        });
    };

    view! {
        <section class="detect">
            <textarea
                id="user-input"
                placeholder="Describe how you have been feeling lately..."
                prop:value=move || text.get()
                on:input=move |ev| set_text.set(event_target_value(&ev))
            ></textarea>
            <div class="detect-actions">
                <button id="analyze-btn" on:click=on_analyze>"Analyze"</button>
                <Show when=move || store.pending().get()>
                    <span class="pending">"Analyzing..."</span>
                </Show>
            </div>
            <StatusBanner message=Signal::derive(move || store.error().get()) />
            <div class="symptoms">
                <h3>"Detected symptoms"</h3>
                <p id="symptoms-list">
                    {move || store.analysis().get().map(|r| r.symptoms).unwrap_or_default()}
                </p>
            </div>
            <table class="count-table">
                {Subscale::ALL.into_iter().map(|subscale| {
                    let count = move || {
                        store.analysis().get().map(|r| r.count(subscale).to_string()).unwrap_or_default()
                    };
                    view! {
                        <tr>
                            <td>{subscale.label()}</td>
                            <td id=count_id(subscale)>{count}</td>
                        </tr>
                    }
                }).collect_view()}
            </table>
        </section>
    }
    .into_any()
}
