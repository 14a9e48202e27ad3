//! Score Panel Component
//!
//! Display regions for the scoring result. Empty until the first
//! successful submission; a failed one leaves them as they were.

use dass_core::{ScoreReport, Subscale};
use leptos::prelude::*;

use crate::store::{QuestionnaireStateStoreFields, QuestionnaireStore};

/// Element id prefix of a subscale's regions
fn region_prefix(subscale: Subscale) -> &'static str {
    match subscale {
        Subscale::Depression => "D",
        Subscale::Anxiety => "A",
        Subscale::Stress => "S",
    }
}

#[component]
pub fn ScorePanel(store: QuestionnaireStore) -> impl IntoView {
    let field = move |read: fn(&ScoreReport) -> String| {
        move || store.scores().get().map(|report| read(&report)).unwrap_or_default()
    };

    view! {
        <div class="score-panel">
            <table class="score-table">
                <tr>
                    <th>"Subscale"</th>
                    <th>"Score"</th>
                    <th>"Severity"</th>
                </tr>
                {Subscale::ALL.into_iter().map(|subscale| {
                    let prefix = region_prefix(subscale);
                    let score = move || {
                        store.scores().get().map(|r| r.subscale(subscale).score.clone()).unwrap_or_default()
                    };
                    let severity = move || {
                        store.scores().get().map(|r| r.subscale(subscale).severity.clone()).unwrap_or_default()
                    };
                    view! {
                        <tr>
                            <td>{subscale.label()}</td>
                            <td id={format!("{}-score", prefix)}>{score}</td>
                            <td id={format!("{}-severity", prefix)}>{severity}</td>
                        </tr>
                    }
                }).collect_view()}
            </table>
            <p class="depression-outlook">
                "Likelihood of depression increase: "
                <span id="likelihood">{field(|r| r.likelihood.clone())}</span>
            </p>
            <p class="depression-outlook">
                "Magnitude: "
                <span id="magnitude">{field(|r| r.magnitude.clone())}</span>
            </p>
        </div>
    }
}
