//! Question List Component
//!
//! One labelled selector per item. Every row is rendered once; only the
//! rows of the visible group are displayed.

use dass_core::{Choice, Subscale};
use leptos::prelude::*;

use crate::store::{QuestionnaireStateStoreFields, QuestionnaireStore};

/// CSS class tagging a selector with its group
fn group_class(subscale: Subscale) -> &'static str {
    match subscale {
        Subscale::Depression => "D-question",
        Subscale::Anxiety => "A-question",
        Subscale::Stress => "S-question",
    }
}

#[component]
pub fn QuestionList(
    store: QuestionnaireStore,
    /// Called with (ordinal, choice) when a selection changes
    #[prop(into)] on_select: Callback<(u8, Choice)>,
) -> impl IntoView {
    view! {
        <ul id="question-list" class="question-list">
            <For
                each=move || store.rows().get()
                key=|row| row.ordinal
                children=move |row| {
                    let ordinal = row.ordinal;
                    let subscale = row.subscale;
                    let current = row.choice;
                    let display = move || {
                        if store.visible_group().get() == Some(subscale) { "block" } else { "none" }
                    };

                    view! {
                        <li style:display=display>
                            <p>{row.label}</p>
                            <select
                                class=group_class(subscale)
                                on:change=move |ev| {
                                    let value = event_target_value(&ev);
                                    match Choice::from_label(&value) {
                                        Some(choice) => on_select.run((ordinal, choice)),
                                        None => log::warn!("unknown choice {:?} for item {}", value, ordinal),
                                    }
                                }
                            >
                                {Choice::ALL.into_iter().map(|choice| view! {
                                    <option value=choice.label() selected={choice == current}>
                                        {choice.label()}
                                    </option>
                                }).collect_view()}
                            </select>
                        </li>
                    }
                }
            />
        </ul>
    }
}
