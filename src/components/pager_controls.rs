//! Pager Controls Component
//!
//! Return and Next/Submit buttons under the question list.

use leptos::prelude::*;

use crate::store::{QuestionnaireStateStoreFields, QuestionnaireStore};

#[component]
pub fn PagerControls(
    store: QuestionnaireStore,
    #[prop(into)] on_return: Callback<()>,
    #[prop(into)] on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="pager-controls">
            <button
                id="return"
                class="return-btn"
                class:active=move || store.return_active().get()
                on:click=move |_| on_return.run(())
            >
                "RETURN"
            </button>
            <button
                id="next"
                class="next-btn"
                on:click=move |_| on_next.run(())
            >
                {move || store.action_label().get()}
            </button>
            <Show when=move || store.pending().get()>
                <span class="pending">"Scoring..."</span>
            </Show>
        </div>
    }
}
