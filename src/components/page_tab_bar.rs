//! Page Tab Bar Component
//!
//! Tab bar for switching between the questionnaire, detect and model pages.

use leptos::prelude::*;

use crate::context::{AppContext, Page};

/// Page Tab Bar component
#[component]
pub fn PageTabBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <nav class="page-tab-bar">
            {Page::ALL.into_iter().map(|page| {
                let is_active = move || ctx.page.get() == page;
                let tab_class = move || {
                    if is_active() { "page-tab active" } else { "page-tab" }
                };

                view! {
                    <button
                        class=tab_class
                        on:click=move |_| ctx.page.set(page)
                    >
                        {page.title()}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
