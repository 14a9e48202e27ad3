//! DASS-21 Frontend App
//!
//! Main application component: tab bar plus the three pages. Every page
//! stays mounted so switching tabs keeps its state for the session.

use leptos::prelude::*;

use crate::components::{DetectPage, ModelInfo, PageTabBar, QuestionnairePage};
use crate::context::{build_time_config, AppContext, Page};

#[component]
pub fn App() -> impl IntoView {
    let config = build_time_config();
    log::info!("scoring at {}, analysis at {}", config.scoring_url, config.analysis_url);

    let ctx = AppContext::new(config);
    provide_context(ctx);

    let display = move |page: Page| {
        move || if ctx.page.get() == page { "block" } else { "none" }
    };

    view! {
        <div class="app-layout">
            <main class="main-content">
                <PageTabBar />

                <h1>"DASS-21 Self-Assessment"</h1>

                <div class="page" style:display=display(Page::Questionnaire)>
                    <QuestionnairePage />
                </div>
                <div class="page" style:display=display(Page::Detect)>
                    <DetectPage />
                </div>
                <div class="page" style:display=display(Page::Model)>
                    <ModelInfo />
                </div>
            </main>
        </div>
    }
}
