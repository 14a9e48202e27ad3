//! Questionnaire Page
//!
//! Wires the questionnaire controller to its store-backed view and the
//! HTTP scoring client.

use std::rc::Rc;

use dass_core::{Advance, Choice, HttpServices, QuestionnaireController};
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{PagerControls, QuestionList, ScorePanel, StatusBanner};
use crate::context::AppContext;
use crate::store::{QuestionnaireState, QuestionnaireStateStoreFields};
use crate::view::QuestionnaireSignals;

/// Controller plus the client it submits through
struct QuestionnaireSession {
    controller: QuestionnaireController<QuestionnaireSignals>,
    services: HttpServices,
}

#[component]
pub fn QuestionnairePage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let services = match HttpServices::new(ctx.config()) {
        Ok(services) => services,
        Err(err) => {
            log::error!("could not create HTTP client: {}", err);
            let message = Signal::derive(move || Some(err.to_string()));
            return view! { <StatusBanner message=message /> }.into_any();
        }
    };

    let store = Store::new(QuestionnaireState::default());
    let controller = QuestionnaireController::new(QuestionnaireSignals { store });
    controller.render();
    let session = StoredValue::new_local(Rc::new(QuestionnaireSession { controller, services }));

    let on_select = move |(ordinal, choice): (u8, Choice)| {
        if let Err(err) = session.get_value().controller.select(ordinal, choice) {
            log::warn!("selection ignored: {}", err);
        }
    };

    let on_return = move |_: ()| {
        session.get_value().controller.go_back();
    };

    let on_next = move |_: ()| {
        let session = session.get_value();
        spawn_local(async move {
            if let Advance::Submitted(Err(err)) = session.controller.advance(&session.services).await {
                log::debug!("submission did not complete: {}", err);
            }
        });
    };

    view! {
        <section class="questionnaire">
            <QuestionList store=store on_select=on_select />
            <PagerControls store=store on_return=on_return on_next=on_next />
            <StatusBanner message=Signal::derive(move || store.error().get()) />
            <ScorePanel store=store />
        </section>
    }
    .into_any()
}
