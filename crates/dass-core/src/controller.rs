//! Questionnaire Controller
//!
//! Owns the answer sheet and the paginator, drives a `QuestionnaireView`
//! and submits the sheet to a `ScoringService` after the last group.
//!
//! All operations take `&self`: state sits in `Cell`/`RefCell` so a
//! pending submission never holds a borrow across an `.await` and the
//! page stays interactive while it is outstanding.

use std::cell::{Cell, RefCell};

use crate::answers::AnswerSheet;
use crate::error::{QuestionnaireError, SubmitError};
use crate::inventory::{Choice, Questionnaire, Subscale};
use crate::paginator::{Paginator, Step};
use crate::pending::PendingGuard;
use crate::report::ScoreReport;
use crate::service::ScoringService;
use crate::view::QuestionnaireView;
use crate::wire::ScoreRequest;

/// Outcome of the advance control
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    Moved(Subscale),
    /// Wrapped to the first group and submitted the sheet
    Submitted(Result<ScoreReport, SubmitError>),
}

pub struct QuestionnaireController<V> {
    view: V,
    questionnaire: Questionnaire,
    answers: RefCell<AnswerSheet>,
    paginator: Cell<Paginator>,
    submitting: Cell<bool>,
}

impl<V: QuestionnaireView> QuestionnaireController<V> {
    pub fn new(view: V) -> Self {
        Self {
            view,
            questionnaire: Questionnaire::new(),
            answers: RefCell::new(AnswerSheet::new()),
            paginator: Cell::new(Paginator::new()),
            submitting: Cell::new(false),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn questionnaire(&self) -> &Questionnaire {
        &self.questionnaire
    }

    pub fn current_group(&self) -> Subscale {
        self.paginator.get().current()
    }

    pub fn answers(&self) -> AnswerSheet {
        self.answers.borrow().clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.get()
    }

    /// Draw every item and show the current group
    pub fn render(&self) {
        self.view.render_items(self.questionnaire.items(), &self.answers.borrow());
        self.refresh();
    }

    pub fn select(&self, ordinal: u8, choice: Choice) -> Result<(), QuestionnaireError> {
        self.answers.borrow_mut().set(ordinal, choice)
    }

    /// Move to the next group, or wrap to the first one after the last.
    /// Does not submit; see [`advance`](Self::advance).
    pub(crate) fn step(&self) -> Step {
        let mut paginator = self.paginator.get();
        let step = paginator.advance();
        self.paginator.set(paginator);
        log::debug!("advance: {:?}, now on {:?}", step, paginator.current());
        self.refresh();
        step
    }

    /// Next/Submit control. Submits exactly once when wrapping around.
    pub async fn advance<S>(&self, scoring: &S) -> Advance
    where
        S: ScoringService + ?Sized,
    {
        match self.step() {
            Step::Moved(subscale) => Advance::Moved(subscale),
            Step::Wrapped => Advance::Submitted(self.submit(scoring).await),
        }
    }

    /// Return control. No-op on the first group.
    pub fn go_back(&self) -> Subscale {
        let mut paginator = self.paginator.get();
        if paginator.retreat() {
            self.paginator.set(paginator);
            log::debug!("return: now on {:?}", paginator.current());
        }
        self.refresh();
        paginator.current()
    }

    /// Send the sheet to the scoring service and display the result.
    ///
    /// Refused while a previous submission is outstanding. On failure the
    /// score regions keep whatever they showed before.
    pub async fn submit<S>(&self, scoring: &S) -> Result<ScoreReport, SubmitError>
    where
        S: ScoringService + ?Sized,
    {
        let Some(_guard) = PendingGuard::acquire(&self.submitting) else {
            log::warn!("submission refused: previous one still pending");
            return Err(SubmitError::InFlight);
        };

        let request = ScoreRequest::from_sheet(&self.answers.borrow());
        for subscale in Subscale::ALL {
            log::info!("{} answers: {:?}", subscale.label(), request.answers(subscale));
        }

        self.view.set_pending(true);
        let outcome = scoring.compute(&request).await;
        self.view.set_pending(false);

        match outcome {
            Ok(resp) => {
                let report = ScoreReport::from_response(&resp);
                self.view.clear_error();
                self.view.show_scores(&report);
                Ok(report)
            }
            Err(err) => {
                let err = SubmitError::from(err);
                log::error!("Error computing DASS: {}", err);
                self.view.show_error(&err.to_string());
                Err(err)
            }
        }
    }

    fn refresh(&self) {
        let paginator = self.paginator.get();
        self.view.show_group(paginator.current());
        self.view.set_controls(paginator.action_label(), paginator.return_style());
    }
}
