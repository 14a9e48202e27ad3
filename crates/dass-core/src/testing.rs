//! In-memory views and services for tests.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::answers::AnswerSheet;
use crate::error::ServiceError;
use crate::inventory::{Choice, Item, Subscale};
use crate::paginator::ReturnStyle;
use crate::report::{AnalysisReport, ScoreReport};
use crate::service::{AnalysisService, ScoringService, ServiceResult};
use crate::view::{AnalyzerView, QuestionnaireView};
use crate::wire::{AnalysisRequest, AnalysisResponse, ScoreRequest, ScoreResponse};

// ========================
// Views
// ========================

#[derive(Debug, Default)]
pub(crate) struct QuestionnaireScreen {
    /// Rendered rows: label, selected choice, visible
    pub rows: Vec<(Item, String, Choice, bool)>,
    pub action_label: String,
    pub return_style: Option<ReturnStyle>,
    pub pending: bool,
    pub scores: Option<ScoreReport>,
    pub error: Option<String>,
}

#[derive(Debug, Default)]
pub(crate) struct MemoryView {
    pub screen: RefCell<QuestionnaireScreen>,
}

impl MemoryView {
    /// Groups with at least one visible row
    pub fn visible_groups(&self) -> BTreeSet<Subscale> {
        self.screen
            .borrow()
            .rows
            .iter()
            .filter(|(.., visible)| *visible)
            .map(|(item, ..)| item.subscale())
            .collect()
    }

    /// Exactly one group fully visible, every other row hidden
    pub fn assert_single_group(&self, expected: Subscale) {
        let screen = self.screen.borrow();
        assert_eq!(screen.rows.len(), 21);
        for (item, _, _, visible) in &screen.rows {
            assert_eq!(*visible, item.subscale() == expected, "item {}", item.ordinal());
        }
    }
}

impl QuestionnaireView for MemoryView {
    fn render_items(&self, items: &[Item], answers: &AnswerSheet) {
        let mut screen = self.screen.borrow_mut();
        screen.rows = items
            .iter()
            .map(|item| (*item, item.label(), answers.get(item.ordinal()).unwrap_or_default(), true))
            .collect();
    }

    fn show_group(&self, subscale: Subscale) {
        for row in self.screen.borrow_mut().rows.iter_mut() {
            row.3 = row.0.subscale() == subscale;
        }
    }

    fn set_controls(&self, action_label: &str, return_style: ReturnStyle) {
        let mut screen = self.screen.borrow_mut();
        screen.action_label = action_label.to_string();
        screen.return_style = Some(return_style);
    }

    fn set_pending(&self, pending: bool) {
        self.screen.borrow_mut().pending = pending;
    }

    fn show_scores(&self, report: &ScoreReport) {
        self.screen.borrow_mut().scores = Some(report.clone());
    }

    fn show_error(&self, message: &str) {
        self.screen.borrow_mut().error = Some(message.to_string());
    }

    fn clear_error(&self) {
        self.screen.borrow_mut().error = None;
    }
}

#[derive(Debug, Default)]
pub(crate) struct AnalyzerScreen {
    pub alerts: Vec<String>,
    pub pending: bool,
    pub analysis: Option<AnalysisReport>,
    pub error: Option<String>,
}

#[derive(Debug, Default)]
pub(crate) struct MemoryAnalyzerView {
    pub screen: RefCell<AnalyzerScreen>,
}

impl AnalyzerView for MemoryAnalyzerView {
    fn alert(&self, message: &str) {
        self.screen.borrow_mut().alerts.push(message.to_string());
    }

    fn set_pending(&self, pending: bool) {
        self.screen.borrow_mut().pending = pending;
    }

    fn show_analysis(&self, report: &AnalysisReport) {
        self.screen.borrow_mut().analysis = Some(report.clone());
    }

    fn show_error(&self, message: &str) {
        self.screen.borrow_mut().error = Some(message.to_string());
    }

    fn clear_error(&self) {
        self.screen.borrow_mut().error = None;
    }
}

// ========================
// Services
// ========================

/// Records requests and answers with a canned result. With a gate the
/// call suspends until the gate is notified.
pub(crate) struct FakeService<Req, Resp> {
    result: ServiceResult<Resp>,
    gate: Option<Rc<Notify>>,
    pub requests: RefCell<Vec<Req>>,
}

impl<Req: Clone, Resp: Clone> FakeService<Req, Resp> {
    pub fn ok(resp: Resp) -> Self {
        Self { result: Ok(resp), gate: None, requests: RefCell::new(Vec::new()) }
    }

    pub fn failing(err: ServiceError) -> Self {
        Self { result: Err(err), gate: None, requests: RefCell::new(Vec::new()) }
    }

    pub fn gated(mut self, gate: Rc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn calls(&self) -> usize {
        self.requests.borrow().len()
    }

    async fn respond(&self, request: &Req) -> ServiceResult<Resp> {
        self.requests.borrow_mut().push(request.clone());
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.result.clone()
    }
}

pub(crate) type FakeScoring = FakeService<ScoreRequest, ScoreResponse>;
pub(crate) type FakeAnalysis = FakeService<AnalysisRequest, AnalysisResponse>;

#[async_trait(?Send)]
impl ScoringService for FakeScoring {
    async fn compute(&self, request: &ScoreRequest) -> ServiceResult<ScoreResponse> {
        self.respond(request).await
    }
}

#[async_trait(?Send)]
impl AnalysisService for FakeAnalysis {
    async fn analyze(&self, request: &AnalysisRequest) -> ServiceResult<AnalysisResponse> {
        self.respond(request).await
    }
}
