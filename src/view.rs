//! Signal-backed Views
//!
//! Implement the core view traits by writing into the page stores; the
//! components render whatever the stores hold.

use dass_core::{
    AnalysisReport, AnalyzerView, AnswerSheet, Item, QuestionnaireView, ReturnStyle, ScoreReport,
    Subscale,
};
use leptos::prelude::*;

use crate::store::{
    AnalyzerStore, AnalyzerStateStoreFields, QuestionRow, QuestionnaireStateStoreFields,
    QuestionnaireStore,
};

#[derive(Clone, Copy)]
pub struct QuestionnaireSignals {
    pub store: QuestionnaireStore,
}

impl QuestionnaireView for QuestionnaireSignals {
    fn render_items(&self, items: &[Item], answers: &AnswerSheet) {
        let rows = items
            .iter()
            .map(|item| QuestionRow {
                ordinal: item.ordinal(),
                label: item.label(),
                subscale: item.subscale(),
                choice: answers.get(item.ordinal()).unwrap_or_default(),
            })
            .collect();
        *self.store.rows().write() = rows;
    }

    fn show_group(&self, subscale: Subscale) {
        *self.store.visible_group().write() = Some(subscale);
    }

    fn set_controls(&self, action_label: &str, return_style: ReturnStyle) {
        *self.store.action_label().write() = action_label.to_string();
        *self.store.return_active().write() = return_style == ReturnStyle::Active;
    }

    fn set_pending(&self, pending: bool) {
        *self.store.pending().write() = pending;
    }

    fn show_scores(&self, report: &ScoreReport) {
        *self.store.scores().write() = Some(report.clone());
    }

    fn show_error(&self, message: &str) {
        *self.store.error().write() = Some(message.to_string());
    }

    fn clear_error(&self) {
        *self.store.error().write() = None;
    }
}

#[derive(Clone, Copy)]
pub struct AnalyzerSignals {
    pub store: AnalyzerStore,
}

impl AnalyzerView for AnalyzerSignals {
    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.alert_with_message(message) {
                log::warn!("alert failed: {:?}", err);
            }
        }
    }

    fn set_pending(&self, pending: bool) {
        *self.store.pending().write() = pending;
    }

    fn show_analysis(&self, report: &AnalysisReport) {
        *self.store.analysis().write() = Some(report.clone());
    }

    fn show_error(&self, message: &str) {
        *self.store.error().write() = Some(message.to_string());
    }

    fn clear_error(&self) {
        *self.store.error().write() = None;
    }
}
