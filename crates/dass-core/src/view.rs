//! View Layer - Core Traits
//!
//! What the controllers need from whatever draws the page. The browser
//! implementation is backed by Leptos signals; tests use in-memory views.

use crate::answers::AnswerSheet;
use crate::inventory::{Item, Subscale};
use crate::paginator::ReturnStyle;
use crate::report::{AnalysisReport, ScoreReport};

/// Display surface of the questionnaire
pub trait QuestionnaireView {
    /// Build one labelled selector per item, in order, pre-selected
    /// to the item's current answer
    fn render_items(&self, items: &[Item], answers: &AnswerSheet);

    /// Make the given group the only visible one
    fn show_group(&self, subscale: Subscale);

    fn set_controls(&self, action_label: &str, return_style: ReturnStyle);

    /// A scoring request is outstanding
    fn set_pending(&self, pending: bool);

    fn show_scores(&self, report: &ScoreReport);

    fn show_error(&self, message: &str);

    fn clear_error(&self);
}

/// Display surface of the text analyzer
pub trait AnalyzerView {
    /// Blocking notice for the user
    fn alert(&self, message: &str);

    fn set_pending(&self, pending: bool);

    fn show_analysis(&self, report: &AnalysisReport);

    fn show_error(&self, message: &str);

    fn clear_error(&self);
}
