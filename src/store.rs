//! Page State Stores
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The stores are
//! written only through the view adapters in `view.rs`.

use reactive_stores::Store;
use dass_core::{AnalysisReport, Choice, ScoreReport, Subscale};

/// One rendered questionnaire row
#[derive(Clone, Debug, PartialEq)]
pub struct QuestionRow {
    pub ordinal: u8,
    /// Numbered prompt, e.g. "3. I feel like ..."
    pub label: String,
    pub subscale: Subscale,
    /// Selection at render time
    pub choice: Choice,
}

/// Questionnaire page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct QuestionnaireState {
    pub rows: Vec<QuestionRow>,
    /// The only group whose rows are displayed
    pub visible_group: Option<Subscale>,
    /// "NEXT" or "SUBMIT"
    pub action_label: String,
    /// Return control highlighted (not on the first group)
    pub return_active: bool,
    /// A scoring request is outstanding
    pub pending: bool,
    pub scores: Option<ScoreReport>,
    pub error: Option<String>,
}

/// Symptom analyzer page state
#[derive(Clone, Debug, Default, Store)]
pub struct AnalyzerState {
    pub pending: bool,
    pub analysis: Option<AnalysisReport>,
    pub error: Option<String>,
}

pub type QuestionnaireStore = Store<QuestionnaireState>;
pub type AnalyzerStore = Store<AnalyzerState>;
