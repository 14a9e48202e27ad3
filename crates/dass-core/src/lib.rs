//! DASS-21 Questionnaire Core
//!
//! Platform-agnostic half of the questionnaire client:
//! - inventory / answers / paginator: the fixed items and session state
//! - controller / analyzer: the two page components, written against view traits
//! - service / http: the external scoring and analysis services
//! - wire / report: JSON bodies and their display strings

mod analyzer;
mod answers;
mod config;
mod controller;
mod error;
mod http;
mod inventory;
mod paginator;
mod pending;
mod report;
mod service;
mod view;
mod wire;

#[cfg(test)]
mod testing;

pub use analyzer::{TextAnalyzer, EMPTY_INPUT_ALERT};
pub use answers::AnswerSheet;
pub use config::{ServiceConfig, ANALYSIS_PATH, DEFAULT_BASE_URL, SCORING_PATH};
pub use controller::{Advance, QuestionnaireController};
pub use error::{AnalyzeError, QuestionnaireError, ServiceError, SubmitError};
pub use http::HttpServices;
pub use inventory::{Choice, Item, Questionnaire, Subscale, ITEMS_PER_SUBSCALE, ITEM_COUNT, QUESTIONS};
pub use paginator::{Paginator, ReturnStyle, Step};
pub use report::{display_value, AnalysisReport, ScoreReport, SubscaleScore, PLACEHOLDER};
pub use service::{AnalysisService, ScoringService, ServiceResult};
pub use view::{AnalyzerView, QuestionnaireView};
pub use wire::{AnalysisRequest, AnalysisResponse, ScoreRequest, ScoreResponse};
