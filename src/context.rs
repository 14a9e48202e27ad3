//! Application Context
//!
//! Shared state provided via Leptos Context API.

use dass_core::ServiceConfig;
use leptos::prelude::*;

/// Pages of the app, one per tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Questionnaire,
    Detect,
    Model,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Questionnaire, Page::Detect, Page::Model];

    pub fn title(self) -> &'static str {
        match self {
            Page::Questionnaire => "Questionnaire",
            Page::Detect => "Detect",
            Page::Model => "Model",
        }
    }
}

/// App-wide state provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Currently shown page
    pub page: RwSignal<Page>,
    config: StoredValue<ServiceConfig>,
}

impl AppContext {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            page: RwSignal::new(Page::Questionnaire),
            config: StoredValue::new(config),
        }
    }

    /// Service endpoints
    pub fn config(&self) -> ServiceConfig {
        self.config.get_value()
    }
}

/// Endpoints baked in at build time.
///
/// A CSR bundle has no runtime environment, so overrides come from
/// `DASS_SERVICE_URL`, `DASS_SCORING_URL` and `DASS_ANALYSIS_URL` when
/// the bundle is built.
pub fn build_time_config() -> ServiceConfig {
    ServiceConfig::default().with_overrides(
        option_env!("DASS_SERVICE_URL"),
        option_env!("DASS_SCORING_URL"),
        option_env!("DASS_ANALYSIS_URL"),
    )
}
