//! Text Symptom Analyzer
//!
//! Sends free text to the analysis service and shows the matched
//! keywords of every category together with the per-category counts.

use std::cell::Cell;

use crate::error::AnalyzeError;
use crate::pending::PendingGuard;
use crate::report::AnalysisReport;
use crate::service::AnalysisService;
use crate::view::AnalyzerView;
use crate::wire::AnalysisRequest;

pub const EMPTY_INPUT_ALERT: &str = "Please enter text before submitting";

pub struct TextAnalyzer<V> {
    view: V,
    analyzing: Cell<bool>,
}

impl<V: AnalyzerView> TextAnalyzer<V> {
    pub fn new(view: V) -> Self {
        Self { view, analyzing: Cell::new(false) }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn is_analyzing(&self) -> bool {
        self.analyzing.get()
    }

    /// Empty text is never sent; any other text goes out as typed
    pub async fn analyze<S>(&self, text: &str, service: &S) -> Result<AnalysisReport, AnalyzeError>
    where
        S: AnalysisService + ?Sized,
    {
        if text.is_empty() {
            log::warn!("analysis skipped: empty input");
            self.view.alert(EMPTY_INPUT_ALERT);
            return Err(AnalyzeError::EmptyInput);
        }

        let Some(_guard) = PendingGuard::acquire(&self.analyzing) else {
            log::warn!("analysis refused: previous one still pending");
            return Err(AnalyzeError::InFlight);
        };

        log::info!("analyzing {} characters of text", text.chars().count());
        let request = AnalysisRequest { text: text.to_string() };

        self.view.set_pending(true);
        let outcome = service.analyze(&request).await;
        self.view.set_pending(false);

        match outcome {
            Ok(resp) => {
                log::debug!("analysis result: {:?}", resp);
                let report = AnalysisReport::from_response(&resp);
                self.view.clear_error();
                self.view.show_analysis(&report);
                Ok(report)
            }
            Err(err) => {
                let err = AnalyzeError::from(err);
                log::error!("Error analyzing text: {}", err);
                self.view.show_error(&err.to_string());
                Err(err)
            }
        }
    }
}
