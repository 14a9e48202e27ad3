//! Service Layer - Core Traits
//!
//! Abstract interfaces for the external scoring and analysis services.
//! The HTTP implementation lives in `http`; tests use in-memory fakes.

use async_trait::async_trait;

use crate::error::ServiceError;
use crate::wire::{AnalysisRequest, AnalysisResponse, ScoreRequest, ScoreResponse};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Computes subscale scores from a filled-in answer sheet.
///
/// Futures are not `Send`: in the browser they run on the single UI thread.
#[async_trait(?Send)]
pub trait ScoringService {
    async fn compute(&self, request: &ScoreRequest) -> ServiceResult<ScoreResponse>;
}

/// Extracts symptom keywords from free text
#[async_trait(?Send)]
pub trait AnalysisService {
    async fn analyze(&self, request: &AnalysisRequest) -> ServiceResult<AnalysisResponse>;
}
