//! Wire Models
//!
//! JSON bodies exchanged with the scoring and analysis services.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::answers::AnswerSheet;
use crate::inventory::{Choice, Subscale};

/// Body of a scoring request: one seven-entry array per subscale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRequest {
    #[serde(rename = "dAnswers")]
    pub d_answers: Vec<Choice>,
    #[serde(rename = "aAnswers")]
    pub a_answers: Vec<Choice>,
    #[serde(rename = "sAnswers")]
    pub s_answers: Vec<Choice>,
}

impl ScoreRequest {
    pub fn from_sheet(sheet: &AnswerSheet) -> Self {
        Self {
            d_answers: sheet.for_subscale(Subscale::Depression),
            a_answers: sheet.for_subscale(Subscale::Anxiety),
            s_answers: sheet.for_subscale(Subscale::Stress),
        }
    }

    pub fn answers(&self, subscale: Subscale) -> &[Choice] {
        match subscale {
            Subscale::Depression => &self.d_answers,
            Subscale::Anxiety => &self.a_answers,
            Subscale::Stress => &self.s_answers,
        }
    }
}

/// Scoring response. Fields are kept loose: any of them may be missing
/// or carry an unexpected type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreResponse {
    pub depression_score: Option<Value>,
    pub depression_severity: Option<Value>,
    pub anxiety_score: Option<Value>,
    pub anxiety_severity: Option<Value>,
    pub stress_score: Option<Value>,
    pub stress_severity: Option<Value>,
    pub depression_increase_likelihood: Option<Value>,
    pub depression_increase_magnitude: Option<Value>,
}

impl ScoreResponse {
    pub fn score(&self, subscale: Subscale) -> Option<&Value> {
        match subscale {
            Subscale::Depression => self.depression_score.as_ref(),
            Subscale::Anxiety => self.anxiety_score.as_ref(),
            Subscale::Stress => self.stress_score.as_ref(),
        }
    }

    pub fn severity(&self, subscale: Subscale) -> Option<&Value> {
        match subscale {
            Subscale::Depression => self.depression_severity.as_ref(),
            Subscale::Anxiety => self.anxiety_severity.as_ref(),
            Subscale::Stress => self.stress_severity.as_ref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub text: String,
}

/// Analysis response: matched keywords and counts per category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisResponse {
    pub matched_symptoms: BTreeMap<String, Vec<String>>,
    pub symptom_counts: BTreeMap<String, u32>,
}
