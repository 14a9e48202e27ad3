//! Display Reports
//!
//! Turns service responses into the strings shown in each display region.

use serde_json::Value;

use crate::inventory::Subscale;
use crate::wire::{AnalysisResponse, ScoreResponse};

/// Shown when a field is missing or cannot be interpreted
pub const PLACEHOLDER: &str = "N/A";

/// Renders a value verbatim, integral floats without a fraction
pub fn display_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => PLACEHOLDER.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                match n.as_f64() {
                    Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => (f as i64).to_string(),
                    Some(f) => f.to_string(),
                    None => n.to_string(),
                }
            }
        }
        Some(other) => other.to_string(),
    }
}

/// Numeric reading of a value; numeric strings count
fn numeric(value: Option<&Value>) -> Option<f64> {
    let number = match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|f| f.is_finite())
}

// ========================
// Scores
// ========================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscaleScore {
    pub subscale: Subscale,
    pub score: String,
    pub severity: String,
}

/// Display strings for every score region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreReport {
    pub subscales: [SubscaleScore; 3],
    /// Percentage with two decimals, e.g. `67.00%`
    pub likelihood: String,
    pub magnitude: String,
}

impl ScoreReport {
    pub fn from_response(resp: &ScoreResponse) -> Self {
        let subscales = Subscale::ALL.map(|subscale| SubscaleScore {
            subscale,
            score: display_value(resp.score(subscale)),
            severity: display_value(resp.severity(subscale)),
        });

        let likelihood = numeric(resp.depression_increase_likelihood.as_ref());

        // Without a magnitude from the service the likelihood value is shown
        let magnitude = match resp.depression_increase_magnitude.as_ref() {
            Some(value) if !value.is_null() => display_value(Some(value)),
            _ => likelihood
                .map(|l| format!("{:.2}", l))
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
        };

        Self {
            subscales,
            likelihood: likelihood
                .map(|l| format!("{:.2}%", l * 100.0))
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            magnitude,
        }
    }

    pub fn subscale(&self, subscale: Subscale) -> &SubscaleScore {
        &self.subscales[subscale.index()]
    }
}

// ========================
// Symptom analysis
// ========================

/// Display strings for the analyzer regions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisReport {
    /// Every matched keyword annotated with its category
    pub symptoms: String,
    pub counts: [String; 3],
}

impl AnalysisReport {
    pub fn from_response(resp: &AnalysisResponse) -> Self {
        let fixed = Subscale::ALL.map(|s| s.label());
        let extra = resp
            .matched_symptoms
            .keys()
            .map(String::as_str)
            .filter(|category| !fixed.contains(category));

        let symptoms = fixed
            .into_iter()
            .chain(extra)
            .flat_map(|category| {
                resp.matched_symptoms
                    .get(category)
                    .into_iter()
                    .flatten()
                    .map(move |keyword| format!("{} ({})", keyword, category))
            })
            .collect::<Vec<_>>()
            .join(", ");

        let counts = Subscale::ALL.map(|s| {
            resp.symptom_counts
                .get(s.label())
                .map(|n| n.to_string())
                .unwrap_or_else(|| PLACEHOLDER.to_string())
        });

        Self { symptoms, counts }
    }

    pub fn count(&self, subscale: Subscale) -> &str {
        &self.counts[subscale.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_score_report_example() {
        let resp: ScoreResponse = serde_json::from_value(json!({
            "depression_score": 12,
            "depression_severity": "Moderate",
            "anxiety_score": 5,
            "anxiety_severity": "Mild",
            "stress_score": 8,
            "stress_severity": "Normal",
            "depression_increase_likelihood": 0.67
        }))
        .unwrap();
        let report = ScoreReport::from_response(&resp);

        assert_eq!(report.subscale(Subscale::Depression).score, "12");
        assert_eq!(report.subscale(Subscale::Depression).severity, "Moderate");
        assert_eq!(report.subscale(Subscale::Anxiety).severity, "Mild");
        assert_eq!(report.subscale(Subscale::Stress).score, "8");
        assert_eq!(report.likelihood, "67.00%");
        assert_eq!(report.magnitude, "0.67");
    }

    #[test]
    fn test_magnitude_shown_verbatim() {
        let resp: ScoreResponse = serde_json::from_value(json!({
            "depression_increase_likelihood": 0.1234,
            "depression_increase_magnitude": -3.456
        }))
        .unwrap();
        let report = ScoreReport::from_response(&resp);
        assert_eq!(report.likelihood, "12.34%");
        assert_eq!(report.magnitude, "-3.456");

        let resp: ScoreResponse = serde_json::from_value(json!({
            "depression_increase_likelihood": 0.5,
            "depression_increase_magnitude": "Large"
        }))
        .unwrap();
        assert_eq!(ScoreReport::from_response(&resp).magnitude, "Large");
    }

    #[test]
    fn test_missing_fields_render_placeholder() {
        let report = ScoreReport::from_response(&ScoreResponse::default());
        assert_eq!(report.subscale(Subscale::Anxiety).score, PLACEHOLDER);
        assert_eq!(report.likelihood, PLACEHOLDER);
        assert_eq!(report.magnitude, PLACEHOLDER);

        let resp: ScoreResponse = serde_json::from_value(json!({
            "depression_increase_likelihood": "high"
        }))
        .unwrap();
        assert_eq!(ScoreReport::from_response(&resp).likelihood, PLACEHOLDER);
    }

    #[test]
    fn test_display_value_numbers() {
        assert_eq!(display_value(Some(&json!(12.0))), "12");
        assert_eq!(display_value(Some(&json!(12.5))), "12.5");
        assert_eq!(display_value(Some(&json!(true))), "true");
        assert_eq!(display_value(Some(&Value::Null)), PLACEHOLDER);
    }

    #[test]
    fn test_analysis_report_lists_every_category() {
        let resp: AnalysisResponse = serde_json::from_value(json!({
            "matched_symptoms": {"Depression": ["hopeless"], "Anxiety": [], "Stress": ["tense"]},
            "symptom_counts": {"Depression": 1, "Anxiety": 0, "Stress": 1}
        }))
        .unwrap();
        let report = AnalysisReport::from_response(&resp);

        assert_eq!(report.symptoms, "hopeless (Depression), tense (Stress)");
        assert_eq!(report.count(Subscale::Depression), "1");
        assert_eq!(report.count(Subscale::Anxiety), "0");
        assert_eq!(report.count(Subscale::Stress), "1");
    }

    #[test]
    fn test_analysis_report_fixed_order_then_extras() {
        let resp: AnalysisResponse = serde_json::from_value(json!({
            "matched_symptoms": {
                "Anger": ["furious"],
                "Stress": ["nervous", "agitated"],
                "Anxiety": ["panic"]
            }
        }))
        .unwrap();
        let report = AnalysisReport::from_response(&resp);

        assert_eq!(
            report.symptoms,
            "panic (Anxiety), nervous (Stress), agitated (Stress), furious (Anger)"
        );
        assert_eq!(report.count(Subscale::Stress), PLACEHOLDER);
    }
}
