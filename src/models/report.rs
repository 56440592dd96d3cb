use serde::{Deserialize, Serialize};

use super::enums::{ModelId, OverallRisk, Priority, SummarySource};
use super::lab::ExtractedParameter;

/// Resolution of the scanned image the text came from, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityHint {
    pub width: u32,
    pub height: u32,
}

/// Routing suggestion for a specialized diagnostic model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSuggestion {
    pub model_id: ModelId,
    pub score: u32,
    /// 0-95, capped.
    pub confidence: u8,
    pub priority: Priority,
    /// Display names, at most 3.
    pub contributing_parameters: Vec<String>,
}

/// Serialized form of a `ModelSuggestion`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedModel {
    pub model: ModelId,
    pub name: String,
    /// Percentage string, e.g. "75%".
    pub confidence: String,
    pub reason: String,
    pub priority: Priority,
}

impl From<&ModelSuggestion> for SuggestedModel {
    fn from(suggestion: &ModelSuggestion) -> Self {
        Self {
            model: suggestion.model_id,
            name: suggestion.model_id.display_name().to_string(),
            confidence: format!("{}%", suggestion.confidence),
            reason: format!(
                "Findings in {}",
                suggestion.contributing_parameters.join(", ")
            ),
            priority: suggestion.priority,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusCounts {
    pub normal: usize,
    pub borderline: usize,
    pub abnormal: usize,
}

impl StatusCounts {
    pub fn tally(parameters: &[ExtractedParameter]) -> Self {
        let mut counts = Self::default();
        for p in parameters {
            if p.status.is_abnormal() {
                counts.abnormal += 1;
            } else if p.status.is_borderline() {
                counts.borderline += 1;
            } else {
                counts.normal += 1;
            }
        }
        counts
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub overall_risk: OverallRisk,
    pub requires_immediate_attention: bool,
    pub follow_up_recommended: bool,
}

impl RiskAssessment {
    pub fn from_counts(counts: &StatusCounts) -> Self {
        let overall_risk = if counts.abnormal >= 3 {
            OverallRisk::High
        } else if counts.abnormal > 0 {
            OverallRisk::Moderate
        } else {
            OverallRisk::Low
        };

        Self {
            overall_risk,
            requires_immediate_attention: counts.abnormal >= 3,
            follow_up_recommended: counts.abnormal > 0 || counts.borderline > 0,
        }
    }
}

/// Structured outcome of analyzing one report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub parameters: Vec<ExtractedParameter>,
    pub total_found: usize,
    pub status_counts: StatusCounts,
    pub clinical_summary: String,
    pub summary_source: SummarySource,
    pub suggested_models: Vec<SuggestedModel>,
    pub risk_assessment: RiskAssessment,
    /// Guidance when nothing could be analyzed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality_note: Option<String>,
    pub disclaimer: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::{ExtractionSource, ParameterKey, ParameterStatus};
    use crate::models::lab::Recommendations;

    fn param(status: ParameterStatus) -> ExtractedParameter {
        ExtractedParameter {
            key: ParameterKey::Glucose,
            display_name: "Blood Glucose".into(),
            value: "100".into(),
            unit: "mg/dL".into(),
            status,
            normal_range_text: "70-100".into(),
            explanation: String::new(),
            source: ExtractionSource::Line,
            recommendations: Recommendations::default(),
        }
    }

    #[test]
    fn tally_buckets_statuses() {
        let params = vec![
            param(ParameterStatus::Normal),
            param(ParameterStatus::BorderlineHigh),
            param(ParameterStatus::BorderlineLow),
            param(ParameterStatus::High),
        ];
        let counts = StatusCounts::tally(&params);
        assert_eq!(counts, StatusCounts { normal: 1, borderline: 2, abnormal: 1 });
    }

    #[test]
    fn risk_levels_follow_abnormal_count() {
        let low = RiskAssessment::from_counts(&StatusCounts {
            normal: 4,
            borderline: 0,
            abnormal: 0,
        });
        assert_eq!(low.overall_risk, OverallRisk::Low);
        assert!(!low.follow_up_recommended);

        let moderate = RiskAssessment::from_counts(&StatusCounts {
            normal: 0,
            borderline: 0,
            abnormal: 2,
        });
        assert_eq!(moderate.overall_risk, OverallRisk::Moderate);
        assert!(!moderate.requires_immediate_attention);

        let high = RiskAssessment::from_counts(&StatusCounts {
            normal: 0,
            borderline: 0,
            abnormal: 3,
        });
        assert_eq!(high.overall_risk, OverallRisk::High);
        assert!(high.requires_immediate_attention);
        assert!(high.follow_up_recommended);
    }

    #[test]
    fn borderline_only_recommends_follow_up() {
        let risk = RiskAssessment::from_counts(&StatusCounts {
            normal: 1,
            borderline: 1,
            abnormal: 0,
        });
        assert_eq!(risk.overall_risk, OverallRisk::Low);
        assert!(risk.follow_up_recommended);
    }

    #[test]
    fn suggested_model_formats_confidence() {
        let suggestion = ModelSuggestion {
            model_id: ModelId::Heart,
            score: 6,
            confidence: 95,
            priority: Priority::High,
            contributing_parameters: vec!["LDL Cholesterol".into(), "Triglycerides".into()],
        };
        let view = SuggestedModel::from(&suggestion);
        assert_eq!(view.confidence, "95%");
        assert_eq!(view.name, "Heart Disease Prediction");
        assert_eq!(view.reason, "Findings in LDL Cholesterol, Triglycerides");
        let json = serde_json::to_string(&view).unwrap();
        assert!(json.contains("\"model\":\"heart\""));
        assert!(json.contains("\"priority\":\"High\""));
    }
}
