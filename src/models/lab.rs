use serde::{Deserialize, Serialize};

use super::enums::{ExtractionSource, ParameterKey, ParameterStatus};

/// Guidance attached to every extracted parameter.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Recommendations {
    pub medications: Vec<String>,
    pub diet: Vec<String>,
    pub lifestyle: Vec<String>,
    pub follow_up: String,
}

impl Recommendations {
    /// True when no medication, diet, or lifestyle guidance is present.
    pub fn is_empty(&self) -> bool {
        self.medications.is_empty() && self.diet.is_empty() && self.lifestyle.is_empty()
    }
}

/// A lab parameter found in a report, already classified.
///
/// At most one per `key` exists in an analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedParameter {
    pub key: ParameterKey,
    #[serde(rename = "parameter")]
    pub display_name: String,
    /// String form; blood pressure is "systolic/diastolic".
    pub value: String,
    pub unit: String,
    pub status: ParameterStatus,
    #[serde(rename = "normal_range")]
    pub normal_range_text: String,
    pub explanation: String,
    pub source: ExtractionSource,
    pub recommendations: Recommendations,
}
