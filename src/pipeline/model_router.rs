//! Diagnostic model router.
//!
//! Scores each specialized model from the classified parameters it covers:
//! - ABNORMAL (HIGH/LOW) adds 2
//! - BORDERLINE_* adds 1
//!
//! Models with a positive score are ranked by score (ties keep `ModelId::ALL`
//! order) and the top three are returned.

use crate::models::enums::{ModelId, ParameterKey, Priority};
use crate::models::lab::ExtractedParameter;
use crate::models::report::ModelSuggestion;

const ABNORMAL_WEIGHT: u32 = 2;
const BORDERLINE_WEIGHT: u32 = 1;
const CONFIDENCE_PER_POINT: u32 = 25;
const MAX_CONFIDENCE: u32 = 95;
const HIGH_PRIORITY_SCORE: u32 = 3;
const MAX_SUGGESTIONS: usize = 3;
const MAX_CONTRIBUTORS: usize = 3;

/// Parameters feeding each model's score.
///
/// Albumin feeds both liver and kidney.
pub fn model_parameters(model: ModelId) -> &'static [ParameterKey] {
    match model {
        ModelId::Heart => &[
            ParameterKey::Cholesterol,
            ParameterKey::Ldl,
            ParameterKey::Hdl,
            ParameterKey::Triglycerides,
            ParameterKey::BloodPressure,
        ],
        ModelId::Liver => &[
            ParameterKey::Alt,
            ParameterKey::Ast,
            ParameterKey::Bilirubin,
            ParameterKey::Albumin,
        ],
        ModelId::Kidney => &[
            ParameterKey::Creatinine,
            ParameterKey::BloodUrea,
            ParameterKey::Albumin,
            ParameterKey::Sodium,
            ParameterKey::Potassium,
        ],
        ModelId::Diabetes => &[ParameterKey::Glucose, ParameterKey::Hba1c],
    }
}

/// Rank diagnostic models for a set of classified parameters.
pub fn route_models(parameters: &[ExtractedParameter]) -> Vec<ModelSuggestion> {
    let mut suggestions: Vec<ModelSuggestion> = ModelId::ALL
        .iter()
        .filter_map(|&model| score_model(model, parameters))
        .collect();

    // Stable sort: equal scores stay in ModelId::ALL order.
    suggestions.sort_by(|a, b| b.score.cmp(&a.score));
    suggestions.truncate(MAX_SUGGESTIONS);

    tracing::debug!(
        suggestions = suggestions.len(),
        top = suggestions.first().map(|s| s.model_id.as_str()),
        "Diagnostic models ranked"
    );
    suggestions
}

fn score_model(model: ModelId, parameters: &[ExtractedParameter]) -> Option<ModelSuggestion> {
    let covered = model_parameters(model);
    let mut score = 0;
    let mut contributors = Vec::new();

    for p in parameters.iter().filter(|p| covered.contains(&p.key)) {
        let weight = if p.status.is_abnormal() {
            ABNORMAL_WEIGHT
        } else if p.status.is_borderline() {
            BORDERLINE_WEIGHT
        } else {
            continue;
        };
        score += weight;
        if contributors.len() < MAX_CONTRIBUTORS {
            contributors.push(p.display_name.clone());
        }
    }

    if score == 0 {
        return None;
    }

    Some(ModelSuggestion {
        model_id: model,
        score,
        // Bounded by MAX_CONFIDENCE, fits in u8.
        confidence: (score * CONFIDENCE_PER_POINT).min(MAX_CONFIDENCE) as u8,
        priority: if score >= HIGH_PRIORITY_SCORE {
            Priority::High
        } else {
            Priority::Medium
        },
        contributing_parameters: contributors,
    })
}
