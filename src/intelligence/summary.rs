//! Deterministic clinical summary, used whenever the AI summary is unavailable.

use super::messages::MessageTemplates;
use crate::models::lab::ExtractedParameter;

/// Abnormal parameters named in the summary.
const MAX_CRITICAL_NAMES: usize = 4;
/// Borderline parameters named in the summary.
const MAX_MONITOR_NAMES: usize = 3;
/// Abnormal count at which the multi-system risk line is added.
const RISK_LINE_THRESHOLD: usize = 3;

/// Build the rule-based summary from classified parameters.
pub fn rule_based_summary(parameters: &[ExtractedParameter]) -> String {
    let abnormal: Vec<&str> = parameters
        .iter()
        .filter(|p| p.status.is_abnormal())
        .map(|p| p.display_name.as_str())
        .collect();
    let borderline: Vec<&str> = parameters
        .iter()
        .filter(|p| p.status.is_borderline())
        .map(|p| p.display_name.as_str())
        .collect();

    let mut lines = Vec::new();
    if !abnormal.is_empty() {
        lines.push(MessageTemplates::summary_critical(
            &abnormal[..abnormal.len().min(MAX_CRITICAL_NAMES)],
        ));
    }
    if !borderline.is_empty() {
        lines.push(MessageTemplates::summary_monitor(
            &borderline[..borderline.len().min(MAX_MONITOR_NAMES)],
        ));
    }
    if abnormal.is_empty() && borderline.is_empty() && !parameters.is_empty() {
        lines.push(MessageTemplates::summary_all_normal(parameters.len()));
    }
    if abnormal.len() >= RISK_LINE_THRESHOLD {
        lines.push(MessageTemplates::summary_multi_system_risk(abnormal.len()));
    }
    lines.push(MessageTemplates::summary_action(!abnormal.is_empty()).to_string());

    lines.join(" ")
}
