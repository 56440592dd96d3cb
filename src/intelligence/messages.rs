use crate::models::enums::ParameterStatus;

/// Message template builder for report wording.
/// No alarm wording, no diagnosis: findings are described, never named as a disease.
pub struct MessageTemplates;

pub const DISCLAIMER: &str = "This is an AI-assisted analysis and not a medical diagnosis. \
     Always consult a qualified healthcare professional for proper interpretation \
     of your medical reports.";

impl MessageTemplates {
    /// One sentence describing a single reading against its range.
    pub fn explanation(
        display_name: &str,
        value: &str,
        unit: &str,
        range_text: &str,
        status: ParameterStatus,
    ) -> String {
        match status {
            ParameterStatus::Normal => format!(
                "Your {display_name} is {value} {unit}, \
                 which is within the normal range ({range_text} {unit})."
            ),
            ParameterStatus::BorderlineLow => format!(
                "Your {display_name} is {value} {unit}, \
                 which is below the normal range ({range_text} {unit}). \
                 Consider consulting your doctor."
            ),
            ParameterStatus::Low => format!(
                "Your {display_name} is {value} {unit}, which is significantly below normal. \
                 Please consult your doctor."
            ),
            ParameterStatus::BorderlineHigh => format!(
                "Your {display_name} is {value} {unit}, \
                 slightly above the normal range ({range_text} {unit}). \
                 Monitor and consider lifestyle changes."
            ),
            ParameterStatus::High => format!(
                "Your {display_name} is {value} {unit}, \
                 which is above the normal range ({range_text} {unit}). \
                 Please consult your doctor."
            ),
        }
    }

    /// Blood pressure reads as a pair and has no low state.
    pub fn blood_pressure_explanation(value: &str, unit: &str, status: ParameterStatus) -> String {
        let verdict = match status {
            ParameterStatus::Normal => "This is within the normal range.",
            ParameterStatus::BorderlineHigh => {
                "This is slightly elevated. Consider lifestyle modifications."
            }
            _ => "This is high. Please consult your doctor.",
        };
        format!("Your blood pressure is {value} {unit}. {verdict}")
    }

    /// Opening line naming abnormal results.
    pub fn summary_critical(names: &[&str]) -> String {
        format!(
            "Critical findings: {} outside the normal range.",
            names.join(", ")
        )
    }

    pub fn summary_monitor(names: &[&str]) -> String {
        format!("Parameters to monitor: {} (borderline).", names.join(", "))
    }

    pub fn summary_all_normal(count: usize) -> String {
        format!("All {count} detected parameters are within normal limits.")
    }

    pub fn summary_multi_system_risk(abnormal: usize) -> String {
        format!(
            "{abnormal} abnormal parameters indicate an elevated overall health risk \
             that warrants comprehensive evaluation."
        )
    }

    pub fn summary_action(any_abnormal: bool) -> &'static str {
        if any_abnormal {
            "Recommended action: consult a healthcare provider within 48-72 hours \
             to review these results."
        } else {
            "Recommended action: schedule follow-up testing in 4-6 weeks."
        }
    }

    pub fn insufficient_text() -> String {
        "The report text is too short to analyze. \
         Please upload a clearer scan or a text-based PDF of the report."
            .to_string()
    }

    pub fn no_parameters() -> String {
        "No medical parameters detected in the report. \
         Please ensure the report contains values like glucose, hemoglobin, cholesterol, etc."
            .to_string()
    }

    pub fn low_resolution(width: u32, height: u32) -> String {
        format!(
            "Image resolution is low ({width}x{height}). OCR accuracy may be reduced; \
             a higher-resolution scan is recommended."
        )
    }
}
