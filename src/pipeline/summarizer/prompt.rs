use crate::models::lab::ExtractedParameter;

pub const SUMMARY_SYSTEM_PROMPT: &str = r#"
You are a clinical report summarization assistant. You write a short, calm
summary of laboratory findings for a patient.

RULES — ABSOLUTE, NO EXCEPTIONS:
1. Describe ONLY the findings listed below. Never add values that are not listed.
2. NEVER state a diagnosis or name a disease the patient has.
3. NEVER prescribe or change medication.
4. Use plain language and no alarm wording.
5. End with a recommendation to review the results with a healthcare professional.
6. Answer in at most 5 sentences of plain text, no lists, no Markdown.
"#;

/// Build the summary prompt from classified parameters.
pub fn build_summary_prompt(parameters: &[ExtractedParameter]) -> String {
    let mut flagged = Vec::new();
    let mut normal = Vec::new();
    for p in parameters {
        let line = format!(
            "- {}: {} {} ({}, reference {})",
            p.display_name, p.value, p.unit, p.status, p.normal_range_text
        );
        if p.status.is_abnormal() || p.status.is_borderline() {
            flagged.push(line);
        } else {
            normal.push(line);
        }
    }

    let flagged_block = if flagged.is_empty() {
        "None".to_string()
    } else {
        flagged.join("\n")
    };
    let normal_block = if normal.is_empty() {
        "None".to_string()
    } else {
        normal.join("\n")
    };

    format!(
        r#"<findings>
Outside the normal range:
{flagged_block}

Within the normal range:
{normal_block}
</findings>

Summarize these laboratory findings for the patient."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::{ExtractionSource, ParameterKey, ParameterStatus};
    use crate::models::lab::Recommendations;

    fn param(name: &str, status: ParameterStatus) -> ExtractedParameter {
        ExtractedParameter {
            key: ParameterKey::Glucose,
            display_name: name.into(),
            value: "245".into(),
            unit: "mg/dL".into(),
            status,
            normal_range_text: "70-100".into(),
            explanation: String::new(),
            source: ExtractionSource::Line,
            recommendations: Recommendations::default(),
        }
    }

    #[test]
    fn flagged_and_normal_listed_separately() {
        let prompt = build_summary_prompt(&[
            param("Blood Glucose", ParameterStatus::High),
            param("Hemoglobin", ParameterStatus::Normal),
        ]);
        let flagged_at = prompt.find("Blood Glucose").unwrap();
        let normal_at = prompt.find("Within the normal range").unwrap();
        assert!(flagged_at < normal_at);
        assert!(prompt.contains("- Blood Glucose: 245 mg/dL (HIGH, reference 70-100)"));
    }

    #[test]
    fn empty_sections_say_none() {
        let prompt = build_summary_prompt(&[param("Hemoglobin", ParameterStatus::Normal)]);
        assert!(prompt.contains("Outside the normal range:\nNone"));
    }

    #[test]
    fn system_prompt_forbids_diagnosis() {
        assert!(SUMMARY_SYSTEM_PROMPT.contains("NEVER state a diagnosis"));
    }
}
