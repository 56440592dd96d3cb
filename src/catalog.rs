//! Parameter catalog: the registry of lab tests the extractor knows about.
//!
//! Definitions are plain data (bundled as `resources/parameters.json`), compiled
//! once into `ParameterSpec`s with their regexes prebuilt. The catalog is
//! immutable after construction and is shared between analyses through `Arc`.

use std::collections::HashSet;
use std::path::Path;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::enums::ParameterKey;

/// Bundled default catalog.
const STANDARD_CATALOG_JSON: &str = include_str!("../resources/parameters.json");

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog {0}: {1}")]
    Io(String, #[source] std::io::Error),

    #[error("Malformed catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid pattern for {key}: {source}")]
    InvalidPattern {
        key: ParameterKey,
        #[source]
        source: regex::Error,
    },

    #[error("Parameter {0} is defined more than once")]
    DuplicateKey(ParameterKey),

    #[error("Parameter {0} has no aliases")]
    NoAliases(ParameterKey),

    #[error("Parameter {key} has an invalid range: {detail}")]
    InvalidRange { key: ParameterKey, detail: String },
}

/// Serializable description of one lab parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterDefinition {
    pub key: ParameterKey,
    pub display_name: String,
    pub aliases: Vec<String>,
    pub unit: String,
    /// For blood pressure: (systolic_max, diastolic_max).
    pub normal_range: (f64, f64),
    #[serde(default)]
    pub borderline_range: Option<(f64, f64)>,
    /// Terms that disqualify a line for this parameter (e.g. "ldl" for total cholesterol).
    #[serde(default)]
    pub exclusions: Vec<String>,
    /// Overrides the generated value pattern.
    #[serde(default)]
    pub pattern: Option<String>,
}

/// Compiled, immutable parameter specification.
#[derive(Debug, Clone)]
pub struct ParameterSpec {
    pub key: ParameterKey,
    pub display_name: String,
    pub aliases: Vec<String>,
    pub unit: String,
    pub normal_range: (f64, f64),
    pub borderline_range: Option<(f64, f64)>,
    alias_regex: Regex,
    /// One pattern per alias, in declared order.
    alias_patterns: Vec<Regex>,
    exclusion_regex: Option<Regex>,
    match_pattern: Regex,
}

impl ParameterSpec {
    pub fn compile(def: ParameterDefinition) -> Result<Self, CatalogError> {
        let key = def.key;
        let aliases: Vec<String> = def
            .aliases
            .iter()
            .map(|a| a.trim().to_lowercase())
            .filter(|a| !a.is_empty())
            .collect();
        if aliases.is_empty() {
            return Err(CatalogError::NoAliases(key));
        }
        validate_ranges(key, def.normal_range, def.borderline_range)?;

        let alternation = word_alternation(&aliases);
        let build = |pattern: &str| {
            Regex::new(pattern).map_err(|source| CatalogError::InvalidPattern { key, source })
        };

        let alias_regex = build(&format!(r"(?i)\b(?:{alternation})\b"))?;
        let alias_patterns = aliases
            .iter()
            .map(|a| build(&format!(r"(?i)\b{}\b", word_alternation(std::slice::from_ref(a)))))
            .collect::<Result<Vec<_>, _>>()?;
        let exclusion_regex = if def.exclusions.is_empty() {
            None
        } else {
            let terms: Vec<String> = def.exclusions.iter().map(|e| e.to_lowercase()).collect();
            Some(build(&format!(r"(?i)\b(?:{})\b", word_alternation(&terms)))?)
        };
        let match_pattern = match &def.pattern {
            Some(p) => build(p)?,
            None => build(&format!(
                r"(?i)\b(?:{alternation})\b(?:\s*\([^)\n]*\))?[\s:=-]*([0-9.]+)"
            ))?,
        };

        Ok(Self {
            key,
            display_name: def.display_name,
            aliases,
            unit: def.unit,
            normal_range: def.normal_range,
            borderline_range: def.borderline_range,
            alias_regex,
            alias_patterns,
            exclusion_regex,
            match_pattern,
        })
    }

    /// True if the text names this parameter and carries none of its exclusion terms.
    pub fn is_mentioned_in(&self, text: &str) -> bool {
        self.alias_regex.is_match(text) && !self.is_excluded(text)
    }

    pub fn is_excluded(&self, text: &str) -> bool {
        self.exclusion_regex
            .as_ref()
            .is_some_and(|re| re.is_match(text))
    }

    /// Per-alias patterns in declared order, for "first alias with a hit wins" searches.
    pub fn alias_patterns(&self) -> &[Regex] {
        &self.alias_patterns
    }

    /// Regex capturing the value group(s) that follow an alias.
    pub fn match_pattern(&self) -> &Regex {
        &self.match_pattern
    }

    /// Catalog default range rendered as "min-max".
    pub fn normal_range_text(&self) -> String {
        format_range(self.normal_range.0, self.normal_range.1)
    }
}

/// Read-only registry of known parameters, in iteration order.
#[derive(Debug, Clone)]
pub struct ParameterCatalog {
    specs: Vec<ParameterSpec>,
}

impl ParameterCatalog {
    /// The bundled catalog.
    pub fn standard() -> Result<Self, CatalogError> {
        Self::from_json(STANDARD_CATALOG_JSON)
    }

    /// Load a catalog file from disk.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::Io(path.display().to_string(), e))?;
        let catalog = Self::from_json(&json)?;
        tracing::info!(
            path = %path.display(),
            parameters = catalog.len(),
            "Loaded parameter catalog"
        );
        Ok(catalog)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let definitions: Vec<ParameterDefinition> = serde_json::from_str(json)?;
        Self::from_definitions(definitions)
    }

    pub fn from_definitions(
        definitions: impl IntoIterator<Item = ParameterDefinition>,
    ) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        let mut specs = Vec::new();
        for def in definitions {
            if !seen.insert(def.key) {
                return Err(CatalogError::DuplicateKey(def.key));
            }
            specs.push(ParameterSpec::compile(def)?);
        }
        Ok(Self { specs })
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParameterSpec> {
        self.specs.iter()
    }

    pub fn get(&self, key: ParameterKey) -> Option<&ParameterSpec> {
        self.specs.iter().find(|s| s.key == key)
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

/// Render a numeric range the way reports print them ("0.6-1.2", "70-100").
pub fn format_range(min: f64, max: f64) -> String {
    format!("{min}-{max}")
}

/// Longest-first, escaped alternation; internal spaces tolerate any whitespace run.
fn word_alternation(terms: &[String]) -> String {
    let mut sorted: Vec<&String> = terms.iter().collect();
    sorted.sort_by(|a, b| b.len().cmp(&a.len()));
    sorted
        .iter()
        .map(|t| regex::escape(t).replace(' ', r"\s+"))
        .collect::<Vec<_>>()
        .join("|")
}

fn validate_ranges(
    key: ParameterKey,
    normal: (f64, f64),
    borderline: Option<(f64, f64)>,
) -> Result<(), CatalogError> {
    if !normal.0.is_finite() || !normal.1.is_finite() {
        return Err(CatalogError::InvalidRange {
            key,
            detail: "normal range must be finite".into(),
        });
    }
    // Blood pressure stores (systolic_max, diastolic_max), not (min, max).
    if key == ParameterKey::BloodPressure {
        return Ok(());
    }
    if normal.0 > normal.1 {
        return Err(CatalogError::InvalidRange {
            key,
            detail: format!("normal min {} exceeds max {}", normal.0, normal.1),
        });
    }
    if let Some((low, high)) = borderline {
        if low > normal.0 || high < normal.1 {
            return Err(CatalogError::InvalidRange {
                key,
                detail: format!(
                    "borderline {low}-{high} must enclose normal {}-{}",
                    normal.0, normal.1
                ),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn definition(key: ParameterKey, aliases: &[&str]) -> ParameterDefinition {
        ParameterDefinition {
            key,
            display_name: key.as_str().to_string(),
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
            unit: "mg/dL".into(),
            normal_range: (70.0, 100.0),
            borderline_range: Some((60.0, 125.0)),
            exclusions: vec![],
            pattern: None,
        }
    }

    #[test]
    fn standard_catalog_loads_all_parameters() {
        let catalog = ParameterCatalog::standard().unwrap();
        assert_eq!(catalog.len(), 19);
        assert!(catalog.get(ParameterKey::BloodPressure).is_some());
        assert!(catalog.get(ParameterKey::Albumin).is_some());
    }

    #[test]
    fn standard_catalog_starts_with_glucose() {
        let catalog = ParameterCatalog::standard().unwrap();
        let first = catalog.iter().next().unwrap();
        assert_eq!(first.key, ParameterKey::Glucose);
        assert_eq!(first.display_name, "Blood Glucose");
    }

    #[test]
    fn aliases_are_word_bounded() {
        let catalog = ParameterCatalog::standard().unwrap();
        let hemoglobin = catalog.get(ParameterKey::Hemoglobin).unwrap();
        assert!(hemoglobin.is_mentioned_in("Hb 13.5"));
        assert!(!hemoglobin.is_mentioned_in("HbA1c 6.1"));

        let alt = catalog.get(ParameterKey::Alt).unwrap();
        assert!(!alt.is_mentioned_in("Low salt diet"));
        assert!(alt.is_mentioned_in("ALT: 40"));
    }

    #[test]
    fn aliases_match_case_insensitively() {
        let catalog = ParameterCatalog::standard().unwrap();
        let glucose = catalog.get(ParameterKey::Glucose).unwrap();
        assert!(glucose.is_mentioned_in("GLUCOSE: 99"));
        assert!(glucose.is_mentioned_in("Fasting  Blood Sugar 99"));
    }

    #[test]
    fn exclusions_disqualify_lines() {
        let catalog = ParameterCatalog::standard().unwrap();
        let cholesterol = catalog.get(ParameterKey::Cholesterol).unwrap();
        assert!(cholesterol.is_mentioned_in("Total Cholesterol: 245"));
        assert!(!cholesterol.is_mentioned_in("LDL Cholesterol: 160"));
        assert!(!cholesterol.is_mentioned_in("HDL Cholesterol: 35"));
    }

    #[test]
    fn generated_pattern_captures_value_after_separator() {
        let catalog = ParameterCatalog::standard().unwrap();
        let alt = catalog.get(ParameterKey::Alt).unwrap();
        let caps = alt.match_pattern().captures("ALT (SGPT): 78 IU/L").unwrap();
        assert_eq!(&caps[1], "78");

        let glucose = catalog.get(ParameterKey::Glucose).unwrap();
        let caps = glucose.match_pattern().captures("FBS = 156 mg/dL").unwrap();
        assert_eq!(&caps[1], "156");
    }

    #[test]
    fn longest_alias_wins_in_pattern() {
        let catalog = ParameterCatalog::standard().unwrap();
        let hdl = catalog.get(ParameterKey::Hdl).unwrap();
        let caps = hdl.match_pattern().captures("HDL Cholesterol: 35 mg/dL").unwrap();
        assert_eq!(&caps[1], "35");
    }

    #[test]
    fn blood_pressure_pattern_has_two_groups() {
        let catalog = ParameterCatalog::standard().unwrap();
        let bp = catalog.get(ParameterKey::BloodPressure).unwrap();
        let caps = bp.match_pattern().captures("Blood Pressure: 135/90 mmHg").unwrap();
        assert_eq!(&caps[1], "135");
        assert_eq!(&caps[2], "90");
        let caps = bp.match_pattern().captures("BP 118\\76").unwrap();
        assert_eq!(&caps[2], "76");
    }

    #[test]
    fn normal_range_text_drops_trailing_zeroes() {
        let catalog = ParameterCatalog::standard().unwrap();
        assert_eq!(catalog.get(ParameterKey::Glucose).unwrap().normal_range_text(), "70-100");
        assert_eq!(catalog.get(ParameterKey::Creatinine).unwrap().normal_range_text(), "0.6-1.2");
    }

    #[test]
    fn duplicate_keys_rejected() {
        let defs = vec![
            definition(ParameterKey::Glucose, &["glucose"]),
            definition(ParameterKey::Glucose, &["sugar"]),
        ];
        let err = ParameterCatalog::from_definitions(defs).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateKey(ParameterKey::Glucose)));
    }

    #[test]
    fn empty_aliases_rejected() {
        let err = ParameterCatalog::from_definitions(vec![definition(ParameterKey::Bmi, &["  "])])
            .unwrap_err();
        assert!(matches!(err, CatalogError::NoAliases(ParameterKey::Bmi)));
    }

    #[test]
    fn borderline_must_enclose_normal() {
        let mut def = definition(ParameterKey::Glucose, &["glucose"]);
        def.borderline_range = Some((75.0, 125.0));
        let err = ParameterCatalog::from_definitions(vec![def]).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidRange { .. }));
    }

    #[test]
    fn invalid_custom_pattern_rejected() {
        let mut def = definition(ParameterKey::Glucose, &["glucose"]);
        def.pattern = Some("glucose([0-9".into());
        let err = ParameterCatalog::from_definitions(vec![def]).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidPattern { key: ParameterKey::Glucose, .. }));
    }

    #[test]
    fn malformed_json_rejected() {
        assert!(matches!(
            ParameterCatalog::from_json("{not json"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn load_reads_catalog_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(
            &path,
            r#"[{"key":"glucose","display_name":"Sugar","aliases":["sugar"],
                 "unit":"mmol/L","normal_range":[3.9,5.5]}]"#,
        )
        .unwrap();

        let catalog = ParameterCatalog::load(&path).unwrap();
        assert_eq!(catalog.len(), 1);
        let spec = catalog.get(ParameterKey::Glucose).unwrap();
        assert_eq!(spec.unit, "mmol/L");
        assert!(spec.borderline_range.is_none());
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = ParameterCatalog::load(Path::new("/nonexistent/catalog.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io(..)));
    }
}
