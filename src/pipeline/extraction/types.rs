use serde::Serialize;

use crate::models::enums::ExtractionSource;

/// One row of a detected lab table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub raw_line: String,
    /// Cells split on tabs or runs of 2+ whitespace characters.
    pub columns: Vec<String>,
    /// 1-based position in the cleaned text.
    pub line_number: usize,
}

/// Numeric reading found for a parameter, before classification.
#[derive(Debug, Clone, PartialEq)]
pub enum Reading {
    Single(f64),
    /// Systolic over diastolic.
    Pair(f64, f64),
}

/// What one extraction stage found for a parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Finding {
    pub reading: Reading,
    pub source: ExtractionSource,
    /// Range printed in the document, overriding the catalog default.
    pub range_override: Option<RangeOverride>,
    /// Unit printed in the document, overriding the catalog default.
    pub unit_override: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RangeOverride {
    pub min: f64,
    pub max: f64,
    /// Range as written in the document.
    pub text: String,
}

impl Finding {
    pub fn new(reading: Reading, source: ExtractionSource) -> Self {
        Self {
            reading,
            source,
            range_override: None,
            unit_override: None,
        }
    }
}
