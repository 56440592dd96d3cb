use std::sync::{Arc, LazyLock};

use regex::Regex;

use super::reference_range::{looks_like_range, parse_range};
use super::table_detect::detect_table_rows;
use super::types::{Finding, RangeOverride, Reading, TableRow};
use crate::catalog::{ParameterCatalog, ParameterSpec};
use crate::intelligence::{recommend, MessageTemplates};
use crate::models::enums::{ExtractionSource, ParameterKey};
use crate::models::lab::ExtractedParameter;
use crate::pipeline::classify::{classify, classify_blood_pressure};

/// Characters scanned after an alias occurrence in the proximity stage.
const PROXIMITY_WINDOW_CHARS: usize = 100;

/// Lowercase markers identifying a unit word in a table row.
const UNIT_MARKERS: &[&str] = &[
    "mg/dl", "g/dl", "iu/l", "u/l", "mmol", "meq", "cells", "/ul", "/cumm", "kg/m", "%",
];

static LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9.]+").unwrap());

/// "A - B" printed after a value on the same line.
static INLINE_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]+(?:\.[0-9]+)?)\s*-\s*([0-9]+(?:\.[0-9]+)?)").unwrap()
});

static PROXIMITY_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[:\s=-]+([0-9.]+)").unwrap());

/// Multi-stage parameter extractor.
///
/// For each catalog entry, in catalog order, the first stage with a hit wins:
/// 1. table rows (after a header line)
/// 2. line pattern (alias, separators, value on the same line)
/// 3. proximity (first number within a window after the alias)
///
/// Blood pressure is only read by the line stage.
pub struct ParameterExtractor {
    catalog: Arc<ParameterCatalog>,
}

impl ParameterExtractor {
    pub fn new(catalog: Arc<ParameterCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &ParameterCatalog {
        &self.catalog
    }

    /// Extract and classify every catalog parameter present in cleaned text.
    ///
    /// At most one result per parameter key, in catalog order.
    pub fn extract(&self, cleaned_text: &str) -> Vec<ExtractedParameter> {
        let lines: Vec<&str> = cleaned_text.lines().collect();
        let rows = detect_table_rows(&lines);

        let parameters: Vec<ExtractedParameter> = self
            .catalog
            .iter()
            .filter_map(|spec| {
                let finding = find_in_table(spec, &rows)
                    .or_else(|| find_in_lines(spec, &lines))
                    .or_else(|| find_by_proximity(spec, &self.catalog, cleaned_text))?;
                tracing::debug!(
                    parameter = spec.key.as_str(),
                    source = finding.source.as_str(),
                    "Parameter found"
                );
                Some(build_parameter(spec, finding))
            })
            .collect();

        tracing::info!(
            found = parameters.len(),
            table_rows = rows.len(),
            "Parameter extraction complete"
        );
        parameters
    }
}

// ---------------------------------------------------------------------------
// Stage 1: table rows
// ---------------------------------------------------------------------------

fn find_in_table(spec: &ParameterSpec, rows: &[TableRow]) -> Option<Finding> {
    if spec.key == ParameterKey::BloodPressure {
        return None;
    }
    rows.iter()
        .filter(|row| spec.is_mentioned_in(&row.raw_line))
        .find_map(finding_from_row)
}

fn finding_from_row(row: &TableRow) -> Option<Finding> {
    // The first column is the test name; range cells are never the value.
    let (value_idx, value) = row
        .columns
        .iter()
        .enumerate()
        .skip(1)
        .filter(|(_, cell)| !looks_like_range(cell))
        .find_map(|(i, cell)| {
            let m = LEADING_NUMBER.find(cell)?;
            parse_number(m.as_str()).map(|v| (i, v))
        })?;

    let range_override = row.columns[value_idx + 1..]
        .iter()
        .filter(|cell| looks_like_range(cell))
        .find_map(|cell| {
            parse_range(cell).map(|(min, max)| RangeOverride {
                min,
                max,
                text: cell.clone(),
            })
        });

    let unit_override = row.columns.iter().skip(1).find_map(|cell| unit_word(cell));

    let mut finding = Finding::new(Reading::Single(value), ExtractionSource::Table);
    finding.range_override = range_override;
    finding.unit_override = unit_override;
    Some(finding)
}

/// First word of a cell that names a unit, as written.
fn unit_word(cell: &str) -> Option<String> {
    cell.split_whitespace()
        .filter(|word| !word.starts_with(|c: char| c.is_ascii_digit() || c == '.'))
        .find(|word| {
            let lower = word.to_lowercase();
            UNIT_MARKERS.iter().any(|marker| lower.contains(marker))
        })
        .map(|word| word.trim_matches(|c| c == '(' || c == ')').to_string())
}

// ---------------------------------------------------------------------------
// Stage 2: line pattern
// ---------------------------------------------------------------------------

fn find_in_lines(spec: &ParameterSpec, lines: &[&str]) -> Option<Finding> {
    lines
        .iter()
        .filter(|line| spec.is_mentioned_in(line))
        .find_map(|line| match spec.key {
            ParameterKey::BloodPressure => blood_pressure_on_line(spec, line),
            _ => single_value_on_line(spec, line),
        })
}

fn single_value_on_line(spec: &ParameterSpec, line: &str) -> Option<Finding> {
    let (value, value_end) = spec.match_pattern().captures_iter(line).find_map(|caps| {
        let m = caps.get(1)?;
        parse_number(m.as_str()).map(|v| (v, m.end()))
    })?;

    let mut finding = Finding::new(Reading::Single(value), ExtractionSource::Line);
    finding.range_override = inline_range(&line[value_end..], value);
    Some(finding)
}

/// Range printed after the value, adopted only when it plausibly belongs to it
/// (lower bound below the value, value under twice the upper bound).
fn inline_range(rest: &str, value: f64) -> Option<RangeOverride> {
    let caps = INLINE_RANGE.captures(rest)?;
    let min: f64 = caps[1].parse().ok()?;
    let max: f64 = caps[2].parse().ok()?;
    if min > max || !(min < value && value < max * 2.0) {
        return None;
    }
    Some(RangeOverride {
        min,
        max,
        text: caps[0].to_string(),
    })
}

fn blood_pressure_on_line(spec: &ParameterSpec, line: &str) -> Option<Finding> {
    spec.match_pattern().captures_iter(line).find_map(|caps| {
        let systolic = parse_number(caps.get(1)?.as_str())?;
        let diastolic = parse_number(caps.get(2)?.as_str())?;
        Some(Finding::new(
            Reading::Pair(systolic, diastolic),
            ExtractionSource::Line,
        ))
    })
}

// ---------------------------------------------------------------------------
// Stage 3: proximity
// ---------------------------------------------------------------------------

fn find_by_proximity(
    spec: &ParameterSpec,
    catalog: &ParameterCatalog,
    text: &str,
) -> Option<Finding> {
    if spec.key == ParameterKey::BloodPressure {
        return None;
    }
    // Aliases in declared order; the first alias with a value nearby wins.
    spec.alias_patterns().iter().find_map(|alias| {
        let occurrence = alias
            .find_iter(text)
            .find(|m| !spec.is_excluded(line_containing(text, m.start())))?;
        let window = char_window(&text[occurrence.end()..], PROXIMITY_WINDOW_CHARS);
        let window = until_other_parameter(spec, catalog, window);
        let value = PROXIMITY_VALUE
            .captures_iter(window)
            .find_map(|caps| parse_number(caps.get(1)?.as_str()))?;
        Some(Finding::new(Reading::Single(value), ExtractionSource::Proximity))
    })
}

fn line_containing(text: &str, pos: usize) -> &str {
    let start = text[..pos].rfind('\n').map_or(0, |i| i + 1);
    let end = text[pos..].find('\n').map_or(text.len(), |i| pos + i);
    &text[start..end]
}

/// Cut a proximity window before the first following line that names another
/// parameter. The alias's own line is kept whole.
fn until_other_parameter<'a>(
    spec: &ParameterSpec,
    catalog: &ParameterCatalog,
    window: &'a str,
) -> &'a str {
    let Some(first_break) = window.find('\n') else {
        return window;
    };
    let mut offset = first_break + 1;
    for line in window[offset..].split_inclusive('\n') {
        let names_other = catalog
            .iter()
            .any(|other| other.key != spec.key && other.is_mentioned_in(line));
        if names_other {
            return &window[..offset];
        }
        offset += line.len();
    }
    window
}

fn char_window(text: &str, chars: usize) -> &str {
    match text.char_indices().nth(chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

// ---------------------------------------------------------------------------
// Assembly
// ---------------------------------------------------------------------------

/// Numeric token to value. Trailing periods ("245.") are sentence punctuation.
fn parse_number(token: &str) -> Option<f64> {
    let trimmed = token.trim_end_matches('.');
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn build_parameter(spec: &ParameterSpec, finding: Finding) -> ExtractedParameter {
    let unit = finding.unit_override.unwrap_or_else(|| spec.unit.clone());

    let (value, status, normal_range_text, explanation) = match finding.reading {
        Reading::Pair(systolic, diastolic) => {
            let value = format!("{systolic}/{diastolic}");
            let status = classify_blood_pressure(systolic, diastolic);
            let explanation = MessageTemplates::blood_pressure_explanation(&value, &unit, status);
            let range = format!("<{}/{}", spec.normal_range.0, spec.normal_range.1);
            (value, status, range, explanation)
        }
        Reading::Single(v) => {
            let (range, range_text) = match finding.range_override {
                Some(r) => ((r.min, r.max), r.text),
                None => (spec.normal_range, spec.normal_range_text()),
            };
            let value = format!("{v}");
            let status = classify(v, range, spec.borderline_range);
            let explanation = MessageTemplates::explanation(
                &spec.display_name,
                &value,
                &unit,
                &range_text,
                status,
            );
            (value, status, range_text, explanation)
        }
    };

    ExtractedParameter {
        key: spec.key,
        display_name: spec.display_name.clone(),
        value,
        unit,
        status,
        normal_range_text,
        explanation,
        source: finding.source,
        recommendations: recommend(spec.key, status),
    }
}
