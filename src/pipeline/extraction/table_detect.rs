use super::types::TableRow;

/// Words that mark a lab table header line (case-insensitive substring match).
const HEADER_KEYWORDS: &[&str] = &[
    "test",
    "investigation",
    "parameter",
    "result",
    "value",
    "reference",
    "range",
    "unit",
    "normal",
];

/// Minimum trimmed length for a table row.
const MIN_ROW_CHARS: usize = 5;

/// Detect table rows in cleaned report lines.
///
/// Every line after a header candidate that splits into 2+ columns becomes a
/// row. Rows following several headers are reported once, in line order.
/// No header means no rows.
pub fn detect_table_rows(lines: &[&str]) -> Vec<TableRow> {
    let Some(header_idx) = lines.iter().position(|l| is_header_candidate(l)) else {
        return Vec::new();
    };

    let rows: Vec<TableRow> = lines
        .iter()
        .enumerate()
        .skip(header_idx + 1)
        .filter_map(|(idx, line)| {
            let trimmed = line.trim();
            if trimmed.chars().count() < MIN_ROW_CHARS {
                return None;
            }
            let columns = split_columns(trimmed);
            (columns.len() >= 2).then(|| TableRow {
                raw_line: line.to_string(),
                columns,
                line_number: idx + 1,
            })
        })
        .collect();

    tracing::debug!(
        header_line = header_idx + 1,
        rows = rows.len(),
        "Table rows detected"
    );
    rows
}

/// Heuristic: a header line names at least one table column keyword.
fn is_header_candidate(line: &str) -> bool {
    let lower = line.to_lowercase();
    HEADER_KEYWORDS.iter().any(|k| lower.contains(k))
}

/// Split a line on tabs or runs of 2+ whitespace characters.
///
/// Single spaces stay inside a cell ("Blood Sugar", "12.0 - 16.0").
fn split_columns(text: &str) -> Vec<String> {
    let mut columns = Vec::new();
    let mut cell = String::new();
    let mut pending_space: Option<char> = None;

    for ch in text.chars() {
        if ch == '\t' {
            push_cell(&mut columns, &mut cell);
            pending_space = None;
        } else if ch.is_whitespace() {
            match pending_space {
                // Second whitespace in a row: column break
                Some(_) => {
                    push_cell(&mut columns, &mut cell);
                    pending_space = None;
                }
                None if cell.is_empty() => {}
                None => pending_space = Some(ch),
            }
        } else {
            if let Some(space) = pending_space.take() {
                cell.push(space);
            }
            cell.push(ch);
        }
    }
    push_cell(&mut columns, &mut cell);

    columns
}

fn push_cell(columns: &mut Vec<String>, cell: &mut String) {
    let trimmed = cell.trim();
    if !trimmed.is_empty() {
        columns.push(trimmed.to_string());
    }
    cell.clear();
}
