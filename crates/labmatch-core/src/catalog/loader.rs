//! Tabular catalog file parsing.
//!
//! Column layout is positional, not header-driven: the header row is
//! discarded without validation and fields are read by index.

use std::path::{Path, PathBuf};

use csv::ReaderBuilder;

use super::{LoadError, LoadResult};
use crate::models::TestDefinition;

/// Fixed column positions in every catalog source file.
const COL_TEST_NAME: usize = 0;
const COL_CATEGORY: usize = 1;
const COL_PANEL: usize = 2;
const COL_DESCRIPTION: usize = 3;
const COL_RANGE_MIN: usize = 4;
const COL_RANGE_MAX: usize = 5;
const COL_RANGE_TYPE: usize = 6;
const COL_UNITS: usize = 7;
const COL_WHY_IT_MATTERS: usize = 8;

/// List every `.csv` file in `dir`, sorted by file name.
///
/// Sorting keeps the cross-file concatenation order reproducible.
pub fn list_catalog_files(dir: &Path) -> LoadResult<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| LoadError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| LoadError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);

        if is_csv {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(files)
}

/// Parse one catalog file into definitions, preserving row order.
///
/// The first row is treated as a header and discarded unconditionally.
/// Rows whose test name is empty after cleaning are dropped silently. Any
/// decode failure rejects the whole file so a corrupt source contributes
/// zero rows.
pub fn load_file(path: &Path) -> LoadResult<Vec<TestDefinition>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| LoadError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

    let mut tests = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| LoadError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        if let Some(def) = parse_record(&record) {
            tests.push(def);
        }
    }

    Ok(tests)
}

/// Convert one data row into a definition.
///
/// Missing trailing columns default to empty strings (numeric fields to
/// `None`). Returns `None` when the test name is empty after cleaning.
fn parse_record(record: &csv::StringRecord) -> Option<TestDefinition> {
    let test_name = clean_field(record.get(COL_TEST_NAME).unwrap_or(""));
    if test_name.is_empty() {
        return None;
    }

    let range_type = clean_field(record.get(COL_RANGE_TYPE).unwrap_or(""));

    Some(TestDefinition {
        test_name,
        category: clean_field(record.get(COL_CATEGORY).unwrap_or("")),
        panel: clean_field(record.get(COL_PANEL).unwrap_or("")),
        description: clean_field(record.get(COL_DESCRIPTION).unwrap_or("")),
        reference_range_min: parse_bound(record.get(COL_RANGE_MIN).unwrap_or("")),
        reference_range_max: parse_bound(record.get(COL_RANGE_MAX).unwrap_or("")),
        reference_range_type: if range_type.is_empty() {
            "range".into()
        } else {
            range_type
        },
        units: clean_field(record.get(COL_UNITS).unwrap_or("")),
        why_it_matters: clean_field(record.get(COL_WHY_IT_MATTERS).unwrap_or("")),
    })
}

/// Trim surrounding whitespace and strip literal quote characters.
fn clean_field(raw: &str) -> String {
    raw.trim().replace('"', "")
}

/// Parse a numeric bound, treating anything unparsable as "no known bound".
///
/// `None` is deliberately distinct from `Some(0.0)`.
fn parse_bound(raw: &str) -> Option<f64> {
    clean_field(raw).parse::<f64>().ok()
}
