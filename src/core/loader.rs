// SentiScope - core/loader.rs
//
// Dataset loading: parse a CSV or JSON review table into the enriched
// in-memory dataset. Dispatch by file extension.
//
// The loader is the only place enrichment runs; everything downstream
// treats the resulting ReviewDataset as read-only.

use std::path::Path;
use std::time::Instant;

use serde_json::Value as JsonValue;

use crate::core::enrich::enrich;
use crate::core::model::{Review, ReviewDataset};
use crate::util::constants::MAX_DATASET_ROWS;
use crate::util::error::LoadError;

/// Required source column holding the review text.
pub const CONTENT_COLUMN: &str = "review_content";

/// Required source column holding the integer sentiment code.
pub const LABEL_COLUMN: &str = "label";

/// Load a review dataset from a file.
///
/// Supported formats:
/// * `.csv`  – header row with `review_content` and `label` columns;
///             any other columns are ignored
/// * `.json` – array of record objects with the same two keys
///
/// A failure here is a halting condition for the caller: no partial
/// dataset is ever returned.
pub fn load_reviews(path: &Path) -> Result<ReviewDataset, LoadError> {
    let started = Instant::now();

    if !path.exists() {
        return Err(LoadError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let (reviews, truncated_rows) = match ext.as_str() {
        "csv" => load_csv(path)?,
        "json" => load_json(path)?,
        other => {
            return Err(LoadError::UnsupportedExtension {
                path: path.to_path_buf(),
                extension: other.to_string(),
            });
        }
    };

    tracing::info!(
        path = %path.display(),
        rows = reviews.len(),
        truncated = truncated_rows,
        "Dataset loaded"
    );

    Ok(ReviewDataset::from_reviews(
        path.to_path_buf(),
        reviews,
        truncated_rows,
        started.elapsed(),
    ))
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// An empty `review_content` cell is a null value (matching the source
/// table's missing-data convention); a missing or non-integer `label` cell
/// enriches to an Unknown sentiment.
fn load_csv(path: &Path) -> Result<(Vec<Review>, usize), LoadError> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| LoadError::Csv {
        path: path.to_path_buf(),
        source: e,
    })?;

    let headers = reader
        .headers()
        .map_err(|e| LoadError::Csv {
            path: path.to_path_buf(),
            source: e,
        })?
        .clone();

    let content_idx = headers
        .iter()
        .position(|h| h == CONTENT_COLUMN)
        .ok_or_else(|| LoadError::MissingColumn {
            path: path.to_path_buf(),
            column: CONTENT_COLUMN,
        })?;
    let label_idx = headers
        .iter()
        .position(|h| h == LABEL_COLUMN)
        .ok_or_else(|| LoadError::MissingColumn {
            path: path.to_path_buf(),
            column: LABEL_COLUMN,
        })?;

    let mut reviews = Vec::new();
    let mut truncated_rows = 0usize;

    for result in reader.records() {
        let record = result.map_err(|e| LoadError::Csv {
            path: path.to_path_buf(),
            source: e,
        })?;

        if reviews.len() >= MAX_DATASET_ROWS {
            truncated_rows += 1;
            continue;
        }

        let content = match record.get(content_idx) {
            None | Some("") => None,
            Some(text) => Some(text.to_string()),
        };
        let label = record
            .get(label_idx)
            .and_then(|raw| raw.trim().parse::<i64>().ok());

        reviews.push(enrich(reviews.len() as u64, content, label));
    }

    Ok((reviews, truncated_rows))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented):
///
/// ```json
/// [
///   { "review_content": "Great service", "label": 1 },
///   { "review_content": null, "label": 0 },
///   ...
/// ]
/// ```
///
/// Unknown keys are ignored. A `null` or missing `review_content` is a null
/// text value; a missing or non-integer `label` enriches to Unknown.
fn load_json(path: &Path) -> Result<(Vec<Review>, usize), LoadError> {
    let text = std::fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let root: JsonValue = serde_json::from_str(&text).map_err(|e| LoadError::Json {
        path: path.to_path_buf(),
        source: e,
    })?;

    let records = root.as_array().ok_or_else(|| LoadError::JsonShape {
        path: path.to_path_buf(),
        detail: "expected a top-level array of review objects".to_string(),
    })?;

    let mut reviews = Vec::with_capacity(records.len().min(MAX_DATASET_ROWS));
    let mut truncated_rows = 0usize;

    for (row, record) in records.iter().enumerate() {
        let obj = record.as_object().ok_or_else(|| LoadError::JsonShape {
            path: path.to_path_buf(),
            detail: format!("row {row} is not an object"),
        })?;

        if reviews.len() >= MAX_DATASET_ROWS {
            truncated_rows += 1;
            continue;
        }

        let content = match obj.get(CONTENT_COLUMN) {
            None | Some(JsonValue::Null) => None,
            Some(JsonValue::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
        };
        let label = obj.get(LABEL_COLUMN).and_then(|v| v.as_i64());

        reviews.push(enrich(reviews.len() as u64, content, label));
    }

    Ok((reviews, truncated_rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{Language, Sentiment};
    use std::io::Write;

    fn write_fixture(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_csv_load_enriches_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(
            &dir,
            "reviews.csv",
            "review_content,label\nGreat service,1\nخدمة سيئة,-1\nOkay,0\n",
        );

        let ds = load_reviews(&path).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.reviews[0].sentiment, Sentiment::Positive);
        assert_eq!(ds.reviews[0].language, Language::English);
        assert_eq!(ds.reviews[1].sentiment, Sentiment::Negative);
        assert_eq!(ds.reviews[1].language, Language::Arabic);
        assert_eq!(ds.reviews[2].length, Some(4));
    }

    #[test]
    fn test_csv_empty_cell_is_null_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(&dir, "reviews.csv", "review_content,label\n,0\n");

        let ds = load_reviews(&path).unwrap();
        assert_eq!(ds.reviews[0].content, None);
        assert_eq!(ds.reviews[0].language, Language::Unknown);
        assert_eq!(ds.reviews[0].length, None);
        assert_eq!(ds.summary.null_content_rows, 1);
    }

    #[test]
    fn test_csv_extra_columns_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(
            &dir,
            "reviews.csv",
            "rating,review_content,store,label\n5,Lovely,downtown,1\n",
        );

        let ds = load_reviews(&path).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.reviews[0].content.as_deref(), Some("Lovely"));
        assert_eq!(ds.reviews[0].label, Some(1));
    }

    #[test]
    fn test_csv_missing_label_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(&dir, "reviews.csv", "review_content\nGreat\n");

        let result = load_reviews(&path);
        assert!(
            matches!(result, Err(LoadError::MissingColumn { column, .. }) if column == LABEL_COLUMN),
            "expected MissingColumn, got {result:?}"
        );
    }

    #[test]
    fn test_csv_malformed_label_is_unknown() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(
            &dir,
            "reviews.csv",
            "review_content,label\nFine,not-a-number\nMeh,7\n",
        );

        let ds = load_reviews(&path).unwrap();
        assert_eq!(ds.reviews[0].label, None);
        assert_eq!(ds.reviews[0].sentiment, Sentiment::Unknown);
        assert_eq!(ds.reviews[1].label, Some(7));
        assert_eq!(ds.reviews[1].sentiment, Sentiment::Unknown);
        assert_eq!(ds.summary.unknown_label_rows, 2);
    }

    #[test]
    fn test_json_load_with_null_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(
            &dir,
            "reviews.json",
            r#"[
                {"review_content": "Amazing pizza", "label": 1},
                {"review_content": null, "label": -1}
            ]"#,
        );

        let ds = load_reviews(&path).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.reviews[1].content, None);
        assert_eq!(ds.reviews[1].language, Language::Unknown);
        assert_eq!(ds.reviews[1].sentiment, Sentiment::Negative);
    }

    #[test]
    fn test_json_top_level_must_be_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(&dir, "reviews.json", r#"{"review_content": "x"}"#);

        let result = load_reviews(&path);
        assert!(matches!(result, Err(LoadError::JsonShape { .. })));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = load_reviews(std::path::Path::new("no-such-dataset.csv"));
        assert!(matches!(result, Err(LoadError::FileNotFound { .. })));
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(&dir, "reviews.parquet", "binary");

        let result = load_reviews(&path);
        assert!(
            matches!(result, Err(LoadError::UnsupportedExtension { ref extension, .. }) if extension == "parquet")
        );
    }
}
