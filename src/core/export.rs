// SentiScope - core/export.rs
//
// CSV and JSON export of the currently filtered reviews.
// Core layer: writes to any Write trait object.

use crate::core::model::Review;
use crate::util::constants::MAX_EXPORT_ROWS;
use crate::util::error::ExportError;
use std::io::Write;
use std::path::Path;

/// Export filtered reviews to CSV format.
///
/// Writes: sentiment, language, length, label, review_content
pub fn export_csv<W: Write>(
    reviews: &[Review],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    check_row_cap(reviews.len())?;

    let mut csv_writer = csv::Writer::from_writer(writer);

    // Header
    csv_writer
        .write_record(["sentiment", "language", "length", "label", "review_content"])
        .map_err(|e| ExportError::Csv {
            path: export_path.to_path_buf(),
            source: e,
        })?;

    let mut count = 0;
    for review in reviews {
        let length = review.length.map(|l| l.to_string()).unwrap_or_default();
        let label = review.label.map(|l| l.to_string()).unwrap_or_default();

        csv_writer
            .write_record([
                review.sentiment.label(),
                review.language.label(),
                &length,
                &label,
                review.content.as_deref().unwrap_or(""),
            ])
            .map_err(|e| ExportError::Csv {
                path: export_path.to_path_buf(),
                source: e,
            })?;
        count += 1;
    }

    csv_writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    Ok(count)
}

/// Export filtered reviews to JSON format (array of objects).
pub fn export_json<W: Write>(
    reviews: &[Review],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    check_row_cap(reviews.len())?;

    serde_json::to_writer_pretty(writer, reviews).map_err(|e| ExportError::Json {
        path: export_path.to_path_buf(),
        source: e,
    })?;
    Ok(reviews.len())
}

fn check_row_cap(count: usize) -> Result<(), ExportError> {
    if count > MAX_EXPORT_ROWS {
        return Err(ExportError::TooManyRows {
            count,
            max: MAX_EXPORT_ROWS,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::enrich::enrich;
    use std::path::PathBuf;

    fn sample_reviews() -> Vec<Review> {
        vec![
            enrich(0, Some("Great service".to_string()), Some(1)),
            enrich(1, None, Some(-1)),
        ]
    }

    #[test]
    fn test_csv_export() {
        let reviews = sample_reviews();
        let mut buf = Vec::new();
        let count = export_csv(&reviews, &mut buf, &PathBuf::from("out.csv")).unwrap();
        assert_eq!(count, 2);

        let output = String::from_utf8(buf).unwrap();
        assert!(output.starts_with("sentiment,language,length,label,review_content"));
        assert!(output.contains("Positive,English,13,1,Great service"));
        // Null content serialises as empty fields, not a crash.
        assert!(output.contains("Negative,Unknown,,-1,"));
    }

    #[test]
    fn test_json_export() {
        let reviews = sample_reviews();
        let mut buf = Vec::new();
        let count = export_json(&reviews, &mut buf, &PathBuf::from("out.json")).unwrap();
        assert_eq!(count, 2);

        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("Great service"));
        assert!(output.contains("\"content\": null"));
    }
}
