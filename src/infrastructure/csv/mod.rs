// ============================================================
// BATCH CSV EMITTER
// ============================================================
// Flatten extracted tags into records and write one CSV per batch

use std::path::Path;

use crate::domain::error::{AppError, Result};
use crate::domain::tag::{FileTags, TagRecord};

/// Fixed header row of every batch CSV (and the combined CSV).
pub const CSV_HEADER: [&str; 5] = ["File Name", "SCADA Tag", "Row Index", "Column Index", "Data"];

/// Flatten a batch's extraction results into CSV records.
///
/// Order is preserved: file order, then tag order within each file, then
/// timestep order. Row and column indices are 1-based in the output.
pub fn flatten_records(results: &[FileTags]) -> Vec<TagRecord> {
    let mut records = Vec::new();
    for file_tags in results {
        for tag in &file_tags.tags {
            for (i, value) in tag.values.iter().enumerate() {
                records.push(TagRecord {
                    file_name: file_tags.file_name.clone(),
                    tag_name: tag.name.clone(),
                    row_index: i + 1,
                    column_index: tag.anchor_column + 1,
                    value: value.clone(),
                });
            }
        }
    }
    records
}

/// Write a batch's records to `path`.
///
/// Returns the number of records written. When the batch produced no
/// records at all, no file is created and zero is returned; the caller
/// decides whether that is worth logging.
pub fn write_batch_csv(results: &[FileTags], path: &Path) -> Result<usize> {
    let records = flatten_records(results);
    if records.is_empty() {
        return Ok(0);
    }

    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| AppError::BatchWrite(format!("{}: {}", path.display(), e)))?;

    writer
        .write_record(CSV_HEADER)
        .map_err(|e| AppError::BatchWrite(format!("{}: {}", path.display(), e)))?;

    for record in &records {
        writer
            .write_record([
                record.file_name.as_str(),
                record.tag_name.as_str(),
                &record.row_index.to_string(),
                &record.column_index.to_string(),
                record.value.as_str(),
            ])
            .map_err(|e| AppError::BatchWrite(format!("{}: {}", path.display(), e)))?;
    }

    writer
        .flush()
        .map_err(|e| AppError::BatchWrite(format!("{}: {}", path.display(), e)))?;

    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tag::Tag;

    fn sample_results() -> Vec<FileTags> {
        vec![FileTags {
            file_name: "plant_a.xlsx".to_string(),
            tags: vec![
                Tag {
                    name: "FIC_101.PV".to_string(),
                    anchor_row: 2,
                    anchor_column: 0,
                    values: vec!["1".to_string(), "2".to_string()],
                },
                Tag {
                    name: "Name, with comma".to_string(),
                    anchor_row: 2,
                    anchor_column: 3,
                    values: vec!["a\"b".to_string(), String::new()],
                },
            ],
        }]
    }

    #[test]
    fn test_flatten_preserves_order_and_indices() {
        let records = flatten_records(&sample_results());
        assert_eq!(records.len(), 4);
        assert_eq!(records[0].tag_name, "FIC_101.PV");
        assert_eq!(records[0].row_index, 1);
        assert_eq!(records[0].column_index, 1);
        assert_eq!(records[1].row_index, 2);
        assert_eq!(records[2].tag_name, "Name, with comma");
        assert_eq!(records[2].column_index, 4);
    }

    #[test]
    fn test_empty_batch_writes_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Batch_1_scada_tags.csv");
        let written = write_batch_csv(&[], &path).unwrap();
        assert_eq!(written, 0);
        assert!(!path.exists());
    }

    #[test]
    fn test_round_trip_through_csv_reader() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Batch_1_scada_tags.csv");
        let results = sample_results();
        let written = write_batch_csv(&results, &path).unwrap();
        assert_eq!(written, 4);

        let mut reader = csv::Reader::from_path(&path).unwrap();
        assert_eq!(
            reader.headers().unwrap(),
            &csv::StringRecord::from(CSV_HEADER.to_vec())
        );

        let rows: Vec<csv::StringRecord> =
            reader.records().map(|r| r.unwrap()).collect();
        let expected = flatten_records(&results);
        assert_eq!(rows.len(), expected.len());
        for (row, record) in rows.iter().zip(&expected) {
            assert_eq!(&row[0], record.file_name.as_str());
            assert_eq!(&row[1], record.tag_name.as_str());
            assert_eq!(row[2].parse::<usize>().unwrap(), record.row_index);
            assert_eq!(row[3].parse::<usize>().unwrap(), record.column_index);
            assert_eq!(&row[4], record.value.as_str());
        }
    }
}
