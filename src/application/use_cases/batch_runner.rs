// ============================================================
// BATCH RUNNER USE CASE
// ============================================================
// Partition the enumerated files into fixed-size batches and drive
// extraction + CSV emission for each batch in strict order

use crate::domain::tag::FileTags;
use crate::infrastructure::config::SiftConfig;
use crate::infrastructure::csv::write_batch_csv;
use crate::infrastructure::excel::load_first_sheet;
use crate::infrastructure::logging::RunLog;
use crate::infrastructure::storage::workbook_path;

use super::tag_extraction::TagExtractor;

/// Split the ordered file list into batches of `size`.
///
/// Pure: batch `i` holds positions `[i*size, min((i+1)*size, len))` in the
/// original order; the final batch may be short; an empty input yields no
/// batches.
pub fn partition<T>(items: &[T], size: usize) -> impl Iterator<Item = &[T]> {
    items.chunks(size)
}

/// Drives extraction and CSV emission across all batches.
///
/// Batches run strictly one at a time, files strictly in order within a
/// batch, so at most one sheet grid and one batch's tags are resident.
pub struct BatchRunner<'a> {
    config: &'a SiftConfig,
    log: &'a RunLog,
    extractor: TagExtractor,
}

impl<'a> BatchRunner<'a> {
    pub fn new(config: &'a SiftConfig, log: &'a RunLog) -> Self {
        Self {
            config,
            log,
            extractor: TagExtractor::new(),
        }
    }

    /// Process every batch in ascending order. Returns the batch count.
    pub async fn run(&self, file_names: &[String]) -> usize {
        let mut batch_count = 0;
        for (index, batch) in partition(file_names, self.config.batch_size).enumerate() {
            let batch_number = index + 1;
            self.process_batch(batch_number, batch).await;
            batch_count = batch_number;
        }
        batch_count
    }

    /// Extract every file of one batch, then emit the batch CSV once.
    ///
    /// A file that fails to parse is logged and skipped; the batch
    /// continues. A failed CSV write is logged, and because batches are
    /// independent the next batch still runs.
    async fn process_batch(&self, batch_number: usize, files: &[String]) {
        self.log.info(&format!(
            "Batch {}: processing {} file(s)",
            batch_number,
            files.len()
        ));

        let mut results: Vec<FileTags> = Vec::new();
        for file_name in files {
            let path = workbook_path(&self.config.input_dir, file_name);
            let grid = match load_first_sheet(&path) {
                Ok(grid) => grid,
                Err(err) => {
                    self.log.error(&format!(
                        "Batch {}: skipping {}: {}",
                        batch_number, file_name, err
                    ));
                    continue;
                }
            };

            let tags = self.extractor.extract(file_name, &grid);
            if tags.is_empty() {
                self.log.info(&format!(
                    "Batch {}: no tags found in {}",
                    batch_number, file_name
                ));
            }
            results.push(FileTags {
                file_name: file_name.clone(),
                tags,
            });
        }

        let csv_path = self.config.batch_csv_path(batch_number);
        match write_batch_csv(&results, &csv_path) {
            Ok(0) => {
                self.log.info(&format!(
                    "Batch {}: no records to write, skipping {}",
                    batch_number,
                    csv_path.display()
                ));
            }
            Ok(written) => {
                self.log.info(&format!(
                    "Batch {}: wrote {} record(s) to {}",
                    batch_number,
                    written,
                    csv_path.display()
                ));
            }
            Err(err) => {
                self.log.error(&format!("Batch {}: {}", batch_number, err));
            }
        }
    }
}
