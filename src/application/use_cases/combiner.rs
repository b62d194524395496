// ============================================================
// COMBINER USE CASE
// ============================================================
// Merge the per-batch CSVs into one artifact, in batch-number order

use std::path::PathBuf;

use regex::Regex;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, BufWriter};

use crate::domain::error::{AppError, Result};
use crate::infrastructure::config::SiftConfig;
use crate::infrastructure::csv::CSV_HEADER;
use crate::infrastructure::logging::RunLog;

/// Concatenate all batch CSVs in the output directory into the combined
/// CSV. Returns the number of batch files combined.
///
/// Batch files are ordered by the batch number embedded in the filename,
/// not lexicographically, so `Batch_2_*` precedes `Batch_10_*`. The
/// combined file carries exactly one header line, written here; each
/// batch file's own header line is stripped before its rows are
/// appended. Every batch file is streamed line by line, never loaded
/// whole.
pub async fn combine(config: &SiftConfig, log: &RunLog) -> Result<usize> {
    let batch_files = list_batch_files(config).await?;
    if batch_files.is_empty() {
        return Err(AppError::NoBatchFilesFound(
            config.output_dir.display().to_string(),
        ));
    }

    let combined_path = config.combined_csv_path();
    let mut writer = BufWriter::new(
        File::create(&combined_path)
            .await
            .map_err(|e| AppError::IoError(format!("{}: {}", combined_path.display(), e)))?,
    );

    writer
        .write_all(format!("{}\n", CSV_HEADER.join(",")).as_bytes())
        .await
        .map_err(AppError::from)?;

    let mut combined = 0;
    for (batch_number, path) in &batch_files {
        match append_batch_file(&mut writer, path).await {
            Ok(rows) => {
                log.info(&format!(
                    "Combined batch {} ({} row(s)) from {}",
                    batch_number,
                    rows,
                    path.display()
                ));
                combined += 1;
            }
            Err(err) => {
                log.error(&format!("Failed to combine {}: {}", path.display(), err));
            }
        }
    }

    writer.flush().await.map_err(AppError::from)?;
    Ok(combined)
}

/// Batch CSV paths keyed by batch number, ascending.
async fn list_batch_files(config: &SiftConfig) -> Result<Vec<(usize, PathBuf)>> {
    let pattern = format!(
        "^{}(\\d+){}$",
        regex::escape(&config.batch_file_prefix),
        regex::escape(&config.batch_file_suffix)
    );
    let batch_file_re = Regex::new(&pattern)
        .map_err(|e| AppError::IoError(format!("invalid batch filename pattern: {}", e)))?;

    let mut entries = tokio::fs::read_dir(&config.output_dir)
        .await
        .map_err(|e| AppError::IoError(format!("{}: {}", config.output_dir.display(), e)))?;

    let mut batch_files = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(AppError::from)? {
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };
        if let Some(captures) = batch_file_re.captures(name) {
            if let Ok(number) = captures[1].parse::<usize>() {
                batch_files.push((number, entry.path()));
            }
        }
    }
    batch_files.sort_by_key(|(number, _)| *number);
    Ok(batch_files)
}

/// Stream one batch file into the writer, skipping its header line.
async fn append_batch_file(writer: &mut BufWriter<File>, path: &PathBuf) -> Result<usize> {
    let file = File::open(path).await.map_err(AppError::from)?;
    let mut lines = BufReader::new(file).lines();

    let mut rows = 0;
    let mut first = true;
    while let Some(line) = lines.next_line().await.map_err(AppError::from)? {
        if first {
            first = false;
            continue;
        }
        writer
            .write_all(line.as_bytes())
            .await
            .map_err(AppError::from)?;
        writer.write_all(b"\n").await.map_err(AppError::from)?;
        rows += 1;
    }
    Ok(rows)
}
