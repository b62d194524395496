use std::path::PathBuf;

/// Fixed run configuration, built once in `app::run` and passed by
/// reference to every component. There is no ambient or static state.
#[derive(Debug, Clone)]
pub struct SiftConfig {
    /// Directory scanned for workbook exports
    pub input_dir: PathBuf,

    /// Directory receiving batch CSVs and the combined CSV
    pub output_dir: PathBuf,

    /// Workbook file extension accepted by the enumerator
    pub workbook_extension: String,

    /// Files per batch
    pub batch_size: usize,

    /// General append-only log file
    pub log_path: PathBuf,

    /// Error append-only log file
    pub error_log_path: PathBuf,

    /// Batch CSV filename prefix ("Batch_<n>_scada_tags.csv")
    pub batch_file_prefix: String,

    /// Batch CSV filename suffix
    pub batch_file_suffix: String,

    /// Name of the final combined CSV
    pub combined_file_name: String,
}

impl Default for SiftConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("input"),
            output_dir: PathBuf::from("output"),
            workbook_extension: "xlsx".to_string(),
            batch_size: 10,
            log_path: PathBuf::from("tagsift.log"),
            error_log_path: PathBuf::from("tagsift_errors.log"),
            batch_file_prefix: "Batch_".to_string(),
            batch_file_suffix: "_scada_tags.csv".to_string(),
            combined_file_name: "scada_tags_combined.csv".to_string(),
        }
    }
}

impl SiftConfig {
    /// Path of the CSV for a 1-based batch number.
    pub fn batch_csv_path(&self, batch_number: usize) -> PathBuf {
        self.output_dir.join(format!(
            "{}{}{}",
            self.batch_file_prefix, batch_number, self.batch_file_suffix
        ))
    }

    /// Path of the final combined CSV.
    pub fn combined_csv_path(&self) -> PathBuf {
        self.output_dir.join(&self.combined_file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_csv_path_embeds_number() {
        let config = SiftConfig::default();
        let path = config.batch_csv_path(3);
        assert!(path.ends_with("Batch_3_scada_tags.csv"));
    }
}
