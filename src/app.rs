use crate::application::use_cases::combiner;
use crate::application::BatchRunner;
use crate::domain::error::{AppError, Result};
use crate::infrastructure::config::SiftConfig;
use crate::infrastructure::logging::RunLog;
use crate::infrastructure::storage;

/// Run the whole pipeline: enumerate, batch, extract, emit, combine.
///
/// Only top-level setup failures (missing input directory, unusable
/// output directory) abort the run; every file- and batch-level failure
/// is logged and skipped.
pub async fn run() -> Result<()> {
    let _ = tracing_subscriber::fmt().with_env_filter("info").try_init();

    let config = SiftConfig::default();
    let log = RunLog::new(&config.log_path, &config.error_log_path);

    let file_names =
        storage::enumerate_workbooks(&config.input_dir, &config.workbook_extension).map_err(
            |err| {
                log.error(&format!("Fatal: {}", err));
                err
            },
        )?;
    log.info(&format!(
        "Found {} workbook file(s) in {}",
        file_names.len(),
        config.input_dir.display()
    ));

    storage::ensure_dir(&config.output_dir).map_err(|err| {
        let err = AppError::IoError(format!("{}: {}", config.output_dir.display(), err));
        log.error(&format!("Fatal: {}", err));
        err
    })?;

    let runner = BatchRunner::new(&config, &log);
    let batch_count = runner.run(&file_names).await;
    log.info(&format!("Processed {} batch(es)", batch_count));

    match combiner::combine(&config, &log).await {
        Ok(combined) => {
            log.info(&format!(
                "Combined {} batch file(s) into {}",
                combined,
                config.combined_csv_path().display()
            ));
        }
        Err(err) => {
            // includes NoBatchFilesFound: nothing to combine is not fatal
            log.error(&err.to_string());
        }
    }

    log.info("Run complete");
    Ok(())
}
