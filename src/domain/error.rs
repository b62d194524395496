use std::fmt;

#[derive(Debug)]
pub enum AppError {
    DirectoryNotFound(String),
    FileParse(String),
    BatchWrite(String),
    NoBatchFilesFound(String),
    IoError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::DirectoryNotFound(msg) => write!(f, "Directory not found: {}", msg),
            AppError::FileParse(msg) => write!(f, "File parse error: {}", msg),
            AppError::BatchWrite(msg) => write!(f, "Batch write error: {}", msg),
            AppError::NoBatchFilesFound(msg) => write!(f, "No batch files found: {}", msg),
            AppError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
