use std::path::PathBuf;
use crate::config::config::FailurePolicy;
use crate::errors::ExtractError;
use crate::models::listing::ListingDirectory;

#[derive(Clone, Debug)]
pub struct ExtractionInput {
    pub root: PathBuf,
    pub include: Vec<String>,
    pub exclude: Option<Vec<String>>,
    pub failure_policy: FailurePolicy,
    pub no_progress: bool,
}

#[derive(Clone)]
pub struct DirectoryCollectInput {
    pub root: PathBuf,
    pub include_patterns: Vec<String>,
    pub exclude_patterns: Option<Vec<String>>,
}

#[derive(Debug)]
pub struct DirectoryCollectOutput {
    pub directories: Vec<ListingDirectory>,
    pub skipped: usize,
}

/// 單一目錄處理完成後的結果
#[derive(Debug)]
pub struct DirectoryReport {
    pub language: String,
    pub directory: PathBuf,
    pub written: Vec<PathBuf>,
}

#[derive(Debug)]
pub struct DirectoryFailure {
    pub directory: PathBuf,
    pub error: ExtractError,
}

#[derive(Debug, Default)]
pub struct ExtractionOutput {
    pub processed: Vec<DirectoryReport>,
    pub failures: Vec<DirectoryFailure>,
}

impl ExtractionOutput {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}
