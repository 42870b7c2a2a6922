use std::path::PathBuf;

pub const DEFAULT_INPUT_PATH: &str = "sales_data.csv";
pub const DEFAULT_DATABASE_PATH: &str = "sales_database.db";

/// Where a run reads from and writes to. Fixed for the lifetime of a pipeline.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PipelineConfig {
    pub input_path: PathBuf,
    pub database_path: PathBuf
}

impl PipelineConfig {
    pub fn new(input_path: impl Into<PathBuf>, database_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            database_path: database_path.into()
        }
    }

    /// Builds a config from positional arguments (program name excluded),
    /// falling back to the default file names for anything not given.
    pub fn from_args(args: &[String]) -> Self {
        Self::new(
            args.first().map(String::as_str).unwrap_or(DEFAULT_INPUT_PATH),
            args.get(1).map(String::as_str).unwrap_or(DEFAULT_DATABASE_PATH)
        )
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_PATH, DEFAULT_DATABASE_PATH)
    }
}
