use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to read {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error in {} at token {position}: '{token}' is not a number", .path.display())]
    Parse {
        path: PathBuf,
        position: usize,
        token: String,
    },

    #[error(
        "Index out of range for {variant} ranking: page {index} has no URL (only {url_count} URLs loaded)"
    )]
    IndexOutOfRange {
        variant: String,
        index: usize,
        url_count: usize,
    },

    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),

    #[error(
        "Cannot write {variant} page {index} as JSON: probability {probability} is not finite"
    )]
    NonFiniteJson {
        variant: String,
        index: usize,
        probability: f64,
    },

    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ReportError {
    /// Process exit code for this error kind. 2 is left to clap's usage errors.
    pub fn exit_code(&self) -> i32 {
        match self {
            ReportError::FileAccess { .. } => 3,
            ReportError::Parse { .. } => 4,
            ReportError::IndexOutOfRange { .. } => 5,
            ReportError::NonFiniteJson { .. }
            | ReportError::Output(_)
            | ReportError::Serialize(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
