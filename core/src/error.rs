use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReportError>;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to read scan report {}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to decode scan report {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: quick_xml::DeError,
    },

    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),

    #[error("failed to write csv report: {0}")]
    Csv(#[from] csv::Error),
}
