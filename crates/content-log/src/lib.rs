//! Steam content log analysis: tail the log, infer the current download,
//! and resolve it into a report.

pub mod error;
pub mod extractor;
pub mod report;
pub mod status;
pub mod tail;

pub use error::ContentLogError;
pub use extractor::extract;
pub use report::{DownloadReport, DownloadState, compose, poll};
pub use status::DownloadStatus;
pub use tail::{DEFAULT_WINDOW, read_log_tail};
