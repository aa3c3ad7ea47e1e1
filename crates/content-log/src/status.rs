/// Download state inferred from a window of the content log.
#[derive(Debug, Clone, PartialEq)]
pub enum DownloadStatus {
    /// No download-relevant event in the window.
    Idle,
    /// The most recent state for this app is suspended.
    Paused { app_id: String },
    /// The app is transferring; rate in megabytes per second.
    Active { app_id: String, rate_mb_s: f64 },
}

impl DownloadStatus {
    /// Returns the app the status refers to, if any.
    pub fn app_id(&self) -> Option<&str> {
        match self {
            DownloadStatus::Idle => None,
            DownloadStatus::Paused { app_id } | DownloadStatus::Active { app_id, .. } => {
                Some(app_id)
            }
        }
    }
}
