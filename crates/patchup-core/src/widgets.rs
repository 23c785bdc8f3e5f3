//! Identifiers for the UI widgets the updater reports into.
//!
//! These are closed enumerations owned by the UI layer; the relay only routes
//! events to them. Adding a widget to the updater window means adding a
//! member here and handling it in the UI event loop.

use serde::{Deserialize, Serialize};

/// Labels the updater UI can display text in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    /// Current download speed (e.g. "1.5 MB/s").
    DownloadSpeed,
    /// Bytes downloaded so far vs. total (e.g. "12.3 MB / 40 MB").
    DownloadedProgress,
    /// Name/state of the file currently being patched.
    FileStatus,
    /// Overall updater state ("Checking for updates...", "Done").
    UpdaterStatus,
}

/// Progress bars the updater UI can display a 0-100 value in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProgressBar {
    /// Progress across the whole update run.
    WholeProgress,
    /// Progress of the file currently downloading.
    CurrentFileProgress,
}
