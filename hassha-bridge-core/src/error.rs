use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Failure to deliver one payload to the external notifier.
///
/// Always caught at the dispatch site and logged; never surfaced to the host.
#[derive(Debug, Error)]
pub enum NotifierError {
    #[error("failed to spawn notifier at {path}: {source}")]
    Spawn {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error while waiting for notifier: {0}")]
    Io(#[from] io::Error),

    #[error("notifier exited with {status}")]
    Exit { status: ExitStatus },

    #[error("failed to serialize payload: {0}")]
    Serialize(#[from] serde_json::Error),
}
