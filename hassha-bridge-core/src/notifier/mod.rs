//! Invocation of the external `hassha` notifier binary.
//!
//! The notifier owns melody selection and playback; the bridge only hands it
//! `hook <canonical-name>` plus a one-line JSON payload on stdin.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use anyhow::Context;
use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

use crate::error::NotifierError;
use crate::router::{HookName, HookPayload};

/// Location of the notifier binary, relative to the user's home directory.
/// This is where `hassha install --open-code` places it.
const NOTIFIER_PATH: &[&str] = &[".config", "opencode", "bin", "hassha"];

/// Sink for notifier invocations. The router dispatches through this seam so
/// tests can observe invocations without spawning processes.
#[async_trait]
pub trait Notify: Send + Sync {
    async fn invoke(&self, hook: HookName, payload: &HookPayload) -> Result<(), NotifierError>;
}

/// The production notifier: spawns the hassha binary, one process per event.
pub struct Notifier {
    binary: PathBuf,
}

impl Notifier {
    /// Resolve the notifier binary at its fixed install location.
    ///
    /// Called once at startup; the location is not runtime-configurable.
    pub fn discover() -> anyhow::Result<Self> {
        let home = dirs::home_dir().context("could not determine home directory")?;
        let mut binary = home;
        for part in NOTIFIER_PATH {
            binary.push(part);
        }
        debug!(path = %binary.display(), "resolved notifier binary");
        Ok(Self { binary })
    }

    /// Use an explicit binary path. Test seam only; production callers go
    /// through `discover`.
    pub fn at(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }
}

#[async_trait]
impl Notify for Notifier {
    /// Spawn `<binary> hook <name>`, write the payload line to stdin, close
    /// it and wait for exit. The child's own output is discarded; the child
    /// is reaped on every path, including spawn and write failures.
    async fn invoke(&self, hook: HookName, payload: &HookPayload) -> Result<(), NotifierError> {
        let line = payload.to_line()?;

        let mut child = Command::new(&self.binary)
            .arg("hook")
            .arg(hook.as_str())
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| NotifierError::Spawn {
                path: self.binary.clone(),
                source,
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            // Write errors are ignored: the notifier may exit before reading
            let _ = stdin.write_all(line.as_bytes()).await;
            let _ = stdin.write_all(b"\n").await;
            let _ = stdin.shutdown().await;
        }

        let status = child.wait().await?;
        if !status.success() {
            return Err(NotifierError::Exit { status });
        }

        Ok(())
    }
}
