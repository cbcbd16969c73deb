//! Clipboard hand-off.
//!
//! The exported schedule goes to the system clipboard through the platform's
//! clipboard utility. One attempt per write; a failure is surfaced to the
//! user and never retried automatically.

use std::process::Stdio;

use anyhow::Context;
use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;
use warikan_core::{SplitError, SplitResult};

/// Receives exported schedule text.
#[async_trait]
pub trait ClipboardSink: Send + Sync {
    /// Writes `text` to the sink, replacing whatever it held before.
    async fn write_text(&self, text: &str) -> SplitResult<()>;
}

/// Writes through the platform clipboard utility: `pbcopy` on macOS, `clip`
/// on Windows, and on other systems the first of `wl-copy`, `xclip` or
/// `xsel` that is installed.
pub struct SystemClipboard;

impl SystemClipboard {
    fn helpers() -> &'static [(&'static str, &'static [&'static str])] {
        if cfg!(target_os = "macos") {
            &[("pbcopy", &[])]
        } else if cfg!(target_os = "windows") {
            &[("clip", &[])]
        } else {
            &[
                ("wl-copy", &[]),
                ("xclip", &["-selection", "clipboard"]),
                ("xsel", &["--clipboard", "--input"]),
            ]
        }
    }

    async fn pipe_to_helper(program: &str, args: &[&str], text: &str) -> anyhow::Result<()> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("failed to launch {program}"))?;
        let mut stdin = child
            .stdin
            .take()
            .with_context(|| format!("{program} exposed no stdin"))?;
        stdin
            .write_all(text.as_bytes())
            .await
            .with_context(|| format!("failed to stream text to {program}"))?;
        drop(stdin);
        let status = child
            .wait()
            .await
            .with_context(|| format!("{program} did not exit"))?;
        anyhow::ensure!(status.success(), "{program} exited with {status}");
        Ok(())
    }
}

#[async_trait]
impl ClipboardSink for SystemClipboard {
    async fn write_text(&self, text: &str) -> SplitResult<()> {
        let mut missing = Vec::new();
        for &(program, args) in Self::helpers() {
            match Self::pipe_to_helper(program, args, text).await {
                Ok(()) => {
                    debug!(helper = program, bytes = text.len(), "Copied text to clipboard");
                    return Ok(());
                }
                // A helper that is not installed is skipped; any other
                // failure is final for this write.
                Err(err) if is_not_found(&err) => missing.push(program),
                Err(err) => return Err(SplitError::clipboard_write(format!("{err:#}"))),
            }
        }
        Err(SplitError::clipboard_write(format!(
            "no clipboard helper found (tried {})",
            missing.join(", ")
        )))
    }
}

fn is_not_found(err: &anyhow::Error) -> bool {
    err.chain()
        .filter_map(|cause| cause.downcast_ref::<std::io::Error>())
        .any(|io_err| io_err.kind() == std::io::ErrorKind::NotFound)
}
