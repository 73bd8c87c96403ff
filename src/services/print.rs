//! Hand-off of a written print document to the host print flow.

use crate::config::ExportConfig;
use crate::error::{ExportError, ExportResult};
use crate::services::platform;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::task::JoinHandle;

/// Invokes the configured print command on a document after a fixed delay
#[derive(Debug, Clone)]
pub struct PrintHandoff {
    program: String,
    args: Vec<String>,
    delay: Duration,
    keep_file: bool,
}

impl PrintHandoff {
    pub fn new(config: &ExportConfig) -> Self {
        let command = config
            .print_command
            .clone()
            .unwrap_or_else(|| platform::default_opener().to_string());
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts
            .next()
            .unwrap_or_else(|| platform::default_opener().to_string());

        Self {
            program,
            args: parts.collect(),
            delay: Duration::from_millis(config.print_delay_ms),
            keep_file: config.keep_file,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Start the print flow in the background.
    ///
    /// Fire-and-forget: the caller may drop the handle. Cleanup of the
    /// document waits until the print command has exited.
    pub fn spawn(&self, document: PathBuf) -> JoinHandle<ExportResult<()>> {
        let handoff = self.clone();
        tokio::spawn(async move {
            let result = handoff.run(&document).await;
            if let Err(ref e) = result {
                tracing::warn!("Print hand-off for {:?} failed: {}", document, e);
            }
            result
        })
    }

    async fn run(&self, document: &Path) -> ExportResult<()> {
        tokio::time::sleep(self.delay).await;

        tracing::info!("Printing {:?} with {}", document, self.program);
        let status = tokio::process::Command::new(&self.program)
            .args(&self.args)
            .arg(document)
            .status()
            .await
            .map_err(|e| ExportError::PrintCommand(format!("{}: {}", self.program, e)))?;

        if !self.keep_file {
            if let Err(e) = tokio::fs::remove_file(document).await {
                tracing::warn!("Could not remove print document {:?}: {}", document, e);
            }
        }

        if status.success() {
            Ok(())
        } else {
            Err(ExportError::PrintCommand(format!(
                "{} exited with {}",
                self.program, status
            )))
        }
    }
}
