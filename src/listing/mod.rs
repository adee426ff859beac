//! Allow-listed directory listings.
//!
//! # Data Flow
//! ```text
//! Untrusted alias from the request
//!     → vocabulary check (exact match against configured aliases)
//!     → argv-style subprocess (`ls -1 <fixed-path>`), no shell
//!     → capped stdout back to the handler
//! ```
//!
//! # Design Decisions
//! - The alias is resolved against a fixed vocabulary BEFORE any process
//!   work; unknown aliases never reach `Command`
//! - The subprocess argv contains only operator-configured paths, so no
//!   request-derived value is ever an argument
//! - No shell anywhere: `Command::new("ls")`, not `sh -c`
//! - Output is capped and the child is killed on timeout

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;
use tokio::process::Command;

use crate::config::ListingConfig;

/// Marker appended when stdout exceeds the output cap.
const TRUNCATED: &str = "\n[truncated]";

/// Errors from listing execution.
#[derive(Debug, Error)]
pub enum ListingError {
    /// The requested alias is not in the configured vocabulary.
    #[error("unknown listing alias")]
    UnknownAlias,

    /// The subprocess could not be spawned or awaited.
    #[error("listing process failed: {0}")]
    Spawn(#[from] std::io::Error),

    /// The subprocess exceeded the execution timeout.
    #[error("listing timed out after {0:?}")]
    Timeout(Duration),

    /// The subprocess exited nonzero.
    #[error("listing exited with status {0}")]
    Failed(i32),
}

/// Runs directory listings for a fixed set of aliases.
pub struct ListingRunner {
    aliases: BTreeMap<String, PathBuf>,
    timeout: Duration,
    max_output_bytes: usize,
}

impl ListingRunner {
    pub fn new(config: &ListingConfig, timeout: Duration) -> Self {
        Self {
            aliases: config.aliases.clone(),
            timeout,
            max_output_bytes: config.max_output_bytes,
        }
    }

    /// The argv for one listing. Fixed program, fixed flags, configured
    /// path; nothing request-derived.
    fn command_for(path: &Path) -> Command {
        let mut cmd = Command::new("ls");
        cmd.arg("-1").arg(path).kill_on_drop(true);
        cmd
    }

    /// Run the listing for `alias`.
    ///
    /// Rejects aliases outside the vocabulary before any process work.
    pub async fn run(&self, alias: &str) -> Result<String, ListingError> {
        let path = self.aliases.get(alias).ok_or(ListingError::UnknownAlias)?;

        let output = tokio::time::timeout(
            self.timeout,
            Self::command_for(path).output(),
        )
        .await
        .map_err(|_| ListingError::Timeout(self.timeout))??;

        if !output.status.success() {
            return Err(ListingError::Failed(output.status.code().unwrap_or(-1)));
        }

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        if text.len() > self.max_output_bytes {
            // Back off to a char boundary; filenames are not always ASCII.
            let mut end = self.max_output_bytes;
            while !text.is_char_boundary(end) {
                end -= 1;
            }
            text.truncate(end);
            text.push_str(TRUNCATED);
        }
        Ok(text)
    }
}
