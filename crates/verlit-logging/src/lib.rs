//! ---
//! vl_section: "03-logging"
//! vl_subsection: "module"
//! vl_type: "source"
//! vl_scope: "code"
//! vl_description: "Structured logging adapters and sinks."
//! vl_version: "v0.0.0-prealpha"
//! vl_owner: "tbd"
//! ---
#![warn(missing_docs)]

//! Thin structured logging helpers used by the `verlitctl` commands.

pub mod macros;

#[doc(hidden)]
pub use tracing;

/// Structured logging context propagated by the convenience macros.
#[derive(Debug, Default, Clone)]
pub struct LogContext<'a> {
    /// Configured target name, when the file came from a config.
    pub target: Option<&'a str>,
    /// File whose version literal is being processed.
    pub file: Option<&'a str>,
    /// Digit policy in force.
    pub policy: Option<&'a str>,
}

impl<'a> LogContext<'a> {
    /// Create an empty logging context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a configured target name.
    pub fn with_target(mut self, target: &'a str) -> Self {
        self.target = Some(target);
        self
    }

    /// Attach the file being processed.
    pub fn with_file(mut self, file: &'a str) -> Self {
        self.file = Some(file);
        self
    }

    /// Attach a digit policy descriptor.
    pub fn with_policy(mut self, policy: &'a str) -> Self {
        self.policy = Some(policy);
        self
    }
}

/// Outcome recorded for a per-file sync step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The literal was rewritten.
    Updated,
    /// The literal differs but a dry run left the file alone.
    WouldUpdate,
    /// The literal already carried the requested version.
    Unchanged,
    /// No literal was present and the target was skipped.
    Skipped,
    /// The step failed.
    Fault,
}

impl SyncOutcome {
    /// Stable label used in log fields and command output.
    pub fn as_str(&self) -> &'static str {
        match self {
            SyncOutcome::Updated => "updated",
            SyncOutcome::WouldUpdate => "would-update",
            SyncOutcome::Unchanged => "unchanged",
            SyncOutcome::Skipped => "skipped",
            SyncOutcome::Fault => "fault",
        }
    }
}

/// Emit a standardized sync event for one file.
pub fn log_sync_event(
    context: Option<&LogContext>,
    event: &str,
    message: &str,
    outcome: SyncOutcome,
) {
    let ctx = context.cloned().unwrap_or_default();
    let target_name = ctx.target.unwrap_or("");
    let file = ctx.file.unwrap_or("");
    let policy = ctx.policy.unwrap_or("");
    let label = outcome.as_str();
    // `event!` needs a constant level, so dispatch per outcome.
    match outcome {
        SyncOutcome::Fault => {
            tracing::error!(event, outcome = label, target_name, file, policy, message = %message)
        }
        SyncOutcome::Skipped => {
            tracing::warn!(event, outcome = label, target_name, file, policy, message = %message)
        }
        SyncOutcome::Updated | SyncOutcome::WouldUpdate | SyncOutcome::Unchanged => {
            tracing::info!(event, outcome = label, target_name, file, policy, message = %message)
        }
    }
}
