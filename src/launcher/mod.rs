//! Process launcher
//!
//! Starts the program behind a [`LaunchRecord`] and turns the result into a
//! status message. Processes are fire-and-forget: the child handle is dropped
//! right after spawning, so nothing here waits on or tracks what was started.
//!
//! # Shell mode
//!
//! With `use_shell` the target is handed to the platform interpreter
//! (`cmd.exe /c` on Windows, `sh -c` elsewhere) and `new_console` asks for a
//! separate console. Without it the target is executed directly and
//! `new_console` has no effect.

use crate::config::LaunchRecord;
use std::io::ErrorKind;
use std::process::{Command, Stdio};
use tracing::{debug, info, warn};

/// `CREATE_NEW_CONSOLE` process creation flag
#[cfg(windows)]
const CREATE_NEW_CONSOLE: u32 = 0x0000_0010;

/// Whether a launch succeeded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchStatus {
    /// The process was spawned
    Success,
    /// The process could not be spawned
    Failure,
}

/// Result of a launch attempt, ready for the status line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchOutcome {
    /// One-line description of what happened
    pub message: String,
    /// Success or failure tag
    pub status: LaunchStatus,
}

impl LaunchOutcome {
    fn success(message: String) -> Self {
        Self {
            message,
            status: LaunchStatus::Success,
        }
    }

    fn failure(message: String) -> Self {
        Self {
            message,
            status: LaunchStatus::Failure,
        }
    }

    /// Whether the process was spawned
    pub fn is_success(&self) -> bool {
        self.status == LaunchStatus::Success
    }
}

/// Build the command for a record without spawning it
pub fn build_command(record: &LaunchRecord) -> Command {
    let mut command = if record.use_shell {
        shell_command(&record.target, record.new_console)
    } else {
        if record.new_console {
            debug!(
                "New console requested for {} without shell mode; flag has no effect",
                record.name
            );
        }
        Command::new(&record.target)
    };

    if !record.work_dir.is_empty() {
        command.current_dir(&record.work_dir);
    }
    command.stdin(Stdio::null());
    command
}

#[cfg(windows)]
fn shell_command(target: &str, new_console: bool) -> Command {
    use std::os::windows::process::CommandExt;

    let mut command = Command::new("cmd.exe");
    command.arg("/c").arg(target);
    if new_console {
        command.creation_flags(CREATE_NEW_CONSOLE);
    }
    command
}

#[cfg(not(windows))]
fn shell_command(target: &str, new_console: bool) -> Command {
    use std::os::unix::process::CommandExt;

    let mut command = Command::new("sh");
    command.arg("-c").arg(target);
    if new_console {
        // No console windows here; a new process group is the closest match
        command.process_group(0);
    }
    command
}

/// Spawn the program described by `record`
///
/// Never panics and never returns an error: every failure is folded into a
/// failure-tagged [`LaunchOutcome`].
pub fn launch(record: &LaunchRecord) -> LaunchOutcome {
    info!(
        "Launching {} (target={}, work_dir={}, shell={}, new_console={})",
        record.name, record.target, record.work_dir, record.use_shell, record.new_console
    );

    match build_command(record).spawn() {
        Ok(child) => {
            info!("{} started with pid {}", record.name, child.id());
            LaunchOutcome::success(format!("{} started", record.name))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("Launch target not found: {} ({})", record.target, e);
            LaunchOutcome::failure(format!("File not found: {}", record.target))
        }
        Err(e) => {
            warn!("Failed to launch {}: {}", record.name, e);
            LaunchOutcome::failure(format!("Error running {}: {e}", record.name))
        }
    }
}
