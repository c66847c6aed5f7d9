//! Logging handle owned by a [`Launcher`](super::Launcher).
//!
//! Every observable step of the spawn/poll/reap cycle is reported through a
//! [`JobLog`]. The default sink forwards to the `log` facade; tests plug in a
//! recorder instead.

use super::command::CommandLine;
use log::{debug, error, info, warn};
use std::io;

/// Receives launcher events.
pub trait JobLog {
    /// A command was spawned.
    fn launched(&mut self, command: &CommandLine);

    /// A running job exited with status 0. `pending` is the number of commands
    /// still waiting in the queue.
    fn succeeded(&mut self, command: &CommandLine, pending: usize);

    /// A job exited non-zero (`Some(code)`) or was killed by a signal (`None`).
    fn failed(&mut self, command: &CommandLine, code: Option<i32>, pending: usize);

    /// The command could not be spawned at all.
    fn spawn_failed(&mut self, command: &CommandLine, err: &io::Error, pending: usize);

    /// The controller is scanning `running` jobs for one that has exited.
    fn polling(&mut self, _running: usize) {}
}

/// Default [`JobLog`] writing through the `log` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogJobLog;

impl JobLog for LogJobLog {
    fn launched(&mut self, command: &CommandLine) {
        info!("new command launched: {}", command);
    }

    fn succeeded(&mut self, command: &CommandLine, pending: usize) {
        info!(
            "process succeeded ({} processes remain): {}",
            pending, command
        );
    }

    fn failed(&mut self, command: &CommandLine, code: Option<i32>, pending: usize) {
        match code {
            Some(code) => warn!(
                "process failed with the error code {} ({} processes remain): {}",
                code, pending, command
            ),
            None => warn!(
                "process terminated by a signal ({} processes remain): {}",
                pending, command
            ),
        }
    }

    fn spawn_failed(&mut self, command: &CommandLine, err: &io::Error, pending: usize) {
        error!(
            "failed to launch '{}': {} ({} processes remain)",
            command, err, pending
        );
    }

    fn polling(&mut self, running: usize) {
        debug!("checking {} launched processes", running);
    }
}

#[cfg(test)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum JobEvent {
    Launched(String),
    Succeeded(String),
    Failed(String, Option<i32>),
    SpawnFailed(String),
}

/// In-memory [`JobLog`] for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingLog {
    pub events: Vec<JobEvent>,
}

#[cfg(test)]
impl RecordingLog {
    pub fn launched_commands(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|e| match e {
                JobEvent::Launched(cmd) => Some(cmd.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn succeeded_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, JobEvent::Succeeded(_)))
            .count()
    }

    pub fn failures(&self) -> Vec<(String, Option<i32>)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                JobEvent::Failed(cmd, code) => Some((cmd.clone(), *code)),
                _ => None,
            })
            .collect()
    }

    pub fn spawn_failures(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, JobEvent::SpawnFailed(_)))
            .count()
    }
}

#[cfg(test)]
impl JobLog for RecordingLog {
    fn launched(&mut self, command: &CommandLine) {
        self.events.push(JobEvent::Launched(command.to_string()));
    }

    fn succeeded(&mut self, command: &CommandLine, _pending: usize) {
        self.events.push(JobEvent::Succeeded(command.to_string()));
    }

    fn failed(&mut self, command: &CommandLine, code: Option<i32>, _pending: usize) {
        self.events.push(JobEvent::Failed(command.to_string(), code));
    }

    fn spawn_failed(&mut self, command: &CommandLine, _err: &io::Error, _pending: usize) {
        self.events.push(JobEvent::SpawnFailed(command.to_string()));
    }
}
