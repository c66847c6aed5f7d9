//! Bounded pool of external tool processes.
//!
//! The [`Launcher`] turns every input unit into a [`CommandLine`] up front and
//! then drives a single-threaded spawn/poll/reap loop. Parallelism comes only
//! from the child processes themselves, so none of the state here is shared.
//!
//! Two scheduling details matter to callers:
//!
//! - Pending commands are consumed from the back of the queue (last supplied,
//!   first launched).
//! - The controller only waits while the running count is *strictly greater*
//!   than the capacity, so `capacity + 1` jobs can be in flight at once.
//!
//! [`Launcher::launch`] returns as soon as the queue is drained; jobs still
//! running at that point are left alone unless [`Launcher::wait_all`] is called.

use super::command::{ArgumentSet, CommandLine, InputUnit, build_command};
use super::job_log::{JobLog, LogJobLog};
use crate::error::{CutterError, Result};
use std::ffi::OsStr;
use std::io::Write;
use std::process::{Child, Command};
use std::thread;
use std::time::Duration;

/// Pause between poll passes that found no finished job.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// A spawned command and its process handle.
#[derive(Debug)]
struct Job {
    command: CommandLine,
    child: Child,
}

/// Counters describing what a launcher has done so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LaunchStats {
    /// Commands successfully spawned.
    pub launched: usize,
    /// Jobs observed finished and removed from the pool.
    pub reaped: usize,
    /// Largest number of jobs running at the same time.
    pub peak_running: usize,
    /// Jobs still running when the stats were taken.
    pub in_flight: usize,
}

/// Runs one program over many input units with bounded concurrency.
#[derive(Debug)]
pub struct Launcher<L: JobLog = LogJobLog> {
    commands: Vec<CommandLine>,
    pending: Vec<CommandLine>,
    running: Vec<Job>,
    capacity: usize,
    poll_interval: Duration,
    log: L,
    stats: LaunchStats,
}

impl Launcher<LogJobLog> {
    /// Create a launcher for `program` over `units`.
    ///
    /// One command line is synthesized per unit, in input order. `capacity` is
    /// the number of parallel jobs the caller asked for.
    pub fn new(
        program: impl AsRef<OsStr>,
        units: &[InputUnit],
        args: Option<&ArgumentSet>,
        capacity: usize,
    ) -> Result<Self> {
        let program = program.as_ref();
        if program.is_empty() {
            return Err(CutterError::UserError(
                "cannot launch an empty program name".to_string(),
            ));
        }

        let commands: Vec<CommandLine> = units
            .iter()
            .map(|unit| build_command(program, args, unit))
            .collect();

        Ok(Self {
            pending: commands.clone(),
            commands,
            running: Vec::new(),
            capacity,
            poll_interval: DEFAULT_POLL_INTERVAL,
            log: LogJobLog,
            stats: LaunchStats::default(),
        })
    }
}

impl<L: JobLog> Launcher<L> {
    /// Replace the logging handle.
    pub fn with_job_log<M: JobLog>(self, log: M) -> Launcher<M> {
        Launcher {
            commands: self.commands,
            pending: self.pending,
            running: self.running,
            capacity: self.capacity,
            poll_interval: self.poll_interval,
            log,
            stats: self.stats,
        }
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// All synthesized command lines, in input order.
    pub fn commands(&self) -> &[CommandLine] {
        &self.commands
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn job_log(&self) -> &L {
        &self.log
    }

    /// Number of jobs currently in flight.
    pub fn running(&self) -> usize {
        self.running.len()
    }

    pub fn stats(&self) -> LaunchStats {
        LaunchStats {
            in_flight: self.running.len(),
            ..self.stats
        }
    }

    /// Dry run: write every command line, one per line, in input order.
    pub fn print_commands<W: Write>(&self, out: &mut W) -> Result<()> {
        for command in &self.commands {
            writeln!(out, "{}", command).map_err(|e| {
                CutterError::UserError(format!("failed to write command list: {}", e))
            })?;
        }
        Ok(())
    }

    /// Launch every pending command, keeping the pool within capacity.
    ///
    /// Returns once the queue is empty, without waiting for the last jobs.
    pub fn launch(&mut self) -> Result<LaunchStats> {
        while !self.pending.is_empty() {
            while self.running.len() > self.capacity {
                if !self.reap_one()? {
                    thread::sleep(self.poll_interval);
                }
            }

            if let Some(command) = self.pending.pop() {
                self.spawn(command);
            }
        }
        Ok(self.stats())
    }

    /// Block until every running job has been reaped.
    pub fn wait_all(&mut self) -> Result<LaunchStats> {
        while !self.running.is_empty() {
            if !self.reap_one()? {
                thread::sleep(self.poll_interval);
            }
        }
        Ok(self.stats())
    }

    /// Scan the pool once and reap the first job found finished.
    ///
    /// Returns whether a job was reaped.
    fn reap_one(&mut self) -> Result<bool> {
        self.log.polling(self.running.len());

        for index in 0..self.running.len() {
            let job = &mut self.running[index];
            let status = match job.child.try_wait() {
                Ok(status) => status,
                Err(e) => {
                    return Err(CutterError::LaunchError(format!(
                        "failed to check status of '{}': {}",
                        job.command, e
                    )));
                }
            };

            if let Some(status) = status {
                let job = self.running.remove(index);
                self.stats.reaped += 1;
                let pending = self.pending.len();
                match status.code() {
                    Some(0) => self.log.succeeded(&job.command, pending),
                    code => self.log.failed(&job.command, code, pending),
                }
                return Ok(true);
            }
        }

        Ok(false)
    }

    fn spawn(&mut self, command: CommandLine) {
        match Command::new(command.program()).args(command.args()).spawn() {
            Ok(child) => {
                self.log.launched(&command);
                self.running.push(Job { command, child });
                self.stats.launched += 1;
                self.stats.peak_running = self.stats.peak_running.max(self.running.len());
            }
            Err(e) => self.log.spawn_failed(&command, &e, self.pending.len()),
        }
    }
}
