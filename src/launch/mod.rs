//! Parallel launching of external tools.
//!
//! - **Command**: synthesis of one command line per input unit
//! - **Pool**: the bounded spawn/poll/reap loop
//! - **JobLog**: the event sink owned by each launcher

mod command;
pub mod job_log;
mod pool;

pub use command::{ArgValue, ArgumentSet, CommandLine, InputUnit, build_command};
pub use job_log::{JobLog, LogJobLog};
pub use pool::{DEFAULT_POLL_INTERVAL, LaunchStats, Launcher};
