//! sessenv-core: Core library for printing another process's environment
//!
//! This library resolves a process selector (PID or exact name scoped to the
//! invoking user) to a single running process, reads that process's
//! environment block, and renders a requested subset of it for a target
//! shell or as JSON. It is the whole pipeline behind the `sessenv` CLI.
//!
//! # Main Entry Points
//!
//! - [`process::locate`] - Resolve a selector to exactly one process
//! - [`environ::read_environment`] - Read the raw `NAME=VALUE` block
//! - [`filter::filter_environment`] - Project onto requested variable names
//! - [`format::render`] - Render as POSIX shell, fish shell, or JSON

pub mod environ;
pub mod errors;
pub mod filter;
pub mod format;
pub mod logging;
pub mod process;

pub use environ::EnvironError;
pub use environ::read_environment;
pub use errors::{SessenvError, SessenvResult};
pub use filter::{DEFAULT_VAR_NAMES, filter_environment, parse_entries};
pub use format::{Format, FormatError, ShellGrammar, is_shell_safe, quote, render};
pub use logging::init_logging;
pub use process::{Pid, ProcessError, ProcessRef, current_username, locate};
