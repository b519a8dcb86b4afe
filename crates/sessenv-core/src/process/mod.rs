pub mod errors;
pub mod locator;
pub mod types;

pub use errors::ProcessError;
pub use locator::{current_username, locate, resolve_unique};
pub use types::{Pid, ProcessRef};
