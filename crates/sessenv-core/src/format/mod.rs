pub mod quote;
pub mod render;

pub use quote::{ShellGrammar, is_shell_safe, quote};
pub use render::{Format, FormatError, render};
