use clap::{Arg, ArgAction, ArgGroup, Command};

use sessenv_core::DEFAULT_VAR_NAMES;

pub fn build_cli() -> Command {
    let default_list = DEFAULT_VAR_NAMES
        .iter()
        .map(|name| format!("  - {}", name))
        .collect::<Vec<_>>()
        .join("\n");

    Command::new("sessenv")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Print select environment variables of a process as shell commands or JSON")
        .long_about(format!(
            "Print select environment variables of a process, typically the current user's \
             desktop session, as shell commands to set those variables or as JSON.\n\n\
             Default variables:\n{}",
            default_list
        ))
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("fish")
                .short('f')
                .long("fish")
                .help("Output fish shell commands")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .short('j')
                .long("json")
                .help("Output JSON")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("posix")
                .short('p')
                .long("posix")
                .help("Output POSIX shell commands (default)")
                .action(ArgAction::SetTrue),
        )
        .group(
            ArgGroup::new("format")
                .args(["fish", "json", "posix"])
                .multiple(false),
        )
        .arg(
            Arg::new("process")
                .value_name("PID_OR_NAME")
                .help("Target process: a PID, or an exact process name owned by the current user")
                .required(true),
        )
        .arg(
            Arg::new("vars")
                .value_name("VAR_NAME")
                .help("Environment variable names to print (defaults to the list above)")
                .num_args(0..),
        )
}
