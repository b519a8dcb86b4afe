use std::io::Write;

use clap::ArgMatches;
use tracing::{error, info};

use sessenv_core::{
    DEFAULT_VAR_NAMES, Format, FormatError, SessenvError, current_username, filter_environment,
    locate, read_environment, render,
};

pub(crate) fn run(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let format = selected_format(matches);

    let selector = matches
        .get_one::<String>("process")
        .expect("PID_OR_NAME is required")
        .clone();

    let requested: Vec<String> = matches
        .get_many::<String>("vars")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    let requested = if requested.is_empty() {
        DEFAULT_VAR_NAMES.iter().map(|s| s.to_string()).collect()
    } else {
        requested
    };

    info!(
        event = "cli.env_started",
        selector = %selector,
        format = ?format,
        requested = requested.len()
    );

    let username = match current_username() {
        Ok(username) => username,
        Err(e) => {
            eprintln!("❌ Failed to determine current user: {}", e);
            error!(
                event = "cli.env_failed",
                stage = "current_user",
                code = e.error_code(),
                error = %e
            );
            return Err(e.into());
        }
    };

    let target = match locate(&selector, &username) {
        Ok(target) => target,
        Err(e) => {
            eprintln!("❌ Failed to locate process '{}': {}", selector, e);
            error!(
                event = "cli.env_failed",
                stage = "locate",
                selector = %selector,
                code = e.error_code(),
                error = %e
            );
            return Err(e.into());
        }
    };

    let raw = match read_environment(&target) {
        Ok(raw) => raw,
        Err(e) => {
            eprintln!(
                "❌ Failed to read environment of process '{}': {}",
                target.pid.as_u32(),
                e
            );
            error!(
                event = "cli.env_failed",
                stage = "read_environment",
                pid = target.pid.as_u32(),
                code = e.error_code(),
                error = %e
            );
            return Err(e.into());
        }
    };

    let filtered = filter_environment(&raw, &requested);

    // The full payload is built before anything is printed: output is
    // all-or-nothing per run.
    let output = match render(&filtered, format) {
        Ok(output) => output,
        Err(e) => {
            eprintln!("❌ Failed to render output: {}", e);
            error!(
                event = "cli.env_failed",
                stage = "render",
                code = e.error_code(),
                error = %e
            );
            return Err(e.into());
        }
    };

    // A failed stdout write (closed pipe, closed descriptor) must exit
    // cleanly, not panic the way print! would.
    if let Err(e) = std::io::stdout().write_all(output.as_bytes()) {
        let e = FormatError::SerializationFailed {
            message: e.to_string(),
        };
        eprintln!("❌ Failed to write output: {}", e);
        error!(
            event = "cli.env_failed",
            stage = "write",
            code = e.error_code(),
            error = %e
        );
        return Err(e.into());
    }

    info!(
        event = "cli.env_completed",
        pid = target.pid.as_u32(),
        matched = filtered.len()
    );

    Ok(())
}

fn selected_format(matches: &ArgMatches) -> Format {
    if matches.get_flag("fish") {
        Format::Fish
    } else if matches.get_flag("json") {
        Format::Json
    } else {
        Format::Posix
    }
}
