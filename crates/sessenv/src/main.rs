use sessenv_core::init_logging;

mod app;
mod commands;

fn main() {
    let matches = app::build_cli().get_matches();

    let verbose = matches.get_flag("verbose");
    let quiet = !verbose;
    init_logging(quiet);

    if let Err(e) = commands::run(&matches) {
        // Error already printed to the user via eprintln! in the handler;
        // structured JSON events also went to stderr. Exit nonzero without
        // printing Rust's Debug representation.
        drop(e);
        std::process::exit(1);
    }
}
