mod app;
mod config;
mod effects;
mod input;
mod logging;
mod render;

use client_logging::client_error;

fn main() {
    let cwd = std::env::current_dir().unwrap_or_else(|_| std::path::PathBuf::from("."));
    let config = config::load(&cwd);
    let destination = if config.log_to_file {
        logging::LogDestination::Both
    } else {
        logging::LogDestination::Terminal
    };
    logging::initialize(destination);

    println!("shortlist (type 'help' for commands)");
    if let Err(err) = app::run(config) {
        client_error!("Fatal: {}", err);
        eprintln!("shortlist: {err}");
        std::process::exit(1);
    }
}
