//! Main application entry point.

use figuras_app::Session;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Starting Figuras");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock());

    match session.run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Session aborted: {}", e);
            ExitCode::FAILURE
        }
    }
}
