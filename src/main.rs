//! Driver portal - Entry Point
//!
//! Terminal client for the driver performance portal.

use driver_portal::console::Console;
use driver_portal::error::PortalError;
use driver_portal::error::handlers::handle_error;
use driver_portal::utils::logging::setup_logging;
use driver_portal::{AppConfig, build_controller};
use log::{error, info};
use tokio::io::BufReader;

#[tokio::main]
async fn main() {
    setup_logging();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            handle_error(&PortalError::from(e));
            std::process::exit(1);
        }
    };

    let controller = match build_controller(&config).await {
        Ok(controller) => controller,
        Err(e) => {
            handle_error(&e);
            std::process::exit(1);
        }
    };

    info!("Starting driver portal");

    let mut console = Console::new(controller);
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();

    if let Err(e) = console.run(stdin, &mut stdout).await {
        error!("Console I/O failed: {}", e);
        std::process::exit(1);
    }
}
