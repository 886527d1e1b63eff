//! # domod
//!
//! Composition root that wires the home controller to its observers and
//! runs the interactive console.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize logging
//! - Build the house plan and the controller
//! - Register the built-in observers
//! - Run the console loop until quit or end of input
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer; no domain logic belongs here.

mod config;
mod console;

use anyhow::Context;
use domo_app::controller::HomeController;
use domo_app::observers::{ObserverKind, SoundAlert, build_observer};

use crate::config::Config;

fn main() -> anyhow::Result<()> {
    // Configuration & logging
    let config = Config::load().context("failed to load configuration")?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.logging.filter))
        .with_writer(std::io::stderr)
        .init();

    // Controller
    let mut controller =
        HomeController::new(config.house_plan()).context("invalid house plan")?;

    // Observers; the security subsystem carries the audible chime.
    controller.subscribe(Box::new(SoundAlert::new(build_observer(
        ObserverKind::Security,
    ))));
    controller.subscribe(build_observer(ObserverKind::Climate));
    controller.subscribe(build_observer(ObserverKind::Lighting));
    tracing::info!(
        devices = controller.device_snapshot().len(),
        "controller ready"
    );

    // Console
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    console::run(&mut controller, stdin.lock(), stdout.lock())
        .context("console loop failed")?;

    Ok(())
}
