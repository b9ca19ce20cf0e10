mod backend_bridge;
mod controller;
mod ui;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use client_core::{load_settings, navigation::CANCEL_PATH};
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::BookingGuiApp;

#[derive(Parser, Debug)]
struct Args {
    /// Booking service address; overrides booking_client.toml and the environment.
    #[arg(long)]
    base_url: Option<String>,
    /// Page shown at startup.
    #[arg(long, default_value = CANCEL_PATH)]
    route: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    let args = Args::parse();

    let settings = load_settings()
        .context("failed to load client settings")?
        .with_base_url(args.base_url)
        .context("invalid --base-url")?;

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    backend_bridge::runtime::launch(settings, cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Traffic Management")
            .with_inner_size([960.0, 640.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    let route = args.route;
    eframe::run_native(
        "Traffic Management",
        options,
        Box::new(move |_cc| Ok(Box::new(BookingGuiApp::new(cmd_tx, ui_rx, route)))),
    )
    .map_err(|err| anyhow!("failed to run desktop gui: {err}"))
}
