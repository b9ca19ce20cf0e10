use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use client_core::{
    load_settings, navigation::BRAND_LINK, CancellationController, DialogContent,
    HttpBookingService, NAV_LINKS,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Road booking client")]
struct Cli {
    /// Booking service address; overrides booking_client.toml and the environment.
    #[arg(long, global = true)]
    base_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Cancel a booking by its identifier.
    Cancel { booking_id: String },
    /// Print the navigation bar with the link for PATH highlighted.
    Nav {
        #[arg(long, default_value = "/")]
        current: String,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    match cli.command {
        Command::Cancel { booking_id } => {
            let settings = load_settings()
                .context("failed to load client settings")?
                .with_base_url(cli.base_url)
                .context("invalid --base-url")?;
            tracing::info!(base_url = %settings.base_url, "using booking service");
            let service =
                HttpBookingService::new(&settings).context("failed to build booking service")?;

            let mut controller = CancellationController::new();
            controller.update_identifier(booking_id);
            controller.submit_cancellation(&service).await;

            let Some(outcome) = controller.active_outcome() else {
                return Ok(ExitCode::FAILURE);
            };
            print!("{}", render_dialog(&outcome.dialog_content()));
            Ok(if outcome.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Nav { current } => {
            print!("{}", render_nav(&current));
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn render_dialog(content: &DialogContent) -> String {
    let mut out = format!("{}\n[{}]\n", content.title, content.badge);
    for line in &content.lines {
        out.push_str(line);
        out.push('\n');
    }
    out
}

fn render_nav(current_path: &str) -> String {
    let mut out = format!("{}\n", BRAND_LINK.label);
    for link in NAV_LINKS {
        let marker = if client_core::is_active(link.path, current_path) {
            '*'
        } else {
            ' '
        };
        out.push_str(&format!("{marker} {:<22}{}\n", link.label, link.path));
    }
    out
}
