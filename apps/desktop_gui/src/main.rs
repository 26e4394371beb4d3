use std::path::PathBuf;

mod backend_bridge;
mod config;
mod controller;
mod ui;

use anyhow::Context;
use clap::Parser;
use client_core::GenerationClient;
use crossbeam_channel::bounded;
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{clipboard::detect_clipboard, events::UiEvent};
use crate::ui::HeadcanonApp;

#[derive(Parser, Debug)]
#[command(about = "Desktop headcanon generator")]
struct Args {
    /// Base URL of the generation service.
    #[arg(long)]
    server_url: Option<String>,
    /// Tracing filter used when RUST_LOG is unset.
    #[arg(long)]
    log_filter: Option<String>,
    /// Settings file to load instead of the default locations.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let settings = config::load_settings(args.config.as_deref())?
        .with_overrides(args.server_url, args.log_filter);

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&settings.log_filter)),
        )
        .init();
    tracing::info!(server_url = %settings.server_url, "starting headcanon generator");

    let client = GenerationClient::new(&settings.server_url)
        .with_context(|| format!("invalid server url '{}'", settings.server_url))?;

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    backend_bridge::runtime::launch(client, cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Headcanon Generator")
            .with_inner_size([900.0, 820.0])
            .with_min_inner_size([520.0, 560.0]),
        ..Default::default()
    };
    let server_url = settings.server_url.clone();
    eframe::run_native(
        "Headcanon Generator",
        options,
        Box::new(move |cc| {
            Ok(Box::new(HeadcanonApp::new(
                cmd_tx,
                ui_rx,
                detect_clipboard(&cc.egui_ctx),
                server_url,
            )))
        }),
    )
    .map_err(|err| anyhow::anyhow!("desktop gui exited with error: {err}"))
}
