#![allow(non_snake_case)]

mod app;
mod components;
mod context;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use membercard_core::{CardConfig, CardStudio, Rasterizer};

/// Studio shared by every window, set up before launch
static STUDIO: OnceLock<CardStudio> = OnceLock::new();

/// Get the card studio (defaults if launched without one)
pub fn get_studio() -> CardStudio {
    STUDIO
        .get()
        .cloned()
        .unwrap_or_else(|| CardStudio::new(CardConfig::default(), Rasterizer::with_system_fonts()))
}

/// Membership Card Generator
#[derive(Parser, Debug)]
#[command(name = "membercard-desktop")]
#[command(about = "Membership Card Generator - design and export your membership card")]
struct Args {
    /// JSON config file overriding card defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory "Save as Image" writes to (default: downloads directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Pixel density of exported PNGs
    #[arg(short, long)]
    scale: Option<f32>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut config = match CardConfig::load_or_default(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Ignoring config {:?}: {}", args.config, e);
            CardConfig::default()
        }
    };
    if let Some(dir) = args.output_dir {
        config.output_dir = Some(dir);
    }
    if let Some(scale) = args.scale {
        config.scale = scale;
    }

    tracing::info!("Saving cards to {:?}", config.output_dir());

    // Font scan happens once, before the window opens
    let _ = STUDIO.set(CardStudio::new(config, Rasterizer::with_system_fonts()));

    // Narrow window, like the single-column form
    let window_width = 520.0;
    let window_height = 900.0;

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Membership Card Generator")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
