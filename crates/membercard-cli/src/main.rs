//! Membership Card Generator CLI
//!
//! Thin wrapper around membercard-core for scripting and batch use.
//!
//! ## Usage
//!
//! ```bash
//! # Render a card into ~/Downloads/membership-card.png
//! membercard render --name "Aminah" --branch putrajaya --theme sunset --photo me.jpg
//!
//! # Render into a specific directory, for a fixed date
//! membercard render --name "Aminah" --out ./cards --date 2024-01-05
//!
//! # Print the card markup
//! membercard svg --name "Aminah" --branch bangi
//!
//! # Print the share intent URL
//! membercard share-url
//!
//! # List allowed values
//! membercard branches
//! membercard themes
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use membercard_core::{
    save_card, text, Branch, CardConfig, CardStudio, FormState, PhotoDataUri, Rasterizer,
    ShareIntent, Theme,
};

/// Membership Card Generator
#[derive(Parser)]
#[command(name = "membercard")]
#[command(version = "0.1.0")]
#[command(about = "Membership Card Generator - render Global Ikhwan membership cards")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// JSON config file overriding card defaults
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Skip loading system fonts (text is left out of the PNG)
    #[arg(long, global = true)]
    no_system_fonts: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the card and save it as membership-card.png
    Render {
        #[command(flatten)]
        card: CardArgs,

        /// Output directory (default: downloads directory)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Pixel density of the PNG
        #[arg(long)]
        scale: Option<f32>,
    },

    /// Print the card markup
    Svg {
        #[command(flatten)]
        card: CardArgs,
    },

    /// Print the share intent URL
    ShareUrl,

    /// List branch keys
    Branches,

    /// List theme keys
    Themes,
}

#[derive(Args)]
struct CardArgs {
    /// Member name
    #[arg(short, long, default_value = "")]
    name: String,

    /// Branch key (see `membercard branches`)
    #[arg(short, long)]
    branch: Option<Branch>,

    /// Theme key (see `membercard themes`)
    #[arg(short, long, default_value = "default")]
    theme: Theme,

    /// Photo file (PNG, JPEG or WebP)
    #[arg(short, long)]
    photo: Option<PathBuf>,

    /// Membership date as YYYY-MM-DD (default: today)
    #[arg(short, long)]
    date: Option<NaiveDate>,
}

impl CardArgs {
    fn form(&self) -> FormState {
        let mut form = FormState::new();
        form.set_name(self.name.clone());
        form.branch = self.branch;
        form.set_theme(self.theme);
        if let Some(ref path) = self.photo {
            form.apply_photo(PhotoDataUri::load(path).map(Some));
        }
        form
    }

    fn date(&self) -> NaiveDate {
        self.date.unwrap_or_else(text::today)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let mut config = CardConfig::load_or_default(cli.config.as_deref())
        .with_context(|| format!("Failed to load config {:?}", cli.config))?;

    match cli.command {
        Commands::Render { card, out, scale } => {
            if let Some(dir) = out {
                config.output_dir = Some(dir);
            }
            if let Some(scale) = scale {
                config.scale = scale;
            }
            let studio = CardStudio::new(config, rasterizer(cli.no_system_fonts));
            let out_dir = studio.config().output_dir();

            let rendered = studio
                .capture(&card.form(), card.date())
                .context("Failed to render card")?;
            let path = save_card(&rendered, &out_dir).context("Failed to save card")?;

            println!("Saved: {}", path.display());
            println!("  Size: {}x{}", rendered.width, rendered.height);
        }

        Commands::Svg { card } => {
            // Markup needs no fonts
            let studio = CardStudio::new(config, Rasterizer::without_fonts());
            println!("{}", studio.preview(&card.form(), card.date()));
        }

        Commands::ShareUrl => {
            println!("{}", ShareIntent::from_config(&config).to_url());
        }

        Commands::Branches => {
            for branch in Branch::all() {
                println!("{:<15} {}", branch.key(), branch.option_label());
            }
        }

        Commands::Themes => {
            for theme in Theme::all() {
                let (from, to) = theme.gradient();
                println!("{:<15} {} ({} -> {})", theme.key(), theme.label(), from, to);
            }
        }
    }

    Ok(())
}

fn rasterizer(no_system_fonts: bool) -> Rasterizer {
    if no_system_fonts {
        Rasterizer::without_fonts()
    } else {
        Rasterizer::with_system_fonts()
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}
