use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tricolor::{Color, Edit, RangePolicy};

mod gradient;
mod report;

#[derive(Parser)]
#[command(name = "tricolor")]
#[command(about = "View and edit a color in the RGB, CMYK and HLS models")]
struct Cli {
    /// Reject out of range channels instead of clamping them
    #[arg(long, global = true)]
    strict: bool,

    /// Log more (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a color in all three models
    Show {
        /// Color as #rrggbb, #rgb, rgb(r, g, b), cmyk(c, m, y, k) or hls(h, l, s)
        color: String,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Apply single channel edits to a color, in order
    Edit {
        /// The color to start from
        color: String,

        /// Edits as CHANNEL=VALUE (e.g. "key=0.5" or "h=0.25")
        #[arg(required = true)]
        edits: Vec<Edit>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Render a gradient between two colors, one band per model
    Gradient {
        /// Left color of the gradient
        from: String,

        /// Right color of the gradient
        to: String,

        /// Output PNG file path
        #[arg(short, long, default_value = "gradient.png")]
        out: PathBuf,

        /// Width of the image in pixels
        #[arg(long, default_value_t = 1000)]
        width: u32,

        /// Height of each band in pixels
        #[arg(long, default_value_t = 100)]
        band_height: u32,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = match cli.verbose {
        0 => "tricolor=warn",
        1 => "tricolor=debug",
        _ => "tricolor=trace",
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let policy = if cli.strict {
        RangePolicy::Reject
    } else {
        RangePolicy::Clamp
    };

    match cli.command {
        Commands::Show { color, json } => {
            let color = parse_color(&color, policy)?;
            println!("{}", report::render(&color, json)?);
        }
        Commands::Edit { color, edits, json } => {
            let mut color = parse_color(&color, policy)?;
            for edit in &edits {
                color = edit.apply(&color, policy).with_context(|| {
                    format!("could not apply {}={}", edit.channel, edit.value)
                })?;
                tracing::debug!(%color, channel = %edit.channel, "applied edit");
            }
            println!("{}", report::render(&color, json)?);
        }
        Commands::Gradient {
            from,
            to,
            out,
            width,
            band_height,
        } => {
            anyhow::ensure!(
                width > 0 && band_height > 0,
                "image dimensions must be positive"
            );
            let from = parse_color(&from, policy)?;
            let to = parse_color(&to, policy)?;

            gradient::render(&from, &to, width, band_height)?
                .save(&out)
                .with_context(|| format!("could not write image to {}", out.display()))?;
            tracing::info!(path = %out.display(), "wrote gradient");
        }
    }

    Ok(())
}

fn parse_color(text: &str, policy: RangePolicy) -> anyhow::Result<Color> {
    Color::parse(text, policy).with_context(|| format!("invalid color `{text}`"))
}
