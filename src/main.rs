use anyhow::{Context, Result};
use clap::Parser;
use rainbow_palette::{PaletteConfig, PaletteEntry, PaletteError, Representation};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "rainbow",
    about = "Generate a color palette from a hue sweep",
    version
)]
struct Cli {
    /// JSON settings file; flags given on the command line override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of colors (1-64)
    #[arg(short = 'n', long)]
    count: Option<i32>,

    /// Saturation percentage (0-100)
    #[arg(short, long)]
    saturation: Option<i32>,

    /// Lightness percentage (0-100)
    #[arg(short, long)]
    lightness: Option<i32>,

    /// Start of the hue sweep in degrees
    #[arg(long, allow_negative_numbers = true)]
    hue_min: Option<i32>,

    /// End of the hue sweep in degrees
    #[arg(long, allow_negative_numbers = true)]
    hue_max: Option<i32>,

    /// Label format: hex, rgb or hsl
    #[arg(short, long)]
    format: Option<Representation>,

    /// Seed saturation and lightness from a color (#RGB, #RRGGBB, rgb(r,g,b))
    #[arg(long)]
    from_color: Option<String>,

    /// Pick random saturation, lightness and hue sweep
    #[arg(short, long)]
    random: bool,

    /// Seed for --random
    #[arg(long, requires = "random")]
    seed: Option<u64>,

    /// Print entries as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            if let Some(palette_err) = err.downcast_ref::<PaletteError>() {
                eprintln!("{}", palette_err.user_message());
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => PaletteConfig::from_json_file(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => PaletteConfig::default(),
    };

    if let Some(count) = cli.count {
        config.params.count = count;
    }
    if let Some(saturation) = cli.saturation {
        config.params.saturation = saturation;
    }
    if let Some(lightness) = cli.lightness {
        config.params.lightness = lightness;
    }
    if let Some(hue_min) = cli.hue_min {
        config.params.hue_min = hue_min;
    }
    if let Some(hue_max) = cli.hue_max {
        config.params.hue_max = hue_max;
    }
    if let Some(format) = cli.format {
        config.format = format;
    }
    if let Some(color) = cli.from_color {
        config.seed_color = Some(color);
    }

    let mut session = config.into_session().context("Invalid palette settings")?;

    if cli.random {
        let mut rng = match cli.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        session.randomize(&mut rng);
    }

    let labels = session.value_labels();
    log::info!(
        "count {} saturation {} lightness {} hue {}",
        labels.count,
        labels.saturation,
        labels.lightness,
        labels.hue
    );

    let mut mounted: Vec<PaletteEntry> = Vec::new();
    session
        .render(&mut mounted)
        .context("Failed to generate palette")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&mounted)?);
    } else {
        for entry in &mounted {
            println!("{}", entry.label);
        }
    }

    Ok(())
}
