use clap::Parser;
use deckline::{Campaign, CanvasProfile, DeckError, GeneratorConfig, IcpDeckGenerator};
use std::path::PathBuf;

/// Generate a branded ICP sales deck (PDF) from campaign JSON.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Campaign JSON with customer, solution and ICP records.
    campaign: PathBuf,

    /// Where to write the PDF.
    output: PathBuf,

    /// Generator configuration JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Logo image, overriding the configured one.
    #[arg(long)]
    logo: Option<PathBuf>,

    /// Page format.
    #[arg(long, value_enum)]
    canvas: Option<CanvasProfile>,

    /// Leave the logo off every slide.
    #[arg(long)]
    no_logo: bool,
}

fn main() -> Result<(), DeckError> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => GeneratorConfig::from_file(path)?,
        None => GeneratorConfig::default(),
    };
    if let Some(logo) = args.logo {
        config = config.with_logo_path(logo);
    }
    if let Some(canvas) = args.canvas {
        config = config.with_canvas(canvas);
    }
    if args.no_logo {
        config = config.without_logo();
    }

    let campaign = Campaign::from_file(&args.campaign)?;
    let generator = IcpDeckGenerator::new(config);
    let report = generator.generate_to_file(&campaign, &args.output)?;

    println!(
        "Generated {} ({} pages, {} truncated sections)",
        args.output.display(),
        report.pages,
        report.truncations.len()
    );
    Ok(())
}
