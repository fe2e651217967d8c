use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use storyframe::{compose, config, output};

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "storyframe")]
#[command(about = "Compose a photo into a story card with a blurred cover background")]
#[command(long_about = "\
Compose a photo into a story card with a blurred cover background

The same image is used twice: scaled to cover the whole canvas,
center-cropped and blurred for the backdrop, then scaled to the exact
canvas width and pasted unblurred on top at a configurable height.

  storyframe compose photo.jpg card.png
  storyframe compose photo.jpg card.png --y-ratio 0.5 --blur-radius 20
  storyframe gen-config > storyframe.toml

Defaults produce a 1080x1920 (9:16) story card with a 30px blur and the
foreground's top edge at 38% of the canvas height. Values between 0.35
and 0.55 suit most photos. A storyframe.toml in the working directory
(or named via --config) overrides the defaults; flags override both.")]
#[command(version = version_string())]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compose a single image onto the canvas
    Compose(ComposeArgs),
    /// Print a stock storyframe.toml with all options documented
    GenConfig,
}

#[derive(clap::Args)]
struct ComposeArgs {
    /// Source image (jpg, jpeg, png, tif, tiff, webp)
    input: PathBuf,

    /// Output image — encoding format follows the extension
    output: PathBuf,

    /// Config file (defaults to ./storyframe.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Canvas width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Canvas height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Gaussian blur radius in pixels (0 disables the blur)
    #[arg(long)]
    blur_radius: Option<f32>,

    /// Foreground top edge as a fraction of canvas height (0.0 = top, 1.0 = bottom)
    #[arg(long)]
    y_ratio: Option<f64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Compose(args) => {
            let mut cfg = match &args.config {
                Some(path) => config::load_config_file(path)?,
                None => config::load_config(Path::new("."))?,
            };
            if let Some(width) = args.width {
                cfg.canvas.width = width;
            }
            if let Some(height) = args.height {
                cfg.canvas.height = height;
            }
            if let Some(radius) = args.blur_radius {
                cfg.background.blur_radius = radius;
            }
            if let Some(ratio) = args.y_ratio {
                cfg.foreground.y_ratio = ratio;
            }
            // Flags bypass the file loader, so validate the merged result
            cfg.validate()?;

            let report = compose::compose(&args.input, &args.output, &cfg)?;
            output::print_compose_report(&args.input, &report);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
