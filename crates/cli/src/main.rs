#![deny(unsafe_code)]
//! CLI binary for the firefly-engine generative art system.
//!
//! Subcommands:
//! - `render <mask>` — build a spot field from a mask image, run the swarm
//!   N steps, write a PNG
//! - `list` — print available engines and lighting strategies

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use firefly_core::{Engine, EngineError, Seed};
use firefly_engines::pixel::{Lighting, Rasterizer};
use firefly_engines::EngineKind;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "firefly-engine", about = "Firefly swarm generative art CLI")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the swarm over a mask image for N steps and write a PNG snapshot.
    Render {
        /// Mask image: the flies seek pixels that differ from its top-left
        /// background color.
        mask: PathBuf,

        /// Engine name.
        #[arg(short, long, default_value = "fireflies")]
        engine: String,

        /// Sampling stride for the spot-field grid scan.
        #[arg(long, default_value_t = 4)]
        stride: usize,

        /// Number of simulation steps.
        #[arg(short, long, default_value_t = 300)]
        steps: usize,

        /// PRNG seed for deterministic output.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Lighting strategy (glow, reveal, none).
        #[arg(short, long, default_value = "glow")]
        lighting: String,

        /// Output file path.
        #[arg(short, long, default_value = "output.png")]
        output: PathBuf,

        /// Engine parameters as a JSON string.
        #[arg(long, default_value = "{}")]
        params: String,
    },
    /// List available engines and lighting strategies.
    List,
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let engines = EngineKind::list_engines();
            let lighting = Lighting::list_names();
            if cli.json {
                let info = serde_json::json!({
                    "engines": engines,
                    "lighting": lighting,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Engines:");
                for name in engines {
                    println!("  {name}");
                }
                println!("Lighting:");
                println!("  {}", lighting.join(", "));
            }
        }
        Command::Render {
            mask,
            engine,
            stride,
            steps,
            seed,
            lighting,
            output,
            params,
        } => {
            let params: serde_json::Value = serde_json::from_str(&params)
                .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;

            let lighting =
                Lighting::from_name(&lighting).map_err(|e| CliError::Input(e.to_string()))?;

            let mask_image = firefly_engines::snapshot::load_mask(&mask)?;

            let mut eng = EngineKind::from_name(&engine, &mask_image, stride, seed, &params)
                .map_err(|e| match e {
                    EngineError::EmptySpotField { .. } => CliError::Input(format!(
                        "{}: every sampled pixel matches the background, nothing to seek",
                        mask.display()
                    )),
                    other => CliError::from(other),
                })?;

            (0..steps).try_for_each(|_| eng.step())?;

            let raster = Rasterizer {
                background: mask_image.background(),
                lighting,
            };
            let rgba = raster.render(&eng.frame(), &mask_image);
            firefly_engines::snapshot::write_png(
                rgba,
                mask_image.width(),
                mask_image.height(),
                &output,
            )?;

            if cli.json {
                let record = Seed {
                    engine: engine.clone(),
                    mask: mask.display().to_string(),
                    stride,
                    params: eng.params(),
                    seed,
                    steps,
                };
                let info = serde_json::json!({
                    "seed": record,
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered {engine} over {} ({} steps, seed {seed}) -> {}",
                    mask.display(),
                    steps,
                    output.display()
                );
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
