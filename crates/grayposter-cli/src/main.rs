//! grayposter - Posterize grayscale images
//!
//! A command-line tool for reducing an image to a few gray levels.

use clap::{Parser, Subcommand};
use grayposter::{posterize_file, BucketMap, Levels, Mapping, ValueList};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "grayposter")]
#[command(version)]
#[command(about = "Reduce an image to a limited number of gray levels", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Quantize to evenly spaced gray levels
    Levels {
        /// Input image file (JPEG, PNG, BMP)
        input_path: PathBuf,

        /// Output image file; the format follows the extension
        output_path: PathBuf,

        /// Number of gray levels (2-256)
        #[arg(value_parser = clap::value_parser!(u16).range(2..=256))]
        levels: u16,
    },

    /// Map intensity buckets to chosen gray values
    #[command(after_help = "Example values input: '10,80,150,200,255'\n\
                            Optional bin markers input: '50,100,150,200'")]
    Buckets {
        /// Input image file (JPEG, PNG, BMP)
        input_path: PathBuf,

        /// Output image file; the format follows the extension
        output_path: PathBuf,

        /// Comma-separated output values in 0-255
        values: ValueList,

        /// Comma-separated bucket breakpoints strictly between 0 and 255,
        /// one fewer than the values (default: evenly spaced)
        bin_markers: Option<ValueList>,
    },
}

fn run(input: &Path, output: &Path, mapping: &Mapping) -> Result<(), Box<dyn std::error::Error>> {
    log::info!("Posterizing '{}'", input.display());

    let report = posterize_file(input, output, mapping).map_err(|e| {
        format!(
            "Failed to posterize '{}' into '{}': {}",
            input.display(),
            output.display(),
            e
        )
    })?;

    log::info!(
        "Wrote {}x{} image with {} gray levels",
        report.width,
        report.height,
        report.distinct_levels
    );
    println!("Posterized image saved to {}", output.display());
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Levels {
            input_path,
            output_path,
            levels,
        } => {
            let mapping = Mapping::Levels(Levels::new(levels)?);
            log::debug!("Using {} levels", levels);
            run(&input_path, &output_path, &mapping)?;
        }

        Commands::Buckets {
            input_path,
            output_path,
            values,
            bin_markers,
        } => {
            let buckets = BucketMap::new(&values, bin_markers.as_deref())
                .map_err(|e| format!("Invalid buckets: {}", e))?;
            log::debug!(
                "Using values {:?}, breakpoints {:?}",
                buckets.values(),
                buckets.breakpoints()
            );
            run(&input_path, &output_path, &Mapping::Buckets(buckets))?;
        }
    }

    Ok(())
}
