//! # MENAGERIE
//!
//! Builds voxel animal figures and prints what came out.
//!
//! ```text
//! menagerie list
//! menagerie build eagle --seed 7
//! menagerie --config palette.toml build-all
//! menagerie config > menagerie.toml
//! ```
//!
//! Set `RUST_LOG=debug` to see per-build diagnostics.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use menagerie_core::Bounds;
use menagerie_models::{ModelConfig, ModelLibrary, ModelSeed, Species, VoxelModel};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "menagerie")]
#[command(version, about = "Procedural voxel animal models", long_about = None)]
struct Cli {
    /// Configuration file (TOML) with floor height and palette
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every species in catalog order
    List,

    /// Build one species and print its summary
    Build {
        /// Species name (case-insensitive)
        species: Species,

        /// Seed for species with random details
        #[arg(short, long, default_value_t = ModelSeed::DEFAULT.value())]
        seed: u64,
    },

    /// Build the whole catalog in parallel
    BuildAll {
        /// Seed for species with random details
        #[arg(short, long, default_value_t = ModelSeed::DEFAULT.value())]
        seed: u64,
    },

    /// Print the effective configuration as TOML
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ModelConfig::from_toml_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => ModelConfig::default(),
    };
    let library = ModelLibrary::new(config);

    match cli.command {
        Commands::List => {
            for species in Species::ALL {
                let note = if species.uses_randomness() { "  (seeded)" } else { "" };
                println!("{species}{note}");
            }
        }
        Commands::Build { species, seed } => {
            let model = library.build_seeded(species, ModelSeed::new(seed));
            info!(%species, seed, voxels = model.voxel_count(), "build finished");
            print_model(&library, &model);
        }
        Commands::BuildAll { seed } => {
            let models = library.build_all(ModelSeed::new(seed));
            println!("{:<10} {:>7}  {:>12}", "species", "voxels", "size");
            let mut total = 0;
            for model in &models {
                total += model.voxel_count();
                println!(
                    "{:<10} {:>7}  {:>12}",
                    model.name(),
                    model.voxel_count(),
                    model.bounds().map_or_else(|| "-".to_owned(), size)
                );
            }
            println!("{:<10} {total:>7}", "total");
            info!(models = models.len(), voxels = total, seed, "catalog built");
        }
        Commands::Config => {
            print!("{}", library.config().to_toml_string()?);
        }
    }

    Ok(())
}

fn size(bounds: Bounds) -> String {
    format!("{}x{}x{}", bounds.width(), bounds.height(), bounds.depth())
}

fn print_model(library: &ModelLibrary, model: &VoxelModel) {
    println!("{}: {} voxels", model.name(), model.voxel_count());

    if let Some(bounds) = model.bounds() {
        let (min, max) = (bounds.min, bounds.max);
        println!(
            "  bounds ({}, {}, {}) .. ({}, {}, {})  [{}]",
            min.x,
            min.y,
            min.z,
            max.x,
            max.y,
            max.z,
            size(bounds)
        );
    }

    let palette = &library.config().palette;
    for (color, count) in model.color_histogram() {
        let name = palette.name_of(color).unwrap_or("-");
        println!("  {color}  {name:<10} {count:>6}");
    }
}
