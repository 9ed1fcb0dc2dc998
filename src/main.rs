//! Recipe Chain Cost Calculator
//!
//! Computes raw-material costs for production chains built from
//! integer-ratio conversion recipes.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use walkdir::WalkDir;

use ore_calculator::{
    RecipeCatalog,
    calculator::{format_recipe_tree, maximum_production, minimum_raw_material, solve},
    parse::{load_recipe_file, parse_recipes},
};

/// Recipe listing used by the `sample` subcommand.
const SAMPLE_RECIPES: &str = "\
10 ORE => 10 A
1 ORE => 1 B
7 A, 1 B => 1 C
7 A, 1 C => 1 D
7 A, 1 D => 1 E
7 A, 1 E => 1 FUEL
";

#[derive(Parser)]
#[command(name = "ore-calculator")]
#[command(about = "Raw-material cost calculator for recipe production chains")]
struct Cli {
    /// Name of the raw material (the resource with no recipe)
    #[arg(long, default_value = "ORE")]
    raw_material: String,

    /// Name of the end product
    #[arg(long, default_value = "FUEL")]
    target: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Minimum raw material to produce one batch of the target
    Min {
        /// Path to a recipe listing
        input: PathBuf,

        /// Show the recipe dependency tree
        #[arg(short, long)]
        verbose: bool,
    },

    /// Maximum target output producible from a raw-material budget
    Max {
        /// Path to a recipe listing
        input: PathBuf,

        /// Raw-material budget
        #[arg(short, long, default_value_t = 1_000_000_000_000)]
        budget: u64,
    },

    /// Both results: minimum cost and maximum output for a budget
    Solve {
        /// Path to a recipe listing
        input: PathBuf,

        /// Raw-material budget
        #[arg(short, long, default_value_t = 1_000_000_000_000)]
        budget: u64,

        /// Show the recipe dependency tree
        #[arg(short, long)]
        verbose: bool,
    },

    /// Solve every recipe listing found under a directory
    Batch {
        /// Directory to scan for recipe listings
        dir: PathBuf,

        /// Raw-material budget
        #[arg(short, long, default_value_t = 1_000_000_000_000)]
        budget: u64,

        /// File extension of recipe listings
        #[arg(long, default_value = "txt")]
        extension: String,
    },

    /// List all producible resources in a recipe listing
    ListResources {
        /// Path to a recipe listing
        input: PathBuf,
    },

    /// Solve a built-in sample recipe listing
    Sample {
        /// Raw-material budget
        #[arg(short, long, default_value_t = 1_000_000_000_000)]
        budget: u64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let raw = &cli.raw_material;
    let target = &cli.target;

    match cli.command {
        Commands::Min { input, verbose } => {
            let catalog = load_catalog(&input)?;
            if verbose {
                println!("Recipe tree:\n");
                println!("{}", format_recipe_tree(&catalog, target, 0)?);
            }
            let cost = minimum_raw_material(&catalog, raw, target)?;
            println!("Minimum {} required: {}", raw, cost);
        }

        Commands::Max { input, budget } => {
            let catalog = load_catalog(&input)?;
            let output = maximum_production(&catalog, raw, target, budget)?;
            println!("{} {} would produce {} {}", budget, raw, output, target);
        }

        Commands::Solve {
            input,
            budget,
            verbose,
        } => {
            let catalog = load_catalog(&input)?;
            if verbose {
                println!("Recipe tree:\n");
                println!("{}", format_recipe_tree(&catalog, target, 0)?);
            }
            let summary = solve(&catalog, raw, target, budget)?;
            println!("{}", summary);
        }

        Commands::Batch {
            dir,
            budget,
            extension,
        } => {
            let listings = find_recipe_listings(&dir, &extension);
            if listings.is_empty() {
                println!(
                    "No .{} recipe listings found under {}",
                    extension,
                    dir.display()
                );
            }
            for path in listings {
                match load_catalog(&path).and_then(|catalog| {
                    solve(&catalog, raw, target, budget).map_err(Into::into)
                }) {
                    Ok(summary) => println!(
                        "{}: 1 {} costs {} {}; {} {} yields {} {}",
                        path.display(),
                        target,
                        summary.minimum_cost,
                        raw,
                        budget,
                        raw,
                        summary.maximum_output,
                        target
                    ),
                    Err(e) => println!("{}: skipped ({:#})", path.display(), e),
                }
            }
        }

        Commands::ListResources { input } => {
            let catalog = load_catalog(&input)?;
            let resources = catalog.producible_resources();
            if resources.is_empty() {
                println!("No recipes in {}", input.display());
            } else {
                println!("Producible resources:");
                for r in resources {
                    println!("  {}", r);
                }
            }
        }

        Commands::Sample { budget } => {
            let recipes = parse_recipes(SAMPLE_RECIPES)?;
            let catalog = RecipeCatalog::new(recipes)?;
            println!("Sample recipe listing:\n\n{}", SAMPLE_RECIPES);
            let summary = solve(&catalog, raw, target, budget)?;
            println!("{}", summary);
        }
    }

    Ok(())
}

/// Load and validate a recipe listing into a catalog.
fn load_catalog(path: &Path) -> Result<RecipeCatalog> {
    let recipes = load_recipe_file(path)?;
    Ok(RecipeCatalog::new(recipes)?)
}

/// Find recipe listings with the given extension under a directory tree.
fn find_recipe_listings(dir: &Path, extension: &str) -> Vec<PathBuf> {
    let mut listings: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| p.extension().is_some_and(|ext| ext == extension))
        .collect();
    listings.sort();
    listings
}
