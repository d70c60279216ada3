//! DragDeck command-line entry point.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dragdeck_app::{PAGES, Script, replay};
use dragdeck_core::{Appearance, Fill, INGREDIENTS, ingredient, is_valid_grid};
use std::path::PathBuf;

/// DragDeck - drag-and-drop pages, driven headlessly
#[derive(Parser)]
#[command(name = "dragdeck")]
#[command(about = "Replay drag gestures against the DragDeck pages")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the navigable pages
    Pages,

    /// List the side-panel ingredients
    Ingredients {
        /// Show only this ingredient
        id: Option<String>,
    },

    /// Replay a gesture script and print the final state as JSON
    Replay {
        /// Path to the script
        script: PathBuf,

        /// Grid size for delta snapping (overrides the script)
        #[arg(long, conflicts_with = "no_snap", value_parser = parse_grid)]
        grid: Option<f64>,

        /// Disable delta snapping
        #[arg(long)]
        no_snap: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Pages => list_pages(),
        Commands::Ingredients { id } => list_ingredients(id.as_deref()),
        Commands::Replay {
            script,
            grid,
            no_snap,
        } => run_replay(script, grid, no_snap),
    }
}

fn parse_grid(value: &str) -> std::result::Result<f64, String> {
    let size: f64 = value.parse().map_err(|e| format!("{e}"))?;
    if is_valid_grid(size) {
        Ok(size)
    } else {
        Err(format!("grid size must be finite and positive, got {value}"))
    }
}

fn list_pages() -> Result<()> {
    for page in PAGES {
        println!("{:<8} {}", page.name(), page.route());
    }
    Ok(())
}

fn hex(rgba: [u8; 3]) -> String {
    format!("#{:02x}{:02x}{:02x}", rgba[0], rgba[1], rgba[2])
}

fn describe_fill(fill: Fill) -> String {
    match fill {
        Fill::Solid(color) => {
            let c = color.to_rgba8();
            format!("solid {}", hex([c.r, c.g, c.b]))
        }
        Fill::LinearGradient {
            angle_degrees,
            start,
            end,
        } => {
            let (s, e) = (start.to_rgba8(), end.to_rgba8());
            format!(
                "gradient {angle_degrees}deg {} -> {}",
                hex([s.r, s.g, s.b]),
                hex([e.r, e.g, e.b])
            )
        }
    }
}

fn list_ingredients(id: Option<&str>) -> Result<()> {
    let selected = match id {
        Some(id) => vec![ingredient::get(id)?],
        None => INGREDIENTS.iter().collect(),
    };
    for ingredient in selected {
        let appearance = Appearance::of(ingredient.kind);
        println!(
            "{:<34} {:<18} {}x{}  {}",
            ingredient.id,
            ingredient.kind,
            ingredient.style.width,
            ingredient.style.height,
            describe_fill(appearance.fill)
        );
    }
    Ok(())
}

fn run_replay(path: PathBuf, grid: Option<f64>, no_snap: bool) -> Result<()> {
    let mut script = Script::load(&path)?;
    if no_snap {
        script.config.grid_size = None;
    } else if let Some(size) = grid {
        script.config.grid_size = Some(size);
    }

    let report = replay(script);
    let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
    println!("{json}");
    Ok(())
}
