use anyhow::{Context, Result, bail};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Instant;

mod config;
mod domain;
mod mesh;
mod render;
mod triangulate;

use config::FileConfig;
use domain::{Outline, OutlineFile};
use mesh::{build_indexed_mesh, estimate_stl_size, validate_and_clean, write_stl};
use render::{render_outline, render_triangles};
use triangulate::triangulate_outline;

/// Triangulate a 2D polygon outline into an STL mesh and SVG preview
///
/// Examples:
///   # Triangulate an outline and write shape.stl
///   poly2mesh -i shape.toml
///
///   # Write the mesh plus a preview of the triangle edges
///   poly2mesh -i shape.toml -o mesh.stl --svg preview.svg
///
///   # Preview just the input outline, keeping degenerate triangles
///   poly2mesh -i shape.json --svg outline.svg --draw-outline --keep-degenerate
///
///   # Use a config file
///   poly2mesh --config my-settings.toml
#[derive(Parser, Debug)]
#[command(name = "poly2mesh")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches poly2mesh.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Outline file (TOML or JSON) with an `outer` ring and optional `hole`
    #[arg(short = 'i', long)]
    input: Option<PathBuf>,

    /// Output STL file path (defaults to the input path with an .stl extension)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// SVG preview output path (optional)
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Draw the input outline in the SVG instead of the triangulation
    #[arg(long)]
    draw_outline: bool,

    /// Keep zero-area triangles instead of filtering them out
    #[arg(long)]
    keep_degenerate: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let total_start = Instant::now();

    let file_config = if let Some(ref config_path) = args.config {
        if config_path.exists() {
            let contents = std::fs::read_to_string(config_path)
                .context(format!("Failed to read config file: {:?}", config_path))?;
            Some(toml::from_str(&contents).context("Failed to parse config file")?)
        } else {
            bail!("Config file not found: {:?}", config_path);
        }
    } else {
        FileConfig::load()
    };

    let input = args
        .input
        .clone()
        .or_else(|| file_config.as_ref().and_then(|c| c.input.clone()));
    let Some(input) = input else {
        bail!("Must provide an outline file with --input/-i");
    };
    let output = args
        .output
        .clone()
        .or_else(|| file_config.as_ref().and_then(|c| c.output.clone()))
        .unwrap_or_else(|| input.with_extension("stl"));
    let svg = args
        .svg
        .clone()
        .or_else(|| file_config.as_ref().and_then(|c| c.svg.clone()));
    let draw_outline =
        args.draw_outline || file_config.as_ref().map(|c| c.draw_outline).unwrap_or(false);
    let keep_degenerate = args.keep_degenerate
        || file_config
            .as_ref()
            .map(|c| c.keep_degenerate)
            .unwrap_or(false);
    let verbose = args.verbose || file_config.as_ref().map(|c| c.verbose).unwrap_or(false);

    println!("poly2mesh - Outline Triangulator");
    println!("================================");
    println!();

    if verbose {
        println!("Configuration:");
        println!("  Input: {}", input.display());
        println!("  Output: {}", output.display());
        if let Some(ref svg_path) = svg {
            println!(
                "  SVG: {} ({})",
                svg_path.display(),
                if draw_outline { "outline" } else { "triangles" }
            );
        }
        println!("  Keep degenerate: {}", keep_degenerate);
        println!();
    }

    let spinner = create_spinner("Reading outline...");
    let outline = load_outline(&input)?;
    let hole_note = outline
        .hole
        .as_ref()
        .map(|h| format!(" and a {}-vertex hole", h.len()))
        .unwrap_or_default();
    spinner.finish_with_message(format!(
        "Read {} outer vertices{}",
        outline.outer.len(),
        hole_note
    ));

    if !outline.is_valid() {
        println!("Outline has fewer than 3 outer vertices; the mesh will be empty");
    }

    let spinner = create_spinner("Triangulating...");
    let start = Instant::now();
    let triangles = triangulate_outline(&outline).context("Failed to triangulate outline")?;
    spinner.finish_with_message(format!(
        "Triangulated into {} triangles [{:.1}s]",
        triangles.len(),
        start.elapsed().as_secs_f32()
    ));

    let triangles = if keep_degenerate {
        triangles
    } else {
        let (cleaned, report) = validate_and_clean(triangles);
        if verbose {
            println!("  {}", report.summary());
            for warning in &report.warnings {
                println!("  Warning: {}", warning);
            }
        }
        cleaned
    };

    let spinner = create_spinner("Building mesh...");
    let mesh = build_indexed_mesh(&triangles);
    spinner.finish_with_message(format!(
        "Built mesh: {} vertices, {} indices",
        mesh.vertices.len(),
        mesh.indices.len()
    ));

    if verbose && let Some(ref bounds) = mesh.bounds {
        println!(
            "  Bounds: ({}, {}) to ({}, {})",
            bounds.min[0], bounds.min[1], bounds.max[0], bounds.max[1]
        );
    }

    let spinner = create_spinner("Writing STL file...");
    write_stl(&output, &mesh).context("Failed to write STL file")?;
    spinner.finish_with_message(format!(
        "Wrote {} triangles ({:.1} KB)",
        mesh.triangle_count(),
        estimate_stl_size(mesh.triangle_count()) as f64 / 1024.0
    ));

    if let Some(ref svg_path) = svg {
        let spinner = create_spinner("Rendering SVG preview...");
        if draw_outline {
            render_outline(svg_path, &outline).context("Failed to render outline SVG")?;
        } else {
            render_triangles(svg_path, &triangles)
                .context("Failed to render triangulation SVG")?;
        }
        spinner.finish_with_message(format!("Rendered {}", svg_path.display()));
    }

    println!();
    println!(
        "Done! Total time: {:.1}s",
        total_start.elapsed().as_secs_f32()
    );
    println!();
    println!("Output: {}", output.display());

    Ok(())
}

/// Read an outline file, picking the format from the file extension
fn load_outline(path: &Path) -> Result<Outline> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read outline file: {}", path.display()))?;

    let file: OutlineFile = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => serde_json::from_str(&contents).context("Failed to parse JSON outline")?,
        _ => toml::from_str(&contents).context("Failed to parse TOML outline")?,
    };

    Ok(file.into())
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}
