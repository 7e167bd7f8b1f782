//! Gradline CLI
//!
//! Renders a gradient polyline described by a TOML scene file to PNG.
//!
//! ```text
//! gradline init route.toml
//! gradline render route.toml -o route.png --zoom 1.5
//! ```

mod config;
mod mercator;
mod raster;
mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use crate::config::SceneConfig;

/// Render gradient polylines to images
#[derive(Parser, Debug)]
#[command(name = "gradline")]
#[command(about = "Render gradient polylines from scene files")]
#[command(version)]
struct Cli {
    /// Log debug output (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a scene to a PNG file
    Render {
        /// Scene file, or a directory containing gradline.toml
        #[arg(default_value = ".")]
        scene: PathBuf,

        /// Output image path
        #[arg(short, long, default_value = "gradline.png")]
        output: PathBuf,

        /// Zoom about the canvas center, overriding the scene's [view] zoom
        #[arg(long)]
        zoom: Option<f32>,
    },

    /// Write a sample scene
    Init {
        #[arg(default_value = "gradline.toml")]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    match cli.command {
        Command::Render {
            scene,
            output,
            zoom,
        } => cmd_render(&scene, &output, zoom),
        Command::Init { path, force } => cmd_init(&path, force),
    }
}

fn cmd_render(scene_path: &Path, output: &Path, zoom: Option<f32>) -> Result<()> {
    let scene = SceneConfig::load(scene_path)?;
    tracing::info!(
        points = scene.route.points.len(),
        colors = scene.style.colors.len(),
        "Loaded scene from {}",
        scene_path.display()
    );

    let frame = render::render_scene(&scene, zoom)?;
    if !frame.report.fill.is_drawn() {
        tracing::warn!(outcome = ?frame.report.fill, "gradient fill was not drawn");
    }

    frame
        .image
        .save(output)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    tracing::info!("Wrote {}", output.display());
    Ok(())
}

fn cmd_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            path.display()
        );
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, SceneConfig::sample().to_toml()?)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::info!("Created sample scene at {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_render() {
        let cli = Cli::parse_from(["gradline", "render", "route.toml", "-o", "out.png", "--zoom", "2"]);
        let Command::Render {
            scene,
            output,
            zoom,
        } = cli.command
        else {
            panic!("expected render");
        };
        assert_eq!(scene, PathBuf::from("route.toml"));
        assert_eq!(output, PathBuf::from("out.png"));
        assert_eq!(zoom, Some(2.0));
        assert!(!cli.verbose);
    }

    #[test]
    fn test_init_then_render() {
        let dir = std::env::temp_dir().join(format!("gradline-cli-{}", std::process::id()));
        let scene = dir.join("gradline.toml");
        let output = dir.join("route.png");

        cmd_init(&scene, false).unwrap();
        assert!(cmd_init(&scene, false).is_err());
        cmd_init(&scene, true).unwrap();

        cmd_render(&dir, &output, None).unwrap();
        let written = image::open(&output).unwrap();
        assert_eq!((written.width(), written.height()), (800, 600));

        fs::remove_dir_all(&dir).unwrap();
    }
}
