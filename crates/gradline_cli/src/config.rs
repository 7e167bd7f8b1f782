//! Scene file handling (gradline.toml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top-level scene configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct SceneConfig {
    #[serde(default)]
    pub canvas: CanvasConfig,
    #[serde(default)]
    pub view: ViewConfig,
    pub style: StyleConfig,
    pub route: RouteConfig,
}

/// Output image settings
#[derive(Debug, Deserialize, Serialize)]
pub struct CanvasConfig {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    /// Hex color painted before the route
    #[serde(default = "default_background")]
    pub background: String,
    /// Margin kept between the route and the image edge at zoom 1
    #[serde(default = "default_padding")]
    pub padding: f32,
}

fn default_width() -> u32 {
    800
}

fn default_height() -> u32 {
    600
}

fn default_background() -> String {
    "#1e1f24".to_string()
}

fn default_padding() -> f32 {
    32.0
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            background: default_background(),
            padding: default_padding(),
        }
    }
}

/// Camera settings
#[derive(Debug, Deserialize, Serialize)]
pub struct ViewConfig {
    /// Zoom about the canvas center; 1.0 fits the route
    #[serde(default = "default_zoom")]
    pub zoom: f32,
}

fn default_zoom() -> f32 {
    1.0
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            zoom: default_zoom(),
        }
    }
}

/// Stroke appearance
#[derive(Debug, Deserialize, Serialize)]
pub struct StyleConfig {
    /// On-screen stroke width in pixels
    #[serde(default = "default_line_width")]
    pub line_width: f32,
    /// Gradient colors as hex strings, in stop order
    pub colors: Vec<String>,
    #[serde(default)]
    pub shows_border: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
}

fn default_line_width() -> f32 {
    6.0
}

/// The polyline to draw
#[derive(Debug, Deserialize, Serialize)]
pub struct RouteConfig {
    /// WGS84 `[latitude, longitude]` pairs in drawing order
    pub points: Vec<[f64; 2]>,
}

impl SceneConfig {
    /// Load a scene from a file, or from `gradline.toml` inside a directory
    pub fn load(path: &Path) -> Result<Self> {
        let scene_path = if path.is_dir() {
            path.join("gradline.toml")
        } else {
            path.to_path_buf()
        };

        if !scene_path.exists() {
            anyhow::bail!(
                "No scene found at {}. Run `gradline init` to create one.",
                scene_path.display()
            );
        }

        let content = fs::read_to_string(&scene_path)
            .with_context(|| format!("Failed to read {}", scene_path.display()))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse {}", scene_path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let scene: SceneConfig = toml::from_str(content)?;
        anyhow::ensure!(
            scene.canvas.width > 0 && scene.canvas.height > 0,
            "canvas must be at least 1x1 pixels"
        );
        Ok(scene)
    }

    /// A short route through central London
    pub fn sample() -> Self {
        Self {
            canvas: CanvasConfig::default(),
            view: ViewConfig::default(),
            style: StyleConfig {
                line_width: default_line_width(),
                colors: vec![
                    "#ff3b30".to_string(),
                    "#ffcc00".to_string(),
                    "#34c759".to_string(),
                    "#007aff".to_string(),
                ],
                shows_border: true,
                border_color: None,
            },
            route: RouteConfig {
                points: vec![
                    [51.5007, -0.1246],
                    [51.5033, -0.1196],
                    [51.5055, -0.1150],
                    [51.5081, -0.0976],
                    [51.5079, -0.0877],
                    [51.5055, -0.0754],
                ],
            },
        }
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize scene")
    }
}
