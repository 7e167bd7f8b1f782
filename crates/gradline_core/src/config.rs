//! Renderer configuration

use gradline_paint::Color;

/// Stroke configuration for a gradient path
#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    /// Stroke width in device-independent units, before zoom compensation
    pub line_width: f32,
    /// Draw a solid border beneath the gradient
    pub shows_border: bool,
    /// Border color; opaque white when unset
    pub border_color: Option<Color>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            line_width: 1.0,
            shows_border: false,
            border_color: None,
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_line_width(mut self, line_width: f32) -> Self {
        self.line_width = line_width;
        self
    }

    pub fn with_border(mut self, shows_border: bool) -> Self {
        self.shows_border = shows_border;
        self
    }

    pub fn with_border_color(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }
}
