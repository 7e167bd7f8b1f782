//! Host color normalization
//!
//! Hosts hand colors over in whatever representation their toolkit uses.
//! They are converted once, at construction, into the paint layer's RGBA
//! [`Color`]; the draw path never sees a host representation.

use gradline_paint::Color;

use crate::error::{RenderError, Result};

/// A color as supplied by the host
#[derive(Clone, Debug, PartialEq)]
pub enum HostColor {
    /// Float RGBA, components in 0.0..=1.0
    Rgba(Color),
    /// 8-bit RGBA
    Rgba8([u8; 4]),
    /// Grayscale with alpha, components in 0.0..=1.0
    Gray { white: f32, alpha: f32 },
    /// Hue/saturation/brightness with alpha, components in 0.0..=1.0
    Hsba {
        hue: f32,
        saturation: f32,
        brightness: f32,
        alpha: f32,
    },
    /// `#RGB`, `#RRGGBB` or `#RRGGBBAA`
    Hex(String),
}

impl HostColor {
    /// Convert to RGBA, rejecting out-of-range components and malformed hex
    pub fn normalize(&self) -> Result<Color> {
        let color = match self {
            HostColor::Rgba(c) => *c,
            HostColor::Rgba8([r, g, b, a]) => Color::from_rgba8(*r, *g, *b, *a),
            HostColor::Gray { white, alpha } => Color::new(*white, *white, *white, *alpha),
            HostColor::Hsba {
                hue,
                saturation,
                brightness,
                alpha,
            } => {
                check_unit(self, &[*hue, *saturation, *brightness, *alpha])?;
                hsb_to_rgb(*hue, *saturation, *brightness).with_alpha(*alpha)
            }
            HostColor::Hex(s) => parse_hex(s).ok_or_else(|| unsupported(self))?,
        };

        if !color.is_normalized() {
            return Err(unsupported(self));
        }
        Ok(color)
    }
}

impl From<Color> for HostColor {
    fn from(color: Color) -> Self {
        HostColor::Rgba(color)
    }
}

impl From<[u8; 4]> for HostColor {
    fn from(rgba: [u8; 4]) -> Self {
        HostColor::Rgba8(rgba)
    }
}

impl From<&str> for HostColor {
    fn from(hex: &str) -> Self {
        HostColor::Hex(hex.to_string())
    }
}

/// Normalize a whole color list, failing on the first unsupported entry
pub fn normalize_all<I>(colors: I) -> Result<Vec<Color>>
where
    I: IntoIterator,
    I::Item: Into<HostColor>,
{
    colors.into_iter().map(|c| c.into().normalize()).collect()
}

fn unsupported(color: &HostColor) -> RenderError {
    RenderError::UnsupportedColor(format!("{color:?}"))
}

fn check_unit(color: &HostColor, components: &[f32]) -> Result<()> {
    if components
        .iter()
        .all(|c| c.is_finite() && (0.0..=1.0).contains(c))
    {
        Ok(())
    } else {
        Err(unsupported(color))
    }
}

fn hsb_to_rgb(hue: f32, saturation: f32, brightness: f32) -> Color {
    let h = if hue >= 1.0 { 0.0 } else { hue * 6.0 };
    let sector = h.floor();
    let f = h - sector;
    let v = brightness;
    let p = v * (1.0 - saturation);
    let q = v * (1.0 - saturation * f);
    let t = v * (1.0 - saturation * (1.0 - f));

    match sector as u8 {
        0 => Color::rgb(v, t, p),
        1 => Color::rgb(q, v, p),
        2 => Color::rgb(p, v, t),
        3 => Color::rgb(p, q, v),
        4 => Color::rgb(t, p, v),
        _ => Color::rgb(v, p, q),
    }
}

fn parse_hex(s: &str) -> Option<Color> {
    let digits = s.trim().strip_prefix('#')?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let value = u32::from_str_radix(digits, 16).ok()?;

    match digits.len() {
        3 => {
            let nibble = |shift: u32| (((value >> shift) & 0xF) * 17) as u8;
            Some(Color::from_rgba8(nibble(8), nibble(4), nibble(0), 255))
        }
        6 => Some(Color::from_hex(value)),
        8 => Some(Color::from_rgba8(
            (value >> 24) as u8,
            (value >> 16) as u8,
            (value >> 8) as u8,
            value as u8,
        )),
        _ => None,
    }
}
