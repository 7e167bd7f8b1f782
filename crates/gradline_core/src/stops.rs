//! Gradient stop placement

use gradline_paint::{Color, GradientStop};

use crate::error::{RenderError, Result};

/// Evenly spaced stop offsets `0, 1/N, ..., (N-1)/N` for `N` colors
pub fn stop_positions(color_count: usize) -> Result<Vec<f32>> {
    if color_count == 0 {
        return Err(RenderError::EmptyColorList);
    }
    let n = color_count as f32;
    Ok((0..color_count).map(|i| i as f32 / n).collect())
}

/// Pair each color with its offset
pub fn gradient_stops(colors: &[Color]) -> Result<Vec<GradientStop>> {
    let positions = stop_positions(colors.len())?;
    Ok(pair(&positions, colors))
}

pub(crate) fn pair(positions: &[f32], colors: &[Color]) -> Vec<GradientStop> {
    positions
        .iter()
        .zip(colors)
        .map(|(&offset, &color)| GradientStop::new(offset, color))
        .collect()
}
