use crate::PixelScheme;
use serde::{Deserialize, Serialize};
use vek::Vec2;

/// The render-space size of one logical pixel and the gap that follows it.
///
/// All conversions between the logical pixel grid and render space go through
/// here so that drawing code and collider generation stay aligned.
#[derive(Serialize, Deserialize, PartialEq, Clone, Copy, Debug)]
pub struct PixelMetrics {
    pub dim: f32,
    pub margin: f32,
}

impl Default for PixelMetrics {
    fn default() -> Self {
        PixelScheme::default().metrics()
    }
}

impl From<PixelScheme> for PixelMetrics {
    fn from(scheme: PixelScheme) -> Self {
        scheme.metrics()
    }
}

impl PixelMetrics {
    pub const fn new(dim: f32, margin: f32) -> Self {
        Self { dim, margin }
    }

    /// Distance between the origins of two neighbouring pixels.
    #[inline(always)]
    pub fn pitch(&self) -> f32 {
        self.dim + self.margin
    }

    /// Absolute render-space position of the `n`-th pixel cell, including the leading margin.
    #[inline(always)]
    pub fn to_render_scale_inclusive(&self, n: f32) -> f32 {
        self.margin + n * self.pitch()
    }

    /// Render-space span of `n` consecutive pixel cells without the trailing margin.
    #[inline(always)]
    pub fn to_render_scale_trimmed(&self, n: f32) -> f32 {
        n * self.pitch() - self.margin
    }

    /// Render-space rate for a per-pixel quantity such as a velocity. No margin term.
    #[inline(always)]
    pub fn to_render_rate(&self, n: f32) -> f32 {
        n * self.pitch()
    }

    /// Converts a logical position (or offset, or extent) on both axes.
    pub fn to_render_point(&self, p: Vec2<f32>) -> Vec2<f32> {
        Vec2::new(
            self.to_render_scale_inclusive(p.x),
            self.to_render_scale_inclusive(p.y),
        )
    }

    /// Converts a logical velocity or acceleration on both axes.
    pub fn to_render_velocity(&self, v: Vec2<f32>) -> Vec2<f32> {
        Vec2::new(self.to_render_rate(v.x), self.to_render_rate(v.y))
    }

    /// Render-space corner of the logical grid cell `(col, row)`.
    pub(crate) fn cell_corner(&self, col: u32, row: u32) -> Vec2<f32> {
        self.to_render_point(Vec2::new(col as f32, row as f32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identities_hold_for_every_scheme() {
        for scheme in PixelScheme::ALL {
            let m = scheme.metrics();
            assert_eq!(m.to_render_scale_inclusive(0.0), m.margin);
            assert_eq!(m.to_render_scale_trimmed(1.0), m.dim);
            assert_eq!(m.to_render_rate(1.0), m.dim + m.margin);
            assert!(m.dim > 0.0 && m.margin >= 0.0);
        }
    }

    #[test]
    fn test_conversions_px3_1() {
        let m = PixelScheme::Px3_1.metrics();
        // 1 + 5 * 4
        assert_eq!(m.to_render_scale_inclusive(5.0), 21.0);
        // 5 * 4 - 1
        assert_eq!(m.to_render_scale_trimmed(5.0), 19.0);
        assert_eq!(m.to_render_rate(5.0), 20.0);
        assert_eq!(m.to_render_rate(-2.0), -8.0);
        assert_eq!(m.to_render_scale_inclusive(0.5), 3.0);
    }

    #[test]
    fn test_vector_conversions() {
        let m = PixelScheme::Px2_1.metrics();
        let p = m.to_render_point(Vec2::new(2.0, 0.0));
        assert_eq!(p, Vec2::new(7.0, 1.0));

        let v = m.to_render_velocity(Vec2::new(2.0, -1.0));
        assert_eq!(v, Vec2::new(6.0, -3.0));
    }

    #[test]
    fn test_default_metrics() {
        let m = PixelMetrics::default();
        assert_eq!(m, PixelMetrics::new(3.0, 0.0));
        assert_eq!(PixelMetrics::from(PixelScheme::Px2_0).pitch(), 2.0);
    }
}
