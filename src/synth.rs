use crate::{Collider, PixelMetrics, PixelScheme, Polygon, Result, Sprite, SynthSettings, contour};
#[cfg(not(feature = "single_thread"))]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// The collision shape of a body built from a sprite.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub enum BodyShape {
    /// Traced and triangulated outline.
    Polygon(Collider),
    /// Axis aligned box, used when no outline could be produced.
    Box { width: f32, height: f32 },
}

/// Turns sprites into colliders under one set of settings.
#[derive(Debug, Clone, Default)]
pub struct ColliderSynth {
    settings: SynthSettings,
}

impl ColliderSynth {
    pub fn new(settings: SynthSettings) -> Self {
        Self { settings }
    }

    pub fn with_scheme(scheme: PixelScheme) -> Self {
        Self::new(SynthSettings::with_scheme(scheme))
    }

    pub fn settings(&self) -> &SynthSettings {
        &self.settings
    }

    pub fn metrics(&self) -> PixelMetrics {
        self.settings.metrics()
    }

    /// Traces the centered, clockwise outline of the sprite.
    ///
    /// `Ok(None)` for an empty sprite or a degenerate outline. Fails only if the
    /// sprite's bounding box exceeds the configured limits.
    pub fn contour(&self, sprite: &Sprite) -> Result<Option<Polygon>> {
        contour::trace_sprite(sprite, &self.settings)
    }

    /// Traces and triangulates the sprite. `Ok(None)` when no collider can be produced.
    pub fn synthesize(&self, sprite: &Sprite) -> Result<Option<Collider>> {
        Ok(self
            .contour(sprite)?
            .and_then(|polygon| Collider::from_polygon(&polygon)))
    }

    /// Synthesizes many sprites, in parallel unless built with `single_thread`.
    /// Results are in input order.
    pub fn synthesize_all(&self, sprites: &[Sprite]) -> Vec<Result<Option<Collider>>> {
        #[cfg(not(feature = "single_thread"))]
        {
            sprites
                .par_iter()
                .map(|sprite| self.synthesize(sprite))
                .collect()
        }
        #[cfg(feature = "single_thread")]
        {
            sprites
                .iter()
                .map(|sprite| self.synthesize(sprite))
                .collect()
        }
    }

    /// The collider of the sprite, or a box of the sprite's render-space size
    /// if none can be produced.
    pub fn body_shape(&self, sprite: &Sprite) -> Result<BodyShape> {
        if let Some(collider) = self.synthesize(sprite)? {
            return Ok(BodyShape::Polygon(collider));
        }

        log::warn!("Failed to generate polygon collider, falling back to width and height");
        let metrics = self.metrics();
        let (width, height) = sprite.dimensions().unwrap_or((1, 1));
        Ok(BodyShape::Box {
            width: metrics.to_render_scale_inclusive(width as f32),
            height: metrics.to_render_scale_inclusive(height as f32),
        })
    }
}

/// Synthesizes a collider with default limits. `None` scheme means the default scheme.
pub fn generate(sprite: &Sprite, scheme: Option<PixelScheme>) -> Result<Option<Collider>> {
    ColliderSynth::with_scheme(scheme.unwrap_or_default()).synthesize(sprite)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SynthError;
    use crate::sprite::shapes;
    use vek::Vec2;

    #[test]
    fn test_single_pixel_square() {
        let collider = generate(&Sprite::from_coords(&[(0, 0)]), None)
            .unwrap()
            .unwrap();
        let bbox = collider.bbox().unwrap();
        assert_eq!(bbox.min, Vec2::new(-1.5, -1.5));
        assert_eq!(bbox.max, Vec2::new(1.5, 1.5));
        assert_eq!(collider.vertices.len(), 4);
        assert_eq!(collider.triangle_count(), 2);
        assert!((collider.area() - 9.0).abs() < 1e-4);
    }

    #[test]
    fn test_empty_sprite_has_no_collider() {
        assert_eq!(generate(&Sprite::new(), None).unwrap(), None);
        assert_eq!(
            ColliderSynth::default().contour(&Sprite::new()).unwrap(),
            None
        );
    }

    #[test]
    fn test_block_is_two_triangles_in_every_scheme() {
        let sprite = Sprite::from_coords(&[(0, 0), (1, 0), (0, 1), (1, 1)]);
        for scheme in PixelScheme::ALL {
            let synth = ColliderSynth::with_scheme(scheme);
            let collider = synth.synthesize(&sprite).unwrap().unwrap();
            assert_eq!(collider.vertices.len(), 4);
            assert_eq!(collider.triangle_count(), 2);

            let center = collider.bbox().unwrap().center();
            assert!(center.x.abs() < 1e-4 && center.y.abs() < 1e-4);

            let side = synth.metrics().to_render_rate(2.0);
            assert!((collider.area() - side * side).abs() < 1e-3);
        }
    }

    #[test]
    fn test_l_shape_triangulates() {
        let sprite = Sprite::from_ascii("#..\n#..\n#..\n###\n");
        let collider = ColliderSynth::default().synthesize(&sprite).unwrap().unwrap();
        assert_eq!(collider.vertices.len(), 6);
        assert_eq!(collider.triangle_count(), collider.vertices.len() - 2);
        assert!(collider.outline().is_clockwise());
    }

    #[test]
    fn test_triangles_cover_outline() {
        let sprites = [
            shapes::circle(0, 0, 9),
            Sprite::from_ascii("#....#\n##..##\n######\n.####.\n..##..\n"),
            Sprite::from_ascii("###\n..#\n###\n#..\n###\n"),
        ];
        for scheme in PixelScheme::ALL {
            let synth = ColliderSynth::with_scheme(scheme);
            for sprite in &sprites {
                let polygon = synth.contour(sprite).unwrap().unwrap();
                let collider = synth.synthesize(sprite).unwrap().unwrap();
                assert_eq!(collider.triangle_count(), polygon.len() - 2);
                let diff = (collider.area() - polygon.area()).abs();
                assert!(diff < 1e-3 * polygon.area(), "area mismatch {diff}");
            }
        }
    }

    #[test]
    fn test_disconnected_rows_keep_their_area() {
        // Rows that do not touch overlap along a collinear edge, so the
        // triangle count is not tied to the vertex count here.
        let sprite = Sprite::from_ascii("#...\n..##\n");
        let collider = ColliderSynth::default().synthesize(&sprite).unwrap().unwrap();
        assert!((collider.area() - 27.0).abs() < 1e-3);
    }

    #[test]
    fn test_synthesis_is_idempotent() {
        let sprite = Sprite::from_ascii(".##.\n####\n#..#\n");
        let synth = ColliderSynth::with_scheme(PixelScheme::Px2_1);
        assert_eq!(
            synth.synthesize(&sprite).unwrap(),
            synth.synthesize(&sprite).unwrap()
        );
    }

    #[test]
    fn test_colors_do_not_change_geometry() {
        let plain = Sprite::from_ascii("##\n#.\n");
        let colored = plain.clone().with_color(crate::WHITE);
        let synth = ColliderSynth::default();
        assert_eq!(
            synth.synthesize(&plain).unwrap(),
            synth.synthesize(&colored).unwrap()
        );
    }

    #[test]
    fn test_oversized_sprite_is_rejected() {
        let synth = ColliderSynth::new(SynthSettings {
            max_width: 16,
            max_height: 16,
            ..Default::default()
        });
        let sprite = Sprite::from_coords(&[(0, 0), (100_000, 3)]);
        assert!(matches!(
            synth.synthesize(&sprite),
            Err(SynthError::OversizedSprite {
                width: 100_001,
                height: 4,
                ..
            })
        ));
    }

    #[test]
    fn test_pixel_at_coordinate_limit_is_rejected() {
        let synth = ColliderSynth::new(SynthSettings {
            max_width: u32::MAX,
            max_height: u32::MAX,
            ..Default::default()
        });
        let sprite = Sprite::from_coords(&[(u32::MAX, 0)]);
        assert!(matches!(
            synth.synthesize(&sprite),
            Err(SynthError::OversizedSprite { .. })
        ));
        assert!(synth.body_shape(&sprite).is_err());
    }

    #[test]
    fn test_synthesize_all_keeps_order() {
        let sprites = vec![
            Sprite::from_coords(&[(0, 0)]),
            Sprite::new(),
            shapes::filled_rect(0, 0, 3, 1),
        ];
        let results = ColliderSynth::default().synthesize_all(&sprites);
        assert_eq!(results.len(), 3);
        assert!((results[0].as_ref().unwrap().as_ref().unwrap().area() - 9.0).abs() < 1e-4);
        assert!(results[1].as_ref().unwrap().is_none());
        assert!((results[2].as_ref().unwrap().as_ref().unwrap().area() - 27.0).abs() < 1e-4);
    }

    #[test]
    fn test_body_shape_fallback() {
        let synth = ColliderSynth::with_scheme(PixelScheme::Px3_1);
        assert_eq!(
            synth.body_shape(&Sprite::new()).unwrap(),
            BodyShape::Box {
                width: 5.0,
                height: 5.0
            }
        );
        assert!(matches!(
            synth.body_shape(&Sprite::from_coords(&[(0, 0)])).unwrap(),
            BodyShape::Polygon(_)
        ));
    }
}
