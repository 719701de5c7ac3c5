//! Pixelhull turns sparse pixel sprites into collision polygons.
//! A sprite is traced into a clockwise render-space outline, centered on its logical center
//! and triangulated, using the same pixel scheme conversions the renderer draws with.

pub mod bbox;
pub mod collider;
pub mod contour;
pub mod error;
pub mod metrics;
pub mod polygon;
pub mod scheme;
pub mod settings;
pub mod sprite;
pub mod synth;
pub mod wavefront;

/// RGBA color of a sprite pixel.
pub type Pixel = [u8; 4];

pub const TRANSPARENT: Pixel = [0, 0, 0, 0];
pub const BLACK: Pixel = [0, 0, 0, 255];
pub const WHITE: Pixel = [255, 255, 255, 255];

// Re-exports
pub use crate::{
    bbox::BBox,
    collider::Collider,
    contour::OccupancyGrid,
    error::{Result, SynthError},
    metrics::PixelMetrics,
    polygon::Polygon,
    scheme::PixelScheme,
    settings::SynthSettings,
    sprite::{Sprite, SpritePixel, shapes},
    synth::{BodyShape, ColliderSynth, generate},
};

// Prelude
pub mod prelude {
    pub use crate::shapes;
    pub use crate::{BBox, Collider, Polygon};
    pub use crate::{BLACK, Pixel, TRANSPARENT, WHITE};
    pub use crate::{BodyShape, ColliderSynth, SynthSettings, generate};
    pub use crate::{PixelMetrics, PixelScheme};
    pub use crate::{Result, SynthError};
    pub use crate::{Sprite, SpritePixel};
}
