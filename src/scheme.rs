use crate::PixelMetrics;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The supported visual pixel densities.
///
/// The name encodes the pixel dimension and the inter-pixel margin in
/// render-space units, e.g. `Px3_1` is a 3 unit pixel followed by a 1 unit gap.
#[allow(non_camel_case_types)]
#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy, Debug, Default)]
pub enum PixelScheme {
    Px2_0,
    Px2_1,
    Px3_1,
    #[default]
    Px3_0,
}

impl PixelScheme {
    pub const ALL: [PixelScheme; 4] = [
        PixelScheme::Px2_0,
        PixelScheme::Px2_1,
        PixelScheme::Px3_1,
        PixelScheme::Px3_0,
    ];

    /// The dimension and margin of one pixel in this scheme.
    pub fn metrics(&self) -> PixelMetrics {
        match self {
            PixelScheme::Px2_0 => PixelMetrics::new(2.0, 0.0),
            PixelScheme::Px2_1 => PixelMetrics::new(2.0, 1.0),
            PixelScheme::Px3_1 => PixelMetrics::new(3.0, 1.0),
            PixelScheme::Px3_0 => PixelMetrics::new(3.0, 0.0),
        }
    }

    /// Looks up a scheme by name ("px3_1", "Px2_0", ...), case insensitive.
    pub fn from_name(name: &str) -> Option<PixelScheme> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|scheme| scheme.name().eq_ignore_ascii_case(name))
    }

    /// Resolves a scheme name, falling back to the default scheme for unknown names.
    pub fn resolve(name: &str) -> PixelScheme {
        Self::from_name(name).unwrap_or_else(|| {
            log::warn!(
                "Unknown pixel scheme '{}', using {}",
                name,
                PixelScheme::default()
            );
            PixelScheme::default()
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            PixelScheme::Px2_0 => "Px2_0",
            PixelScheme::Px2_1 => "Px2_1",
            PixelScheme::Px3_1 => "Px3_1",
            PixelScheme::Px3_0 => "Px3_0",
        }
    }
}

impl fmt::Display for PixelScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
