use crate::{PixelMetrics, PixelScheme, Result, SynthError};

/// Settings for collider synthesis.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthSettings {
    /// Pixel scheme used for the render-space conversion
    pub scheme: PixelScheme,

    /// Largest accepted sprite width in logical pixels
    pub max_width: u32,

    /// Largest accepted sprite height in logical pixels
    pub max_height: u32,
}

impl Default for SynthSettings {
    fn default() -> Self {
        Self {
            scheme: PixelScheme::default(),
            max_width: 4096,
            max_height: 4096,
        }
    }
}

impl SynthSettings {
    /// Default settings with the given scheme.
    pub fn with_scheme(scheme: PixelScheme) -> Self {
        Self {
            scheme,
            ..Default::default()
        }
    }

    /// Settings from a TOML document, starting from the defaults.
    pub fn from_toml(toml_content: &str) -> Result<Self> {
        let mut settings = Self::default();
        settings.read(toml_content)?;
        Ok(settings)
    }

    /// Parse settings from a TOML string's [collider] section.
    ///
    /// A missing section leaves the settings untouched. An unknown scheme name
    /// falls back to the default scheme.
    pub fn read(&mut self, toml_content: &str) -> Result<()> {
        let parsed: toml::Value = toml::from_str(toml_content)?;

        let Some(section) = parsed.get("collider") else {
            return Ok(());
        };

        if let Some(scheme) = section.get("scheme") {
            let name = scheme
                .as_str()
                .ok_or_else(|| SynthError::Settings("scheme must be a string".into()))?;
            self.scheme = PixelScheme::resolve(name);
        }

        if let Some(width) = section.get("max_width") {
            self.max_width = parse_limit("max_width", width)?;
        }

        if let Some(height) = section.get("max_height") {
            self.max_height = parse_limit("max_height", height)?;
        }

        Ok(())
    }

    pub fn metrics(&self) -> PixelMetrics {
        self.scheme.metrics()
    }

    /// Rejects bounding boxes larger than the configured limits.
    pub fn check_bounds(&self, width: u64, height: u64) -> Result<()> {
        if width > self.max_width as u64 || height > self.max_height as u64 {
            return Err(SynthError::OversizedSprite {
                width,
                height,
                max_width: self.max_width,
                max_height: self.max_height,
            });
        }
        Ok(())
    }
}

fn parse_limit(name: &str, value: &toml::Value) -> Result<u32> {
    let limit = value
        .as_integer()
        .ok_or_else(|| SynthError::Settings(format!("{name} must be an integer")))?;
    if limit <= 0 || limit > u32::MAX as i64 {
        return Err(SynthError::Settings(format!(
            "{name} must be a positive 32 bit integer, got {limit}"
        )));
    }
    Ok(limit as u32)
}
