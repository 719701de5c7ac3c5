use thiserror::Error;

#[derive(Error, Debug)]
pub enum SynthError {
    #[error(
        "Sprite bounding box {width}x{height} exceeds the allowed {max_width}x{max_height}"
    )]
    OversizedSprite {
        width: u64,
        height: u64,
        max_width: u32,
        max_height: u32,
    },
    #[error("Invalid settings: {0}")]
    Settings(String),
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, SynthError>;
