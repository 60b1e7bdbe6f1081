use thiserror::Error;

/// A level or platform catalog that cannot be turned into a playable level.
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("malformed level JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown platform type {0:?}")]
    UnknownPlatformType(String),

    #[error("platform {index} has invalid geometry {width}x{height}")]
    InvalidGeometry { index: usize, width: f32, height: f32 },

    #[error("world is {world_width} px wide, narrower than the {screen_width} px screen")]
    WorldTooNarrow { world_width: f32, screen_width: f32 },
}
