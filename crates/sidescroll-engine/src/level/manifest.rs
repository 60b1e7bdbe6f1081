use std::collections::HashMap;
use serde::{Deserialize, Serialize};

/// A level file as written by the level designer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LevelFile {
    #[serde(default)]
    pub rules: LevelRules,
    #[serde(default)]
    pub platforms: Vec<PlatformRow>,
}

/// World-wide settings of a level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelRules {
    /// World width and height in pixels.
    #[serde(rename = "world-size")]
    pub world_size: [f32; 2],
    #[serde(rename = "background-color")]
    pub background_color: [u8; 3],
}

impl Default for LevelRules {
    fn default() -> Self {
        Self {
            world_size: [2400.0, 600.0],
            background_color: [43, 204, 236],
        }
    }
}

/// One placed platform. Missing size or color comes from the catalog entry
/// for its type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformRow {
    pub x: f32,
    pub y: f32,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub width: Option<f32>,
    #[serde(default)]
    pub height: Option<f32>,
    #[serde(default)]
    pub color: Option<[u8; 3]>,
}

/// Named platform types shared by every level.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlatformCatalog {
    #[serde(default)]
    pub types: HashMap<String, PlatformType>,
}

/// Default size and color of a platform type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformType {
    pub width: f32,
    pub height: f32,
    pub color: [u8; 3],
}

impl LevelFile {
    /// Parse a level from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl PlatformCatalog {
    /// Parse a catalog from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn get(&self, name: &str) -> Option<&PlatformType> {
        self.types.get(name)
    }
}
