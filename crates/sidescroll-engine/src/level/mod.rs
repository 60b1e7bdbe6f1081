pub mod error;
pub mod manifest;

pub use error::LevelError;
pub use manifest::{LevelFile, LevelRules, PlatformCatalog, PlatformRow, PlatformType};

use crate::api::config::GameConfig;
use crate::components::platform::{Platform, FLOOR_PLATFORM};

/// A validated, ready-to-play level. Platforms are in world coordinates and
/// keep the file's order.
#[derive(Debug, Clone)]
pub struct Level {
    pub world_width: f32,
    pub world_height: f32,
    pub background_color: [u8; 3],
    pub platforms: Vec<Platform>,
}

impl Level {
    pub fn new(world_width: f32, world_height: f32, platforms: Vec<Platform>) -> Self {
        Self {
            world_width,
            world_height,
            background_color: LevelRules::default().background_color,
            platforms,
        }
    }

    /// Parse and validate a level and its platform catalog.
    pub fn from_json(
        level_json: &str,
        catalog_json: &str,
        config: &GameConfig,
    ) -> Result<Self, LevelError> {
        let file = LevelFile::from_json(level_json)?;
        let catalog = PlatformCatalog::from_json(catalog_json)?;
        Self::load(&file, &catalog, config)
    }

    /// Validate a parsed level against the catalog and the screen size.
    pub fn load(
        file: &LevelFile,
        catalog: &PlatformCatalog,
        config: &GameConfig,
    ) -> Result<Self, LevelError> {
        let [world_width, world_height] = file.rules.world_size;
        if !(world_width >= config.screen_width) {
            return Err(LevelError::WorldTooNarrow {
                world_width,
                screen_width: config.screen_width,
            });
        }

        let platforms = file.build_platforms(catalog, config)?;
        log::info!(
            "loaded level: {}x{} world, {} platforms",
            world_width,
            world_height,
            platforms.len()
        );
        Ok(Self {
            world_width,
            world_height,
            background_color: file.rules.background_color,
            platforms,
        })
    }
}

impl LevelFile {
    /// Resolve every row against the catalog.
    ///
    /// With `platforms_enabled` off only floor rows are kept. Rows are
    /// validated after filtering; `index` in errors is the row's position
    /// in the file.
    pub fn build_platforms(
        &self,
        catalog: &PlatformCatalog,
        config: &GameConfig,
    ) -> Result<Vec<Platform>, LevelError> {
        let mut platforms = Vec::with_capacity(self.platforms.len());
        for (index, row) in self.platforms.iter().enumerate() {
            if !config.platforms_enabled && row.kind != FLOOR_PLATFORM {
                continue;
            }
            let ty = catalog
                .get(&row.kind)
                .ok_or_else(|| LevelError::UnknownPlatformType(row.kind.clone()))?;

            let width = row.width.unwrap_or(ty.width);
            let height = row.height.unwrap_or(ty.height);
            // Negated so NaN is rejected too.
            if !(width > 0.0 && height > 0.0) || !width.is_finite() || !height.is_finite() {
                return Err(LevelError::InvalidGeometry { index, width, height });
            }

            platforms.push(
                Platform::new(row.x, row.y, width, height)
                    .with_kind(row.kind.as_str())
                    .with_color(row.color.unwrap_or(ty.color)),
            );
        }
        Ok(platforms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"{
        "types": {
            "FloorPlatform": { "width": 2400, "height": 20, "color": [40, 40, 40] },
            "Ledge": { "width": 100, "height": 10, "color": [50, 120, 60] }
        }
    }"#;

    const LEVEL: &str = r#"{
        "rules": { "world-size": [2400, 600], "background-color": [43, 204, 236] },
        "platforms": [
            { "x": 0, "y": 580, "type": "FloorPlatform" },
            { "x": 300, "y": 450, "type": "Ledge", "width": 160 },
            { "x": 700, "y": 350, "type": "Ledge", "color": [9, 9, 9] }
        ]
    }"#;

    #[test]
    fn rows_are_filled_from_catalog() {
        let level = Level::from_json(LEVEL, CATALOG, &GameConfig::default()).unwrap();
        assert_eq!(level.platforms.len(), 3);

        let floor = &level.platforms[0];
        assert!(floor.is_floor());
        assert_eq!(floor.rect.width(), 2400.0);
        assert_eq!(floor.color, [40, 40, 40]);

        let wide = &level.platforms[1];
        assert_eq!((wide.rect.left(), wide.rect.top()), (300.0, 450.0));
        assert_eq!((wide.rect.width(), wide.rect.height()), (160.0, 10.0));

        assert_eq!(level.platforms[2].color, [9, 9, 9]);
        assert_eq!(level.background_color, [43, 204, 236]);
    }

    #[test]
    fn disabled_platforms_keep_only_the_floor() {
        let config = GameConfig {
            platforms_enabled: false,
            ..GameConfig::default()
        };
        let level = Level::from_json(LEVEL, CATALOG, &config).unwrap();
        assert_eq!(level.platforms.len(), 1);
        assert!(level.platforms[0].is_floor());
    }

    #[test]
    fn unknown_type_is_rejected() {
        let json = r#"{ "platforms": [{ "x": 0, "y": 0, "type": "Cloud" }] }"#;
        let err = Level::from_json(json, CATALOG, &GameConfig::default()).unwrap_err();
        assert!(matches!(err, LevelError::UnknownPlatformType(ref name) if name == "Cloud"));
    }

    #[test]
    fn degenerate_geometry_is_rejected() {
        let json = r#"{ "platforms": [
            { "x": 0, "y": 580, "type": "FloorPlatform" },
            { "x": 10, "y": 10, "type": "Ledge", "height": 0 }
        ] }"#;
        let err = Level::from_json(json, CATALOG, &GameConfig::default()).unwrap_err();
        assert!(matches!(err, LevelError::InvalidGeometry { index: 1, height, .. } if height == 0.0));
        assert_eq!(err.to_string(), "platform 1 has invalid geometry 100x0");
    }

    #[test]
    fn narrow_world_is_rejected() {
        let json = r#"{ "rules": { "world-size": [800, 600] }, "platforms": [] }"#;
        let err = Level::from_json(json, CATALOG, &GameConfig::default()).unwrap_err();
        assert!(matches!(err, LevelError::WorldTooNarrow { .. }));
    }

    #[test]
    fn bad_json_is_reported() {
        let err = Level::from_json("{ not json", CATALOG, &GameConfig::default()).unwrap_err();
        assert!(matches!(err, LevelError::Json(_)));
    }
}
