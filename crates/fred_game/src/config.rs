use std::path::Path;

use fred_core::DEFAULT_ACCELERATION;
use serde::Deserialize;

use crate::load::{read_json, LoadError};

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ActorConfig {
    #[serde(default = "default_acceleration")]
    pub acceleration: i32,
    #[serde(default)]
    pub sprites: SpriteNames,
}

/// Names of the three frog sprites, one per pose.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SpriteNames {
    pub idle: String,
    pub left: String,
    pub right: String,
}

impl Default for ActorConfig {
    fn default() -> Self {
        Self {
            acceleration: DEFAULT_ACCELERATION,
            sprites: SpriteNames::default(),
        }
    }
}

impl Default for SpriteNames {
    fn default() -> Self {
        Self {
            idle: "frog.png".to_string(),
            left: "frogleft.png".to_string(),
            right: "frogright.png".to_string(),
        }
    }
}

pub fn load_config_from_path(path: &Path) -> Result<ActorConfig, LoadError> {
    let config: ActorConfig = read_json(path)?;
    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &ActorConfig) -> Result<(), LoadError> {
    if config.acceleration <= 0 {
        return Err(LoadError::invalid("config", "acceleration must be > 0"));
    }
    let sprites = &config.sprites;
    for (pose, name) in [
        ("idle", &sprites.idle),
        ("left", &sprites.left),
        ("right", &sprites.right),
    ] {
        if name.trim().is_empty() {
            return Err(LoadError::invalid(
                "config",
                format!("sprite name for '{pose}' is empty"),
            ));
        }
    }
    Ok(())
}

const fn default_acceleration() -> i32 {
    DEFAULT_ACCELERATION
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load::temp_file_path;
    use std::fs;

    #[test]
    fn partial_config_fills_defaults() {
        let path = temp_file_path("config_partial");
        fs::write(&path, r#"{ "sprites": { "idle": "sitting.png" } }"#).expect("write temp file");

        let config = load_config_from_path(&path).expect("config should load");
        assert_eq!(config.acceleration, 1);
        assert_eq!(config.sprites.idle, "sitting.png");
        assert_eq!(config.sprites.left, "frogleft.png");
        assert_eq!(config.sprites.right, "frogright.png");
        let _ = fs::remove_file(path);
    }

    #[test]
    fn config_rejects_non_positive_acceleration() {
        let path = temp_file_path("config_accel");
        fs::write(&path, r#"{ "acceleration": 0 }"#).expect("write temp file");

        let err = load_config_from_path(&path).expect_err("zero acceleration");
        assert!(err.to_string().contains("acceleration must be > 0"));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn config_rejects_blank_sprite_names() {
        let config = ActorConfig {
            sprites: SpriteNames {
                right: "  ".to_string(),
                ..SpriteNames::default()
            },
            ..ActorConfig::default()
        };
        let err = validate_config(&config).expect_err("blank sprite");
        assert!(err.to_string().contains("'right'"));
    }

    #[test]
    fn named_config_that_does_not_exist_is_an_error() {
        let path = temp_file_path("config_absent");
        let err = load_config_from_path(&path).expect_err("missing config file");
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
