use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::game::{Palette, Roster};

/// Terminal presentation switches.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Clear the screen before each board in prompt mode.
    pub clear_screen: bool,
    /// Highlight the winning line on the final board.
    pub highlight_winner: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            clear_screen: true,
            highlight_winner: true,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub palette: Palette,
    pub players: Roster,
    pub display: DisplayConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.palette.discs.is_empty() {
            return Err(ConfigError::Validation(
                "palette.discs must not be empty".into(),
            ));
        }
        if self.palette.discs.contains(&self.palette.blank) {
            return Err(ConfigError::Validation(
                "palette.blank must not be one of palette.discs".into(),
            ));
        }

        for (key, player) in [("players.one", &self.players.one), ("players.two", &self.players.two)] {
            if player.name.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "{key}.name must not be empty"
                )));
            }
            if !self.palette.is_disc(player.token) {
                return Err(ConfigError::Validation(format!(
                    "{key}.token [{}] is not in palette.discs",
                    player.token
                )));
            }
        }
        if self.players.one.token == self.players.two.token {
            return Err(ConfigError::Validation(
                "players.one and players.two must use different tokens".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Token;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[players.two]
name = "Yellow"
token = 33
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.players.two.name, "Yellow");
        assert_eq!(config.players.two.token, Token::new(33));
        // Other fields should be defaults
        assert_eq!(config.players.one.name, "Red");
        assert_eq!(config.palette, Palette::default());
        assert!(config.display.clear_screen);
        config.validate().unwrap();
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.palette, Palette::default());
        assert_eq!(config.players, Roster::default());
        assert!(config.display.highlight_winner);
    }

    #[test]
    fn test_validation_rejects_empty_discs() {
        let mut config = AppConfig::default();
        config.palette.discs.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_blank_among_discs() {
        let mut config = AppConfig::default();
        config.palette.blank = Token::new(31);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_player_token_outside_palette() {
        let mut config = AppConfig::default();
        config.players.one.token = Token::new(90);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_shared_token() {
        let mut config = AppConfig::default();
        config.players.two.token = config.players.one.token;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_blank_name() {
        let mut config = AppConfig::default();
        config.players.one.name = "  ".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.players, Roster::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[display]
clear_screen = false
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert!(!config.display.clear_screen);
        // Others are defaults
        assert!(config.display.highlight_winner);
        assert_eq!(config.players.one.token, Token::new(31));
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[palette]\ndiscs = []\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }
}
