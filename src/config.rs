use crate::error::{Result, TreeListError};
use crate::state::LevelChangePolicy;
use crate::style;
use crate::view::{HeightMode, RowSizing};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeConfig,
    pub list: ListConfig,
    pub font: FontConfig,
}

/// Theme configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ThemeConfig {
    /// "dark" or "light"
    pub mode: String,
}

/// List layout and behavior
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct ListConfig {
    /// Data row height, or the estimate before measurement (in pixels)
    pub row_height: f32,
    /// Height of each breadcrumb row (in pixels)
    pub history_row_height: f32,
    /// Height of the filter bar (in pixels)
    pub filter_row_height: f32,
    /// Height kept for the filter slot when no column is sortable or filterable
    pub collapsed_filter_height: f32,
    /// "fixed" or "measured"
    pub height_mode: HeightMode,
    /// Extra rows rendered above and below the viewport
    pub overscan: usize,
    /// Clear sort and filter whenever the browsed level changes
    pub reset_on_descend: bool,
}

/// Font and text rendering configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct FontConfig {
    /// Size of the main interface font (in points)
    pub font_size: f32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            theme: ThemeConfig {
                mode: "dark".to_string(),
            },
            list: ListConfig::default(),
            font: FontConfig { font_size: 14.0 },
        }
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        ListConfig {
            row_height: style::ROW_HEIGHT,
            history_row_height: style::HISTORY_ROW_HEIGHT,
            filter_row_height: style::FILTER_ROW_HEIGHT,
            collapsed_filter_height: style::COLLAPSED_FILTER_HEIGHT,
            height_mode: HeightMode::Measured,
            overscan: style::DEFAULT_OVERSCAN,
            reset_on_descend: false,
        }
    }
}

impl ListConfig {
    pub fn sizing(&self) -> RowSizing {
        RowSizing {
            mode: self.height_mode,
            row_height: self.row_height,
            history_row_height: self.history_row_height,
            filter_row_height: self.filter_row_height,
            collapsed_filter_height: self.collapsed_filter_height,
        }
    }

    pub fn policy(&self) -> LevelChangePolicy {
        if self.reset_on_descend {
            LevelChangePolicy::Clear
        } else {
            LevelChangePolicy::Keep
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "treelist")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from the default location, or defaults if missing or broken
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "using default configuration");
                Config::default()
            }),
            _ => Config::default(),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| TreeListError::Config(format!("failed to read {}: {}", path.display(), e)))?;
        toml::from_str::<Config>(&contents)
            .map_err(|e| TreeListError::Config(format!("failed to parse {}: {}", path.display(), e)))
    }

    /// Save configuration to `path`, creating its directory
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| TreeListError::Config(e.to_string()))?;
        }
        let contents =
            toml::to_string_pretty(self).map_err(|e| TreeListError::Config(e.to_string()))?;
        fs::write(path, contents).map_err(|e| TreeListError::Config(e.to_string()))
    }

    /// Create a default config file if it doesn't exist; returns its path
    pub fn create_default() -> Result<PathBuf> {
        let path = Self::config_path()
            .ok_or_else(|| TreeListError::Config("could not determine config directory".into()))?;
        if !path.exists() {
            Config::default().save_to(&path)?;
            tracing::info!(path = %path.display(), "wrote default configuration");
        }
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme.mode, "dark");
        assert_eq!(config.list.row_height, 30.0);
        assert_eq!(config.list.history_row_height, 30.0);
        assert_eq!(config.list.filter_row_height, 40.0);
        assert_eq!(config.list.collapsed_filter_height, 3.0);
        assert_eq!(config.list.height_mode, HeightMode::Measured);
        assert_eq!(config.list.policy(), LevelChangePolicy::Keep);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).expect("Failed to serialize");
        let deserialized: Config = toml::from_str(&toml_str).expect("Failed to deserialize");
        assert_eq!(config.theme.mode, deserialized.theme.mode);
        assert_eq!(config.list.overscan, deserialized.list.overscan);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = toml::from_str(
            "[list]\nheight_mode = \"fixed\"\nreset_on_descend = true\n",
        )
        .expect("Failed to parse");
        assert_eq!(config.list.height_mode, HeightMode::Fixed);
        assert_eq!(config.list.policy(), LevelChangePolicy::Clear);
        assert_eq!(config.list.row_height, 30.0);
        assert_eq!(config.theme.mode, "dark");
    }

    #[test]
    fn test_sizing_from_list_config() {
        let sizing = ListConfig::default().sizing();
        assert_eq!(sizing.filter_row_height, 40.0);
        assert_eq!(sizing.mode, HeightMode::Measured);
    }

    #[test]
    fn test_load_from_missing_file() {
        let err = Config::load_from(Path::new("/nope/treelist.toml")).unwrap_err();
        assert!(matches!(err, TreeListError::Config(_)));
    }
}
