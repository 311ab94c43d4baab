use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_difficulty() -> String {
    "medium".to_string()
}
fn default_rounds() -> u32 {
    5
}
fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PracticeConfig {
    /// easy, medium or hard; overridable per run with --difficulty.
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
    #[serde(default = "default_rounds")]
    pub rounds: u32,
}

impl Default for PracticeConfig {
    fn default() -> Self {
        Self {
            difficulty: default_difficulty(),
            rounds: default_rounds(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyConfig {
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
    /// Draw the streak progress bar after a completed daily challenge.
    #[serde(default = "default_true")]
    pub show_streak_bar: bool,
}

impl Default for DailyConfig {
    fn default() -> Self {
        Self {
            difficulty: default_difficulty(),
            show_streak_bar: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub practice: PracticeConfig,
    #[serde(default)]
    pub daily: DailyConfig,
}

impl AppConfig {
    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("", "", "versemaster")
            .context("Could not determine project directories")
    }

    pub fn config_path() -> Result<PathBuf> {
        let dirs = Self::project_dirs()?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn data_dir() -> Result<PathBuf> {
        let dirs = Self::project_dirs()?;
        Ok(dirs.data_dir().to_path_buf())
    }

    pub fn db_path() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("versemaster.db"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content =
            std::fs::read_to_string(&path).with_context(|| format!("Reading {:?}", path))?;
        let config: AppConfig = toml::from_str(&content).context("Parsing config.toml")?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).context("Serializing config")?;
        std::fs::write(&path, content).with_context(|| format!("Writing {:?}", path))?;
        Ok(())
    }

    pub fn ensure_data_dir() -> Result<PathBuf> {
        let dir = Self::data_dir()?;
        std::fs::create_dir_all(&dir)?;
        Ok(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.practice.difficulty, "medium");
        assert_eq!(config.practice.rounds, 5);
        assert!(config.daily.show_streak_bar);
    }

    #[test]
    fn partial_sections_keep_unset_defaults() {
        let config: AppConfig = toml::from_str("[practice]\ndifficulty = \"hard\"\n").unwrap();
        assert_eq!(config.practice.difficulty, "hard");
        assert_eq!(config.practice.rounds, 5);
    }
}
