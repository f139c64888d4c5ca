use crate::palette;
use anyhow::Context;
use directories::{ProjectDirs, UserDirs};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Narrowest exported plate that still fits its `#rrggbb` label.
pub const MIN_PLATE_WIDTH: u32 = 32;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub palette: PaletteConfig,
    pub export: ExportConfig,
    pub ui: UiConfig,
    pub log: LogConfig,
    pub paths: PathsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Number of plates (1-9)
    pub size: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Where exported images are written
    pub dir: PathBuf,
    pub file_name: String,
    /// Pixel size of one plate in the exported image
    pub plate_width: u32,
    pub plate_height: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub mouse: bool,
    /// How long a toast stays on screen
    pub toast_secs: u64,
    /// Use Nerd Font glyphs; ASCII fallbacks otherwise
    pub nerd_font: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// trace, debug, info, warn or error
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub data_dir: PathBuf,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            size: palette::DEFAULT_SIZE,
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        let dir = UserDirs::new()
            .and_then(|u| u.download_dir().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."));
        Self {
            dir,
            file_name: "color-palette.png".to_string(),
            plate_width: 160,
            plate_height: 480,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mouse: true,
            toast_secs: 3,
            nerd_font: true,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        let data_dir = ProjectDirs::from("dev", "coloraid", "coloraid")
            .map(|p| p.data_dir().to_path_buf())
            .unwrap_or_else(|| std::env::temp_dir().join("coloraid"));
        Self { data_dir }
    }
}

impl Config {
    /// Clamp values that would make the UI or the exporter misbehave.
    pub fn sanitized(mut self) -> Self {
        self.palette.size = self.palette.size.clamp(1, palette::MAX_SIZE);
        self.export.plate_width = self.export.plate_width.clamp(MIN_PLATE_WIDTH, 4096);
        self.export.plate_height = self.export.plate_height.clamp(8, 4096);
        self.ui.toast_secs = self.ui.toast_secs.max(1);
        if self.export.file_name.trim().is_empty() {
            self.export.file_name = ExportConfig::default().file_name;
        }
        self
    }

    pub fn log_level(&self) -> tracing::Level {
        self.log.level.parse().unwrap_or(tracing::Level::INFO)
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    let proj =
        ProjectDirs::from("dev", "coloraid", "coloraid").context("ProjectDirs unavailable")?;
    Ok(proj.config_dir().join("config.toml"))
}

pub fn load(override_path: Option<&Path>) -> anyhow::Result<Config> {
    let path = match override_path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };

    if !path.exists() {
        let cfg = Config::default();
        write_config(&cfg, &path)?;
        return Ok(cfg);
    }

    let raw = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let cfg = toml::from_str::<Config>(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg.sanitized())
}

fn write_config(cfg: &Config, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create dir {}", parent.display()))?;
    }
    let raw = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(path, raw).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_uses_defaults() {
        let cfg: Config = toml::from_str("[palette]\nsize = 7\n").unwrap();
        assert_eq!(cfg.palette.size, 7);
        assert_eq!(cfg.export.file_name, "color-palette.png");
        assert_eq!(cfg.ui.toast_secs, 3);
        assert!(cfg.ui.mouse);
    }

    #[test]
    fn test_sanitized_clamps() {
        let mut cfg = Config::default();
        cfg.palette.size = 0;
        cfg.ui.toast_secs = 0;
        cfg.export.file_name = "  ".into();
        let cfg = cfg.sanitized();
        assert_eq!(cfg.palette.size, 1);
        assert_eq!(cfg.ui.toast_secs, 1);
        assert_eq!(cfg.export.file_name, "color-palette.png");

        let mut cfg = Config::default();
        cfg.palette.size = 40;
        cfg.export.plate_width = 8;
        let cfg = cfg.sanitized();
        assert_eq!(cfg.palette.size, palette::MAX_SIZE);
        assert_eq!(cfg.export.plate_width, MIN_PLATE_WIDTH);
    }

    #[test]
    fn test_log_level() {
        let mut cfg = Config::default();
        assert_eq!(cfg.log_level(), tracing::Level::INFO);
        cfg.log.level = "debug".into();
        assert_eq!(cfg.log_level(), tracing::Level::DEBUG);
        cfg.log.level = "loud".into();
        assert_eq!(cfg.log_level(), tracing::Level::INFO);
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let cfg = load(Some(&path)).unwrap();
        assert!(path.exists());
        assert_eq!(cfg.palette.size, palette::DEFAULT_SIZE);

        let mut cfg = cfg;
        cfg.palette.size = 3;
        write_config(&cfg, &path).unwrap();
        assert_eq!(load(Some(&path)).unwrap().palette.size, 3);
    }
}
