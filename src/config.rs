//! 配置文件加载 (~/.config/todolist/config.toml)

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::AppError;
use crate::theme::DisplayMode;

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub display: DisplayConfig,
    pub notification: NotificationConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    /// 启动时的显示模式
    pub mode: DisplayMode,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct NotificationConfig {
    pub duration_ms: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self { duration_ms: 2000 }
    }
}

impl NotificationConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub enabled: bool,
    pub level: String,
    /// 为空时写入数据目录下的 todolist.log
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: "info".to_string(),
            file: None,
        }
    }
}

/// 默认配置文件路径
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("todolist").join("config.toml"))
}

/// 从TOML文件加载配置，文件不存在时使用默认值
pub fn load_config(path: &Path) -> Result<AppConfig, AppError> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let content = fs::read_to_string(path)?;
    parse_config(&content).map_err(|source| AppError::Config {
        path: path.to_path_buf(),
        source,
    })
}

pub fn parse_config(content: &str) -> Result<AppConfig, toml::de::Error> {
    toml::from_str(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.display.mode, DisplayMode::Light);
        assert_eq!(config.notification.duration(), Duration::from_millis(2000));
        assert!(config.logging.enabled);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_config() {
        let config = parse_config(
            r#"
            [display]
            mode = "dark"

            [logging]
            level = "debug"
            file = "/tmp/todolist.log"
            "#,
        )
        .unwrap();

        assert_eq!(config.display.mode, DisplayMode::Dark);
        assert_eq!(config.notification.duration_ms, 2000);
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.enabled);
        assert_eq!(config.logging.file, Some(PathBuf::from("/tmp/todolist.log")));
    }

    #[test]
    fn test_invalid_mode_rejected() {
        assert!(parse_config("[display]\nmode = \"sepia\"").is_err());
    }

    #[test]
    fn test_missing_file_is_default() {
        let path = Path::new("/nonexistent/todolist/config.toml");
        assert_eq!(load_config(path).unwrap(), AppConfig::default());
    }
}
