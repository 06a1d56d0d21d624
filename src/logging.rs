//! 日志初始化
//!
//! TUI 占用了终端，日志只写文件。

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// 默认日志路径 (~/.local/share/todolist/todolist.log)
pub fn default_log_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("todolist").join("todolist.log"))
}

/// 初始化 tracing，返回的 guard 需保持到程序退出
///
/// 配置关闭日志或找不到日志目录时返回 `None`。日志文件无法打开时
/// 只在 stderr 提示，程序照常启动。`RUST_LOG` 优先于配置中的级别。
pub fn init_logging(config: &LoggingConfig) -> Option<WorkerGuard> {
    if !config.enabled {
        return None;
    }

    let path = config.file.clone().or_else(default_log_path)?;

    match install_subscriber(&path, &config.level) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("warning: logging disabled ({}): {}", path.display(), e);
            None
        }
    }
}

fn open_log_file(path: &Path) -> io::Result<fs::File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

fn install_subscriber(path: &Path, level: &str) -> io::Result<WorkerGuard> {
    let file = open_log_file(path)?;

    let (writer, guard) = tracing_appender::non_blocking(file);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_env_filter(filter)
        .with_ansi(false)
        .try_init()
        .map_err(io::Error::other)?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_installs_nothing() {
        let config = LoggingConfig {
            enabled: false,
            ..LoggingConfig::default()
        };
        assert!(init_logging(&config).is_none());
    }

    #[test]
    fn test_unwritable_log_path_is_not_fatal() {
        // 父路径不是目录，无法创建日志目录
        let config = LoggingConfig {
            file: Some(PathBuf::from("/dev/null/todolist/todolist.log")),
            ..LoggingConfig::default()
        };
        assert!(init_logging(&config).is_none());
    }
}
