//! 错误类型

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// 输入校验错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a todo item.")]
    BlankText,
}

impl ValidationError {
    /// 通知标题
    pub fn title(&self) -> &'static str {
        match self {
            ValidationError::BlankText => "No content",
        }
    }
}

/// 启动及终端运行错误
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid config file {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_text_notice() {
        let err = ValidationError::BlankText;
        assert_eq!(err.title(), "No content");
        assert_eq!(err.to_string(), "Please enter a todo item.");
    }
}
