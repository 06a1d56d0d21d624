//! 终端模式管理
//!
//! raw mode 与备用屏幕在 guard 释放时恢复，启动中途失败也不例外。

use std::io;

use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};

pub struct TerminalGuard {
    restored: bool,
}

impl TerminalGuard {
    /// 开启 raw mode 并进入备用屏幕
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        // 之后任何一步失败，guard 被 drop 时都会撤销 raw mode
        let guard = Self { restored: false };
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }

    /// 执行全部恢复步骤，返回遇到的第一个错误
    pub fn restore(&mut self) -> io::Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        first_error([
            disable_raw_mode(),
            execute!(io::stdout(), LeaveAlternateScreen),
            execute!(io::stdout(), Show),
        ])
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

/// 所有步骤都已执行，只保留第一个错误
fn first_error(results: impl IntoIterator<Item = io::Result<()>>) -> io::Result<()> {
    results.into_iter().find(Result::is_err).unwrap_or(Ok(()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fail(msg: &str) -> io::Result<()> {
        Err(io::Error::other(msg.to_string()))
    }

    #[test]
    fn test_first_error_all_ok() {
        assert!(first_error([Ok(()), Ok(()), Ok(())]).is_ok());
    }

    #[test]
    fn test_first_error_keeps_first_failure() {
        let err = first_error([Ok(()), fail("raw mode"), fail("alternate screen")]).unwrap_err();
        assert_eq!(err.to_string(), "raw mode");
    }

    #[test]
    fn test_every_step_runs_after_failure() {
        let mut ran = Vec::new();
        let mut step = |name: &'static str, result: io::Result<()>| {
            ran.push(name);
            result
        };
        let result = first_error([
            step("raw mode", fail("raw mode")),
            step("alternate screen", Ok(())),
            step("cursor", Ok(())),
        ]);

        assert!(result.is_err());
        assert_eq!(ran, vec!["raw mode", "alternate screen", "cursor"]);
    }

    #[test]
    fn test_restore_runs_once() {
        let mut guard = TerminalGuard { restored: true };
        assert!(guard.restore().is_ok());
    }
}
