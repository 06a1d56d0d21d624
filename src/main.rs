mod config;
mod error;
mod logging;
mod models;
mod terminal;
mod theme;
mod ui;

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::prelude::*;
use tracing::info;

use crate::config::{AppConfig, default_config_path, load_config};
use crate::error::AppError;
use crate::logging::init_logging;
use crate::terminal::TerminalGuard;
use crate::ui::{App, render};

/// 事件轮询间隔，用于通知到期后刷新
const TICK_RATE: Duration = Duration::from_millis(100);

fn main() -> Result<(), AppError> {
    // 配置文件路径 (~/.config/todolist/config.toml)
    let config = match default_config_path() {
        Some(path) => load_config(&path)?,
        None => AppConfig::default(),
    };

    let _log_guard = init_logging(&config.logging);
    info!(mode = config.display.mode.label(), "starting todolist");

    // 创建应用状态
    let mut app = App::new(&config);

    // 设置终端
    let mut guard = TerminalGuard::enter()?;

    // 主循环
    let result = Terminal::new(CrosstermBackend::new(io::stdout()))
        .and_then(|mut terminal| run_app(&mut terminal, &mut app));

    // 恢复终端，先报告主循环的错误
    let restored = guard.restore();
    info!(items = app.todos.len(), "todolist exited");
    result?;
    restored?;
    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, app, Instant::now()))?;

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && ui::handle_key_event(app, key) {
                    break;
                }
            }
        }

        app.tick(Instant::now());
    }
    Ok(())
}
