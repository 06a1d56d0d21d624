//! 键盘事件映射 (Input -> Action)
//!
//! 将按键事件转换为 Action

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::actions::Action;
use super::state::{App, Focus};

/// 根据当前焦点和按键获取对应的 Action
pub fn get_action(focus: Focus, has_notification: bool, key: KeyEvent) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // 全局按键
    match key.code {
        KeyCode::Char('c') if ctrl => return Some(Action::Quit),
        KeyCode::Char('t') if ctrl => return Some(Action::ToggleDisplayMode),
        KeyCode::F(2) => return Some(Action::ToggleDisplayMode),
        KeyCode::Tab | KeyCode::BackTab => return Some(Action::SwitchFocus),
        KeyCode::Esc if has_notification => return Some(Action::DismissNotification),
        _ => {}
    }

    match focus {
        Focus::Input => match key.code {
            KeyCode::Esc => Some(Action::SwitchFocus),
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Char(c) if !ctrl => Some(Action::Input(c)),
            _ => None,
        },
        Focus::List => match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveSelectionDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveSelectionUp),
            KeyCode::Char('d') | KeyCode::Delete => Some(Action::DeleteSelected),
            KeyCode::Char('t') => Some(Action::ToggleDisplayMode),
            KeyCode::Char('a') | KeyCode::Char('i') => Some(Action::SwitchFocus),
            _ => None,
        },
    }
}

/// 处理按键事件，返回是否退出
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> bool {
    match get_action(app.focus, app.notification.is_some(), key) {
        Some(action) => app.dispatch(action),
        None => false,
    }
}
