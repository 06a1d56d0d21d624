//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑和各种业务处理方法

use std::time::Instant;

use tracing::{debug, info};

use super::actions::Action;
use super::notification::Notification;
use super::state::{App, Focus};
use crate::models::TodoId;

impl App {
    /// 核心逻辑分发，返回是否退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::SwitchFocus => self.switch_focus(),
            Action::MoveSelectionUp => self.move_up(),
            Action::MoveSelectionDown => self.move_down(),

            Action::DeleteSelected => {
                if let Some(id) = self.selected_item().map(|item| item.id) {
                    self.remove_item(id);
                }
            }
            Action::ToggleDisplayMode => self.toggle_display_mode(),
            Action::DismissNotification => self.dismiss_notification(),

            Action::Submit => {
                if self.focus == Focus::Input {
                    self.submit_input();
                }
            }
            Action::Input(c) => {
                if self.focus == Focus::Input {
                    self.input_buffer.push(c);
                }
            }
            Action::DeleteChar => {
                if self.focus == Focus::Input {
                    self.input_buffer.pop();
                }
            }
        }
        false
    }

    // ============ 导航相关 ============

    pub fn switch_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Input => Focus::List,
            Focus::List => Focus::Input,
        };
    }

    /// 向上移动选择
    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// 向下移动选择
    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.todos.len() {
            self.selected_index += 1;
        }
    }

    // ============ 事项操作 ============

    /// 提交输入框内容
    ///
    /// 空白输入只弹出提示，列表和输入框都保持不变。
    pub fn submit_input(&mut self) -> Option<TodoId> {
        match self.todos.add_item(&self.input_buffer) {
            Ok(id) => {
                info!(id = %id, "todo added");
                self.input_buffer.clear();
                self.selected_index = self.todos.len() - 1;
                Some(id)
            }
            Err(err) => {
                self.notification = Some(Notification::warning(
                    err.title(),
                    err.to_string(),
                    self.notification_duration,
                    Instant::now(),
                ));
                None
            }
        }
    }

    /// 按 ID 删除事项，不存在时为空操作
    pub fn remove_item(&mut self, id: TodoId) {
        if self.todos.remove_item(id).is_some() {
            info!(id = %id, remaining = self.todos.len(), "todo removed");
            self.clamp_selection();
        }
    }

    /// 切换亮/暗显示模式
    pub fn toggle_display_mode(&mut self) {
        self.display_mode.toggle();
        debug!(mode = self.display_mode.label(), "display mode toggled");
    }

    // ============ 通知 ============

    pub fn dismiss_notification(&mut self) {
        if self.notification.as_ref().is_some_and(|n| n.closable) {
            self.notification = None;
        }
    }

    /// 清除已过期的通知
    pub fn tick(&mut self, now: Instant) {
        if self.notification.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.notification = None;
        }
    }
}
