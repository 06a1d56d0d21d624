//! App 状态定义 (Model)
//!
//! 包含应用状态结构体及相关枚举

use std::time::Duration;

use super::notification::Notification;
use crate::config::AppConfig;
use crate::models::{TodoItem, TodoList};
use crate::theme::DisplayMode;

/// 应用状态
pub struct App {
    pub todos: TodoList,
    pub input_buffer: String,
    pub focus: Focus,
    pub selected_index: usize,
    pub display_mode: DisplayMode,
    pub notification: Option<Notification>,
    pub notification_duration: Duration,
}

/// 键盘焦点
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    List,
}

impl App {
    /// 创建新的应用实例
    pub fn new(config: &AppConfig) -> Self {
        Self {
            todos: TodoList::new(),
            input_buffer: String::new(),
            focus: Focus::Input,
            selected_index: 0,
            display_mode: config.display.mode,
            notification: None,
            notification_duration: config.notification.duration(),
        }
    }

    /// 确保选中索引有效
    pub fn clamp_selection(&mut self) {
        if self.todos.is_empty() {
            self.selected_index = 0;
        } else if self.selected_index >= self.todos.len() {
            self.selected_index = self.todos.len() - 1;
        }
    }

    /// 获取当前选中的事项
    pub fn selected_item(&self) -> Option<&TodoItem> {
        self.todos.get(self.selected_index)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}
