//! Action 枚举定义 (Intent)
//!
//! 用户交互转化为明确的语义化 Action

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    SwitchFocus,
    MoveSelectionUp,
    MoveSelectionDown,

    // 列表操作
    DeleteSelected,
    ToggleDisplayMode,
    DismissNotification,

    // 输入框
    Submit,      // Enter
    Input(char), // 输入字符
    DeleteChar,  // Backspace
}
