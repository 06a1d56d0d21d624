use std::fmt;

use chrono::{DateTime, Local};

use crate::error::ValidationError;

/// 待办事项 ID（会话内单调递增）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TodoId(u64);

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 待办事项
#[derive(Debug, Clone, PartialEq)]
pub struct TodoItem {
    pub id: TodoId,
    pub text: String,
    pub created_at: DateTime<Local>,
}

/// 待办列表（按插入顺序）
#[derive(Debug, Clone)]
pub struct TodoList {
    items: Vec<TodoItem>,
    next_id: u64,
}

impl TodoList {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// 添加新事项，空白文本返回错误且不修改列表
    ///
    /// 文本只在判空时 trim，保存的是原始输入。
    pub fn add_item(&mut self, text: &str) -> Result<TodoId, ValidationError> {
        if text.trim().is_empty() {
            return Err(ValidationError::BlankText);
        }

        let id = TodoId(self.next_id);
        self.next_id += 1;
        self.items.push(TodoItem {
            id,
            text: text.to_string(),
            created_at: Local::now(),
        });
        Ok(id)
    }

    /// 按 ID 删除事项，不存在时什么也不做
    pub fn remove_item(&mut self, id: TodoId) -> Option<TodoItem> {
        let index = self.position(id)?;
        Some(self.items.remove(index))
    }

    pub fn position(&self, id: TodoId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub fn get(&self, index: usize) -> Option<&TodoItem> {
        self.items.get(index)
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for TodoList {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_item() {
        let mut list = TodoList::new();
        let id = list.add_item("Buy milk").unwrap();

        assert_eq!(list.len(), 1);
        assert_eq!(list.items()[0].id, id);
        assert_eq!(list.items()[0].text, "Buy milk");
    }

    #[test]
    fn test_add_keeps_text_unmodified() {
        let mut list = TodoList::new();
        list.add_item("  padded  ").unwrap();

        assert_eq!(list.items().last().unwrap().text, "  padded  ");
    }

    #[test]
    fn test_add_blank_rejected() {
        let mut list = TodoList::new();
        list.add_item("first").unwrap();

        for blank in ["", " ", "\t", "  \n  "] {
            assert_eq!(list.add_item(blank), Err(ValidationError::BlankText));
        }
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_ids_unique_and_ordered() {
        let mut list = TodoList::new();
        let a = list.add_item("a").unwrap();
        let b = list.add_item("b").unwrap();
        list.remove_item(b);
        let c = list.add_item("c").unwrap();

        assert_ne!(a, b);
        assert_ne!(b, c);
        assert!(c > b);
        let texts: Vec<&str> = list.items().iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "c"]);
    }

    #[test]
    fn test_id_display() {
        let mut list = TodoList::new();
        let a = list.add_item("a").unwrap();
        let b = list.add_item("b").unwrap();
        assert_eq!(a.to_string(), "#1");
        assert_eq!(b.to_string(), "#2");
    }

    #[test]
    fn test_remove_item() {
        let mut list = TodoList::new();
        let a = list.add_item("a").unwrap();
        let b = list.add_item("b").unwrap();

        let removed = list.remove_item(a).unwrap();
        assert_eq!(removed.text, "a");
        assert_eq!(list.len(), 1);
        assert!(list.items().iter().all(|item| item.id != a));
        assert_eq!(list.position(b), Some(0));
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut list = TodoList::new();
        let a = list.add_item("a").unwrap();
        list.remove_item(a);

        assert!(list.remove_item(a).is_none());
        assert!(list.remove_item(TodoId(42)).is_none());
        assert!(list.is_empty());
    }
}
