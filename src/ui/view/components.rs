//! 通用 UI 组件
//!
//! 输入框、渐变标题、通知等通用组件

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use unicode_width::UnicodeWidthChar;

use crate::theme::{Palette, gradient_color};
use crate::ui::notification::Notification;

/// [组件] 渐变色标题
pub fn gradient_line<'a>(text: &'a str, stops: &[(u8, u8, u8)]) -> Line<'a> {
    let len = text.chars().count();
    let spans: Vec<Span> = text
        .chars()
        .enumerate()
        .map(|(i, c)| {
            Span::styled(
                c.to_string(),
                Style::default()
                    .fg(gradient_color(stops, i, len))
                    .add_modifier(Modifier::BOLD),
            )
        })
        .collect();
    Line::from(spans)
}

/// [组件] 带占位符的输入框
pub fn render_input_widget(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    placeholder: &str,
    is_focused: bool,
    palette: &Palette,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(palette.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.secondary_text)
    };

    // 超出宽度时只显示末尾，并给光标留一列
    let inner_width = area.width.saturating_sub(2) as usize;
    let (visible, visible_width) = visible_tail(value, inner_width.saturating_sub(1));

    let (text, text_style) = if value.is_empty() {
        (placeholder, Style::default().fg(palette.secondary_text))
    } else {
        (visible, Style::default().fg(palette.text))
    };

    let input = Paragraph::new(text)
        .style(text_style.bg(palette.input))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(border_style),
        );
    frame.render_widget(input, area);

    if is_focused {
        frame.set_cursor_position((area.x + 1 + visible_width as u16, area.y + 1));
    }
}

/// 取 `value` 末尾显示宽度不超过 `max_width` 的部分，返回 (文本, 显示宽度)
pub fn visible_tail(value: &str, max_width: usize) -> (&str, usize) {
    let mut width = 0;
    let mut start = value.len();
    for (i, c) in value.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width {
            break;
        }
        width += w;
        start = i;
    }
    (&value[start..], width)
}

/// [组件] 右上角通知
pub fn render_notification(frame: &mut Frame, area: Rect, notification: &Notification, palette: &Palette) {
    frame.render_widget(Clear, area);

    let color = palette.warning;
    let mut block = Block::default()
        .title(format!(" ⚠ {} ", notification.title))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .style(Style::default().bg(palette.background));
    if notification.closable {
        block = block.title_bottom(Line::from(" Esc ").alignment(Alignment::Right));
    }

    let body = Paragraph::new(notification.message.as_str())
        .style(Style::default().fg(palette.text))
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(body, area);
}

/// 按字符数截断，超出部分用省略号表示
pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }
    let mut truncated: String = text.chars().take(max_chars - 1).collect();
    truncated.push('…');
    truncated
}
