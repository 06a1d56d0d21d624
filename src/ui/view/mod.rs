//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件

pub mod components;
pub mod layouts;

use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Padding, Paragraph},
};

use super::state::{App, Focus};
use crate::theme::{HEADING_GRADIENT, Palette};
use components::{gradient_line, render_input_widget, render_notification, truncate_with_ellipsis};
use layouts::{max_width_centered, toast_rect};

const MAX_CONTENT_WIDTH: u16 = 80;
const DELETE_MARKER: &str = " ✕";

/// 渲染 UI，`now` 用于计算通知剩余时间
pub fn render(frame: &mut Frame, app: &App, now: Instant) {
    let palette = app.display_mode.palette();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
        frame.area(),
    );

    let content = max_width_centered(frame.area(), MAX_CONTENT_WIDTH);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 模式切换
            Constraint::Length(3), // 标题
            Constraint::Length(3), // 输入框
            Constraint::Min(3),    // 列表
            Constraint::Length(1), // 帮助
        ])
        .split(content);

    render_mode_toggle(frame, app, &palette, chunks[0]);
    render_heading(frame, chunks[1]);
    render_input(frame, app, &palette, chunks[2]);
    render_todos(frame, app, &palette, chunks[3]);
    render_help(frame, app, &palette, chunks[4], now);

    if let Some(notification) = &app.notification {
        let area = toast_rect(frame.area(), 30, 5);
        render_notification(frame, area, notification, &palette);
    }
}

fn render_mode_toggle(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let toggle = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("( {} )", app.display_mode.toggle_icon()),
            Style::default()
                .fg(palette.highlight)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" Ctrl+T", Style::default().fg(palette.secondary_text)),
    ]))
    .alignment(Alignment::Right);
    frame.render_widget(toggle, area);
}

fn render_heading(frame: &mut Frame, area: Rect) {
    let heading = Paragraph::new(gradient_line("Todo Application", &HEADING_GRADIENT))
        .alignment(Alignment::Center)
        .block(Block::default().padding(Padding::top(1)));
    frame.render_widget(heading, area);
}

fn render_input(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(5)])
        .split(area);

    render_input_widget(
        frame,
        chunks[0],
        "New todo",
        &app.input_buffer,
        "Add a new todo...",
        app.focus == Focus::Input,
        palette,
    );

    let add_button = Paragraph::new("+")
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(palette.text)
                .bg(palette.input)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    frame.render_widget(add_button, chunks[1]);
}

fn render_todos(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let list_focused = app.focus == Focus::List;
    let block = Block::default()
        .title(format!("Todos ({})", app.todos.len()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if list_focused {
            palette.highlight
        } else {
            palette.secondary_text
        }))
        .style(Style::default().bg(palette.panel).fg(palette.text));

    if app.todos.is_empty() {
        let empty = Paragraph::new("No todos yet. Add some!")
            .style(Style::default().fg(palette.secondary_text))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    // 边框 + 时间 + 删除标记
    let time_width = 6;
    let text_width = (area.width as usize)
        .saturating_sub(2 + time_width + DELETE_MARKER.chars().count());

    let items: Vec<ListItem> = app
        .todos
        .items()
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let selected = list_focused && i == app.selected_index;
            let text = truncate_with_ellipsis(&item.text, text_width);
            let padding = text_width.saturating_sub(text.chars().count());

            let mut spans = vec![
                Span::raw(text),
                Span::raw(" ".repeat(padding)),
                Span::styled(
                    format!(" {}", item.created_at.format("%H:%M")),
                    Style::default().fg(palette.secondary_text),
                ),
            ];
            if selected {
                spans.push(Span::styled(
                    DELETE_MARKER,
                    Style::default().fg(palette.warning),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    if list_focused {
        state.select(Some(app.selected_index));
    }

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_help(frame: &mut Frame, app: &App, palette: &Palette, area: Rect, now: Instant) {
    let help_text = match app.focus {
        Focus::Input => "[Enter] add  [Tab] list  [Ctrl+T] theme  [Ctrl+C] quit",
        Focus::List => "[j/k] move  [d] delete  [t] theme  [Tab] input  [q] quit",
    };

    let text = match &app.notification {
        Some(n) if n.closable => {
            let secs = n.remaining(now).as_secs_f32();
            format!("{}  [Esc] dismiss ({:.1}s)", help_text, secs)
        }
        _ => help_text.to_string(),
    };

    let help = Paragraph::new(text).style(Style::default().fg(palette.secondary_text));
    frame.render_widget(help, area);
}
