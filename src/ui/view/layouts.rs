//! 布局辅助函数

use ratatui::layout::Rect;

/// 右上角的通知区域，超出时裁剪到 `area` 内
pub fn toast_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + area.width - width,
        y: area.y,
        width,
        height,
    }
}

/// 限制内容最大宽度并水平居中
pub fn max_width_centered(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}
