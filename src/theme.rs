//! 显示模式与配色

use ratatui::style::Color;
use serde::Deserialize;

/// 显示模式（亮/暗）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Light,
    Dark,
}

/// 当前模式下的颜色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub secondary_text: Color,
    pub panel: Color,
    pub input: Color,
    pub highlight: Color,
    pub warning: Color,
}

const GRAY_50: Color = Color::Rgb(247, 250, 252);
const GRAY_100: Color = Color::Rgb(237, 242, 247);
const GRAY_200: Color = Color::Rgb(226, 232, 240);
const GRAY_400: Color = Color::Rgb(160, 174, 192);
const GRAY_600: Color = Color::Rgb(74, 85, 104);
const GRAY_700: Color = Color::Rgb(45, 55, 72);
const GRAY_800: Color = Color::Rgb(26, 32, 44);
const GRAY_900: Color = Color::Rgb(23, 25, 35);

/// 标题渐变色 (pink.500 -> pink.300 -> blue.500)
pub const HEADING_GRADIENT: [(u8, u8, u8); 3] = [(213, 63, 140), (246, 135, 179), (49, 130, 206)];

impl DisplayMode {
    /// 切换亮/暗
    pub fn toggle(&mut self) {
        *self = match self {
            DisplayMode::Light => DisplayMode::Dark,
            DisplayMode::Dark => DisplayMode::Light,
        };
    }

    /// 切换按钮图标：亮色显示月亮，暗色显示太阳
    pub fn toggle_icon(self) -> &'static str {
        match self {
            DisplayMode::Light => "☾",
            DisplayMode::Dark => "☀",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DisplayMode::Light => "light",
            DisplayMode::Dark => "dark",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            DisplayMode::Light => Palette {
                background: Color::White,
                text: GRAY_800,
                secondary_text: GRAY_600,
                panel: GRAY_100,
                input: GRAY_200,
                highlight: Color::Rgb(49, 130, 206),
                warning: Color::Rgb(221, 107, 32),
            },
            DisplayMode::Dark => Palette {
                background: GRAY_900,
                text: GRAY_50,
                secondary_text: GRAY_400,
                panel: GRAY_700,
                input: GRAY_800,
                highlight: Color::Rgb(144, 205, 244),
                warning: Color::Rgb(251, 211, 141),
            },
        }
    }
}

/// 在渐变色标之间为第 `index` 个字符插值
pub fn gradient_color(stops: &[(u8, u8, u8)], index: usize, len: usize) -> Color {
    match stops {
        [] => Color::Reset,
        [(r, g, b)] => Color::Rgb(*r, *g, *b),
        _ => {
            if len <= 1 {
                let (r, g, b) = stops[0];
                return Color::Rgb(r, g, b);
            }
            let t = index.min(len - 1) as f32 / (len - 1) as f32;
            let scaled = t * (stops.len() - 1) as f32;
            let segment = (scaled.floor() as usize).min(stops.len() - 2);
            let local = scaled - segment as f32;
            let (r0, g0, b0) = stops[segment];
            let (r1, g1, b1) = stops[segment + 1];
            let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * local).round() as u8;
            Color::Rgb(lerp(r0, r1), lerp(g0, g1), lerp(b0, b1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores() {
        let mut mode = DisplayMode::Light;
        mode.toggle();
        assert_eq!(mode, DisplayMode::Dark);
        mode.toggle();
        assert_eq!(mode, DisplayMode::Light);
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(DisplayMode::Light.palette(), DisplayMode::Dark.palette());
        assert_eq!(DisplayMode::Light.palette().panel, GRAY_100);
        assert_eq!(DisplayMode::Dark.palette().secondary_text, GRAY_400);
    }

    #[test]
    fn test_gradient_endpoints() {
        let first = HEADING_GRADIENT[0];
        let last = HEADING_GRADIENT[2];
        assert_eq!(
            gradient_color(&HEADING_GRADIENT, 0, 10),
            Color::Rgb(first.0, first.1, first.2)
        );
        assert_eq!(
            gradient_color(&HEADING_GRADIENT, 9, 10),
            Color::Rgb(last.0, last.1, last.2)
        );
        assert_eq!(gradient_color(&[], 3, 10), Color::Reset);
    }
}
