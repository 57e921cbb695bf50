use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use unicode_width::UnicodeWidthStr;

use crate::config::Theme;

const PAUSED_TEXT: &str = "Paused - Press P";
const GAME_OVER_TEXT: &str = "Game Over";
const RESTART_HINT_TEXT: &str = "Press Space to restart or Esc to quit";

/// Dims the play area and shows the resume hint.
pub fn render_pause_overlay(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    dim_area(frame, area, theme);
    draw_centered(frame, area, 0, PAUSED_TEXT, bold(theme));
}

/// Dims the play area and shows the restart/quit hint.
pub fn render_game_over_overlay(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    dim_area(frame, area, theme);
    draw_centered(frame, area, -1, GAME_OVER_TEXT, bold(theme));
    draw_centered(
        frame,
        area,
        1,
        RESTART_HINT_TEXT,
        Style::new().fg(theme.text),
    );
}

fn bold(theme: &Theme) -> Style {
    Style::new().fg(theme.text).add_modifier(Modifier::BOLD)
}

/// Blends the overlay colour over every cell, keeping what is underneath visible.
fn dim_area(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let buffer = frame.buffer_mut();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buffer.cell_mut((x, y)) {
                let bg = blend(cell.bg, theme.overlay, theme.overlay_alpha);
                let fg = blend(cell.fg, theme.overlay, theme.overlay_alpha);
                cell.set_bg(bg).set_fg(fg);
            }
        }
    }
}

/// Draws `text` centred horizontally, `row_offset` rows from the middle.
fn draw_centered(frame: &mut Frame<'_>, area: Rect, row_offset: i16, text: &str, style: Style) {
    let middle = i32::from(area.y) + i32::from(area.height / 2) + i32::from(row_offset);
    let Ok(y) = u16::try_from(middle) else {
        return;
    };
    if y < area.top() || y >= area.bottom() {
        return;
    }

    let width = u16::try_from(text.width()).unwrap_or(u16::MAX).min(area.width);
    let x = area.x + (area.width - width) / 2;
    let _ = frame
        .buffer_mut()
        .set_stringn(x, y, text, usize::from(width), style);
}

/// Alpha-composites `over` onto `base`; non-RGB bases are treated as black.
pub fn blend(base: Color, over: Color, alpha: u8) -> Color {
    let (br, bg, bb) = rgb(base);
    let (or, og, ob) = rgb(over);
    let alpha = u16::from(alpha);
    let mix = |b: u8, o: u8| -> u8 {
        let value = (u16::from(b) * (255 - alpha) + u16::from(o) * alpha) / 255;
        u8::try_from(value).unwrap_or(u8::MAX)
    };

    Color::Rgb(mix(br, or), mix(bg, og), mix(bb, ob))
}

fn rgb(color: Color) -> (u8, u8, u8) {
    match color {
        Color::Rgb(r, g, b) => (r, g, b),
        Color::White => (255, 255, 255),
        _ => (0, 0, 0),
    }
}
