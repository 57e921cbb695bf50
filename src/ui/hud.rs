use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::config::Theme;
use crate::snapshot::RenderSnapshot;

/// Rows reserved below the play area.
pub const HUD_HEIGHT: u16 = 1;

const HUD_MARGIN_X: u16 = 1;

/// Renders the score/speed line.
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, snapshot: &RenderSnapshot, theme: &Theme) {
    let style = Style::new().fg(theme.text).bg(theme.background);
    frame.render_widget(Paragraph::new("").style(style), area);

    frame.render_widget(
        Paragraph::new(Line::from(snapshot.hud_text()))
            .alignment(Alignment::Left)
            .style(style),
        inset_horizontal(area, HUD_MARGIN_X),
    );
}

fn inset_horizontal(area: Rect, margin: u16) -> Rect {
    let total_margin = margin.saturating_mul(2);
    Rect {
        x: area.x.saturating_add(margin),
        y: area.y,
        width: area.width.saturating_sub(total_margin),
        height: area.height,
    }
}
