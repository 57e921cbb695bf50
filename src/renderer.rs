use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

use crate::config::{CellSize, GridSize, Theme};
use crate::error::GameError;
use crate::game_loop::Presenter;
use crate::snake::GridVector;
use crate::snapshot::{RenderSnapshot, SegmentKind};
use crate::terminal_runtime::AppTerminal;
use crate::ui::hud::{HUD_HEIGHT, render_hud};
use crate::ui::overlay::{render_game_over_overlay, render_pause_overlay};

/// Terminal columns and rows needed for the board plus HUD.
#[must_use]
pub fn required_size(grid: GridSize, cell: CellSize) -> (u16, u16) {
    (
        grid.width.saturating_mul(cell.columns),
        grid.height.saturating_mul(cell.rows).saturating_add(HUD_HEIGHT),
    )
}

/// Renders the full game frame from a snapshot.
pub fn render(frame: &mut Frame<'_>, snapshot: &RenderSnapshot, theme: &Theme, cell: CellSize) {
    let area = frame.area();
    let (width, height) = required_size(snapshot.grid, cell);
    if area.width < width || area.height < height {
        render_too_small(frame, area, width, height, theme);
        return;
    }

    let board = centered_rect(area, width, height);
    let [play_area, hud_area] = Layout::vertical([
        Constraint::Length(height - HUD_HEIGHT),
        Constraint::Length(HUD_HEIGHT),
    ])
    .areas(board);

    frame.render_widget(
        Block::new().style(Style::new().bg(theme.background)),
        play_area,
    );

    let buffer = frame.buffer_mut();
    paint_cell(buffer, play_area, cell, snapshot.food, theme.food);
    // Body first so the head stays visible if it overlaps.
    for segment in snapshot.snake.iter().rev() {
        let color = match segment.kind {
            SegmentKind::Head => theme.snake_head,
            SegmentKind::Body => theme.snake_body,
        };
        paint_cell(buffer, play_area, cell, segment.position, color);
    }

    render_hud(frame, hud_area, snapshot, theme);

    if snapshot.game_over {
        render_game_over_overlay(frame, board, theme);
    } else if snapshot.paused {
        render_pause_overlay(frame, board, theme);
    }
}

/// Draws snapshots into the live terminal.
pub struct TerminalRenderer<'a> {
    terminal: &'a mut AppTerminal,
    theme: Theme,
    cell: CellSize,
}

impl<'a> TerminalRenderer<'a> {
    #[must_use]
    pub fn new(terminal: &'a mut AppTerminal, theme: Theme, cell: CellSize) -> Self {
        Self {
            terminal,
            theme,
            cell,
        }
    }
}

impl Presenter for TerminalRenderer<'_> {
    fn present(&mut self, snapshot: &RenderSnapshot) -> Result<(), GameError> {
        let theme = self.theme;
        let cell = self.cell;
        self.terminal
            .draw(|frame| render(frame, snapshot, &theme, cell))?;
        Ok(())
    }
}

fn paint_cell(buffer: &mut Buffer, area: Rect, cell: CellSize, position: GridVector, color: Color) {
    let Some((left, top)) = logical_to_terminal(area, cell, position) else {
        return;
    };

    for y in top..top.saturating_add(cell.rows) {
        for x in left..left.saturating_add(cell.columns) {
            if x >= area.right() || y >= area.bottom() {
                continue;
            }
            if let Some(target) = buffer.cell_mut((x, y)) {
                target.set_symbol(" ").set_bg(color);
            }
        }
    }
}

fn logical_to_terminal(area: Rect, cell: CellSize, position: GridVector) -> Option<(u16, u16)> {
    let x_offset = u16::try_from(position.x).ok()?.checked_mul(cell.columns)?;
    let y_offset = u16::try_from(position.y).ok()?.checked_mul(cell.rows)?;

    let x = area.x.saturating_add(x_offset);
    let y = area.y.saturating_add(y_offset);
    if x >= area.right() || y >= area.bottom() {
        return None;
    }

    Some((x, y))
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn render_too_small(frame: &mut Frame<'_>, area: Rect, width: u16, height: u16, theme: &Theme) {
    let row = Rect {
        y: area.y + area.height / 2,
        height: area.height.min(1),
        ..area
    };

    frame.render_widget(
        Paragraph::new(Line::from(format!(
            "Terminal too small: need {width}x{height}"
        )))
        .alignment(Alignment::Center)
        .style(Style::new().fg(theme.text)),
        row,
    );
}
