//! Reel columns rendered as strips of colored symbol tiles.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    presentation::theme,
    view_model::{BoardView, ReelView},
};

/// Terminal rows drawn for one symbol slot (tile plus spacing).
pub const ROWS_PER_SYMBOL: u16 = 3;
/// Inner width of a reel column in cells.
pub const REEL_WIDTH: u16 = 9;
const REEL_GAP: u16 = 1;

/// One terminal row inside a reel window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowCell {
    /// Index into [`ReelView::tiles`], or `None` for spacing.
    pub tile: usize,
    /// Whether the tile label is printed on this row.
    pub label: bool,
}

/// Maps the visible tiles of a reel onto `window_rows` terminal rows.
///
/// `scale` converts layout units to rows; `tile_rows` is the height of one
/// tile without its spacing.
pub fn rasterize(
    reel: &ReelView,
    scale: f64,
    tile_rows: u16,
    window_rows: u16,
) -> Vec<Option<RowCell>> {
    let mut rows = vec![None; window_rows as usize];
    let label_row = i32::from(tile_rows.saturating_sub(1) / 2);

    for (index, tile) in reel.visible_tiles() {
        let top = (tile.y * scale).round() as i32;
        for offset in 0..i32::from(tile_rows) {
            let row = top + offset;
            if row < 0 || row >= i32::from(window_rows) {
                continue;
            }
            rows[row as usize] = Some(RowCell {
                tile: index,
                label: offset == label_row,
            });
        }
    }
    rows
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    board: &BoardView,
    symbol_size: f64,
    symbol_height: f64,
) {
    let count = u16::try_from(board.reels.len()).unwrap_or(u16::MAX);
    if count == 0 || symbol_height <= 0.0 {
        return;
    }

    let scale = f64::from(ROWS_PER_SYMBOL) / symbol_height;
    let tile_rows = ((symbol_size * scale).round() as u16).max(1);
    let window_rows = (board.visible_height * scale).round() as u16;

    let column_width = REEL_WIDTH + 2;
    let left = area.x + area.width.saturating_sub(board_width(count, column_width)) / 2;
    let height = window_rows.saturating_add(2).min(area.height);
    let top = area.y + area.height.saturating_sub(height) / 2;
    let right = area.x.saturating_add(area.width);

    for (column, reel) in board.reels.iter().enumerate() {
        let x = u16::try_from(column)
            .unwrap_or(u16::MAX)
            .saturating_mul(column_width + REEL_GAP)
            .saturating_add(left);
        if x.saturating_add(column_width) > right {
            break;
        }
        let rect = Rect::new(x, top, column_width, height);
        render_reel(frame, rect, reel, scale, tile_rows, window_rows);
    }
}

/// Width of `count` bordered columns with gaps, saturating at `u16::MAX`.
fn board_width(count: u16, column_width: u16) -> u16 {
    count
        .saturating_mul(column_width)
        .saturating_add(count.saturating_sub(1).saturating_mul(REEL_GAP))
}

fn render_reel(
    frame: &mut Frame,
    area: Rect,
    reel: &ReelView,
    scale: f64,
    tile_rows: u16,
    window_rows: u16,
) {
    let blank = " ".repeat(REEL_WIDTH as usize);
    let lines: Vec<Line> = rasterize(reel, scale, tile_rows, window_rows)
        .into_iter()
        .map(|cell| match cell {
            Some(cell) => {
                let symbol = &reel.tiles[cell.tile].symbol;
                let text = if cell.label {
                    format!("{:^width$}", symbol.label, width = REEL_WIDTH as usize)
                } else {
                    blank.clone()
                };
                Line::from(Span::styled(text, theme::symbol_style(symbol)))
            }
            None => Line::from(blank.clone()),
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(reel.phase.as_str(), theme::phase_style(reel.phase)))
        .title_alignment(Alignment::Center)
        .border_style(Style::default());

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
