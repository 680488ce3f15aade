//! Frame layout and panel composition for the reel UI.
use anyhow::Result;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};
use slot_core::GameConfig;

use crate::{
    presentation::{terminal::Tui, widgets},
    view_model::BoardView,
};

pub const HEADER_HEIGHT: u16 = 3;
pub const BUTTON_HEIGHT: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 3;

/// Static context shared by every frame.
pub struct RenderContext<'a> {
    pub config: &'a GameConfig,
    pub seed: u64,
}

pub fn render(terminal: &mut Tui, board: &BoardView, ctx: &RenderContext<'_>) -> Result<()> {
    terminal.draw(|frame| render_frame(frame, board, ctx))?;
    Ok(())
}

fn render_frame(frame: &mut Frame, board: &BoardView, ctx: &RenderContext<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(frame.area());

    widgets::header::render(frame, chunks[0], board, ctx.seed);
    widgets::reels::render(
        frame,
        chunks[1],
        board,
        ctx.config.layout.symbol_size,
        ctx.config.symbol_height(),
    );
    widgets::spin_button::render(frame, chunks[2], &board.button);
    widgets::footer::render(frame, chunks[3], board.button.enabled);
}
