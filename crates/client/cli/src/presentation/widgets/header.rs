//! Header showing the spin status and session seed.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::view_model::BoardView;

pub fn render(frame: &mut Frame, area: Rect, board: &BoardView, seed: u64) {
    let (status, color) = if board.is_spinning {
        ("SPINNING", Color::Yellow)
    } else {
        ("READY", Color::Green)
    };

    let text = Line::from(vec![
        Span::raw("Status: "),
        Span::styled(status, Style::default().fg(color)),
        Span::raw(" | Reels: "),
        Span::styled(board.reels.len().to_string(), Style::default().fg(Color::Cyan)),
        Span::raw(" | Seed: "),
        Span::styled(seed.to_string(), Style::default().fg(Color::DarkGray)),
    ]);

    let paragraph =
        Paragraph::new(text).block(Block::default().borders(Borders::ALL).title("Slot"));
    frame.render_widget(paragraph, area);
}
