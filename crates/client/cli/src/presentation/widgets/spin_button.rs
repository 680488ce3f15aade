//! Spin button, dimmed while reels are moving.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{presentation::theme, view_model::ButtonView};

const BUTTON_WIDTH: u16 = 14;

pub fn render(frame: &mut Frame, area: Rect, button: &ButtonView) {
    let width = BUTTON_WIDTH.min(area.width);
    let rect = Rect::new(area.x + (area.width - width) / 2, area.y, width, area.height);
    let style = theme::button_style(button);

    let paragraph = Paragraph::new(Line::from(Span::styled(button.label, style)))
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::default().borders(Borders::ALL).border_style(style));

    frame.render_widget(paragraph, rect);
}
