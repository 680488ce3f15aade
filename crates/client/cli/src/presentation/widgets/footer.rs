//! Footer widget displaying key bindings.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the footer panel with key bindings help.
///
/// The spin binding is dimmed while the button is disabled.
pub fn render(frame: &mut Frame, area: Rect, spin_enabled: bool) {
    let spin_style = if spin_enabled {
        Style::default()
    } else {
        Style::default().add_modifier(Modifier::DIM)
    };

    let text = Line::from(vec![
        Span::styled("[Space/Enter] Spin", spin_style),
        Span::raw(" | "),
        Span::raw("[q/Esc] Quit"),
    ]);

    let paragraph = Paragraph::new(text).block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}
