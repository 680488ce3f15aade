//! Color and style mapping for symbols and the spin button.
use ratatui::style::{Color, Modifier, Style};
use slot_core::{ReelPhase, Symbol};

use crate::view_model::ButtonView;

pub fn symbol_color(symbol: &Symbol) -> Color {
    let (r, g, b) = symbol.rgb();
    Color::Rgb(r, g, b)
}

/// Picks black or white text for readability on the symbol background.
pub fn symbol_style(symbol: &Symbol) -> Style {
    let (r, g, b) = symbol.rgb();
    let luma = 299 * u32::from(r) + 587 * u32::from(g) + 114 * u32::from(b);
    let fg = if luma > 128_000 { Color::Black } else { Color::White };
    Style::default()
        .bg(symbol_color(symbol))
        .fg(fg)
        .add_modifier(Modifier::BOLD)
}

pub fn phase_style(phase: ReelPhase) -> Style {
    match phase {
        ReelPhase::Idle => Style::default().fg(Color::Gray),
        ReelPhase::Spinning => Style::default().fg(Color::Yellow),
        ReelPhase::Stopping => Style::default().fg(Color::LightRed),
    }
}

pub fn button_style(button: &ButtonView) -> Style {
    let style = if button.enabled {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray).bg(Color::DarkGray)
    };
    if button.opacity < 1.0 {
        style.add_modifier(Modifier::DIM)
    } else {
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_color_uses_packed_rgb() {
        let symbol = Symbol::new("A", 0xFF8000, "A");
        assert_eq!(symbol_color(&symbol), Color::Rgb(0xFF, 0x80, 0x00));
    }

    #[test]
    fn text_contrasts_with_background() {
        assert_eq!(symbol_style(&Symbol::new("Y", 0xFFFF00, "Y")).fg, Some(Color::Black));
        assert_eq!(symbol_style(&Symbol::new("B", 0x0000FF, "B")).fg, Some(Color::White));
    }

    #[test]
    fn disabled_button_is_dimmed() {
        let disabled = button_style(&ButtonView::new(false));
        let enabled = button_style(&ButtonView::new(true));
        assert!(disabled.add_modifier.contains(Modifier::DIM));
        assert!(!enabled.add_modifier.contains(Modifier::DIM));
    }
}
