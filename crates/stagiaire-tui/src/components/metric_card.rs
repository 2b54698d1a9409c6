use crate::theme::{label_text, title_text, unfocused_border, Palette};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// One dashboard figure: a big value over its label.
pub fn render_metric_card(frame: &mut Frame, area: Rect, palette: &Palette, label: &str, value: &str) {
    let lines = vec![
        Line::from(Span::styled(value.to_string(), title_text(palette))),
        Line::from(Span::styled(label.to_string(), label_text(palette))),
    ];
    let card = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(unfocused_border(palette)),
    );
    frame.render_widget(card, area);
}
