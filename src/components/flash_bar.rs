// ABOUTME: Single-line status bar showing the active flash message styled by level

use crate::flash::{FlashLevel, FlashMessage};
use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};

pub struct FlashBarComponent;

impl FlashBarComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, flash: Option<&FlashMessage>) {
        let Some(message) = flash else {
            frame.render_widget(Paragraph::new(""), area);
            return;
        };

        let line = Line::from(vec![
            Span::styled(
                format!(" {} ", Self::icon(message.level)),
                Self::style(message.level).add_modifier(Modifier::BOLD),
            ),
            Span::styled(message.text.clone(), Self::style(message.level)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }

    pub fn style(level: FlashLevel) -> Style {
        match level {
            FlashLevel::Info => Style::default().fg(Color::Green),
            FlashLevel::Warn => Style::default().fg(Color::Yellow),
            FlashLevel::Error => Style::default().fg(Color::Red),
        }
    }

    fn icon(level: FlashLevel) -> &'static str {
        match level {
            FlashLevel::Info => "ℹ",
            FlashLevel::Warn => "⚠",
            FlashLevel::Error => "✗",
        }
    }
}

impl Default for FlashBarComponent {
    fn default() -> Self {
        Self::new()
    }
}
