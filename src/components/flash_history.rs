// ABOUTME: History pane listing recently flashed messages, newest first

use crate::app::AppState;
use crate::components::FlashBarComponent;
use ratatui::{
    prelude::*,
    style::{Color, Style},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

pub struct FlashHistoryComponent;

impl FlashHistoryComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let title = format!(
            "Flash History ({} shown, {} cleared)",
            state.shown_count, state.cleared_count
        );
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        if state.history.is_empty() {
            let empty = Paragraph::new("No messages yet. Press i, w, e or b to flash one.")
                .block(block)
                .style(Style::default().fg(Color::Gray));
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = state
            .history
            .iter()
            .map(|message| {
                ListItem::new(format!("[{:<5}] {}", message.level, message.text))
                    .style(FlashBarComponent::style(message.level))
            })
            .collect();

        frame.render_widget(List::new(items).block(block), area);
    }
}

impl Default for FlashHistoryComponent {
    fn default() -> Self {
        Self::new()
    }
}
