// ABOUTME: Main layout component stacking the history pane, flash bar and bottom menu bar

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
    style::{Color, Style},
};

use crate::app::AppState;
use super::{FlashBarComponent, FlashHistoryComponent, HelpComponent};

pub struct LayoutComponent {
    history: FlashHistoryComponent,
    flash_bar: FlashBarComponent,
    help: HelpComponent,
}

impl LayoutComponent {
    pub fn new() -> Self {
        Self {
            history: FlashHistoryComponent::new(),
            flash_bar: FlashBarComponent::new(),
            help: HelpComponent::new(),
        }
    }

    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),     // History
                Constraint::Length(1),  // Flash bar
                Constraint::Length(3),  // Bottom menu bar
            ])
            .split(frame.size());

        self.history.render(frame, chunks[0], state);
        self.flash_bar.render(frame, chunks[1], state.flash.as_ref());
        self.render_menu_bar(frame, chunks[2]);

        if state.help_visible {
            self.help.render(frame, frame.size());
        }
    }

    fn render_menu_bar(&self, frame: &mut Frame, area: Rect) {
        let menu_text = "[i]nfo [w]arn [e]rror [b]urst [c]lear [?]help [q]uit";

        let menu = Paragraph::new(menu_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
            )
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center);

        frame.render_widget(menu, area);
    }
}

impl Default for LayoutComponent {
    fn default() -> Self {
        Self::new()
    }
}
