// ABOUTME: Help overlay component listing the flash keys and general commands

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem},
    style::{Color, Modifier, Style},
};

const POPUP_WIDTH: u16 = 56;

pub struct HelpComponent;

impl HelpComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let help_items = vec![
            ListItem::new("Flash:").style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            ListItem::new("  i          Flash an info message"),
            ListItem::new("  w          Flash a warning"),
            ListItem::new("  e          Flash an error"),
            ListItem::new("  b          Flash a burst of five messages"),
            ListItem::new("  c          Clear the active flash"),
            ListItem::new(""),
            ListItem::new("General:").style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            ListItem::new("  ?          Toggle this help"),
            ListItem::new("  q/Esc      Quit application"),
            ListItem::new("  Ctrl+C     Force quit"),
        ];

        let popup_area = Self::popup_area(area, help_items.len() as u16 + 2);
        frame.render_widget(Clear, popup_area);

        let help_list = List::new(help_items)
            .block(
                Block::default()
                    .title("Help - Press ? or Esc to close")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
            );

        frame.render_widget(help_list, popup_area);
    }

    /// Centered popup sized to its content, clamped to the available area
    fn popup_area(area: Rect, height: u16) -> Rect {
        let width = POPUP_WIDTH.min(area.width);
        let height = height.min(area.height);
        Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        }
    }
}

impl Default for HelpComponent {
    fn default() -> Self {
        Self::new()
    }
}