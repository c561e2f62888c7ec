// ABOUTME: Application state and the flash consumer loop driven by the TUI tick

use crate::flash::{Flash, FlashError, FlashEvent, FlashMessage, FlashReceiver};
use std::time::Duration;
use tracing::{debug, info};

/// Number of past messages kept for the history pane
pub const HISTORY_LIMIT: usize = 50;

#[derive(Debug, Default)]
pub struct AppState {
    /// The flash currently shown in the status bar
    pub flash: Option<FlashMessage>,
    /// Most recent messages first
    pub history: Vec<FlashMessage>,
    pub shown_count: usize,
    pub cleared_count: usize,
    pub should_quit: bool,
    pub help_visible: bool,
    // Numbers the demo messages triggered from the keyboard
    pub next_sequence: usize,
}

impl AppState {
    pub fn apply_flash_event(&mut self, event: FlashEvent) {
        match event {
            FlashEvent::Show(message) => {
                self.shown_count += 1;
                self.history.insert(0, message.clone());
                self.history.truncate(HISTORY_LIMIT);
                self.flash = Some(message);
            }
            FlashEvent::Clear => {
                self.cleared_count += 1;
                self.flash = None;
            }
        }
    }

    pub fn next_sequence(&mut self) -> usize {
        self.next_sequence += 1;
        self.next_sequence
    }
}

pub struct App {
    pub state: AppState,
    pub flash: Flash,
    receiver: FlashReceiver,
    ui_needs_refresh: bool,
}

impl App {
    pub fn new(flash_delay: Duration) -> Result<Self, FlashError> {
        let (flash, receiver) = Flash::new(flash_delay)?;
        Ok(Self {
            state: AppState::default(),
            flash,
            receiver,
            ui_needs_refresh: false,
        })
    }

    /// Pull every pending flash event into the state
    pub fn tick(&mut self) {
        let events = self.receiver.drain();
        if events.is_empty() {
            return;
        }

        debug!("Applying {} flash events", events.len());
        for event in events {
            self.state.apply_flash_event(event);
        }
        self.ui_needs_refresh = true;
    }

    /// Wait for the next flash event and apply it; false once the channel is closed
    pub async fn wait_for_flash(&mut self) -> bool {
        match self.receiver.recv().await {
            Some(event) => {
                self.state.apply_flash_event(event);
                self.ui_needs_refresh = true;
                true
            }
            None => false,
        }
    }

    pub fn needs_ui_refresh(&mut self) -> bool {
        std::mem::take(&mut self.ui_needs_refresh)
    }

    pub fn shutdown(&mut self) {
        info!(
            "Shutting down after {} flashes and {} clears",
            self.state.shown_count, self.state.cleared_count
        );
        self.flash.close();
        self.tick();
    }
}
