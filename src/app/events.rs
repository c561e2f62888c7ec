// ABOUTME: Event handling system mapping keyboard input to flash actions

use crate::app::AppState;
use crate::flash::Flash;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

/// Messages published by a single burst key press
pub const BURST_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    ToggleHelp,
    FlashInfo,
    FlashWarn,
    FlashError,
    FlashBurst,
    ClearFlash,
}

pub struct EventHandler;

impl EventHandler {
    pub fn handle_key_event(key_event: KeyEvent, state: &AppState) -> Option<AppEvent> {
        if key_event.code == KeyCode::Char('c') && key_event.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(AppEvent::Quit);
        }

        if state.help_visible {
            return match key_event.code {
                KeyCode::Char('?') | KeyCode::Esc => Some(AppEvent::ToggleHelp),
                _ => None,
            };
        }

        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(AppEvent::Quit),
            KeyCode::Char('?') => Some(AppEvent::ToggleHelp),
            KeyCode::Char('i') => Some(AppEvent::FlashInfo),
            KeyCode::Char('w') => Some(AppEvent::FlashWarn),
            KeyCode::Char('e') => Some(AppEvent::FlashError),
            KeyCode::Char('b') => Some(AppEvent::FlashBurst),
            KeyCode::Char('c') => Some(AppEvent::ClearFlash),
            _ => None,
        }
    }

    pub fn process_event(event: AppEvent, state: &mut AppState, flash: &Flash) {
        debug!("Processing {:?}", event);
        match event {
            AppEvent::Quit => state.should_quit = true,
            AppEvent::ToggleHelp => state.help_visible = !state.help_visible,
            AppEvent::FlashInfo => {
                let n = state.next_sequence();
                flash.info(format!("Info message #{}", n));
            }
            AppEvent::FlashWarn => {
                let n = state.next_sequence();
                flash.warn(format!("Warning message #{}", n));
            }
            AppEvent::FlashError => {
                let n = state.next_sequence();
                let err = std::io::Error::other(format!("Simulated failure #{}", n));
                flash.err(&err);
            }
            AppEvent::FlashBurst => {
                for i in 1..=BURST_SIZE {
                    flash.info(format!("burst-{}", i));
                }
            }
            AppEvent::ClearFlash => flash.clear(),
        }
    }
}
