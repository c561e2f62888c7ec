// ABOUTME: Test UI display components including the flash bar, history pane and menu bar

use flash_box::app::AppState;
use flash_box::components::LayoutComponent;
use flash_box::flash::{FlashEvent, FlashLevel, FlashMessage};
use ratatui::{backend::TestBackend, Terminal};

fn render(state: &AppState) -> String {
    let backend = TestBackend::new(100, 20);
    let mut terminal = Terminal::new(backend).unwrap();
    let mut layout = LayoutComponent::new();

    terminal.draw(|frame| {
        layout.render(frame, state);
    }).unwrap();

    let buffer = terminal.backend().buffer();
    buffer.content().iter().map(|cell| cell.symbol()).collect()
}

#[test]
fn test_menu_bar_shows_flash_keys() {
    let content = render(&AppState::default());

    assert!(content.contains("[i]nfo"), "Menu bar should contain '[i]nfo'");
    assert!(content.contains("[b]urst"), "Menu bar should contain '[b]urst'");
    assert!(content.contains("[q]uit"), "Menu bar should contain '[q]uit'");
    assert!(content.contains("No messages yet"));
}

#[test]
fn test_active_flash_is_rendered() {
    let mut state = AppState::default();
    state.apply_flash_event(FlashEvent::Show(FlashMessage::new(FlashLevel::Error, "pod crashed")));

    let content = render(&state);
    assert!(content.contains("pod crashed"));
    assert!(content.contains("[error] pod crashed"), "History should list the message with its level");
    assert!(content.contains("1 shown, 0 cleared"));
}

#[test]
fn test_cleared_flash_leaves_history_only() {
    let mut state = AppState::default();
    state.apply_flash_event(FlashEvent::Show(FlashMessage::new(FlashLevel::Info, "synced")));
    state.apply_flash_event(FlashEvent::Clear);

    let content = render(&state);
    assert_eq!(content.matches("synced").count(), 1, "Only the history entry should remain");
    assert!(content.contains("1 shown, 1 cleared"));
}

#[test]
fn test_help_overlay_lists_flash_keys() {
    let mut state = AppState::default();
    state.help_visible = true;

    let content = render(&state);
    assert!(content.contains("b          Flash a burst of five messages"));
}
