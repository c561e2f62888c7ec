// ABOUTME: UI components for the TUI interface including the flash bar, history and help

pub mod flash_bar;
pub mod flash_history;
pub mod help;
pub mod layout;

pub use flash_bar::FlashBarComponent;
pub use flash_history::FlashHistoryComponent;
pub use help::HelpComponent;
pub use layout::LayoutComponent;
