// ABOUTME: Transient status notifications ("flashes") with automatic clearing
// A notifier publishes messages on a channel and clears them after a quiet delay

pub mod error;
pub mod message;
pub mod notifier;

pub use error::FlashError;
pub use message::{FlashEvent, FlashLevel, FlashMessage};
pub use notifier::{Flash, FlashReceiver, DEFAULT_FLASH_DELAY};
