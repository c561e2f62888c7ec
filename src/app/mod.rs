// ABOUTME: Application state, key handling and the consumer side of the flash channel

pub mod events;
pub mod state;

pub use events::{AppEvent, EventHandler};
pub use state::{App, AppState};
