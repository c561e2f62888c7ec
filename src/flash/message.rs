// ABOUTME: Flash levels and the events published on the flash channel

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlashLevel {
    Info,
    Warn,
    Error,
}

impl fmt::Display for FlashLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FlashLevel::Info => "info",
            FlashLevel::Warn => "warn",
            FlashLevel::Error => "error",
        };
        f.pad(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashMessage {
    pub level: FlashLevel,
    pub text: String,
}

impl FlashMessage {
    pub fn new(level: FlashLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }
}

/// An event delivered to the flash consumer.
///
/// `Clear` means no message is active anymore; it carries no level or text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlashEvent {
    Show(FlashMessage),
    Clear,
}

impl FlashEvent {
    pub fn is_clear(&self) -> bool {
        matches!(self, FlashEvent::Clear)
    }

    pub fn message(&self) -> Option<&FlashMessage> {
        match self {
            FlashEvent::Show(message) => Some(message),
            FlashEvent::Clear => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_display() {
        assert_eq!(FlashLevel::Info.to_string(), "info");
        assert_eq!(FlashLevel::Warn.to_string(), "warn");
        assert_eq!(FlashLevel::Error.to_string(), "error");
    }

    #[test]
    fn test_event_is_clear() {
        let show = FlashEvent::Show(FlashMessage::new(FlashLevel::Warn, "disk almost full"));
        assert!(!show.is_clear());
        assert_eq!(show.message().map(|m| m.text.as_str()), Some("disk almost full"));

        assert!(FlashEvent::Clear.is_clear());
        assert!(FlashEvent::Clear.message().is_none());
    }
}
