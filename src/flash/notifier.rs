// ABOUTME: Debounced flash notifier publishing messages and delayed clear events
//
// Every message re-arms one quiet-delay timer. Only the timer armed by the most
// recent message may publish the clear event, so a burst of messages yields a
// single clear once the burst settles.

use super::error::FlashError;
use super::message::{FlashEvent, FlashLevel, FlashMessage};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, Weak};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

pub const DEFAULT_FLASH_DELAY: Duration = Duration::from_secs(3);

#[derive(Debug)]
struct FlashState {
    sender: Option<mpsc::UnboundedSender<FlashEvent>>,
    current: Option<FlashMessage>,
    timer: Option<JoinHandle<()>>,
    // Bumped on every message, clear and close; a timer only fires for its own generation.
    generation: u64,
}

impl FlashState {
    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }

    fn shutdown(&mut self) {
        self.cancel_timer();
        self.generation = self.generation.wrapping_add(1);
        self.current = None;
        self.sender = None;
    }

    /// Sends `event` if the consumer is still listening; returns whether it was delivered.
    fn deliver(&mut self, event: FlashEvent) -> bool {
        let Some(sender) = self.sender.as_ref() else {
            return false;
        };

        if sender.is_closed() || sender.send(event).is_err() {
            warn!("Flash receiver went away, shutting notifier down");
            self.shutdown();
            return false;
        }

        true
    }
}

impl Drop for FlashState {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}

/// Handle for publishing flash messages.
///
/// Clones share the same channel and timer, so any clone may be handed to a
/// component that needs to report status.
#[derive(Debug, Clone)]
pub struct Flash {
    state: Arc<Mutex<FlashState>>,
    delay: Duration,
    runtime: Handle,
}

impl Flash {
    /// Create a notifier that clears its message `delay` after the last one.
    ///
    /// Must be called from within a tokio runtime; the runtime is captured so
    /// that messages can later be published from any thread.
    pub fn new(delay: Duration) -> Result<(Self, FlashReceiver), FlashError> {
        if delay.is_zero() {
            return Err(FlashError::InvalidDelay(delay));
        }
        let runtime = Handle::try_current().map_err(|_| FlashError::NoRuntime)?;

        let (sender, receiver) = mpsc::unbounded_channel();
        let state = FlashState {
            sender: Some(sender),
            current: None,
            timer: None,
            generation: 0,
        };

        info!("Created flash notifier with {:?} quiet delay", delay);

        Ok((
            Self {
                state: Arc::new(Mutex::new(state)),
                delay,
                runtime,
            },
            FlashReceiver { receiver },
        ))
    }

    pub fn with_default_delay() -> Result<(Self, FlashReceiver), FlashError> {
        Self::new(DEFAULT_FLASH_DELAY)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn info(&self, text: impl Into<String>) {
        self.set_message(FlashLevel::Info, text.into());
    }

    pub fn warn(&self, text: impl Into<String>) {
        self.set_message(FlashLevel::Warn, text.into());
    }

    /// Flash the message of `err`. The error is logged, not propagated.
    pub fn err(&self, err: impl fmt::Display) {
        let text = err.to_string();
        error!("{}", text);
        self.set_message(FlashLevel::Error, text);
    }

    /// Clear the active message right away instead of waiting for the delay.
    pub fn clear(&self) {
        let mut state = self.lock();
        state.cancel_timer();
        state.generation = state.generation.wrapping_add(1);
        state.current = None;
        state.deliver(FlashEvent::Clear);
    }

    /// The message currently on display, if any.
    pub fn message(&self) -> Option<FlashMessage> {
        self.lock().current.clone()
    }

    /// Whether a clear event is still scheduled.
    pub fn is_pending(&self) -> bool {
        self.lock().timer.is_some()
    }

    pub fn is_closed(&self) -> bool {
        self.lock()
            .sender
            .as_ref()
            .map_or(true, |sender| sender.is_closed())
    }

    /// Stop the notifier and close the channel.
    ///
    /// Any pending clear is cancelled; the receiver yields what is already
    /// buffered and then `None`. Later calls publish nothing.
    pub fn close(&self) {
        let mut state = self.lock();
        if state.sender.is_some() {
            info!("Closing flash notifier");
        }
        state.shutdown();
    }

    fn set_message(&self, level: FlashLevel, text: String) {
        let mut state = self.lock();
        if state.sender.is_none() {
            debug!("Dropping {} flash on closed notifier: {}", level, text);
            return;
        }

        state.cancel_timer();
        state.generation = state.generation.wrapping_add(1);

        debug!("Flash {}: {}", level, text);
        let message = FlashMessage::new(level, text);
        state.current = Some(message.clone());
        if !state.deliver(FlashEvent::Show(message)) {
            return;
        }

        let generation = state.generation;
        let weak_state = Arc::downgrade(&self.state);
        let delay = self.delay;
        state.timer = Some(self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            Self::expire(&weak_state, generation);
        }));
    }

    fn expire(weak_state: &Weak<Mutex<FlashState>>, generation: u64) {
        let Some(shared) = weak_state.upgrade() else {
            return;
        };
        let mut state = lock_state(&shared);

        // Superseded by a newer message, a clear or a close.
        if state.generation != generation {
            return;
        }

        state.timer = None;
        state.current = None;
        state.deliver(FlashEvent::Clear);
    }

    fn lock(&self) -> MutexGuard<'_, FlashState> {
        lock_state(&self.state)
    }
}

fn lock_state(state: &Mutex<FlashState>) -> MutexGuard<'_, FlashState> {
    state
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Consumer side of the flash channel.
#[derive(Debug)]
pub struct FlashReceiver {
    receiver: mpsc::UnboundedReceiver<FlashEvent>,
}

impl FlashReceiver {
    /// Wait for the next event; `None` once the notifier is closed and drained.
    pub async fn recv(&mut self) -> Option<FlashEvent> {
        self.receiver.recv().await
    }

    pub fn try_recv(&mut self) -> Result<FlashEvent, TryRecvError> {
        self.receiver.try_recv()
    }

    /// Take every event that is ready without waiting.
    pub fn drain(&mut self) -> Vec<FlashEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.receiver.try_recv() {
            events.push(event);
        }
        events
    }

    /// Stop listening. The notifier notices on its next delivery and shuts down.
    pub fn close(&mut self) {
        self.receiver.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_requires_runtime() {
        let result = Flash::new(Duration::from_millis(10));
        assert!(matches!(result, Err(FlashError::NoRuntime)));
    }

    #[tokio::test]
    async fn test_new_rejects_zero_delay() {
        let result = Flash::new(Duration::ZERO);
        assert!(matches!(result, Err(FlashError::InvalidDelay(d)) if d.is_zero()));
    }

    #[tokio::test]
    async fn test_default_delay() {
        let (flash, _rx) = Flash::with_default_delay().unwrap();
        assert_eq!(flash.delay(), DEFAULT_FLASH_DELAY);
        assert!(!flash.is_pending());
        assert!(flash.message().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_each_message_bumps_generation() {
        let (flash, _rx) = Flash::new(Duration::from_millis(5)).unwrap();
        flash.info("one");
        flash.warn("two");
        assert_eq!(flash.lock().generation, 2);
        assert!(flash.is_pending());

        flash.clear();
        assert_eq!(flash.lock().generation, 3);
        assert!(!flash.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_generation_does_not_clear() {
        let (flash, mut rx) = Flash::new(Duration::from_millis(5)).unwrap();
        flash.info("current");
        let stale = flash.lock().generation - 1;

        Flash::expire(&Arc::downgrade(&flash.state), stale);

        assert_eq!(rx.drain().len(), 1);
        assert_eq!(flash.message().map(|m| m.text), Some("current".to_string()));
        assert!(flash.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_pending_timer() {
        let (flash, mut rx) = Flash::new(Duration::from_millis(5)).unwrap();
        flash.info("bye");
        drop(flash);

        assert!(matches!(rx.recv().await, Some(FlashEvent::Show(_))));
        assert!(rx.recv().await.is_none());
    }
}
