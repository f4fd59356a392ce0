// Test support utilities for both unit and integration tests

use crate::media::{MediaElement, MediaEvent, MediaState};
use crate::page::Navigator;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc as tokio_mpsc;

/// Commands a [`ScriptedMediaElement`] has been asked to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptedCommand {
    Play,
    Stop,
    SetVolume(f64),
}

/// Scripted media element for testing
///
/// Plays nothing; state, position and duration are set directly by the
/// test, lifecycle events are raised on demand, and every forwarded
/// command is recorded for assertions.
pub struct ScriptedMediaElement {
    state: MediaState,
    position: Duration,
    duration: Duration,
    volume: f64,
    commands: Vec<ScriptedCommand>,
    event_txs: Vec<tokio_mpsc::UnboundedSender<MediaEvent>>,
}

impl Default for ScriptedMediaElement {
    fn default() -> Self {
        ScriptedMediaElement {
            state: MediaState::None,
            position: Duration::ZERO,
            duration: Duration::ZERO,
            volume: 1.0,
            commands: Vec::new(),
            event_txs: Vec::new(),
        }
    }
}

impl ScriptedMediaElement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Element that already has media loaded.
    pub fn with_media(duration: Duration) -> Self {
        ScriptedMediaElement {
            duration,
            state: MediaState::Opening,
            ..Self::default()
        }
    }

    /// Wrap into the shared handle form the view-state consumes.
    pub fn shared(self) -> Arc<Mutex<Self>> {
        Arc::new(Mutex::new(self))
    }

    pub fn set_state(&mut self, state: MediaState) {
        self.state = state;
    }

    pub fn seek_to(&mut self, position: Duration) {
        self.position = position;
    }

    pub fn commands(&self) -> &[ScriptedCommand] {
        &self.commands
    }

    pub fn raise(&mut self, event: MediaEvent) {
        self.event_txs.retain(|tx| tx.send(event.clone()).is_ok());
    }

    pub fn raise_position_changed(&mut self) {
        let position = self.position;
        self.raise(MediaEvent::PositionChanged { position });
    }

    pub fn raise_state_changed(&mut self) {
        let state = self.state;
        self.raise(MediaEvent::StateChanged { state });
    }
}

impl MediaElement for ScriptedMediaElement {
    fn current_state(&self) -> MediaState {
        self.state
    }

    fn position(&self) -> Duration {
        self.position
    }

    fn duration(&self) -> Duration {
        self.duration
    }

    fn volume(&self) -> f64 {
        self.volume
    }

    fn set_volume(&mut self, volume: f64) {
        self.volume = volume;
        self.commands.push(ScriptedCommand::SetVolume(volume));
    }

    fn play(&mut self) {
        self.state = MediaState::Playing;
        self.commands.push(ScriptedCommand::Play);
    }

    fn stop(&mut self) {
        self.state = MediaState::Stopped;
        self.commands.push(ScriptedCommand::Stop);
    }

    fn subscribe_events(&mut self) -> tokio_mpsc::UnboundedReceiver<MediaEvent> {
        let (tx, rx) = tokio_mpsc::unbounded_channel();
        self.event_txs.push(tx);
        rx
    }
}

/// Navigation collaborator that counts dismiss requests.
#[derive(Default)]
pub struct RecordingNavigator {
    dismissals: AtomicUsize,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dismissals(&self) -> usize {
        self.dismissals.load(Ordering::SeqCst)
    }
}

impl Navigator for RecordingNavigator {
    fn dismiss_current_page(&self) {
        self.dismissals.fetch_add(1, Ordering::SeqCst);
    }
}
