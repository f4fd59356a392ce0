use std::fmt;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use thiserror::Error;
use tokio::sync::mpsc as tokio_mpsc;

/// Playback state reported by a media element.
///
/// The page view-state only ever displays the symbolic name; it never
/// branches on individual states.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MediaState {
    #[default]
    None,
    Opening,
    Buffering,
    Playing,
    Paused,
    Stopped,
    Failed,
}

impl MediaState {
    /// Stable symbolic name used for display.
    pub fn name(&self) -> &'static str {
        match self {
            MediaState::None => "None",
            MediaState::Opening => "Opening",
            MediaState::Buffering => "Buffering",
            MediaState::Playing => "Playing",
            MediaState::Paused => "Paused",
            MediaState::Stopped => "Stopped",
            MediaState::Failed => "Failed",
        }
    }
}

impl fmt::Display for MediaState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Playback failure carried by [`MediaEvent::MediaFailed`].
///
/// Never propagated as a `Result`; the page logs it and updates its
/// status message.
#[derive(Error, Debug, Clone)]
pub enum MediaError {
    #[error("media source not found: {0}")]
    SourceNotFound(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("decode error: {0}")]
    Decode(String),
    #[error("source not supported: {0}")]
    SourceNotSupported(String),
}

/// Lifecycle notifications raised by a media element.
#[derive(Debug, Clone)]
pub enum MediaEvent {
    PositionChanged { position: Duration },
    StateChanged { state: MediaState },
    MediaOpened,
    MediaEnded,
    MediaFailed { error: MediaError },
}

/// A playable audio or video sink owned by the external UI toolkit.
///
/// The page view-state reads the element's live values and forwards
/// commands; it never drives playback itself. Elements with no loaded
/// media report [`MediaState::None`] and zero position/duration.
pub trait MediaElement: Send {
    fn current_state(&self) -> MediaState;
    fn position(&self) -> Duration;
    fn duration(&self) -> Duration;
    fn volume(&self) -> f64;
    fn set_volume(&mut self, volume: f64);
    fn play(&mut self);
    fn stop(&mut self);

    /// Subscribe to lifecycle events.
    ///
    /// Events raised before the first subscription are dropped.
    fn subscribe_events(&mut self) -> tokio_mpsc::UnboundedReceiver<MediaEvent>;
}

/// Shared command handle to a media element. The element itself is owned
/// by the UI toolkit; pages hold these handles non-exclusively.
pub type SharedMediaElement = Arc<Mutex<dyn MediaElement>>;
