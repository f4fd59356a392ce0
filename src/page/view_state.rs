use crate::format::short_time;
use crate::media::{MediaError, MediaEvent, SharedMediaElement};
use crate::page::notify::{ChangeNotifier, PageField};
use std::sync::Arc;
use tokio::sync::mpsc as tokio_mpsc;
use tracing::{error, info, trace};

/// Hosting-page navigation, supplied by the UI shell.
pub trait Navigator: Send + Sync {
    /// Dismiss the page hosting this view-state. One-shot, fire-and-forget.
    fn dismiss_current_page(&self);
}

/// View-state for a media playback page.
///
/// Bridges media element callbacks into field-changed notifications the
/// hosting UI layer binds to. Status, position and volume are derived
/// fresh from the attached elements on every read; only the status
/// message is stored. Constructed empty, then wired up with
/// [`attach_video`](Self::attach_video) / [`attach_audio`](Self::attach_audio)
/// once the toolkit has created the elements.
pub struct MediaPageViewState {
    video: Option<SharedMediaElement>,
    audio: Option<SharedMediaElement>,
    video_events: Option<tokio_mpsc::UnboundedReceiver<MediaEvent>>,
    media_status: String,
    notifier: ChangeNotifier,
    navigator: Option<Arc<dyn Navigator>>,
}

impl MediaPageViewState {
    pub fn new() -> Self {
        Self {
            video: None,
            audio: None,
            video_events: None,
            media_status: String::new(),
            notifier: ChangeNotifier::new(),
            navigator: None,
        }
    }

    /// Attach the primary (video) element and subscribe to its lifecycle
    /// events. Status and position are read from this element.
    pub fn attach_video(&mut self, element: SharedMediaElement) {
        let events = element.lock().unwrap().subscribe_events();
        self.video_events = Some(events);
        self.video = Some(element);
        info!("Video media element attached");
    }

    /// Attach the secondary (audio) element. It only participates in
    /// volume forwarding and [`play_audio`](Self::play_audio).
    pub fn attach_audio(&mut self, element: SharedMediaElement) {
        self.audio = Some(element);
        info!("Audio media element attached");
    }

    pub fn set_navigator(&mut self, navigator: Arc<dyn Navigator>) {
        self.navigator = Some(navigator);
    }

    /// Subscribe to field-changed notifications.
    pub fn subscribe_changes(&self) -> tokio_mpsc::UnboundedReceiver<PageField> {
        self.notifier.subscribe()
    }

    /// Symbolic name of the video element's current state, or `""` when
    /// no video element is attached.
    pub fn status(&self) -> String {
        match &self.video {
            Some(video) => video.lock().unwrap().current_state().name().to_string(),
            None => String::new(),
        }
    }

    /// `position/duration` as compact clock strings, or `""` when no
    /// video element is attached.
    pub fn position(&self) -> String {
        match &self.video {
            Some(video) => {
                let video = video.lock().unwrap();
                format!(
                    "{}/{}",
                    short_time(video.position()),
                    short_time(video.duration())
                )
            }
            None => String::new(),
        }
    }

    /// Status message set by the media lifecycle milestones, empty until
    /// the first one fires.
    pub fn media_status(&self) -> &str {
        &self.media_status
    }

    /// Current volume of the video element, 1.0 when none is attached.
    pub fn volume(&self) -> f64 {
        match &self.video {
            Some(video) => video.lock().unwrap().volume(),
            None => 1.0,
        }
    }

    /// Forward `volume` to every attached element whose current value
    /// differs. Raises a single `Volume` notification iff at least one
    /// element actually changed, so writing back the current value is a
    /// no-op.
    pub fn set_volume(&mut self, volume: f64) {
        let mut changed = false;
        for element in self.video.iter().chain(self.audio.iter()) {
            let mut element = element.lock().unwrap();
            if element.volume() != volume {
                element.set_volume(volume);
                changed = true;
            }
        }
        if changed {
            self.notifier.notify(PageField::Volume);
        }
    }

    /// Drain pending video element events and apply each one.
    ///
    /// Called by the hosting page on its UI tick, so all mutation stays
    /// on the same callback sequence that renders the bound fields.
    pub fn pump_events(&mut self) {
        let mut pending = Vec::new();
        if let Some(rx) = self.video_events.as_mut() {
            while let Ok(event) = rx.try_recv() {
                pending.push(event);
            }
        }
        for event in pending {
            self.handle_event(event);
        }
    }

    fn handle_event(&mut self, event: MediaEvent) {
        trace!("Media element event: {:?}", event);
        match event {
            MediaEvent::PositionChanged { .. } => self.on_position_changed(),
            MediaEvent::StateChanged { .. } => self.on_state_changed(),
            MediaEvent::MediaOpened => self.on_media_opened(),
            MediaEvent::MediaEnded => self.on_media_ended(),
            MediaEvent::MediaFailed { error } => self.on_media_failed(&error),
        }
    }

    /// Video element position-changed callback. The display value is not
    /// cached; observers re-read [`position`](Self::position).
    pub fn on_position_changed(&self) {
        self.notifier.notify(PageField::Position);
    }

    /// Video element state-changed callback.
    pub fn on_state_changed(&self) {
        self.notifier.notify(PageField::Status);
    }

    pub fn on_media_opened(&mut self) {
        self.set_media_status("Media Opened");
    }

    pub fn on_media_ended(&mut self) {
        self.set_media_status("Media Ended");
    }

    pub fn on_media_failed(&mut self, error: &MediaError) {
        error!("Media playback failed: {}", error);
        self.set_media_status("Media Failed");
    }

    fn set_media_status(&mut self, message: &str) {
        self.media_status = message.to_string();
        self.notifier.notify(PageField::MediaStatus);
    }

    /// Stop video playback and ask the navigation collaborator to
    /// dismiss the hosting page.
    pub fn stop_and_close(&mut self) {
        if let Some(video) = &self.video {
            video.lock().unwrap().stop();
        }
        if let Some(navigator) = &self.navigator {
            info!("Dismissing media page");
            navigator.dismiss_current_page();
        }
    }

    /// Forward a play command to the audio element, if one is attached.
    pub fn play_audio(&self) {
        if let Some(audio) = &self.audio {
            audio.lock().unwrap().play();
        }
    }
}

impl Default for MediaPageViewState {
    fn default() -> Self {
        Self::new()
    }
}
