use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::info;

use playview::test_support::ScriptedMediaElement;
use playview::{MediaEvent, MediaPageViewState, MediaState, Navigator, PageField};

/// Stand-in for the UI shell's navigation stack.
struct LoggingNavigator;

impl Navigator for LoggingNavigator {
    fn dismiss_current_page(&self) {
        info!("Navigation: media page dismissed");
    }
}

fn main() {
    // Use RUST_LOG env var if set, otherwise default to info level
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt().with_env_filter(log_filter).init();

    let video = ScriptedMediaElement::with_media(Duration::from_secs(3723)).shared();
    let audio = ScriptedMediaElement::new().shared();

    let mut page = MediaPageViewState::new();
    page.attach_video(video.clone());
    page.attach_audio(audio.clone());
    page.set_navigator(Arc::new(LoggingNavigator));
    let mut changes = page.subscribe_changes();

    // Open the media and start playing.
    {
        let mut video = video.lock().unwrap();
        video.raise(MediaEvent::MediaOpened);
        video.set_state(MediaState::Playing);
        video.raise_state_changed();
    }
    page.pump_events();
    render(&page, &mut changes);

    // Position ticks from the playing element.
    for seconds in [5, 65, 3700] {
        video.lock().unwrap().seek_to(Duration::from_secs(seconds));
        video.lock().unwrap().raise_position_changed();
        page.pump_events();
        render(&page, &mut changes);
    }

    // Volume slider moved; second write is a no-op.
    page.set_volume(0.5);
    page.set_volume(0.5);
    render(&page, &mut changes);

    // Sound-effect button.
    page.play_audio();

    // Playback runs out, then the user leaves the page.
    {
        let mut video = video.lock().unwrap();
        video.set_state(MediaState::Stopped);
        video.raise_state_changed();
        video.raise(MediaEvent::MediaEnded);
    }
    page.pump_events();
    render(&page, &mut changes);

    page.stop_and_close();
}

/// Re-read and print every field the page has flagged as changed, the way
/// a binding layer would.
fn render(page: &MediaPageViewState, changes: &mut UnboundedReceiver<PageField>) {
    while let Ok(field) = changes.try_recv() {
        match field {
            PageField::Status => info!("State: {}", page.status()),
            PageField::Position => info!("Position: {}", page.position()),
            PageField::Volume => info!("Volume: {}", page.volume()),
            PageField::MediaStatus => info!("Media status: {}", page.media_status()),
        }
    }
}
