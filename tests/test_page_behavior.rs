#![cfg(feature = "test-utils")]

mod support;

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;

use playview::test_support::{RecordingNavigator, ScriptedCommand, ScriptedMediaElement};
use playview::{MediaElement, MediaError, MediaEvent, MediaPageViewState, MediaState, PageField};
use support::tracing_init;

/// Collect every notification currently queued on a subscription.
fn drain(rx: &mut UnboundedReceiver<PageField>) -> Vec<PageField> {
    let mut fields = Vec::new();
    while let Ok(field) = rx.try_recv() {
        fields.push(field);
    }
    fields
}

#[test]
fn test_detached_page_degrades_to_defaults() {
    tracing_init();
    let mut page = MediaPageViewState::new();
    let mut changes = page.subscribe_changes();

    assert_eq!(page.status(), "");
    assert_eq!(page.position(), "");
    assert_eq!(page.media_status(), "");
    assert_eq!(page.volume(), 1.0);

    // Neither command has a target; nothing happens and nothing fires.
    page.play_audio();
    page.pump_events();
    assert!(drain(&mut changes).is_empty());
}

#[test]
fn test_status_mirrors_video_element_state() {
    tracing_init();
    let video = ScriptedMediaElement::with_media(Duration::from_secs(90)).shared();
    let mut page = MediaPageViewState::new();
    page.attach_video(video.clone());

    assert_eq!(page.status(), "Opening");

    video.lock().unwrap().set_state(MediaState::Playing);
    assert_eq!(page.status(), "Playing");
}

#[test]
fn test_position_display_is_derived_live() {
    tracing_init();
    let video = ScriptedMediaElement::with_media(Duration::from_secs(3723)).shared();
    let mut page = MediaPageViewState::new();
    page.attach_video(video.clone());

    assert_eq!(page.position(), "00/1:02:03");

    video.lock().unwrap().seek_to(Duration::from_secs(309));
    assert_eq!(page.position(), "5:09/1:02:03");
}

#[test]
fn test_set_volume_forwards_to_all_sinks_and_notifies_once() {
    tracing_init();
    let video = ScriptedMediaElement::with_media(Duration::from_secs(60)).shared();
    let audio = ScriptedMediaElement::new().shared();
    let mut page = MediaPageViewState::new();
    page.attach_video(video.clone());
    page.attach_audio(audio.clone());
    let mut changes = page.subscribe_changes();

    page.set_volume(0.5);

    assert_eq!(drain(&mut changes), vec![PageField::Volume]);
    assert_eq!(
        video.lock().unwrap().commands(),
        &[ScriptedCommand::SetVolume(0.5)]
    );
    assert_eq!(
        audio.lock().unwrap().commands(),
        &[ScriptedCommand::SetVolume(0.5)]
    );
    assert_eq!(page.volume(), 0.5);
}

#[test]
fn test_set_volume_is_idempotent() {
    tracing_init();
    let video = ScriptedMediaElement::with_media(Duration::from_secs(60)).shared();
    let mut page = MediaPageViewState::new();
    page.attach_video(video);
    let mut changes = page.subscribe_changes();

    page.set_volume(0.25);
    assert_eq!(drain(&mut changes), vec![PageField::Volume]);

    page.set_volume(0.25);
    assert!(drain(&mut changes).is_empty());
}

#[test]
fn test_set_volume_notifies_when_only_one_sink_differs() {
    tracing_init();
    let video = ScriptedMediaElement::with_media(Duration::from_secs(60)).shared();
    let audio = ScriptedMediaElement::new().shared();
    audio.lock().unwrap().set_volume(0.8);
    let mut page = MediaPageViewState::new();
    page.attach_video(video.clone());
    page.attach_audio(audio.clone());
    video.lock().unwrap().set_volume(0.8);
    let mut changes = page.subscribe_changes();

    // Video is already at 0.8; only the audio sink started elsewhere.
    audio.lock().unwrap().set_volume(0.3);
    page.set_volume(0.8);

    assert_eq!(drain(&mut changes), vec![PageField::Volume]);
    assert_eq!(audio.lock().unwrap().volume(), 0.8);
}

#[test]
fn test_media_lifecycle_messages() {
    tracing_init();
    let mut page = MediaPageViewState::new();
    let mut changes = page.subscribe_changes();

    page.on_media_opened();
    assert_eq!(page.media_status(), "Media Opened");
    assert_eq!(drain(&mut changes), vec![PageField::MediaStatus]);

    page.on_media_ended();
    assert_eq!(page.media_status(), "Media Ended");
    assert_eq!(drain(&mut changes), vec![PageField::MediaStatus]);
}

#[test]
fn test_media_failed_sets_message_and_notifies_once() {
    tracing_init();
    let mut page = MediaPageViewState::new();
    let mut changes = page.subscribe_changes();

    page.on_media_failed(&MediaError::Decode("bad frame".into()));

    assert_eq!(page.media_status(), "Media Failed");
    assert_eq!(drain(&mut changes), vec![PageField::MediaStatus]);
}

#[test]
fn test_pumped_events_raise_matching_notifications() {
    tracing_init();
    let video = ScriptedMediaElement::with_media(Duration::from_secs(120)).shared();
    let mut page = MediaPageViewState::new();
    page.attach_video(video.clone());
    let mut changes = page.subscribe_changes();

    {
        let mut video = video.lock().unwrap();
        video.raise(MediaEvent::MediaOpened);
        video.set_state(MediaState::Playing);
        video.raise_state_changed();
        video.seek_to(Duration::from_secs(7));
        video.raise_position_changed();
    }
    page.pump_events();

    assert_eq!(
        drain(&mut changes),
        vec![PageField::MediaStatus, PageField::Status, PageField::Position]
    );
    assert_eq!(page.media_status(), "Media Opened");
    assert_eq!(page.status(), "Playing");
    assert_eq!(page.position(), "07/2:00");
}

#[test]
fn test_failed_event_reaches_status_message() {
    tracing_init();
    let video = ScriptedMediaElement::with_media(Duration::from_secs(30)).shared();
    let mut page = MediaPageViewState::new();
    page.attach_video(video.clone());

    video.lock().unwrap().raise(MediaEvent::MediaFailed {
        error: MediaError::SourceNotFound("intro.mp4".into()),
    });
    page.pump_events();

    assert_eq!(page.media_status(), "Media Failed");
}

#[test]
fn test_stop_and_close_stops_video_and_dismisses_page() {
    tracing_init();
    let video = ScriptedMediaElement::with_media(Duration::from_secs(60)).shared();
    let navigator = Arc::new(RecordingNavigator::new());
    let mut page = MediaPageViewState::new();
    page.attach_video(video.clone());
    page.set_navigator(navigator.clone());

    page.stop_and_close();

    assert_eq!(video.lock().unwrap().commands(), &[ScriptedCommand::Stop]);
    assert_eq!(navigator.dismissals(), 1);
}

#[test]
fn test_play_audio_targets_only_the_audio_element() {
    tracing_init();
    let video = ScriptedMediaElement::with_media(Duration::from_secs(60)).shared();
    let audio = ScriptedMediaElement::new().shared();
    let mut page = MediaPageViewState::new();
    page.attach_video(video.clone());
    page.attach_audio(audio.clone());

    page.play_audio();

    assert_eq!(audio.lock().unwrap().commands(), &[ScriptedCommand::Play]);
    assert!(video.lock().unwrap().commands().is_empty());
}

#[test]
fn test_play_audio_without_audio_element_is_a_no_op() {
    tracing_init();
    let video = ScriptedMediaElement::with_media(Duration::from_secs(60)).shared();
    let mut page = MediaPageViewState::new();
    page.attach_video(video.clone());
    let mut changes = page.subscribe_changes();

    page.play_audio();

    assert!(video.lock().unwrap().commands().is_empty());
    assert!(drain(&mut changes).is_empty());
}
