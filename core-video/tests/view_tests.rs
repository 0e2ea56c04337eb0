//! Integration tests for the video player view.
//!
//! This suite verifies the full flow against the in-memory shims:
//! - Declarative updates submitting complete snapshots
//! - Control calls producing single-field property patches
//! - Poster visibility transitions
//! - Verbatim event pass-through
//! - The unmounted-binding drop hazard

use bridge_shims::{FixedScaleModeTable, RecordingPlayerBinding, StaticAssetResolver};
use core_video::{
    EventHandlers, PlayerEvent, RateChange, ResizeMode, SourceInput, VideoPlayerView, VideoProps,
};
use parking_lot::Mutex;
use serde_json::json;
use std::sync::Arc;

struct Harness {
    binding: Arc<RecordingPlayerBinding>,
    view: VideoPlayerView,
}

fn harness_with(props: VideoProps) -> Harness {
    let binding = Arc::new(RecordingPlayerBinding::new());
    let dyn_binding: Arc<dyn bridge_traits::player::NativePlayerBinding> = binding.clone();
    let view = VideoPlayerView::new(
        props,
        Arc::new(StaticAssetResolver::new()),
        Arc::new(FixedScaleModeTable::default()),
        dyn_binding,
    );
    Harness { binding, view }
}

fn network_props() -> VideoProps {
    VideoProps::new(
        SourceInput::from_value(&json!("https://example.com/a.mp4")).unwrap(),
    )
}

// ============================================================================
// Declarative flow
// ============================================================================

#[test]
fn update_submits_a_complete_snapshot() {
    let mut harness = harness_with(network_props());
    harness.view.update(network_props().with_resize_mode(ResizeMode::Cover));

    let snapshot = harness.binding.last().expect("snapshot submitted");
    assert_eq!(snapshot.src.len(), 1);
    assert_eq!(snapshot.src[0].uri, "https://example.com/a.mp4");
    assert_eq!(snapshot.resize_mode.as_str(), "ScaleAspectFill");
    assert!(snapshot.buffering);
    assert!(!snapshot.has_patch());
}

#[test]
fn buffering_defaults_true_and_honors_explicit_false() {
    let mut harness = harness_with(network_props());

    harness.view.update(network_props());
    assert!(harness.binding.last().unwrap().buffering);

    harness.view.update(network_props().with_buffering(false));
    assert!(!harness.binding.last().unwrap().buffering);
}

#[test]
fn default_resize_mode_maps_to_the_none_token() {
    let mut harness = harness_with(network_props());
    harness.view.update(network_props());
    assert_eq!(
        harness.binding.last().unwrap().resize_mode.as_str(),
        "ScaleNone"
    );
}

#[test]
fn empty_source_list_reaches_the_player_as_empty() {
    let mut harness = harness_with(network_props());
    harness
        .view
        .update(VideoProps::new(SourceInput::from_value(&json!([])).unwrap()));
    assert!(harness.binding.last().unwrap().src.is_empty());
}

// ============================================================================
// Control calls
// ============================================================================

#[test]
fn seek_submits_a_snapshot_with_only_the_seek_patch() {
    let harness = harness_with(network_props());
    harness.view.seek(30.0);

    let snapshot = harness.binding.last().unwrap();
    assert_eq!(snapshot.seek, Some(30.0));
    assert_eq!(snapshot.fullscreen, None);
    assert_eq!(snapshot.seek_clip, None);
    // The patch rides on a full snapshot, not a bare delta.
    assert_eq!(snapshot.src.len(), 1);
}

#[test]
fn seek_to_clip_without_time_serializes_index_only() {
    let harness = harness_with(network_props());
    harness.view.seek_to_clip(3, None);

    let snapshot = harness.binding.last().unwrap();
    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["seekClip"], json!({ "index": 3 }));
}

#[test]
fn seek_to_clip_with_time_carries_it() {
    let harness = harness_with(network_props());
    harness.view.seek_to_clip(3, Some(12.5));

    let json = serde_json::to_value(&harness.binding.last().unwrap()).unwrap();
    assert_eq!(json["seekClip"], json!({ "index": 3, "time": 12.5 }));
}

#[test]
fn fullscreen_controls_patch_both_directions() {
    let harness = harness_with(network_props());

    harness.view.present_fullscreen_player();
    assert_eq!(harness.binding.last().unwrap().fullscreen, Some(true));

    harness.view.dismiss_fullscreen_player();
    assert_eq!(harness.binding.last().unwrap().fullscreen, Some(false));
    assert_eq!(harness.binding.len(), 2);
}

#[test]
fn repeated_seeks_each_submit_their_own_snapshot() {
    let harness = harness_with(network_props());
    harness.view.seek(1.0);
    harness.view.seek(2.0);

    let submissions = harness.binding.submissions();
    assert_eq!(submissions.len(), 2);
    assert_eq!(submissions[0].seek, Some(1.0));
    assert_eq!(submissions[1].seek, Some(2.0));
}

#[test]
fn unmounted_binding_drops_control_calls() {
    let binding = Arc::new(RecordingPlayerBinding::unmounted());
    let dyn_binding: Arc<dyn bridge_traits::player::NativePlayerBinding> = binding.clone();
    let view = VideoPlayerView::new(
        network_props(),
        Arc::new(StaticAssetResolver::new()),
        Arc::new(FixedScaleModeTable::default()),
        dyn_binding,
    );

    view.seek(10.0);
    view.present_fullscreen_player();
    assert!(binding.is_empty());
}

// ============================================================================
// Poster visibility
// ============================================================================

fn poster_props() -> VideoProps {
    network_props().with_poster("https://example.com/poster.png")
}

#[test]
fn poster_shows_initially_only_when_configured() {
    let harness = harness_with(poster_props());
    assert!(harness.view.poster_visible());

    let no_poster = harness_with(network_props());
    assert!(!no_poster.view.poster_visible());
}

#[test]
fn seek_event_hides_the_poster_for_good() {
    let mut harness = harness_with(poster_props());

    harness.view.handle_event(PlayerEvent::Seek(json!({ "seekTime": 5.0 })));
    assert!(!harness.view.poster_visible());

    // No event brings it back.
    harness.view.handle_event(PlayerEvent::End(json!({})));
    harness.view.handle_event(PlayerEvent::PlaybackRateChange(RateChange {
        playback_rate: 0.0,
    }));
    assert!(!harness.view.poster_visible());
}

#[test]
fn zero_rate_keeps_the_poster_nonzero_hides_it() {
    let mut harness = harness_with(poster_props());

    harness.view.handle_event(PlayerEvent::PlaybackRateChange(RateChange {
        playback_rate: 0.0,
    }));
    assert!(harness.view.poster_visible());

    harness.view.handle_event(PlayerEvent::PlaybackRateChange(RateChange {
        playback_rate: 1.0,
    }));
    assert!(!harness.view.poster_visible());
}

#[test]
fn unrelated_events_do_not_touch_the_poster() {
    let mut harness = harness_with(poster_props());
    for event in [
        PlayerEvent::LoadStart(json!({})),
        PlayerEvent::Load(json!({})),
        PlayerEvent::Progress(json!({ "currentTime": 3.0 })),
        PlayerEvent::ReadyForDisplay(json!({})),
    ] {
        harness.view.handle_event(event);
    }
    assert!(harness.view.poster_visible());
}

// ============================================================================
// Event pass-through
// ============================================================================

#[test]
fn handler_receives_the_payload_verbatim() {
    let payload = json!({ "currentTime": 12.0, "playableDuration": 30.0 });
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_clone = Arc::clone(&seen);

    let mut handlers = EventHandlers::new();
    handlers.on_progress = Some(Box::new(move |value| {
        seen_clone.lock().push(value.clone());
    }));

    let mut harness = harness_with(network_props());
    harness.view.set_handlers(handlers);
    harness.view.handle_event(PlayerEvent::Progress(payload.clone()));

    assert_eq!(seen.lock().as_slice(), &[payload]);
}

#[test]
fn events_without_handlers_are_dropped_without_effect() {
    let mut harness = harness_with(network_props());
    // None of these should panic or submit anything.
    harness.view.handle_event(PlayerEvent::Error(json!({ "code": -1 })));
    harness.view.handle_event(PlayerEvent::AudioBecomingNoisy);
    assert!(harness.binding.is_empty());
}

#[test]
fn poster_derivation_and_pass_through_both_happen() {
    let rates = Arc::new(Mutex::new(Vec::new()));
    let rates_clone = Arc::clone(&rates);

    let mut handlers = EventHandlers::new();
    handlers.on_playback_rate_change = Some(Box::new(move |rate_change| {
        rates_clone.lock().push(rate_change.playback_rate);
    }));

    let mut harness = harness_with(poster_props());
    harness.view.set_handlers(handlers);
    harness.view.handle_event(PlayerEvent::PlaybackRateChange(RateChange {
        playback_rate: 1.5,
    }));

    assert!(!harness.view.poster_visible());
    assert_eq!(rates.lock().as_slice(), &[1.5]);
}
