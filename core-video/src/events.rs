//! # Native Lifecycle Events
//!
//! The uniform callback surface of the component. Native player events are
//! forwarded verbatim to caller-supplied handlers: no transformation, no
//! filtering, no retry, no buffering. A missing handler is not an error;
//! the event is simply dropped.
//!
//! Payloads are opaque [`serde_json::Value`]s except for rate changes,
//! whose `playbackRate` field the wrapper inspects to derive poster
//! visibility. Serde tags use the native wire names (`onVideoLoadStart`,
//! ...), so a serialized event matches what crosses the native boundary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque native event payload, passed through untouched.
pub type EventPayload = serde_json::Value;

/// Payload for the playback-rate-change event; the only payload this layer
/// looks inside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateChange {
    pub playback_rate: f64,
}

/// One native player lifecycle event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlayerEvent {
    #[serde(rename = "onVideoLoadStart")]
    LoadStart(EventPayload),
    #[serde(rename = "onVideoLoad")]
    Load(EventPayload),
    #[serde(rename = "onVideoError")]
    Error(EventPayload),
    #[serde(rename = "onVideoProgress")]
    Progress(EventPayload),
    #[serde(rename = "onVideoBuffer")]
    Buffer(EventPayload),
    #[serde(rename = "onVideoSeek")]
    Seek(EventPayload),
    #[serde(rename = "onVideoSeekToClip")]
    SeekToClip(EventPayload),
    #[serde(rename = "onVideoClipEnd")]
    ClipEnd(EventPayload),
    #[serde(rename = "onVideoEnd")]
    End(EventPayload),
    #[serde(rename = "onTimedMetadata")]
    TimedMetadata(EventPayload),
    #[serde(rename = "onVideoFullscreenPlayerWillPresent")]
    FullscreenPlayerWillPresent(EventPayload),
    #[serde(rename = "onVideoFullscreenPlayerDidPresent")]
    FullscreenPlayerDidPresent(EventPayload),
    #[serde(rename = "onVideoFullscreenPlayerWillDismiss")]
    FullscreenPlayerWillDismiss(EventPayload),
    #[serde(rename = "onVideoFullscreenPlayerDidDismiss")]
    FullscreenPlayerDidDismiss(EventPayload),
    #[serde(rename = "onReadyForDisplay")]
    ReadyForDisplay(EventPayload),
    #[serde(rename = "onPlaybackStalled")]
    PlaybackStalled(EventPayload),
    #[serde(rename = "onPlaybackResume")]
    PlaybackResume(EventPayload),
    #[serde(rename = "onPlaybackRateChange")]
    PlaybackRateChange(RateChange),
    #[serde(rename = "onAudioFocusChanged")]
    AudioFocusChanged(EventPayload),
    #[serde(rename = "onAudioBecomingNoisy")]
    AudioBecomingNoisy,
}

impl PlayerEvent {
    /// The native wire name of this event.
    pub fn name(&self) -> &'static str {
        match self {
            PlayerEvent::LoadStart(_) => "onVideoLoadStart",
            PlayerEvent::Load(_) => "onVideoLoad",
            PlayerEvent::Error(_) => "onVideoError",
            PlayerEvent::Progress(_) => "onVideoProgress",
            PlayerEvent::Buffer(_) => "onVideoBuffer",
            PlayerEvent::Seek(_) => "onVideoSeek",
            PlayerEvent::SeekToClip(_) => "onVideoSeekToClip",
            PlayerEvent::ClipEnd(_) => "onVideoClipEnd",
            PlayerEvent::End(_) => "onVideoEnd",
            PlayerEvent::TimedMetadata(_) => "onTimedMetadata",
            PlayerEvent::FullscreenPlayerWillPresent(_) => "onVideoFullscreenPlayerWillPresent",
            PlayerEvent::FullscreenPlayerDidPresent(_) => "onVideoFullscreenPlayerDidPresent",
            PlayerEvent::FullscreenPlayerWillDismiss(_) => "onVideoFullscreenPlayerWillDismiss",
            PlayerEvent::FullscreenPlayerDidDismiss(_) => "onVideoFullscreenPlayerDidDismiss",
            PlayerEvent::ReadyForDisplay(_) => "onReadyForDisplay",
            PlayerEvent::PlaybackStalled(_) => "onPlaybackStalled",
            PlayerEvent::PlaybackResume(_) => "onPlaybackResume",
            PlayerEvent::PlaybackRateChange(_) => "onPlaybackRateChange",
            PlayerEvent::AudioFocusChanged(_) => "onAudioFocusChanged",
            PlayerEvent::AudioBecomingNoisy => "onAudioBecomingNoisy",
        }
    }
}

// Handler bounds mirror the platform markers in `bridge-traits`: native
// targets require `Send + Sync`, wasm32 relaxes them so handlers can close
// over browser-provided objects.

/// Boxed callback receiving an opaque payload.
#[cfg(not(target_arch = "wasm32"))]
pub type EventHandler = Box<dyn Fn(&EventPayload) + Send + Sync>;
#[cfg(target_arch = "wasm32")]
pub type EventHandler = Box<dyn Fn(&EventPayload)>;

/// Boxed callback for rate changes.
#[cfg(not(target_arch = "wasm32"))]
pub type RateChangeHandler = Box<dyn Fn(&RateChange) + Send + Sync>;
#[cfg(target_arch = "wasm32")]
pub type RateChangeHandler = Box<dyn Fn(&RateChange)>;

/// Boxed callback for the payload-less audio-becoming-noisy event.
#[cfg(not(target_arch = "wasm32"))]
pub type NoisyHandler = Box<dyn Fn() + Send + Sync>;
#[cfg(target_arch = "wasm32")]
pub type NoisyHandler = Box<dyn Fn()>;

/// Caller-supplied lifecycle callbacks, one optional slot per event.
///
/// All slots default to absent; an absent slot drops its event silently.
#[derive(Default)]
pub struct EventHandlers {
    pub on_load_start: Option<EventHandler>,
    pub on_load: Option<EventHandler>,
    pub on_error: Option<EventHandler>,
    pub on_progress: Option<EventHandler>,
    pub on_buffer: Option<EventHandler>,
    pub on_seek: Option<EventHandler>,
    pub on_seek_to_clip: Option<EventHandler>,
    pub on_clip_end: Option<EventHandler>,
    pub on_end: Option<EventHandler>,
    pub on_timed_metadata: Option<EventHandler>,
    pub on_fullscreen_player_will_present: Option<EventHandler>,
    pub on_fullscreen_player_did_present: Option<EventHandler>,
    pub on_fullscreen_player_will_dismiss: Option<EventHandler>,
    pub on_fullscreen_player_did_dismiss: Option<EventHandler>,
    pub on_ready_for_display: Option<EventHandler>,
    pub on_playback_stalled: Option<EventHandler>,
    pub on_playback_resume: Option<EventHandler>,
    pub on_playback_rate_change: Option<RateChangeHandler>,
    pub on_audio_focus_changed: Option<EventHandler>,
    pub on_audio_becoming_noisy: Option<NoisyHandler>,
}

impl EventHandlers {
    /// No handlers configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Route an event to its handler, if one is configured.
    ///
    /// Returns `true` if a handler ran.
    pub fn dispatch(&self, event: &PlayerEvent) -> bool {
        match event {
            PlayerEvent::LoadStart(payload) => run(&self.on_load_start, payload),
            PlayerEvent::Load(payload) => run(&self.on_load, payload),
            PlayerEvent::Error(payload) => run(&self.on_error, payload),
            PlayerEvent::Progress(payload) => run(&self.on_progress, payload),
            PlayerEvent::Buffer(payload) => run(&self.on_buffer, payload),
            PlayerEvent::Seek(payload) => run(&self.on_seek, payload),
            PlayerEvent::SeekToClip(payload) => run(&self.on_seek_to_clip, payload),
            PlayerEvent::ClipEnd(payload) => run(&self.on_clip_end, payload),
            PlayerEvent::End(payload) => run(&self.on_end, payload),
            PlayerEvent::TimedMetadata(payload) => run(&self.on_timed_metadata, payload),
            PlayerEvent::FullscreenPlayerWillPresent(payload) => {
                run(&self.on_fullscreen_player_will_present, payload)
            }
            PlayerEvent::FullscreenPlayerDidPresent(payload) => {
                run(&self.on_fullscreen_player_did_present, payload)
            }
            PlayerEvent::FullscreenPlayerWillDismiss(payload) => {
                run(&self.on_fullscreen_player_will_dismiss, payload)
            }
            PlayerEvent::FullscreenPlayerDidDismiss(payload) => {
                run(&self.on_fullscreen_player_did_dismiss, payload)
            }
            PlayerEvent::ReadyForDisplay(payload) => run(&self.on_ready_for_display, payload),
            PlayerEvent::PlaybackStalled(payload) => run(&self.on_playback_stalled, payload),
            PlayerEvent::PlaybackResume(payload) => run(&self.on_playback_resume, payload),
            PlayerEvent::PlaybackRateChange(rate_change) => {
                match &self.on_playback_rate_change {
                    Some(handler) => {
                        handler(rate_change);
                        true
                    }
                    None => false,
                }
            }
            PlayerEvent::AudioFocusChanged(payload) => run(&self.on_audio_focus_changed, payload),
            PlayerEvent::AudioBecomingNoisy => match &self.on_audio_becoming_noisy {
                Some(handler) => {
                    handler();
                    true
                }
                None => false,
            },
        }
    }
}

fn run(slot: &Option<EventHandler>, payload: &EventPayload) -> bool {
    match slot {
        Some(handler) => {
            handler(payload);
            true
        }
        None => false,
    }
}

impl fmt::Debug for EventHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let configured = [
            self.on_load_start.is_some(),
            self.on_load.is_some(),
            self.on_error.is_some(),
            self.on_progress.is_some(),
            self.on_buffer.is_some(),
            self.on_seek.is_some(),
            self.on_seek_to_clip.is_some(),
            self.on_clip_end.is_some(),
            self.on_end.is_some(),
            self.on_timed_metadata.is_some(),
            self.on_fullscreen_player_will_present.is_some(),
            self.on_fullscreen_player_did_present.is_some(),
            self.on_fullscreen_player_will_dismiss.is_some(),
            self.on_fullscreen_player_did_dismiss.is_some(),
            self.on_ready_for_display.is_some(),
            self.on_playback_stalled.is_some(),
            self.on_playback_resume.is_some(),
            self.on_playback_rate_change.is_some(),
            self.on_audio_focus_changed.is_some(),
            self.on_audio_becoming_noisy.is_some(),
        ]
        .iter()
        .filter(|present| **present)
        .count();

        f.debug_struct("EventHandlers")
            .field("configured", &configured)
            .finish()
    }
}
