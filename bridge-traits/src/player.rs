//! Native player binding and supporting configuration types.
//!
//! The core communicates with the platform-native player through exactly one
//! channel: an immutable [`PlayerSnapshot`] rebuilt from scratch on every
//! configuration change or control call and handed whole to the
//! [`NativePlayerBinding`]. Imperative intent (seek, fullscreen, clip seek)
//! rides along as a [`NativePropertyPatch`] merged into that snapshot; there
//! is no separate command channel and no acknowledgement path back.

use crate::assets::ResolvedSource;
use crate::platform::PlatformSendSync;
use serde::{Deserialize, Serialize};

/// Opaque platform constant identifying a resize/scaling behavior.
///
/// Tokens are owned by the native side and may differ per platform build;
/// the core looks them up through a [`ScaleModeTable`] at mapping time and
/// never hardcodes them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NativeScaleToken(String);

impl NativeScaleToken {
    /// Wrap a raw platform constant.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Borrow the raw constant value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Platform-supplied table of resize-mode constants.
///
/// Queried live on every mapping; implementations should return whatever the
/// current native build exposes rather than cached values.
pub trait ScaleModeTable: PlatformSendSync {
    /// Token for stretch-to-fill scaling.
    fn scale_to_fill(&self) -> NativeScaleToken;

    /// Token for aspect-preserving fit-inside scaling.
    fn scale_aspect_fit(&self) -> NativeScaleToken;

    /// Token for aspect-preserving fill-and-crop scaling.
    fn scale_aspect_fill(&self) -> NativeScaleToken;

    /// Token for no scaling, the default.
    fn scale_none(&self) -> NativeScaleToken;
}

/// Target of a seek-to-clip command.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeekClip {
    /// Zero-based clip index within the source list.
    pub index: u32,
    /// Offset within the clip; absent means the start of the clip.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<f64>,
}

/// Minimal property delta carrying one imperative action to the native player.
///
/// Exactly one field is ever set per control call. Patches are merged
/// shallowly into the outgoing snapshot; last write wins, with no queuing or
/// coalescing at this layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NativePropertyPatch {
    /// Seek to an absolute time in seconds.
    Seek(f64),
    /// Present (`true`) or dismiss (`false`) the fullscreen player.
    Fullscreen(bool),
    /// Seek to a clip, optionally at an offset within it.
    SeekClip(SeekClip),
}

/// Behavior of playback while the device's hardware silent switch is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IgnoreSilentSwitch {
    /// Keep playing audio regardless of the switch.
    Ignore,
    /// Respect the switch and mute.
    Obey,
}

/// The full configuration handed to the native player.
///
/// Rebuilt fresh on every update; the native side treats each submission as
/// a complete replacement, not a delta. The optional `seek`/`fullscreen`/
/// `seek_clip` fields are present only on snapshots produced by a control
/// call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSnapshot {
    /// Validated, ordered source list. May be empty.
    pub src: Vec<ResolvedSource>,
    /// Native resize-mode token.
    pub resize_mode: NativeScaleToken,
    /// Whether the native player may buffer ahead. Defaults to `true`.
    pub buffering: bool,
    pub repeat: bool,
    pub paused: bool,
    pub muted: bool,
    pub volume: f32,
    pub rate: f32,
    pub play_in_background: bool,
    pub play_when_inactive: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_silent_switch: Option<IgnoreSilentSwitch>,
    pub disable_focus: bool,
    pub controls: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress_update_interval: Option<f64>,
    /// Poster image URI; the overlay itself is rendered by the host.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seek: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fullscreen: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seek_clip: Option<SeekClip>,
}

impl PlayerSnapshot {
    /// Merge one property patch into this snapshot, consuming it.
    pub fn apply_patch(mut self, patch: NativePropertyPatch) -> Self {
        match patch {
            NativePropertyPatch::Seek(time) => self.seek = Some(time),
            NativePropertyPatch::Fullscreen(on) => self.fullscreen = Some(on),
            NativePropertyPatch::SeekClip(clip) => self.seek_clip = Some(clip),
        }
        self
    }

    /// Returns `true` if any imperative patch field is set.
    pub fn has_patch(&self) -> bool {
        self.seek.is_some() || self.fullscreen.is_some() || self.seek_clip.is_some()
    }
}

/// Handle to the platform-native player implementation.
///
/// The binding consumes snapshots and emits lifecycle events asynchronously
/// through host plumbing outside this crate. Submission is synchronous from
/// the caller's point of view but carries no guarantee that the native
/// player has applied anything yet; eventual application is entirely the
/// native side's responsibility.
pub trait NativePlayerBinding: PlatformSendSync {
    /// Hand a freshly built configuration snapshot to the native player.
    ///
    /// Fire-and-forget: no return value and no failure path. A binding that
    /// is not yet mounted drops the snapshot; callers that issue control
    /// calls before mount must expect them to be lost.
    fn submit(&self, snapshot: &PlayerSnapshot);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> PlayerSnapshot {
        PlayerSnapshot {
            src: Vec::new(),
            resize_mode: NativeScaleToken::new("ScaleNone"),
            buffering: true,
            repeat: false,
            paused: false,
            muted: false,
            volume: 1.0,
            rate: 1.0,
            play_in_background: false,
            play_when_inactive: false,
            ignore_silent_switch: None,
            disable_focus: false,
            controls: false,
            current_time: None,
            progress_update_interval: None,
            poster: None,
            seek: None,
            fullscreen: None,
            seek_clip: None,
        }
    }

    #[test]
    fn patch_sets_exactly_one_field() {
        let seek = snapshot().apply_patch(NativePropertyPatch::Seek(12.5));
        assert_eq!(seek.seek, Some(12.5));
        assert_eq!(seek.fullscreen, None);
        assert_eq!(seek.seek_clip, None);

        let fullscreen = snapshot().apply_patch(NativePropertyPatch::Fullscreen(true));
        assert_eq!(fullscreen.fullscreen, Some(true));
        assert_eq!(fullscreen.seek, None);
    }

    #[test]
    fn last_patch_write_wins() {
        let merged = snapshot()
            .apply_patch(NativePropertyPatch::Seek(1.0))
            .apply_patch(NativePropertyPatch::Seek(2.0));
        assert_eq!(merged.seek, Some(2.0));
    }

    #[test]
    fn seek_clip_without_time_omits_the_field() {
        let patch = NativePropertyPatch::SeekClip(SeekClip {
            index: 3,
            time: None,
        });
        let json = serde_json::to_value(patch).unwrap();
        assert_eq!(json, serde_json::json!({ "seekClip": { "index": 3 } }));
    }

    #[test]
    fn seek_clip_with_time_carries_it() {
        let patch = NativePropertyPatch::SeekClip(SeekClip {
            index: 3,
            time: Some(12.5),
        });
        let json = serde_json::to_value(patch).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "seekClip": { "index": 3, "time": 12.5 } })
        );
    }

    #[test]
    fn snapshot_omits_absent_patch_fields() {
        let json = serde_json::to_value(snapshot()).unwrap();
        let object = json.as_object().unwrap();
        assert!(!object.contains_key("seek"));
        assert!(!object.contains_key("fullscreen"));
        assert!(!object.contains_key("seekClip"));
        assert_eq!(json["resizeMode"], "ScaleNone");
        assert_eq!(json["buffering"], true);
    }

    #[test]
    fn scale_token_is_transparent_in_json() {
        let token = NativeScaleToken::new("ScaleAspectFit");
        assert_eq!(serde_json::to_string(&token).unwrap(), "\"ScaleAspectFit\"");
        assert_eq!(token.as_str(), "ScaleAspectFit");
    }
}
