//! # Video Configuration
//!
//! The declarative configuration surface of the component, and its pure
//! "render" into a [`PlayerSnapshot`]. Every field except `source` has a
//! serde default, so hosts can hand partial configurations across an FFI or
//! JSON boundary.

use crate::resize::{map_resize_mode, ResizeMode};
use crate::source::{resolve_sources, SourceInput};
use bridge_traits::assets::AssetResolver;
use bridge_traits::player::{IgnoreSilentSwitch, PlayerSnapshot, ScaleModeTable};
use serde::{Deserialize, Serialize};

/// Declarative video configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoProps {
    /// What to play. The only required field.
    pub source: SourceInput,

    /// How the video scales inside its view. Default: no scaling.
    #[serde(default)]
    pub resize_mode: ResizeMode,

    /// Poster image URI shown before playback visibly starts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,

    /// Loop playback at end of the source list.
    #[serde(default)]
    pub repeat: bool,

    #[serde(default)]
    pub paused: bool,

    #[serde(default)]
    pub muted: bool,

    /// Volume, 0.0 = silent, 1.0 = unity gain. Default 1.0.
    #[serde(default = "default_volume")]
    pub volume: f32,

    /// Playback rate; 0.0 means stopped. Default 1.0.
    #[serde(default = "default_rate")]
    pub rate: f32,

    #[serde(default)]
    pub play_in_background: bool,

    #[serde(default)]
    pub play_when_inactive: bool,

    /// Behavior while the hardware silent switch is engaged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_silent_switch: Option<IgnoreSilentSwitch>,

    /// Opt out of taking audio focus on platforms that model it.
    #[serde(default)]
    pub disable_focus: bool,

    /// Show the platform's built-in transport controls.
    #[serde(default)]
    pub controls: bool,

    /// Initial playback position in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_time: Option<f64>,

    /// Interval between progress events, in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress_update_interval: Option<f64>,

    /// Tri-state buffering flag: absent means the native default (`true`);
    /// only an explicit `false` disables buffering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buffering: Option<bool>,
}

impl VideoProps {
    /// Configuration with the given source and defaults everywhere else.
    pub fn new(source: SourceInput) -> Self {
        Self {
            source,
            resize_mode: ResizeMode::default(),
            poster: None,
            repeat: false,
            paused: false,
            muted: false,
            volume: default_volume(),
            rate: default_rate(),
            play_in_background: false,
            play_when_inactive: false,
            ignore_silent_switch: None,
            disable_focus: false,
            controls: false,
            current_time: None,
            progress_update_interval: None,
            buffering: None,
        }
    }

    pub fn with_resize_mode(mut self, mode: ResizeMode) -> Self {
        self.resize_mode = mode;
        self
    }

    pub fn with_poster(mut self, uri: impl Into<String>) -> Self {
        self.poster = Some(uri.into());
        self
    }

    pub fn with_paused(mut self, paused: bool) -> Self {
        self.paused = paused;
        self
    }

    pub fn with_muted(mut self, muted: bool) -> Self {
        self.muted = muted;
        self
    }

    pub fn with_volume(mut self, volume: f32) -> Self {
        self.volume = volume;
        self
    }

    pub fn with_rate(mut self, rate: f32) -> Self {
        self.rate = rate;
        self
    }

    pub fn with_repeat(mut self, repeat: bool) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn with_controls(mut self, controls: bool) -> Self {
        self.controls = controls;
        self
    }

    pub fn with_buffering(mut self, buffering: bool) -> Self {
        self.buffering = Some(buffering);
        self
    }

    /// Effective buffering flag: `true` unless explicitly set to `false`.
    pub fn buffering_enabled(&self) -> bool {
        self.buffering != Some(false)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.volume < 0.0 {
            return Err("volume must be >= 0.0".to_string());
        }

        if self.rate < 0.0 {
            return Err("rate must be >= 0.0".to_string());
        }

        if let Some(interval) = self.progress_update_interval {
            if interval <= 0.0 {
                return Err("progress_update_interval must be > 0".to_string());
            }
        }

        Ok(())
    }

    /// Render this configuration into the snapshot the native player
    /// consumes. Pure: everything is recomputed fresh, nothing cached.
    pub fn snapshot(
        &self,
        resolver: &dyn AssetResolver,
        scale_modes: &dyn ScaleModeTable,
    ) -> PlayerSnapshot {
        PlayerSnapshot {
            src: resolve_sources(&self.source, resolver),
            resize_mode: map_resize_mode(self.resize_mode, scale_modes),
            buffering: self.buffering_enabled(),
            repeat: self.repeat,
            paused: self.paused,
            muted: self.muted,
            volume: self.volume,
            rate: self.rate,
            play_in_background: self.play_in_background,
            play_when_inactive: self.play_when_inactive,
            ignore_silent_switch: self.ignore_silent_switch,
            disable_focus: self.disable_focus,
            controls: self.controls,
            current_time: self.current_time,
            progress_update_interval: self.progress_update_interval,
            poster: self.poster.clone(),
            seek: None,
            fullscreen: None,
            seek_clip: None,
        }
    }
}

fn default_volume() -> f32 {
    1.0
}

fn default_rate() -> f32 {
    1.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_traits::assets::SourceDescriptor;

    fn props() -> VideoProps {
        VideoProps::new(SourceInput::Single(SourceDescriptor::from_uri(
            "https://example.com/a.mp4",
        )))
    }

    #[test]
    fn defaults() {
        let props = props();
        assert!(props.validate().is_ok());
        assert_eq!(props.volume, 1.0);
        assert_eq!(props.rate, 1.0);
        assert_eq!(props.resize_mode, ResizeMode::None);
        assert!(props.buffering_enabled());
    }

    #[test]
    fn buffering_false_only_when_explicit() {
        assert!(props().buffering_enabled());
        assert!(props().with_buffering(true).buffering_enabled());
        assert!(!props().with_buffering(false).buffering_enabled());
    }

    #[test]
    fn validation_rejects_negative_values() {
        assert!(props().with_volume(-0.1).validate().is_err());
        assert!(props().with_rate(-1.0).validate().is_err());

        let mut bad_interval = props();
        bad_interval.progress_update_interval = Some(0.0);
        assert!(bad_interval.validate().is_err());
    }

    #[test]
    fn deserializes_with_partial_fields() {
        let props: VideoProps = serde_json::from_str(
            r#"{
                "source": {"uri": "/local/movie.mp4"},
                "resizeMode": "cover",
                "buffering": false
            }"#,
        )
        .unwrap();

        assert_eq!(props.resize_mode, ResizeMode::Cover);
        assert_eq!(props.buffering, Some(false));
        assert_eq!(props.volume, 1.0);
        assert!(!props.paused);
    }

    #[test]
    fn non_string_resize_mode_degrades_to_none() {
        let props: VideoProps =
            serde_json::from_str(r#"{"source": "a.mp4", "resizeMode": 3}"#).unwrap();
        assert_eq!(props.resize_mode, ResizeMode::None);
    }

    #[test]
    fn ignore_silent_switch_uses_wire_names() {
        let props: VideoProps = serde_json::from_str(
            r#"{"source": "a.mp4", "ignoreSilentSwitch": "obey"}"#,
        )
        .unwrap();
        assert_eq!(props.ignore_silent_switch, Some(IgnoreSilentSwitch::Obey));
    }
}
