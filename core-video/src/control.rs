//! # Control Command Encoder
//!
//! The closed set of imperative playback controls and their encoding into
//! native property patches. Each command produces exactly one
//! [`NativePropertyPatch`]; the patch is merged into a fresh snapshot and
//! handed to the native binding by [`VideoPlayerView`](crate::view::VideoPlayerView).

use bridge_traits::player::{NativePropertyPatch, SeekClip};

/// One imperative playback control call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlCommand {
    /// Seek to an absolute time in seconds.
    Seek { time: f64 },
    /// Seek to the clip at `index`; `time` absent means the clip's start.
    SeekToClip { index: u32, time: Option<f64> },
    /// Present (`true`) or dismiss (`false`) the fullscreen player.
    SetFullscreen(bool),
}

impl ControlCommand {
    /// Encode this command as its property patch.
    pub fn encode(&self) -> NativePropertyPatch {
        match *self {
            ControlCommand::Seek { time } => NativePropertyPatch::Seek(time),
            ControlCommand::SeekToClip { index, time } => {
                NativePropertyPatch::SeekClip(SeekClip { index, time })
            }
            ControlCommand::SetFullscreen(on) => NativePropertyPatch::Fullscreen(on),
        }
    }

    /// Short name for log lines.
    pub fn name(&self) -> &'static str {
        match self {
            ControlCommand::Seek { .. } => "seek",
            ControlCommand::SeekToClip { .. } => "seekToClip",
            ControlCommand::SetFullscreen(true) => "presentFullscreen",
            ControlCommand::SetFullscreen(false) => "dismissFullscreen",
        }
    }
}
