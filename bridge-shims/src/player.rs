//! In-memory native player binding and scale-mode table.

use bridge_traits::player::{
    NativePlayerBinding, NativeScaleToken, PlayerSnapshot, ScaleModeTable,
};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

/// Binding that records every submitted snapshot.
///
/// Models the documented caller hazard: while unmounted, submissions are
/// dropped on the floor exactly as a platform binding without a live native
/// view would drop them.
pub struct RecordingPlayerBinding {
    mounted: AtomicBool,
    submissions: Mutex<Vec<PlayerSnapshot>>,
}

impl RecordingPlayerBinding {
    /// A mounted binding that records all submissions.
    pub fn new() -> Self {
        Self {
            mounted: AtomicBool::new(true),
            submissions: Mutex::new(Vec::new()),
        }
    }

    /// A binding whose native view has not mounted yet.
    pub fn unmounted() -> Self {
        Self {
            mounted: AtomicBool::new(false),
            submissions: Mutex::new(Vec::new()),
        }
    }

    pub fn set_mounted(&self, mounted: bool) {
        self.mounted.store(mounted, Ordering::SeqCst);
    }

    /// Every snapshot received so far, in submission order.
    pub fn submissions(&self) -> Vec<PlayerSnapshot> {
        self.submissions.lock().clone()
    }

    /// The most recent snapshot, if any.
    pub fn last(&self) -> Option<PlayerSnapshot> {
        self.submissions.lock().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.submissions.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.submissions.lock().is_empty()
    }
}

impl Default for RecordingPlayerBinding {
    fn default() -> Self {
        Self::new()
    }
}

impl NativePlayerBinding for RecordingPlayerBinding {
    fn submit(&self, snapshot: &PlayerSnapshot) {
        if !self.mounted.load(Ordering::SeqCst) {
            debug!("binding not mounted; snapshot dropped");
            return;
        }
        self.submissions.lock().push(snapshot.clone());
    }
}

/// Scale-mode table with fixed tokens.
#[derive(Debug, Clone)]
pub struct FixedScaleModeTable {
    scale_to_fill: NativeScaleToken,
    scale_aspect_fit: NativeScaleToken,
    scale_aspect_fill: NativeScaleToken,
    scale_none: NativeScaleToken,
}

impl FixedScaleModeTable {
    pub fn new(
        scale_to_fill: NativeScaleToken,
        scale_aspect_fit: NativeScaleToken,
        scale_aspect_fill: NativeScaleToken,
        scale_none: NativeScaleToken,
    ) -> Self {
        Self {
            scale_to_fill,
            scale_aspect_fit,
            scale_aspect_fill,
            scale_none,
        }
    }
}

impl Default for FixedScaleModeTable {
    fn default() -> Self {
        Self::new(
            NativeScaleToken::new("ScaleToFill"),
            NativeScaleToken::new("ScaleAspectFit"),
            NativeScaleToken::new("ScaleAspectFill"),
            NativeScaleToken::new("ScaleNone"),
        )
    }
}

impl ScaleModeTable for FixedScaleModeTable {
    fn scale_to_fill(&self) -> NativeScaleToken {
        self.scale_to_fill.clone()
    }

    fn scale_aspect_fit(&self) -> NativeScaleToken {
        self.scale_aspect_fit.clone()
    }

    fn scale_aspect_fill(&self) -> NativeScaleToken {
        self.scale_aspect_fill.clone()
    }

    fn scale_none(&self) -> NativeScaleToken {
        self.scale_none.clone()
    }
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
    fn records_in_submission_order() {
        let binding = RecordingPlayerBinding::new();
        let mut second = snapshot();
        second.muted = true;

        binding.submit(&snapshot());
        binding.submit(&second);

        let submissions = binding.submissions();
        assert_eq!(submissions.len(), 2);
        assert!(!submissions[0].muted);
        assert!(submissions[1].muted);
    }

    #[test]
    fn unmounted_binding_drops_submissions() {
        let binding = RecordingPlayerBinding::unmounted();
        binding.submit(&snapshot());
        assert!(binding.is_empty());

        binding.set_mounted(true);
        binding.submit(&snapshot());
        assert_eq!(binding.len(), 1);
    }

    #[test]
    fn default_table_tokens_are_distinct() {
        let table = FixedScaleModeTable::default();
        assert_ne!(table.scale_to_fill(), table.scale_none());
        assert_ne!(table.scale_aspect_fit(), table.scale_aspect_fill());
    }

    #[test]
    fn recorded_snapshot_keeps_native_field_names() {
        let binding = RecordingPlayerBinding::new();
        let mut submitted = snapshot();
        submitted.play_in_background = true;
        binding.submit(&submitted);

        let json = serde_json::to_value(binding.last().unwrap()).unwrap();
        assert_eq!(json["resizeMode"], "ScaleNone");
        assert_eq!(json["playInBackground"], true);
        assert!(json.as_object().unwrap().get("seek").is_none());
    }
}
