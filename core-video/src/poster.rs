//! Poster-visibility state machine.
//!
//! The poster is a static image overlay shown before playback has visibly
//! started. Its visibility is the only state this layer carries across
//! calls: one boolean, one-way. Once hidden, the poster never reappears for
//! the lifetime of the component instance.

use tracing::debug;

/// Poster overlay visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosterVisibility {
    Showing,
    Hidden,
}

/// The state cell. Starts `Showing`; transitions to `Hidden` on the first
/// seek-completed event or the first rate-change event with nonzero rate.
#[derive(Debug, Clone)]
pub struct PosterState {
    visibility: PosterVisibility,
}

impl PosterState {
    pub fn new() -> Self {
        Self {
            visibility: PosterVisibility::Showing,
        }
    }

    pub fn visibility(&self) -> PosterVisibility {
        self.visibility
    }

    pub fn is_showing(&self) -> bool {
        self.visibility == PosterVisibility::Showing
    }

    /// A completed seek means playback content is on screen.
    pub fn on_seek(&mut self) {
        self.hide();
    }

    /// Rate 0 keeps the poster; any nonzero rate means playback has started.
    pub fn on_rate_change(&mut self, rate: f64) {
        if rate != 0.0 {
            self.hide();
        }
    }

    fn hide(&mut self) {
        if self.is_showing() {
            debug!("hiding poster overlay");
            self.visibility = PosterVisibility::Hidden;
        }
    }
}

impl Default for PosterState {
    fn default() -> Self {
        Self::new()
    }
}
