//! # Video Player View
//!
//! The component shell that ties the normalizer together: it owns the
//! current configuration, the poster state cell, and the caller's event
//! handlers, and talks to the host through the three bridge collaborators.
//!
//! Everything runs on the host's UI/main execution context. Control calls
//! are synchronous handoffs: they return as soon as the snapshot reaches
//! the binding, with no guarantee the native player has applied anything
//! yet. There is no cancellation; a second seek simply submits a newer
//! snapshot.

use crate::control::ControlCommand;
use crate::events::{EventHandlers, PlayerEvent};
use crate::poster::PosterState;
use crate::props::VideoProps;
use bridge_traits::assets::AssetResolver;
use bridge_traits::player::{NativePlayerBinding, PlayerSnapshot, ScaleModeTable};
use std::sync::Arc;
use tracing::{debug, trace};

/// One video player instance.
pub struct VideoPlayerView {
    props: VideoProps,
    poster: PosterState,
    handlers: EventHandlers,
    resolver: Arc<dyn AssetResolver>,
    scale_modes: Arc<dyn ScaleModeTable>,
    binding: Arc<dyn NativePlayerBinding>,
}

impl VideoPlayerView {
    /// Create a view over the given collaborators.
    ///
    /// Nothing is submitted yet; the host drives the first render through
    /// [`update`](Self::update) once the native side is ready.
    pub fn new(
        props: VideoProps,
        resolver: Arc<dyn AssetResolver>,
        scale_modes: Arc<dyn ScaleModeTable>,
        binding: Arc<dyn NativePlayerBinding>,
    ) -> Self {
        Self {
            props,
            poster: PosterState::new(),
            handlers: EventHandlers::new(),
            resolver,
            scale_modes,
            binding,
        }
    }

    /// Attach caller event handlers.
    pub fn with_handlers(mut self, handlers: EventHandlers) -> Self {
        self.handlers = handlers;
        self
    }

    pub fn set_handlers(&mut self, handlers: EventHandlers) {
        self.handlers = handlers;
    }

    pub fn props(&self) -> &VideoProps {
        &self.props
    }

    /// Pure render: the snapshot the native player would receive right now.
    pub fn render(&self) -> PlayerSnapshot {
        self.props
            .snapshot(self.resolver.as_ref(), self.scale_modes.as_ref())
    }

    /// Replace the configuration and submit a fresh patch-free snapshot.
    pub fn update(&mut self, props: VideoProps) {
        self.props = props;
        let snapshot = self.render();
        self.submit(snapshot);
    }

    /// Seek to an absolute time in seconds.
    pub fn seek(&self, time: f64) {
        self.control(ControlCommand::Seek { time });
    }

    /// Seek to the clip at `index`; `time` absent means the clip's start.
    pub fn seek_to_clip(&self, index: u32, time: Option<f64>) {
        self.control(ControlCommand::SeekToClip { index, time });
    }

    pub fn present_fullscreen_player(&self) {
        self.control(ControlCommand::SetFullscreen(true));
    }

    pub fn dismiss_fullscreen_player(&self) {
        self.control(ControlCommand::SetFullscreen(false));
    }

    /// Whether the poster overlay should currently be rendered.
    ///
    /// A presentational gate only: true while a poster URI is configured
    /// and playback has not visibly started.
    pub fn poster_visible(&self) -> bool {
        self.props.poster.is_some() && self.poster.is_showing()
    }

    pub fn poster_state(&self) -> &PosterState {
        &self.poster
    }

    /// Entry point for native lifecycle events.
    ///
    /// Derives poster visibility from seek and rate-change events, then
    /// forwards the event verbatim to the caller's handler if present.
    pub fn handle_event(&mut self, event: PlayerEvent) {
        match &event {
            PlayerEvent::Seek(_) => self.poster.on_seek(),
            PlayerEvent::PlaybackRateChange(rate_change) => {
                self.poster.on_rate_change(rate_change.playback_rate);
            }
            _ => {}
        }

        if !self.handlers.dispatch(&event) {
            trace!(event = event.name(), "no handler configured; event dropped");
        }
    }

    fn control(&self, command: ControlCommand) {
        debug!(command = command.name(), "encoding control command");
        let snapshot = self.render().apply_patch(command.encode());
        self.submit(snapshot);
    }

    fn submit(&self, snapshot: PlayerSnapshot) {
        debug!(
            sources = snapshot.src.len(),
            has_patch = snapshot.has_patch(),
            "submitting snapshot to native binding"
        );
        self.binding.submit(&snapshot);
    }
}
