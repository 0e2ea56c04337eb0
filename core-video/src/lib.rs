//! # Video Normalizer Core
//!
//! Source-list normalization and playback-control-surface mapping for a
//! host-native video player.
//!
//! ## Overview
//!
//! This module handles:
//! - Resolving heterogeneous caller-supplied sources into a validated,
//!   ordered list of normalized source records
//! - Mapping symbolic resize modes to opaque native constants
//! - Encoding imperative control calls (seek, clip seek, fullscreen) into
//!   property patches submitted to the native player
//! - The one-way poster-visibility state machine
//! - Verbatim pass-through of native lifecycle events to caller handlers
//!
//! Decoding, buffering, rendering, and fullscreen presentation all live
//! behind the `bridge-traits` collaborators; nothing in this crate performs
//! I/O.

pub mod control;
pub mod error;
pub mod events;
pub mod poster;
pub mod props;
pub mod resize;
pub mod source;
pub mod view;

pub use control::ControlCommand;
pub use error::{Result, VideoError};
pub use events::{EventHandlers, PlayerEvent, RateChange};
pub use poster::{PosterState, PosterVisibility};
pub use props::VideoProps;
pub use resize::{map_resize_mode, ResizeMode};
pub use source::{resolve_sources, SourceInput};
pub use view::VideoPlayerView;
