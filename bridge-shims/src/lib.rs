//! # Host Bridge Shims
//!
//! In-memory reference implementations of the bridge traits.
//!
//! ## Overview
//!
//! This crate provides host-free implementations of every trait in
//! `bridge-traits`, used by the core's test suites and demos:
//! - `StaticAssetResolver`: bundled-asset lookup from a registered table,
//!   plus URI passthrough
//! - `RecordingPlayerBinding`: records every submitted snapshot and models
//!   the unmounted-binding drop hazard
//! - `FixedScaleModeTable`: a constant set of scale-mode tokens
//!
//! Production hosts replace these with adapters over their platform's
//! actual asset catalog and media engine.

mod assets;
mod player;

pub use assets::StaticAssetResolver;
pub use player::{FixedScaleModeTable, RecordingPlayerBinding};
