//! Workspace placeholder crate.
//!
//! This crate exists to expose shared feature flags that map to the individual
//! workspace crates (e.g., `core-video`, `bridge-shims`). Host applications
//! can depend on `vpc-workspace` and enable the documented features without
//! needing to wire each crate individually.

pub use core_video;

#[cfg(feature = "host-shims")]
pub use bridge_shims;
