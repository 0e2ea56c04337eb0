//! # Host Bridge Traits
//!
//! Platform abstraction traits that must be implemented by each host platform.
//!
//! ## Overview
//!
//! This crate defines the contract between the video normalizer core and the
//! platform-native player implementation. Each trait represents a capability
//! the core requires but that is supplied differently per platform (iOS,
//! Android, Windows, web). The core itself performs no decoding, rendering,
//! or fullscreen presentation; all of that lives behind these traits.
//!
//! ## Traits
//!
//! - [`AssetResolver`](assets::AssetResolver) - Resolves bundled/packaged
//!   media references to a playable URI and content type
//! - [`NativePlayerBinding`](player::NativePlayerBinding) - Accepts
//!   configuration snapshots and drives the native media engine
//! - [`ScaleModeTable`](player::ScaleModeTable) - Exposes the platform's
//!   opaque resize-mode constants, queried live per mapping
//!
//! ## Platform Requirements
//!
//! Each supported platform must ship concrete adapters for every bridge
//! trait. The `bridge-shims` crate provides in-memory reference
//! implementations used by tests and demos.
//!
//! ## Error Handling
//!
//! Fallible bridge operations use the [`BridgeError`](error::BridgeError)
//! type. Note that [`NativePlayerBinding::submit`](player::NativePlayerBinding::submit)
//! is deliberately infallible: the handoff to the native player is
//! fire-and-forget with no acknowledgement channel, and a binding that is
//! not yet mounted simply drops the snapshot.
//!
//! ## Thread Safety
//!
//! Bridge traits carry [`PlatformSendSync`](platform::PlatformSendSync)
//! bounds: `Send + Sync` on native targets, relaxed on `wasm32` where
//! browser-provided objects are single-threaded.

pub mod assets;
pub mod error;
pub mod platform;
pub mod player;

pub use error::BridgeError;

// Re-export commonly used types
pub use assets::{AssetResolver, ResolvedAsset, ResolvedSource, SourceDescriptor, SourceRecord};
pub use platform::{PlatformSend, PlatformSendSync};
pub use player::{
    IgnoreSilentSwitch, NativePlayerBinding, NativePropertyPatch, NativeScaleToken, PlayerSnapshot,
    ScaleModeTable, SeekClip,
};
