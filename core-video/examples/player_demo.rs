//! # Video Player Usage Example
//!
//! This example demonstrates how to wire the view against the in-memory
//! bridge shims: resolving a source list, updating configuration, issuing
//! control calls, and receiving native lifecycle events.
//!
//! Run with: `cargo run --example player_demo --package core-video`

use bridge_shims::{FixedScaleModeTable, RecordingPlayerBinding, StaticAssetResolver};
use bridge_traits::assets::ResolvedAsset;
use bridge_traits::player::NativePlayerBinding;
use core_video::{
    EventHandlers, PlayerEvent, RateChange, ResizeMode, SourceInput, VideoPlayerView, VideoProps,
};
use serde_json::json;
use std::sync::Arc;

fn main() {
    // Run with RUST_LOG=debug to see snapshot submissions and control calls.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("🎬 Core Video - Player Demo\n");

    // ========================================================================
    // Bridge collaborators
    // ========================================================================

    let resolver = Arc::new(
        StaticAssetResolver::new().with_asset(
            "intro",
            ResolvedAsset::new("file:///bundle/intro.mp4").with_media_type("mp4"),
        ),
    );
    let scale_modes = Arc::new(FixedScaleModeTable::default());
    let binding = Arc::new(RecordingPlayerBinding::new());
    let dyn_binding: Arc<dyn NativePlayerBinding> = binding.clone();

    // ========================================================================
    // Source resolution
    // ========================================================================

    println!("📂 Resolving a mixed source list...");
    let source = SourceInput::from_value(&json!([
        { "asset": "intro", "type": "mp4" },
        "https://example.com/feature.mp4",
        "/local/bonus.mp4"
    ]))
    .expect("valid source value");

    let props = VideoProps::new(source)
        .with_resize_mode(ResizeMode::Contain)
        .with_poster("https://example.com/poster.png")
        .with_volume(0.8);

    let mut handlers = EventHandlers::new();
    handlers.on_progress = Some(Box::new(|payload| {
        println!("   ⏱  progress: {payload}");
    }));
    handlers.on_seek = Some(Box::new(|payload| {
        println!("   ⏩ seek completed: {payload}");
    }));

    let mut view =
        VideoPlayerView::new(props, resolver, scale_modes, dyn_binding).with_handlers(handlers);

    // ========================================================================
    // Declarative update
    // ========================================================================

    view.update(view.props().clone());
    let snapshot = binding.last().expect("snapshot submitted");
    println!("   Resolved {} sources:", snapshot.src.len());
    for entry in &snapshot.src {
        println!(
            "     {} (network: {}, asset: {})",
            entry.uri, entry.is_network, entry.is_asset
        );
    }
    println!("   Scale mode: {}\n", snapshot.resize_mode.as_str());

    // ========================================================================
    // Control calls
    // ========================================================================

    println!("🎛  Issuing control calls...");
    view.seek(42.5);
    println!("   seek(42.5) -> patch: {:?}", binding.last().unwrap().seek);

    view.seek_to_clip(1, None);
    println!(
        "   seekToClip(1) -> patch: {:?}",
        binding.last().unwrap().seek_clip
    );

    view.present_fullscreen_player();
    println!(
        "   presentFullscreenPlayer -> patch: {:?}\n",
        binding.last().unwrap().fullscreen
    );

    // ========================================================================
    // Native events and poster state
    // ========================================================================

    println!("📡 Dispatching native events...");
    println!("   Poster visible: {}", view.poster_visible());

    view.handle_event(PlayerEvent::Progress(json!({ "currentTime": 1.0 })));
    view.handle_event(PlayerEvent::PlaybackRateChange(RateChange {
        playback_rate: 1.0,
    }));
    view.handle_event(PlayerEvent::Seek(json!({ "seekTime": 42.5 })));

    println!(
        "   Poster visible after playback started: {}\n",
        view.poster_visible()
    );

    println!("✅ Demo complete! {} snapshots submitted.", binding.len());
}
