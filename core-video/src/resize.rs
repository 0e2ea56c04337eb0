//! # Resize-Mode Mapper
//!
//! Maps the symbolic resize-mode value to the opaque native scaling constant
//! for the current platform build. The mapping is total: any unrecognized or
//! absent value resolves to the "none" token.

use bridge_traits::player::{NativeScaleToken, ScaleModeTable};
use serde::{Deserialize, Deserializer, Serialize};

/// Symbolic resize mode exposed to the embedding application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeMode {
    /// Stretch to fill, ignoring aspect ratio.
    Stretch,
    /// Fit inside the view, preserving aspect ratio.
    Contain,
    /// Fill the view, preserving aspect ratio and cropping overflow.
    Cover,
    /// No scaling. Default, and the fallback for unrecognized values.
    #[default]
    None,
}

impl ResizeMode {
    /// Parse a mode name; anything unrecognized is `None`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "stretch" => ResizeMode::Stretch,
            "contain" => ResizeMode::Contain,
            "cover" => ResizeMode::Cover,
            _ => ResizeMode::None,
        }
    }
}

// Hand-rolled so unrecognized serialized values, non-string values
// included, fall back to `None` instead of failing deserialization; the
// mapper contract is a total function.
impl<'de> Deserialize<'de> for ResizeMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = serde_json::Value::deserialize(deserializer)?;
        Ok(raw
            .as_str()
            .map(ResizeMode::from_name)
            .unwrap_or_default())
    }
}

/// Look up the native token for a resize mode.
///
/// Tokens are fetched from the platform table at call time because they may
/// differ per platform build; nothing is cached here.
pub fn map_resize_mode(mode: ResizeMode, table: &dyn ScaleModeTable) -> NativeScaleToken {
    match mode {
        ResizeMode::Stretch => table.scale_to_fill(),
        ResizeMode::Contain => table.scale_aspect_fit(),
        ResizeMode::Cover => table.scale_aspect_fill(),
        ResizeMode::None => table.scale_none(),
    }
}
