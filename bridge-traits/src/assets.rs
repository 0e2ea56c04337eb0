//! Source descriptors and the asset-resolution bridge.
//!
//! A caller describes what to play with loosely-shaped [`SourceDescriptor`]
//! values: a bare URI string, or a record that may reference a bundled asset,
//! a remote URL, or a local file. The host supplies an [`AssetResolver`] that
//! turns each descriptor into a best-effort playable URI; the core never
//! touches the filesystem or network itself. [`ResolvedSource`] is the fully
//! normalized form the native player ultimately receives.

use crate::error::Result;
use crate::platform::PlatformSendSync;
use serde::{Deserialize, Serialize};

/// One caller-supplied media source.
///
/// Accepts either a bare string (shorthand for a record carrying only `uri`)
/// or a loose record. The record form is intentionally permissive: every
/// field is optional and unknown fields are ignored, matching the
/// best-effort posture of the resolution pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SourceDescriptor {
    /// Bare URI shorthand, e.g. `"https://example.com/a.mp4"`.
    Uri(String),
    /// Record form with optional fields.
    Record(SourceRecord),
}

impl SourceDescriptor {
    /// Build a descriptor from a plain URI.
    pub fn from_uri(uri: impl Into<String>) -> Self {
        SourceDescriptor::Uri(uri.into())
    }

    /// Build a descriptor referencing a bundled asset by name.
    pub fn from_asset(name: impl Into<String>) -> Self {
        SourceDescriptor::Record(SourceRecord {
            asset: Some(name.into()),
            ..SourceRecord::default()
        })
    }

    /// The record's versions, when present. Bare URIs carry none.
    pub fn versions(&self) -> (u32, u32) {
        match self {
            SourceDescriptor::Uri(_) => (0, 0),
            SourceDescriptor::Record(record) => (
                record.main_ver.unwrap_or(0),
                record.patch_ver.unwrap_or(0),
            ),
        }
    }
}

/// Loose record form of a source descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SourceRecord {
    /// Remote or local URI, when the source is not a bundled asset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    /// Bundled-asset name, resolved by the host's [`AssetResolver`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset: Option<String>,
    /// Optional content-type hint (e.g. `"mp4"`).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    /// Major content version, used by hosts that swap patched media in place.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_ver: Option<u32>,
    /// Patch content version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch_ver: Option<u32>,
}

impl SourceRecord {
    /// Record carrying only a URI.
    pub fn with_uri(uri: impl Into<String>) -> Self {
        Self {
            uri: Some(uri.into()),
            ..Self::default()
        }
    }
}

/// Best-effort resolution result produced by an [`AssetResolver`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedAsset {
    /// Playable URI; empty when resolution produced nothing usable.
    pub uri: String,
    /// Content-type hint, when the resolver knows it.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
}

impl ResolvedAsset {
    /// Resolution carrying a URI and no content-type hint.
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            media_type: None,
        }
    }

    /// Attach a content-type hint.
    pub fn with_media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = Some(media_type.into());
        self
    }

    /// The empty resolution. Entries resolving to this are later filtered out.
    pub fn empty() -> Self {
        Self {
            uri: String::new(),
            media_type: None,
        }
    }

    /// Returns `true` if this resolution carries no URI.
    pub fn is_empty(&self) -> bool {
        self.uri.is_empty()
    }
}

/// Fully normalized source record handed to the native player.
///
/// `is_network` and `is_asset` are independently computed URI-scheme
/// predicates. They are informational flags, not an enum: a URI can satisfy
/// neither, and a malformed URI could in principle satisfy both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedSource {
    /// Normalized playable URI. Never empty in a resolver output list.
    pub uri: String,
    /// URI uses the `http:` or `https:` scheme.
    pub is_network: bool,
    /// URI uses one of the platform asset schemes (`file:`, `content:`, ...).
    pub is_asset: bool,
    /// Content-type hint; empty string when unknown.
    #[serde(rename = "type")]
    pub media_type: String,
    /// Major content version inherited from the outer source value.
    pub main_ver: u32,
    /// Patch content version inherited from the outer source value.
    pub patch_ver: u32,
}

/// Resolves bundled/packaged media references to a playable URI.
///
/// Host applications must provide an implementation; on device builds this
/// typically consults the app bundle or package manager. Implementations
/// perform no retries and no caching on behalf of the core: a failed or
/// empty resolution simply causes the entry to be dropped from the
/// normalized source list.
pub trait AssetResolver: PlatformSendSync {
    /// Resolve one descriptor to a playable URI, best effort.
    ///
    /// Returns `Ok(None)` when the descriptor identifies nothing playable.
    /// Errors are treated by the core exactly like `Ok(None)`, after a log
    /// line; they never propagate to the embedding application.
    fn resolve(&self, descriptor: &SourceDescriptor) -> Result<Option<ResolvedAsset>>;
}
