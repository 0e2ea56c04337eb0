//! # Source List Resolver
//!
//! Turns a single source descriptor or an ordered list of descriptors into
//! a validated, ordered list of [`ResolvedSource`] records ready for the
//! native player.
//!
//! The pipeline per descriptor:
//!
//! 1. Delegate to the host [`AssetResolver`]; a failed or empty resolution
//!    becomes the empty URI.
//! 2. Normalize the URI: a bare absolute filesystem path (single leading
//!    `/`, no scheme) is given the `file://` prefix.
//! 3. Classify the URI with two independent scheme-prefix predicates,
//!    `is_network` and `is_asset`.
//! 4. Stamp the entry with the *outer* input value's version pair.
//! 5. Drop entries whose URI ended up empty; survivors keep input order.
//!
//! No network or filesystem I/O happens here; this is a string/shape
//! transformation plus one delegated resolver call per descriptor.

use crate::error::{Result, VideoError};
use bridge_traits::assets::{AssetResolver, ResolvedAsset, ResolvedSource, SourceDescriptor};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// URI scheme prefixes that mark a source as a bundled/platform asset.
const ASSET_SCHEME_PREFIXES: [&str; 5] = [
    "assets-library:",
    "file:",
    "content:",
    "ms-appx:",
    "ms-appdata:",
];

/// Validated `source` input: a single descriptor or an ordered list.
///
/// This is the parse-don't-validate boundary for the `source` prop: once a
/// value has become a `SourceInput`, resolution can no longer fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SourceInput {
    /// Exactly one source.
    Single(SourceDescriptor),
    /// Ordered list of sources, played as consecutive clips.
    List(Vec<SourceDescriptor>),
}

impl SourceInput {
    /// Parse a loose JSON value into a validated source input.
    ///
    /// Accepts an object, a bare string (shorthand for `{ uri: ... }`), or
    /// an array of those. Anything else is a caller programming error and
    /// raises [`VideoError::InvalidSourceType`] immediately rather than
    /// being silently coerced.
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Array(items) => Ok(SourceInput::List(
                items
                    .iter()
                    .map(descriptor_from_value)
                    .collect::<Result<Vec<_>>>()?,
            )),
            _ => Ok(SourceInput::Single(descriptor_from_value(value)?)),
        }
    }

    /// The descriptors in input order.
    pub fn descriptors(&self) -> &[SourceDescriptor] {
        match self {
            SourceInput::Single(descriptor) => std::slice::from_ref(descriptor),
            SourceInput::List(descriptors) => descriptors,
        }
    }

    /// Version pair taken from the outer input value.
    ///
    /// Observed behavior of the system this reimplements, preserved rather
    /// than fixed: versions are read from the outer `source` value only, so
    /// every entry of a list receives the same pair. A single record
    /// contributes its own fields; a list contributes `(0, 0)` because a
    /// JSON array carries no fields of its own.
    pub fn outer_versions(&self) -> (u32, u32) {
        match self {
            SourceInput::Single(descriptor) => descriptor.versions(),
            SourceInput::List(_) => (0, 0),
        }
    }

    /// Returns `true` if there are no descriptors at all.
    pub fn is_empty(&self) -> bool {
        self.descriptors().is_empty()
    }
}

fn descriptor_from_value(value: &Value) -> Result<SourceDescriptor> {
    match value {
        Value::String(uri) => Ok(SourceDescriptor::Uri(uri.clone())),
        Value::Object(_) => serde_json::from_value(value.clone())
            .map_err(|_| VideoError::InvalidSourceType { found: "object" }),
        other => Err(VideoError::InvalidSourceType {
            found: json_type_name(other),
        }),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Resolve a validated source input into normalized records, in input order.
///
/// Resolver failures are swallowed (logged, entry dropped); the output list
/// never contains an empty URI. An all-empty input yields an empty list,
/// which the native player accepts as "nothing to play".
pub fn resolve_sources(input: &SourceInput, resolver: &dyn AssetResolver) -> Vec<ResolvedSource> {
    let (main_ver, patch_ver) = input.outer_versions();

    input
        .descriptors()
        .iter()
        .map(|descriptor| {
            let resolved = match resolver.resolve(descriptor) {
                Ok(Some(asset)) => asset,
                Ok(None) => ResolvedAsset::empty(),
                Err(error) => {
                    warn!(%error, "asset resolution failed; treating entry as empty");
                    ResolvedAsset::empty()
                }
            };

            let uri = normalize_uri(&resolved.uri);
            ResolvedSource {
                is_network: is_network_uri(&uri),
                is_asset: is_asset_uri(&uri),
                media_type: resolved.media_type.unwrap_or_default(),
                main_ver,
                patch_ver,
                uri,
            }
        })
        .filter(|source| !source.uri.is_empty())
        .collect()
}

/// Rewrite a bare absolute filesystem path to a `file://` URI.
///
/// Accepting scheme-less paths is a deliberate convenience; URIs that
/// already carry a scheme (including `file:`) pass through untouched.
pub fn normalize_uri(uri: &str) -> String {
    if uri.starts_with('/') {
        format!("file://{uri}")
    } else {
        uri.to_string()
    }
}

/// Returns `true` for `http:` and `https:` URIs.
pub fn is_network_uri(uri: &str) -> bool {
    uri.starts_with("http:") || uri.starts_with("https:")
}

/// Returns `true` for URIs using one of the platform asset schemes.
pub fn is_asset_uri(uri: &str) -> bool {
    ASSET_SCHEME_PREFIXES
        .iter()
        .any(|prefix| uri.starts_with(prefix))
}
