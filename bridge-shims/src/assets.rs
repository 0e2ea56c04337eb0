//! Table-backed asset resolution.

use bridge_traits::assets::{AssetResolver, ResolvedAsset, SourceDescriptor};
use bridge_traits::error::{BridgeError, Result};
use std::collections::HashMap;
use tracing::debug;

/// Asset resolver backed by a fixed registration table.
///
/// Bare URIs and URI records pass straight through; bundled-asset names are
/// looked up in the table registered at construction time. Unregistered
/// asset names resolve to an error, which the core treats as an empty
/// resolution.
#[derive(Debug, Clone, Default)]
pub struct StaticAssetResolver {
    assets: HashMap<String, ResolvedAsset>,
}

impl StaticAssetResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a bundled asset under `name`.
    pub fn with_asset(mut self, name: impl Into<String>, asset: ResolvedAsset) -> Self {
        let name = name.into();
        debug!(asset = %name, uri = %asset.uri, "registered bundled asset");
        self.assets.insert(name, asset);
        self
    }
}

impl AssetResolver for StaticAssetResolver {
    fn resolve(&self, descriptor: &SourceDescriptor) -> Result<Option<ResolvedAsset>> {
        match descriptor {
            SourceDescriptor::Uri(uri) => Ok(Some(ResolvedAsset::new(uri.clone()))),
            SourceDescriptor::Record(record) => {
                if let Some(name) = &record.asset {
                    return match self.assets.get(name) {
                        Some(asset) => Ok(Some(asset.clone())),
                        None => Err(BridgeError::NotAvailable(format!(
                            "bundled asset '{name}' is not registered"
                        ))),
                    };
                }

                Ok(record.uri.clone().map(|uri| ResolvedAsset {
                    uri,
                    media_type: record.media_type.clone(),
                }))
            }
        }
    }
}
