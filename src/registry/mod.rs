use std::collections::HashSet;

use log::info;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum AddressError {
    #[error("invalid peer address: {0}")]
    Invalid(#[from] url::ParseError),
    #[error("peer address has no host")]
    MissingHost,
}

/// Deduplicated set of peer identities, normalized to `host:port`.
///
/// Registration is idempotent and peers are never removed; no health checking
/// happens here.
#[derive(Debug, Default)]
pub struct NodeRegistry {
    nodes: HashSet<String>,
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self {
            nodes: HashSet::new(),
        }
    }

    /// Normalize `address` and insert it. Returns the normalized form.
    pub fn register(&mut self, address: &str) -> Result<String, AddressError> {
        let normalized = normalize_address(address)?;
        if self.nodes.insert(normalized.clone()) {
            info!("registered peer {normalized}");
        }
        Ok(normalized)
    }

    pub fn contains(&self, normalized: &str) -> bool {
        self.nodes.contains(normalized)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Snapshot of all registered peers (iteration order unspecified).
    pub fn peers(&self) -> Vec<String> {
        self.nodes.iter().cloned().collect()
    }
}

/// Reduce a peer address to its `host:port` component, discarding scheme and
/// path. Accepts both full URLs (`http://1.2.3.4:5000/x`) and bare authorities
/// (`1.2.3.4:5000`).
fn normalize_address(address: &str) -> Result<String, AddressError> {
    let parsed = match Url::parse(address) {
        // A bare `host:port` can parse as scheme + opaque path; only trust a
        // parse that actually produced a host.
        Ok(url) if url.host_str().is_some() => url,
        _ => Url::parse(&format!("http://{address}"))?,
    };
    let host = parsed.host_str().ok_or(AddressError::MissingHost)?;
    Ok(match parsed.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    })
}
