use awc::Client;
use log::debug;

use super::{ChainTransport, RemoteChain, TransportError};

/// Chain transport over plain HTTP: fetches a peer's chain endpoint and
/// decodes the `{length, chain}` payload.
#[derive(Default)]
pub struct HttpChainTransport {
    client: Client,
}

impl HttpChainTransport {
    pub fn new() -> Self {
        Self {
            client: Client::default(),
        }
    }
}

impl ChainTransport for HttpChainTransport {
    async fn fetch_chain(&self, peer: &str) -> Result<RemoteChain, TransportError> {
        let url = format!("http://{peer}/api/v1/chain/");
        debug!("fetching chain from {url}");

        let mut response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| TransportError::Request {
                peer: peer.to_string(),
                reason: err.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(TransportError::Status {
                peer: peer.to_string(),
                status: response.status().as_u16(),
            });
        }

        response
            .json::<RemoteChain>()
            .await
            .map_err(|err| TransportError::Payload {
                peer: peer.to_string(),
                reason: err.to_string(),
            })
    }
}
