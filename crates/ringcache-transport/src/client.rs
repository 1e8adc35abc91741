//! A single peer's HTTP client, implementing [`PeerTransport`] against the
//! `<base>/<group>/<key>` addressing scheme.

use crate::error::TransportError;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use ringcache_core::{Error, PeerTransport};

/// Blocking HTTP client for one remote peer.
///
/// `fetch` blocks the calling thread for the duration of the request.
/// `Group::load` invokes `PeerTransport::fetch` outside any cache or
/// registry lock, so a slow peer only stalls the caller, not the rest of
/// the cache.
pub struct HttpPeerClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpPeerClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl PeerTransport for HttpPeerClient {
    fn fetch(&self, group: &str, key: &str) -> Result<Vec<u8>, Error> {
        let url = format!(
            "{}{}/{}",
            self.base_url,
            utf8_percent_encode(group, NON_ALPHANUMERIC),
            utf8_percent_encode(key, NON_ALPHANUMERIC),
        );
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| Error::PeerFault(TransportError::Request(e).to_string()))?;

        if !response.status().is_success() {
            return Err(Error::PeerFault(
                TransportError::Status(response.status()).to_string(),
            ));
        }

        response
            .bytes()
            .map(|b| b.to_vec())
            .map_err(|e| Error::PeerFault(TransportError::Request(e).to_string()))
    }
}
