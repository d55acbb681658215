// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;
use std::path::Path;

use freedom_atlas_core::{FetchPort, GeoSource};
use freedom_atlas_model::Geography;

use crate::logging::{fields, IngestLog, IngestStage};
use crate::{IngestError, IngestErrorCode};

/// One-shot load of the map's boundary document. No retry: a failure here is
/// fatal for the session.
pub fn load_geography(
    source: &GeoSource,
    fetch: &dyn FetchPort,
    log: &mut IngestLog,
) -> Result<Geography, IngestError> {
    let (origin, bytes) = match source {
        GeoSource::Path(path) => (path.display().to_string(), read_geography_file(path)?),
        GeoSource::Url(url) => {
            log.emit(
                IngestStage::Prepare,
                "geography.fetch.begin",
                fields([("url", url.clone())]),
            );
            let bytes = fetch.get_bytes(url).map_err(|e| {
                IngestError::new(IngestErrorCode::Fetch, format!("geography fetch failed: {e}"))
            })?;
            (url.clone(), bytes)
        }
    };
    let geography = Geography::from_slice(&bytes)
        .map_err(|e| IngestError::new(IngestErrorCode::Geography, e.to_string()))?;
    log.emit(
        IngestStage::Finalize,
        "geography.loaded",
        fields([
            ("origin", origin),
            ("features", geography.features.len().to_string()),
        ]),
    );
    Ok(geography)
}

fn read_geography_file(path: &Path) -> Result<Vec<u8>, IngestError> {
    std::fs::read(path).map_err(|e| {
        IngestError::new(
            IngestErrorCode::Io,
            format!("failed to read geography {}: {e}", path.display()),
        )
    })
}

/// Fetch adapter that refuses to go anywhere; used when remote loading is
/// compiled out or disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineFetch;

impl FetchPort for OfflineFetch {
    fn get_bytes(&self, url: &str) -> freedom_atlas_core::Result<Vec<u8>> {
        Err(freedom_atlas_core::Error::Network {
            url: url.to_string(),
            message: "remote fetching is disabled".to_string(),
        })
    }
}

/// Serves canned documents by URL. Handy for tests and offline demos.
#[derive(Debug, Default, Clone)]
pub struct StaticFetch {
    documents: BTreeMap<String, Vec<u8>>,
}

impl StaticFetch {
    #[must_use]
    pub fn with_document(mut self, url: &str, bytes: impl Into<Vec<u8>>) -> Self {
        self.documents.insert(url.to_string(), bytes.into());
        self
    }
}

impl FetchPort for StaticFetch {
    fn get_bytes(&self, url: &str) -> freedom_atlas_core::Result<Vec<u8>> {
        self.documents
            .get(url)
            .cloned()
            .ok_or_else(|| freedom_atlas_core::Error::Network {
                url: url.to_string(),
                message: "404 not found".to_string(),
            })
    }
}

#[cfg(feature = "remote-geo")]
pub use http::HttpFetch;

#[cfg(feature = "remote-geo")]
mod http {
    use freedom_atlas_core::{Error, FetchPort, Result};
    use reqwest::blocking::Client;

    /// Blocking HTTP(S) download with the client's default timeouts. The
    /// client is built per fetch and a build failure is a fetch error.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct HttpFetch;

    impl HttpFetch {
        #[must_use]
        pub fn new() -> Self {
            Self
        }

        fn client() -> std::result::Result<Client, reqwest::Error> {
            Client::builder()
                .user_agent(concat!("freedom-atlas/", env!("CARGO_PKG_VERSION")))
                .build()
        }

        fn validate_url(url: &str) -> Result<()> {
            let parsed = reqwest::Url::parse(url).map_err(|_| Error::InvalidUrl {
                url: url.to_string(),
                reason: "not a valid url",
            })?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(Error::InvalidUrl {
                    url: url.to_string(),
                    reason: "scheme must be http or https",
                });
            }
            if parsed.host_str().is_none() {
                return Err(Error::InvalidUrl {
                    url: url.to_string(),
                    reason: "missing host",
                });
            }
            Ok(())
        }
    }

    impl FetchPort for HttpFetch {
        fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
            Self::validate_url(url)?;
            tracing::info!(url, "fetching geography document");
            let network = |message: String| Error::Network {
                url: url.to_string(),
                message,
            };
            let client = Self::client().map_err(|e| network(format!("http client: {e}")))?;
            let resp = client
                .get(url)
                .send()
                .map_err(|e| network(e.to_string()))?;
            let status = resp.status();
            if !status.is_success() {
                return Err(network(format!("unexpected status {status}")));
            }
            let bytes = resp.bytes().map_err(|e| network(e.to_string()))?;
            Ok(bytes.to_vec())
        }
    }

}
