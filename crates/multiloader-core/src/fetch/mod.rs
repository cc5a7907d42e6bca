//! Network collaborator: static assets and reference data
//!
//! The core never talks to the network directly. Everything it downloads
//! (wrapper jar and scripts, license texts, release lists) goes through the
//! [`Fetch`] capability, so callers decide timeouts and retries and tests can
//! inject a fake.

pub mod http;
pub mod reference;

use crate::error::FetchError;
use async_trait::async_trait;
use url::Url;

pub use http::{FetchPolicy, HttpFetcher};
pub use reference::ReferenceData;

/// Capability to download a resource
///
/// A non-success HTTP status must surface as [`FetchError::Status`].
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn fetch_text(&self, url: &Url) -> Result<String, FetchError>;

    async fn fetch_bytes(&self, url: &Url) -> Result<Vec<u8>, FetchError>;
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory fetcher for tests

    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Serves canned bodies by URL; anything else is a 404
    #[derive(Default)]
    pub struct FakeFetcher {
        responses: HashMap<String, Vec<u8>>,
        calls: AtomicUsize,
    }

    impl FakeFetcher {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with(mut self, url: &str, body: impl Into<Vec<u8>>) -> Self {
            self.responses.insert(url.to_string(), body.into());
            self
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn lookup(&self, url: &Url) -> Result<Vec<u8>, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.responses
                .get(url.as_str())
                .cloned()
                .ok_or_else(|| FetchError::Status {
                    url: url.to_string(),
                    status: reqwest::StatusCode::NOT_FOUND,
                })
        }
    }

    #[async_trait]
    impl Fetch for FakeFetcher {
        async fn fetch_text(&self, url: &Url) -> Result<String, FetchError> {
            let bytes = self.lookup(url)?;
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }

        async fn fetch_bytes(&self, url: &Url) -> Result<Vec<u8>, FetchError> {
            self.lookup(url)
        }
    }

    /// A fetcher serving every asset a full composition with default sources needs
    pub fn full_fetcher() -> FakeFetcher {
        FakeFetcher::new()
            .with(
                "https://api.github.com/repos/spdx/license-list-data/contents/text",
                r#"[
                    {"name": "MIT.txt", "download_url": "https://licenses.test/MIT.txt"},
                    {"name": "Apache-2.0.txt", "download_url": "https://licenses.test/Apache-2.0.txt"},
                    {"name": "README.md", "download_url": "https://licenses.test/README.md"}
                ]"#,
            )
            .with(
                "https://licenses.test/MIT.txt",
                "MIT License\n\nCopyright (c) <year> <copyright holders>\n",
            )
            .with(
                "https://raw.githubusercontent.com/gradle/gradle/v8.12.1/gradle/wrapper/gradle-wrapper.jar",
                vec![0x50, 0x4b, 0x03, 0x04],
            )
            .with(
                "https://raw.githubusercontent.com/gradle/gradle/master/gradlew",
                "#!/bin/sh\n",
            )
            .with(
                "https://raw.githubusercontent.com/gradle/gradle/master/gradlew.bat",
                "@rem gradle startup\r\n",
            )
            .with(
                "https://api.github.com/repos/gradle/gradle/releases",
                r#"[{"tag_name": "v8.12.1"}, {"tag_name": "v8.12.0"}]"#,
            )
    }
}
