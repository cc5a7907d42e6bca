//! Memoized reference data: SPDX license texts and Gradle release tags

use super::Fetch;
use crate::config::Sources;
use crate::error::FetchError;
use serde::Deserialize;
use std::collections::HashMap;
use tokio::sync::OnceCell;
use tracing::{debug, info};
use url::Url;

/// Entry of the GitHub contents listing of `spdx/license-list-data/text`
#[derive(Debug, Deserialize)]
struct ContentEntry {
    name: String,
    download_url: Option<String>,
}

/// Entry of the GitHub releases listing
#[derive(Debug, Deserialize)]
struct Release {
    tag_name: String,
}

/// Fetch collaborator plus the lookups it memoizes
///
/// Each lookup is initialised on first use and kept for the lifetime of the
/// value; there is no teardown or refresh.
pub struct ReferenceData<F> {
    fetcher: F,
    sources: Sources,
    licenses: OnceCell<HashMap<String, Url>>,
    gradle_versions: OnceCell<Vec<String>>,
}

impl<F: Fetch> ReferenceData<F> {
    pub fn new(fetcher: F, sources: Sources) -> Self {
        Self {
            fetcher,
            sources,
            licenses: OnceCell::new(),
            gradle_versions: OnceCell::new(),
        }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn sources(&self) -> &Sources {
        &self.sources
    }

    /// SPDX license id -> URL of its plain-text body
    pub async fn license_mapping(&self) -> Result<&HashMap<String, Url>, FetchError> {
        self.licenses
            .get_or_try_init(|| async {
                let url = &self.sources.license_index;
                let body = self.fetcher.fetch_text(url).await?;
                let entries: Vec<ContentEntry> =
                    serde_json::from_str(&body).map_err(|source| FetchError::Decode {
                        url: url.to_string(),
                        source,
                    })?;

                let mapping: HashMap<String, Url> = entries
                    .into_iter()
                    .filter_map(|entry| {
                        let id = entry.name.strip_suffix(".txt")?.to_string();
                        let download = Url::parse(entry.download_url.as_deref()?).ok()?;
                        Some((id, download))
                    })
                    .collect();
                info!(count = mapping.len(), "loaded license mapping");
                Ok::<_, FetchError>(mapping)
            })
            .await
    }

    /// URL of a license text, None when the id is unknown
    pub async fn license_url(&self, license_id: &str) -> Result<Option<Url>, FetchError> {
        Ok(self.license_mapping().await?.get(license_id).cloned())
    }

    /// Gradle release tags, newest first as published
    pub async fn gradle_versions(&self) -> Result<&[String], FetchError> {
        let versions = self
            .gradle_versions
            .get_or_try_init(|| async {
                let url = &self.sources.gradle_releases;
                let body = self.fetcher.fetch_text(url).await?;
                let releases: Vec<Release> =
                    serde_json::from_str(&body).map_err(|source| FetchError::Decode {
                        url: url.to_string(),
                        source,
                    })?;
                debug!(count = releases.len(), "loaded gradle releases");
                Ok::<_, FetchError>(releases.into_iter().map(|r| r.tag_name).collect())
            })
            .await?;
        Ok(versions.as_slice())
    }
}
