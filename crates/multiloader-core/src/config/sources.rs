//! Remote locations of the static assets the scaffolder downloads

use crate::error::FetchError;
use url::Url;

const DEFAULT_GRADLE_RAW_URL: &str = "https://raw.githubusercontent.com/gradle/gradle";
const DEFAULT_LICENSE_INDEX_URL: &str =
    "https://api.github.com/repos/spdx/license-list-data/contents/text";
const DEFAULT_GRADLE_RELEASES_URL: &str = "https://api.github.com/repos/gradle/gradle/releases";

/// Environment variable overriding the raw Gradle repository URL
pub const GRADLE_RAW_URL_ENV: &str = "MULTILOADER_GRADLE_RAW_URL";
/// Environment variable overriding the SPDX license listing URL
pub const LICENSE_INDEX_URL_ENV: &str = "MULTILOADER_LICENSE_INDEX_URL";
/// Environment variable overriding the Gradle releases URL
pub const GRADLE_RELEASES_URL_ENV: &str = "MULTILOADER_GRADLE_RELEASES_URL";

/// Base URLs for wrapper files, license texts and Gradle releases
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sources {
    pub gradle_raw: Url,
    pub license_index: Url,
    pub gradle_releases: Url,
}

impl Sources {
    /// Build sources from the environment, falling back to the public defaults
    pub fn from_env() -> Result<Self, FetchError> {
        Ok(Self {
            gradle_raw: env_url(GRADLE_RAW_URL_ENV, DEFAULT_GRADLE_RAW_URL)?,
            license_index: env_url(LICENSE_INDEX_URL_ENV, DEFAULT_LICENSE_INDEX_URL)?,
            gradle_releases: env_url(GRADLE_RELEASES_URL_ENV, DEFAULT_GRADLE_RELEASES_URL)?,
        })
    }

    /// URL of a file in the Gradle repository at a given git ref
    ///
    /// `gradle_file("v8.12.1", "gradle/wrapper/gradle-wrapper.jar")`
    pub fn gradle_file(&self, git_ref: &str, path: &str) -> Result<Url, FetchError> {
        let mut segments = vec![git_ref];
        segments.extend(path.split('/'));
        build_url(&self.gradle_raw, &segments)
    }
}

impl Default for Sources {
    fn default() -> Self {
        Self {
            gradle_raw: Url::parse(DEFAULT_GRADLE_RAW_URL).expect("valid default URL"),
            license_index: Url::parse(DEFAULT_LICENSE_INDEX_URL).expect("valid default URL"),
            gradle_releases: Url::parse(DEFAULT_GRADLE_RELEASES_URL).expect("valid default URL"),
        }
    }
}

fn env_url(var: &str, default: &str) -> Result<Url, FetchError> {
    let url_str = std::env::var(var).unwrap_or_else(|_| default.to_string());
    Url::parse(&url_str).map_err(|e| FetchError::InvalidUrl {
        url: url_str,
        reason: e.to_string(),
    })
}

/// Build a URL by appending path segments, preserving query parameters
fn build_url(base: &Url, segments: &[&str]) -> Result<Url, FetchError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| FetchError::InvalidUrl {
            url: base.to_string(),
            reason: "URL cannot have path segments".to_string(),
        })?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}
