//! Gradle wrapper files downloaded from the Gradle repository

use crate::config::ProjectParameters;
use crate::error::Result;
use crate::fetch::{Fetch, ReferenceData};

/// Branch the wrapper scripts are taken from
const SCRIPTS_REF: &str = "master";

/// `gradle/wrapper/gradle-wrapper.jar` at the selected Gradle release tag
pub async fn wrapper_jar<F: Fetch>(
    p: &ProjectParameters,
    reference: &ReferenceData<F>,
) -> Result<Vec<u8>> {
    let url = reference
        .sources()
        .gradle_file(&p.gradle_version, "gradle/wrapper/gradle-wrapper.jar")?;
    Ok(reference.fetcher().fetch_bytes(&url).await?)
}

/// Unix wrapper script (`gradlew`)
pub async fn gradlew<F: Fetch>(reference: &ReferenceData<F>) -> Result<String> {
    let url = reference.sources().gradle_file(SCRIPTS_REF, "gradlew")?;
    Ok(reference.fetcher().fetch_text(&url).await?)
}

/// Windows wrapper script (`gradlew.bat`)
pub async fn gradlew_bat<F: Fetch>(reference: &ReferenceData<F>) -> Result<String> {
    let url = reference.sources().gradle_file(SCRIPTS_REF, "gradlew.bat")?;
    Ok(reference.fetcher().fetch_text(&url).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{RawParameters, Sources};
    use crate::error::{FetchError, ScaffoldError};
    use crate::fetch::testing::{full_fetcher, FakeFetcher};

    #[tokio::test]
    async fn test_wrapper_files() {
        let refs = ReferenceData::new(full_fetcher(), Sources::default());
        let params = ProjectParameters::default();
        assert_eq!(wrapper_jar(&params, &refs).await.unwrap(), vec![0x50, 0x4b, 0x03, 0x04]);
        assert_eq!(gradlew(&refs).await.unwrap(), "#!/bin/sh\n");
        assert!(gradlew_bat(&refs).await.unwrap().starts_with("@rem"));
    }

    #[tokio::test]
    async fn test_missing_release_carries_http_status() {
        let refs = ReferenceData::new(FakeFetcher::new(), Sources::default());
        let params = RawParameters {
            gradle_version: Some("v0.0.1".to_string()),
            ..Default::default()
        }
        .resolve()
        .unwrap();
        match wrapper_jar(&params, &refs).await {
            Err(ScaffoldError::Fetch(FetchError::Status { url, status })) => {
                assert_eq!(status, reqwest::StatusCode::NOT_FOUND);
                assert!(url.contains("/v0.0.1/gradle/wrapper/gradle-wrapper.jar"));
            }
            other => panic!("expected a fetch status error, got {:?}", other),
        }
    }
}
