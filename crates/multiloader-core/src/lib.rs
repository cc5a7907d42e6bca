//! Multiloader Core - Shared library for scaffolding multi-loader Minecraft mod projects
//!
//! Given a flat set of [`ProjectParameters`], the library produces the full
//! Gradle multi-module layout (shared `core` modules plus one module per mod
//! loader platform) as an in-memory tree and packs it into a zip archive.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Formats** - `format`: TOML, JSON and Java class serializers over closed data types
//! - **Generators** - `generate`: one pure function per artifact, selected by variant enums
//! - **Composition** - `tree`: concurrent assembly of the project tree, `archive`: zip output
//! - **CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! Everything fetched over the network (wrapper files, license texts, release
//! lists) goes through the [`Fetch`] trait.
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use multiloader_core::{HttpFetcher, FetchPolicy, ReferenceData, RawParameters, Sources, Platform};
//!
//! let fetcher = HttpFetcher::new("my-tool", FetchPolicy::default());
//! let reference = ReferenceData::new(fetcher, Sources::from_env()?);
//! let params = RawParameters::from_yaml(&yaml)?.resolve()?;
//! let archive = multiloader_core::scaffold(&params, &reference, &Platform::ALL, "out".as_ref()).await?;
//! ```

pub mod archive;
pub mod config;
pub mod error;
pub mod fetch;
pub mod format;
pub mod generate;
pub mod tree;

#[cfg(feature = "tui")]
pub mod tui;

pub use config::{ProjectParameters, RawParameters, Sources};
pub use error::{FetchError, FormatError, Result, ScaffoldError};
pub use fetch::{Fetch, FetchPolicy, HttpFetcher, ReferenceData};
pub use generate::Platform;
pub use tree::{Composer, TreeNode};

#[cfg(feature = "tui")]
pub use tui::{run, CreateArgs};

use std::path::{Path, PathBuf};

/// Compose the project, pack it and write `<output>/<project_name>.zip`
pub async fn scaffold<F: Fetch>(
    params: &ProjectParameters,
    reference: &ReferenceData<F>,
    platforms: &[Platform],
    output: &Path,
) -> Result<PathBuf> {
    let forest = Composer::new(params, reference)
        .platforms(platforms)
        .compose()
        .await?;
    let bytes = archive::materialize(&params.project_name, &forest)?;
    archive::write_archive(output, &params.project_name, &bytes).await
}
