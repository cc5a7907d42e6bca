//! Content generators: one function per artifact type
//!
//! Generators are pure functions of [`ProjectParameters`](crate::config::ProjectParameters)
//! and, where an artifact has sub-variants, a closed variant enum. The only
//! exceptions are the wrapper files and the license text, which are fetched
//! through the [`Fetch`](crate::fetch::Fetch) collaborator.

pub mod data;
pub mod docs;
pub mod gradle;
pub mod java;
pub mod variant;
pub mod version;
pub mod wrapper;

pub use variant::{BuildLocation, MixinTarget, Platform, PluginKind};
