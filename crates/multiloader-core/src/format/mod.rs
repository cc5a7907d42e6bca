//! Serialization formatters
//!
//! - [`toml`]: config-language serializer for `mods.toml`
//! - [`json`]: manifest serializer for mixin configs, `pack.mcmeta`, `fabric.mod.json`
//! - [`java`]: class-template serializer for source stubs

pub mod document;
pub mod java;
pub mod json;
pub mod toml;

pub use document::{Scalar, StructuredDocument, Value};
pub use java::{render_class, ClassKind, ClassSpec, FieldSpec, MethodSpec};
pub use json::to_json;
pub use toml::to_toml;
