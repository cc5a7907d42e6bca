//! Loader metadata documents: mixin configs, pack metadata, mods.toml, fabric.mod.json
//!
//! `${...}` placeholders are left for Gradle's `processResources` expansion.

use super::variant::{MixinTarget, Platform};
use crate::config::ProjectParameters;
use crate::error::{Result, ScaffoldError};
use crate::format::{StructuredDocument, Value};

/// `<id>.mixins.json` / `<id>.<platform>.mixins.json`
pub fn mixin_config(target: MixinTarget, p: &ProjectParameters) -> StructuredDocument {
    StructuredDocument::new()
        .with("required", true)
        .with("minVersion", "0.8")
        .with("package", format!("{}.mixins", p.base_package()))
        .with("refmap", "${project_id}.refmap.json")
        .with("compatibilityLevel", target.compatibility_level())
        .with("mixins", Value::strings(Vec::<String>::new()))
        .with("client", Value::strings(Vec::<String>::new()))
        .with("server", Value::strings(Vec::<String>::new()))
        .with(
            "injectors",
            StructuredDocument::new().with("defaultRequire", 1i64),
        )
}

/// File name of the mixin config for a target
pub fn mixin_file_name(target: MixinTarget, p: &ProjectParameters) -> String {
    match target {
        MixinTarget::Common => format!("{}.mixins.json", p.project_id),
        MixinTarget::Platform(platform) => format!("{}.{}.mixins.json", p.project_id, platform),
    }
}

/// Resource pack metadata (`pack.mcmeta`)
pub fn pack_metadata() -> StructuredDocument {
    StructuredDocument::new().with(
        "pack",
        StructuredDocument::new()
            .with("description", "${project_name}")
            .with("pack_format", "${pack_format_number}"),
    )
}

/// Location of the loader metadata under `src/main/resources/META-INF`
pub fn mods_toml_file_name(platform: Platform) -> Result<&'static str> {
    match platform {
        Platform::Forge => Ok("mods.toml"),
        Platform::NeoForge => Ok("neoforge.mods.toml"),
        Platform::Fabric => Err(ScaffoldError::unrecognized("mods.toml platform", platform.id())),
    }
}

/// Loader metadata for Forge and NeoForge
pub fn mods_toml(platform: Platform) -> Result<StructuredDocument> {
    let (loader_version, version_range) = match platform {
        Platform::Forge => ("${forge_loader_version_range}", "[${forge_version},)"),
        Platform::NeoForge => ("${neoforge_loader_version_range}", "[${neoforge_version},)"),
        Platform::Fabric => {
            return Err(ScaffoldError::unrecognized("mods.toml platform", platform.id()))
        }
    };

    let mod_entry = StructuredDocument::new()
        .with("modId", "${project_id}")
        .with("version", "${project_version}")
        .with("displayName", "${project_name}")
        .with("logoFile", "${project_id}/icon.png")
        .with("credits", "${project_credits}")
        .with("authors", "${project_author}")
        .with("description", "${project_description}");

    let dependency = |mod_id: &str, range: &str| {
        StructuredDocument::new()
            .with("modId", mod_id)
            .with("mandatory", true)
            .with("versionRange", range)
            .with("ordering", "NONE")
            .with("side", "BOTH")
    };

    Ok(StructuredDocument::new()
        .with("modLoader", "javafml")
        .with("loaderVersion", loader_version)
        .with("license", "${project_license}")
        .with("mods", vec![mod_entry])
        .with(
            "dependencies.\"${project_id}\"",
            vec![
                dependency(platform.id(), version_range),
                dependency("minecraft", "${minecraft_version_range}"),
            ],
        ))
}

/// `fabric.mod.json`
pub fn fabric_mod_json(p: &ProjectParameters) -> StructuredDocument {
    StructuredDocument::new()
        .with("schemaVersion", 1i64)
        .with("id", "${project_id}")
        .with("version", "${project_version}")
        .with("name", "${project_name}")
        .with("description", "${project_description}")
        .with("authors", Value::strings(["${project_author}"]))
        .with(
            "contact",
            StructuredDocument::new()
                .with("homepage", "https://fabricmc.net/")
                .with("sources", "https://github.com/FabricMC/fabric-example-mod"),
        )
        .with("license", "${project_license}")
        .with("icon", "${project_id}/icon.png")
        .with("environment", "*")
        .with(
            "entrypoints",
            StructuredDocument::new().with(
                "main",
                Value::strings([format!(
                    "{}.{}",
                    p.base_package(),
                    Platform::Fabric.bootstrap_class()
                )]),
            ),
        )
        .with(
            "mixins",
            Value::strings(["${project_id}.mixins.json", "${project_id}.fabric.mixins.json"]),
        )
        .with(
            "depends",
            StructuredDocument::new()
                .with("fabricloader", ">=${fabric_loader_version}")
                .with("fabric-api", "*")
                .with("minecraft", "${minecraft_version}")
                .with("java", ">=${java_version}"),
        )
        .with("suggests", StructuredDocument::new().with("another-mod", "*"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{to_json, to_toml};
    use pretty_assertions::assert_eq;

    fn demo() -> ProjectParameters {
        crate::config::RawParameters {
            project_id: Some("demo".to_string()),
            project_group: Some("com.example".to_string()),
            project_name: Some("Demo".to_string()),
            ..Default::default()
        }
        .resolve()
        .unwrap()
    }

    #[test]
    fn test_mixin_config_json() {
        let json = to_json(&mixin_config(MixinTarget::Platform(Platform::Fabric), &demo())).unwrap();
        assert_eq!(
            json,
            r#"{
  "required": true,
  "minVersion": "0.8",
  "package": "com.example.demo.mixins",
  "refmap": "${project_id}.refmap.json",
  "compatibilityLevel": "JAVA_21",
  "mixins": [],
  "client": [],
  "server": [],
  "injectors": {
    "defaultRequire": 1
  }
}
"#
        );
    }

    #[test]
    fn test_mods_toml_file_names() {
        assert_eq!(mods_toml_file_name(Platform::Forge).unwrap(), "mods.toml");
        assert_eq!(mods_toml_file_name(Platform::NeoForge).unwrap(), "neoforge.mods.toml");
        assert!(mods_toml_file_name(Platform::Fabric).is_err());
    }

    #[test]
    fn test_mixin_file_names() {
        let p = demo();
        assert_eq!(mixin_file_name(MixinTarget::Common, &p), "demo.mixins.json");
        assert_eq!(
            mixin_file_name(MixinTarget::Platform(Platform::NeoForge), &p),
            "demo.neoforge.mixins.json"
        );
    }

    #[test]
    fn test_mods_toml_for_forge() {
        let toml = to_toml(&mods_toml(Platform::Forge).unwrap());
        assert_eq!(
            toml,
            r#"modLoader = "javafml"
loaderVersion = "${forge_loader_version_range}"
license = "${project_license}"

[[mods]]
modId = "${project_id}"
version = "${project_version}"
displayName = "${project_name}"
logoFile = "${project_id}/icon.png"
credits = "${project_credits}"
authors = "${project_author}"
description = "${project_description}"

[[dependencies."${project_id}"]]
modId = "forge"
mandatory = true
versionRange = "[${forge_version},)"
ordering = "NONE"
side = "BOTH"

[[dependencies."${project_id}"]]
modId = "minecraft"
mandatory = true
versionRange = "${minecraft_version_range}"
ordering = "NONE"
side = "BOTH"
"#
        );
    }

    #[test]
    fn test_mods_toml_neoforge_uses_neoforge_ranges() {
        let toml = to_toml(&mods_toml(Platform::NeoForge).unwrap());
        assert!(toml.contains("loaderVersion = \"${neoforge_loader_version_range}\""));
        assert!(toml.contains("modId = \"neoforge\""));
    }

    #[test]
    fn test_mods_toml_rejects_fabric() {
        assert!(matches!(
            mods_toml(Platform::Fabric),
            Err(ScaffoldError::UnrecognizedVariant { .. })
        ));
    }

    #[test]
    fn test_fabric_mod_json_entrypoint() {
        let json = to_json(&fabric_mod_json(&demo())).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            parsed["entrypoints"]["main"][0],
            "com.example.demo.FabricBootstrap"
        );
        assert_eq!(parsed["mixins"][1], "${project_id}.fabric.mixins.json");
        assert_eq!(parsed["schemaVersion"], 1);
    }

    #[test]
    fn test_pack_metadata() {
        let json = to_json(&pack_metadata()).unwrap();
        assert!(json.contains("\"pack_format\": \"${pack_format_number}\""));
    }
}
