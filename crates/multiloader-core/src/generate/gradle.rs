//! Gradle build scripts, properties and settings

use super::variant::{BuildLocation, Platform, PluginKind};
use super::version::distribution_version;
use crate::config::ProjectParameters;

/// Module build descriptor for a location
pub fn build_gradle(location: BuildLocation) -> &'static str {
    match location {
        BuildLocation::Root => include_str!("../../resources/gradle/root.gradle"),
        BuildLocation::Plugins => include_str!("../../resources/gradle/plugins.gradle"),
        BuildLocation::CoreApi => include_str!("../../resources/gradle/core-api.gradle"),
        BuildLocation::CoreUtils => include_str!("../../resources/gradle/core-utils.gradle"),
        BuildLocation::AppCommon => include_str!("../../resources/gradle/app-common.gradle"),
        BuildLocation::Platform(Platform::Fabric) => {
            include_str!("../../resources/gradle/platform-fabric.gradle")
        }
        BuildLocation::Platform(Platform::Forge) => {
            include_str!("../../resources/gradle/platform-forge.gradle")
        }
        BuildLocation::Platform(Platform::NeoForge) => {
            include_str!("../../resources/gradle/platform-neoforge.gradle")
        }
    }
}

/// Convention plugin script (`type-common.gradle`, ...)
pub fn plugin_gradle(kind: PluginKind) -> &'static str {
    match kind {
        PluginKind::Common => include_str!("../../resources/gradle/type-common.gradle"),
        PluginKind::Library => include_str!("../../resources/gradle/type-library.gradle"),
        PluginKind::Platform => include_str!("../../resources/gradle/type-platform.gradle"),
    }
}

/// Shared library coordinates (`dependencies.gradle`)
pub fn dependencies_gradle() -> &'static str {
    include_str!("../../resources/gradle/dependencies.gradle")
}

/// Project-wide `gradle.properties`
pub fn gradle_properties(p: &ProjectParameters) -> String {
    format!(
        r#"# Gradle Properties for {project_name}
# This file defines project-wide properties to configure the Gradle build system.

# ---------------------------
# General Project Information
# ---------------------------
project_name       = {project_name}
project_version    = {project_version}

# ---------------------------
# Detailed Project Information
# ---------------------------
project_group       = {project_group}
project_title       = {project_title}
project_id          = {project_id}
project_license     = {project_license}
project_author      = {project_author}
project_credits     = {project_credits}
project_description = {project_description}

# ===========================
# Minecraft Compatibility
# ===========================
minecraft_version       = {minecraft_version}
pack_format_version     = {pack_format_version}
minecraft_version_range = {minecraft_version_range}
neo_form_version        = {neo_form_version}

# ParchmentMC Versioning
parchment_minecraft    = {parchment_minecraft}
parchment_version      = {parchment_version}
# Update URL: https://parchmentmc.org/docs/getting-started.html

# ===========================
# Loader & API Versions
# ===========================
# Fabric
fabric_version         = {fabric_version}
fabric_loader_version  = {fabric_loader_version}
# Update URL: https://fabricmc.net/develop/

# Forge
forge_version              = {forge_version}
forge_loader_version_range = {forge_loader_version_range}
# Update URL: https://files.minecraftforge.net/net/minecraftforge/forge/

# NeoForge
neoforge_version              = {neoforge_version}
neoforge_loader_version_range = {neoforge_loader_version_range}
# Update URL: https://projects.neoforged.net/neoforged/neoforge

# ---------------------------
# Java Compilation Settings
# ---------------------------
java_version = {java_version}

# ---------------------------
# Gradle JVM Settings
# ---------------------------
org.gradle.daemon = true
org.gradle.parallel = true
org.gradle.configure_on_demand = true
org.gradle.caching = true
org.gradle.jvmargs = -Xmx4G -Xms2G -XX:+HeapDumpOnOutOfMemoryError -Dfile.encoding=UTF-8

# ---------------------------
# Logging and Debugging
# ---------------------------
# Must be one of quiet, warn, lifecycle, info, or debug
org.gradle.logging.level = info

# ---------------------------
# Dependency Resolution
# ---------------------------
org.gradle.dependency.verification = STRICT
"#,
        project_name = p.project_name,
        project_version = p.project_version,
        project_group = p.project_group,
        project_title = p.project_title,
        project_id = p.project_id,
        project_license = p.project_license,
        project_author = p.project_author,
        project_credits = p.project_credits,
        project_description = p.project_description,
        minecraft_version = p.minecraft_version,
        pack_format_version = p.pack_format_version,
        minecraft_version_range = p.minecraft_version_range,
        neo_form_version = p.neo_form_version,
        parchment_minecraft = p.parchment_minecraft,
        parchment_version = p.parchment_version,
        fabric_version = p.fabric_version,
        fabric_loader_version = p.fabric_loader_version,
        forge_version = p.forge_version,
        forge_loader_version_range = p.forge_loader_version_range,
        neoforge_version = p.neoforge_version,
        neoforge_loader_version_range = p.neoforge_loader_version_range,
        java_version = p.java_version,
    )
}

const PLUGIN_MANAGEMENT: &str = r#"pluginManagement {
    // Include the local plugins build
    includeBuild("plugins")

    repositories {
        gradlePluginPortal()
        mavenCentral()
        maven {
            url = uri("https://maven.firstdarkdev.xyz/releases")
        }
        exclusiveContent {
            forRepository {
                maven {
                    name = 'Fabric'
                    url = uri('https://maven.fabricmc.net')
                }
            }
            filter {
                includeGroup('net.fabricmc')
                includeGroup('fabric-loom')
            }
        }
        exclusiveContent {
            forRepository {
                maven {
                    name = 'Sponge'
                    url = uri('https://repo.spongepowered.org/repository/maven-public')
                }
            }
            filter {
                includeGroupAndSubgroups("org.spongepowered")
            }
        }
        exclusiveContent {
            forRepository {
                maven {
                    name = 'Forge'
                    url = uri('https://maven.minecraftforge.net')
                }
            }
            filter {
                includeGroupAndSubgroups('net.minecraftforge')
            }
        }
    }
}

plugins {
    id 'org.gradle.toolchains.foojay-resolver-convention' version '0.8.0'
}
"#;

/// `settings.gradle` including the core modules and the selected platforms
pub fn settings_gradle(p: &ProjectParameters, platforms: &[Platform]) -> String {
    let mut app_projects = vec!["\":core:app:common\"".to_string()];
    app_projects.extend(platforms.iter().map(|pl| format!("\"{}\"", pl.gradle_path())));

    format!(
        "{}\nrootProject.name = \"{}\"\n\n// Include the subprojects\ninclude(\":core:api\")\ninclude(\":core:utils\")\n\ninclude({})\n",
        PLUGIN_MANAGEMENT,
        p.project_name,
        app_projects.join(",\n        ")
    )
}

/// `gradle/wrapper/gradle-wrapper.properties`
pub fn wrapper_properties(p: &ProjectParameters) -> String {
    [
        "distributionBase=GRADLE_USER_HOME".to_string(),
        "distributionPath=wrapper/dists".to_string(),
        format!(
            "distributionUrl=https\\://services.gradle.org/distributions/gradle-{}-bin.zip",
            distribution_version(&p.gradle_version)
        ),
        "networkTimeout=10000".to_string(),
        "validateDistributionUrl=true".to_string(),
        "zipStoreBase=GRADLE_USER_HOME".to_string(),
        "zipStorePath=wrapper/dists".to_string(),
    ]
    .join("\n")
        + "\n"
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_every_build_location_has_a_descriptor() {
        assert!(build_gradle(BuildLocation::Root).starts_with("// Root build.gradle"));
        assert!(build_gradle(BuildLocation::Plugins).contains("groovy-gradle-plugin"));
        assert!(build_gradle(BuildLocation::CoreApi).contains("type-library"));
        assert!(build_gradle(BuildLocation::CoreUtils).contains("type-library"));
        assert!(build_gradle(BuildLocation::AppCommon).contains("type-common"));
        assert!(build_gradle(BuildLocation::Platform(Platform::Fabric)).contains("fabric-loom"));
        assert!(build_gradle(BuildLocation::Platform(Platform::Forge))
            .contains("net.minecraftforge.gradle"));
        assert!(build_gradle(BuildLocation::Platform(Platform::NeoForge))
            .contains("neoforge_version"));
    }

    #[test]
    fn test_platform_descriptors_keep_gradle_placeholders() {
        let fabric = build_gradle(BuildLocation::Platform(Platform::Fabric));
        assert!(fabric.contains("\"com.mojang:minecraft:${minecraft_version}\""));
    }

    #[test]
    fn test_plugin_scripts() {
        assert!(plugin_gradle(PluginKind::Common).contains("maven-publish"));
        assert!(plugin_gradle(PluginKind::Library).starts_with("// #type-library.gradle"));
        assert!(plugin_gradle(PluginKind::Platform).contains("id 'type-common'"));
    }

    #[test]
    fn test_gradle_properties_carry_parameters() {
        let params = ProjectParameters::default();
        let props = gradle_properties(&params);
        assert!(props.starts_with("# Gradle Properties for Modular-Multi-Loader-Template\n"));
        assert!(props.contains("project_id          = modular_multi_loader_template\n"));
        assert!(props.contains("neoforge_loader_version_range = [1,)\n"));
    }

    #[test]
    fn test_settings_include_selected_platforms() {
        let params = ProjectParameters::default();
        let settings = settings_gradle(&params, &[Platform::Fabric, Platform::NeoForge]);
        assert!(settings.contains("rootProject.name = \"Modular-Multi-Loader-Template\""));
        assert!(settings.contains(
            "include(\":core:app:common\",\n        \":core:app:platform:fabric\",\n        \":core:app:platform:neoforge\")"
        ));
        assert!(!settings.contains(":core:app:platform:forge"));
    }

    #[test]
    fn test_wrapper_properties() {
        let params = ProjectParameters::default();
        assert_eq!(
            wrapper_properties(&params),
            "distributionBase=GRADLE_USER_HOME\n\
             distributionPath=wrapper/dists\n\
             distributionUrl=https\\://services.gradle.org/distributions/gradle-8.12.1-bin.zip\n\
             networkTimeout=10000\n\
             validateDistributionUrl=true\n\
             zipStoreBase=GRADLE_USER_HOME\n\
             zipStorePath=wrapper/dists\n"
        );
    }
}
