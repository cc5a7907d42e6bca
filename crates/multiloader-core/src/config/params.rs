//! Project parameters: the flat record every generator reads from
//!
//! Parameters arrive partially filled (from a YAML file, CLI flags or the
//! interactive prompts) as [`RawParameters`] and are resolved once into an
//! immutable [`ProjectParameters`] before composition starts.

use crate::error::{Result, ScaffoldError};
use serde::{Deserialize, Serialize};

/// Static description of one parameter, used by prompts and review screens
#[derive(Debug, Clone, Copy)]
pub struct ParameterInfo {
    pub name: &'static str,
    pub label: &'static str,
    pub default: &'static str,
}

macro_rules! parameters {
    ($($field:ident => $default:expr, $label:expr;)*) => {
        /// Partially filled parameters, every field optional
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(default, deny_unknown_fields)]
        pub struct RawParameters {
            $(pub $field: Option<String>,)*
        }

        /// Fully resolved project parameters
        #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
        pub struct ProjectParameters {
            $(pub $field: String,)*
        }

        /// Every known parameter in prompt order
        pub const PARAMETERS: &[ParameterInfo] = &[
            $(ParameterInfo { name: stringify!($field), label: $label, default: $default },)*
        ];

        impl RawParameters {
            /// Set a parameter by name
            pub fn set(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
                match name {
                    $(stringify!($field) => self.$field = Some(value.into()),)*
                    other => return Err(ScaffoldError::unrecognized("parameter", other)),
                }
                Ok(())
            }

            /// Look up a parameter by name (None when unset)
            pub fn get(&self, name: &str) -> Option<&str> {
                match name {
                    $(stringify!($field) => self.$field.as_deref(),)*
                    _ => None,
                }
            }

            /// Overlay every value set in `other` onto `self`
            pub fn merge(&mut self, other: RawParameters) {
                $(if other.$field.is_some() {
                    self.$field = other.$field;
                })*
            }

            fn fill(self) -> ProjectParameters {
                ProjectParameters {
                    $($field: self
                        .$field
                        .map(|v| v.trim().to_string())
                        .filter(|v| !v.is_empty())
                        .unwrap_or_else(|| $default.to_string()),)*
                }
            }
        }

        impl ProjectParameters {
            /// Look up a parameter by name
            pub fn get(&self, name: &str) -> Option<&str> {
                match name {
                    $(stringify!($field) => Some(self.$field.as_str()),)*
                    _ => None,
                }
            }

            /// All parameters as (name, value) pairs in prompt order
            pub fn entries(&self) -> Vec<(&'static str, &str)> {
                vec![$((stringify!($field), self.$field.as_str()),)*]
            }
        }

        impl From<&ProjectParameters> for RawParameters {
            fn from(params: &ProjectParameters) -> Self {
                RawParameters {
                    $($field: Some(params.$field.clone()),)*
                }
            }
        }
    };
}

parameters! {
    project_name => "Modular-Multi-Loader-Template", "Project Name";
    project_version => "1.0.0-BETA.1", "Project Version";
    project_group => "com.example", "Project Group";
    project_title => "", "Project Title";
    project_id => "", "Project ID";
    project_license => "MIT", "Project License";
    project_author => "", "Project Author";
    project_credits => "", "Project Credits";
    project_description => "", "Project Description";
    minecraft_version => "1.21.1", "Minecraft Version (https://www.minecraft.net/en-us/download)";
    pack_format_version => "48", "Pack Format Version (https://minecraft.wiki/w/Pack_format)";
    minecraft_version_range => "[1.21, 1.22)", "Minecraft Version Range";
    neo_form_version => "1.21-20240613.152323", "NeoForm Version (https://projects.neoforged.net/neoforged/neoform)";
    parchment_minecraft => "1.21.1", "Parchment Minecraft Version (https://parchmentmc.org/docs/getting-started.html)";
    parchment_version => "2024.11.17", "Parchment Version (https://parchmentmc.org/docs/getting-started.html)";
    fabric_version => "0.115.0+1.21.1", "Fabric Version (https://fabricmc.net/develop/)";
    fabric_loader_version => "0.16.10", "Fabric Loader Version (https://fabricmc.net/develop/)";
    forge_version => "52.0.53", "Forge Version (https://files.minecraftforge.net/net/minecraftforge/forge/)";
    forge_loader_version_range => "[51,)", "Forge Loader Version Range";
    neoforge_version => "21.1.125", "NeoForge Version (https://projects.neoforged.net/neoforged/neoforge)";
    neoforge_loader_version_range => "[1,)", "NeoForge Loader Version Range";
    java_version => "21", "Java Version (https://adoptium.net/)";
    gradle_version => "v8.12.1", "Gradle Version";
}

impl RawParameters {
    /// Parse a YAML parameters file
    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Fill blanks with defaults and derived values, then validate
    ///
    /// `project_title` falls back to the project name and `project_id` to a
    /// slug of it.
    pub fn resolve(self) -> Result<ProjectParameters> {
        let mut params = self.fill();

        if params.project_title.is_empty() {
            params.project_title = params.project_name.clone();
        }
        if params.project_id.is_empty() {
            params.project_id = project_id_from_name(&params.project_name);
        }

        params.validate()?;
        Ok(params)
    }
}

impl Default for ProjectParameters {
    fn default() -> Self {
        // Defaults always resolve
        RawParameters::default()
            .resolve()
            .unwrap_or_else(|_| unreachable!("built-in defaults are valid"))
    }
}

impl ProjectParameters {
    fn validate(&self) -> Result<()> {
        if self.project_id.is_empty() {
            return Err(ScaffoldError::Parameter {
                name: "project_id",
                reason: "must not be empty".to_string(),
            });
        }
        if self.project_id.contains(['/', '\\', '.']) {
            return Err(ScaffoldError::Parameter {
                name: "project_id",
                reason: format!("'{}' must not contain '/', '\\' or '.'", self.project_id),
            });
        }
        if self.project_name.contains(['/', '\\']) {
            return Err(ScaffoldError::Parameter {
                name: "project_name",
                reason: format!("'{}' must not contain path separators", self.project_name),
            });
        }
        if matches!(self.project_name.trim(), "" | "." | "..") {
            return Err(ScaffoldError::Parameter {
                name: "project_name",
                reason: format!("'{}' is not a usable directory name", self.project_name),
            });
        }
        if self.project_group.split('.').any(|segment| segment.is_empty()) {
            return Err(ScaffoldError::Parameter {
                name: "project_group",
                reason: format!(
                    "'{}' must be dot-separated non-empty segments",
                    self.project_group
                ),
            });
        }
        Ok(())
    }

    /// `com.example` -> `com/example`
    pub fn group_path(&self) -> String {
        self.project_group.replace('.', "/")
    }

    /// Root Java package of the project (`group.id`)
    pub fn base_package(&self) -> String {
        format!("{}.{}", self.project_group, self.project_id)
    }

    /// Directory of the root Java package below `src/main/java`
    pub fn package_path(&self) -> String {
        format!("{}/{}", self.group_path(), self.project_id)
    }
}

/// Lower-case the name and replace every non-alphanumeric character with `_`
pub fn project_id_from_name(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Upper-case the first character: `fabric` -> `Fabric`
pub fn title_case(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_resolve() {
        let params = ProjectParameters::default();
        assert_eq!(params.project_name, "Modular-Multi-Loader-Template");
        assert_eq!(params.project_title, "Modular-Multi-Loader-Template");
        assert_eq!(params.project_id, "modular_multi_loader_template");
        assert_eq!(params.gradle_version, "v8.12.1");
    }

    #[test]
    fn test_title_and_id_derive_from_name() {
        let raw = RawParameters {
            project_name: Some("My Cool Mod".to_string()),
            ..Default::default()
        };
        let params = raw.resolve().unwrap();
        assert_eq!(params.project_title, "My Cool Mod");
        assert_eq!(params.project_id, "my_cool_mod");
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let raw = RawParameters {
            project_license: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(raw.resolve().unwrap().project_license, "MIT");
    }

    #[test]
    fn test_from_yaml() {
        let raw = RawParameters::from_yaml(
            "project_id: demo\nproject_group: com.example\nproject_name: Demo\n",
        )
        .unwrap();
        let params = raw.resolve().unwrap();
        assert_eq!(params.project_id, "demo");
        assert_eq!(params.package_path(), "com/example/demo");
        assert_eq!(params.base_package(), "com.example.demo");
    }

    #[test]
    fn test_unknown_yaml_key_rejected() {
        assert!(RawParameters::from_yaml("project_colour: red\n").is_err());
    }

    #[test]
    fn test_invalid_group_rejected() {
        let raw = RawParameters {
            project_group: Some("com..example".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            raw.resolve(),
            Err(ScaffoldError::Parameter {
                name: "project_group",
                ..
            })
        ));
    }

    #[test]
    fn test_dot_names_rejected() {
        for name in [".", ".."] {
            let raw = RawParameters {
                project_name: Some(name.to_string()),
                ..Default::default()
            };
            assert!(
                matches!(
                    raw.resolve(),
                    Err(ScaffoldError::Parameter {
                        name: "project_name",
                        ..
                    })
                ),
                "{} should be rejected",
                name
            );
        }
    }

    #[test]
    fn test_set_and_get_by_name() {
        let mut raw = RawParameters::default();
        raw.set("java_version", "17").unwrap();
        assert_eq!(raw.get("java_version"), Some("17"));
        assert!(raw.set("nope", "x").is_err());

        let params = raw.resolve().unwrap();
        assert_eq!(params.get("java_version"), Some("17"));
        assert_eq!(params.entries().len(), PARAMETERS.len());
    }

    #[test]
    fn test_merge_keeps_unset_values() {
        let mut base = RawParameters {
            project_name: Some("Base".to_string()),
            project_author: Some("Alex".to_string()),
            ..Default::default()
        };
        base.merge(RawParameters {
            project_name: Some("Override".to_string()),
            ..Default::default()
        });
        assert_eq!(base.project_name.as_deref(), Some("Override"));
        assert_eq!(base.project_author.as_deref(), Some("Alex"));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("neoforge"), "Neoforge");
        assert_eq!(title_case(""), "");
    }
}
