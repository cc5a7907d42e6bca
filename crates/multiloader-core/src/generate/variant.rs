//! Closed variant sets selecting which artifact a generator produces
//!
//! Parsing is the fail-fast boundary: any spelling outside the set is an
//! `UnrecognizedVariant` error, never a default.

use crate::config::title_case;
use crate::error::ScaffoldError;
use std::fmt;
use std::str::FromStr;

/// Supported mod loader platforms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Platform {
    Fabric,
    Forge,
    NeoForge,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Fabric, Platform::Forge, Platform::NeoForge];

    /// Lower-case identifier used in paths and Gradle project names
    pub fn id(&self) -> &'static str {
        match self {
            Platform::Fabric => "fabric",
            Platform::Forge => "forge",
            Platform::NeoForge => "neoforge",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Fabric => "Fabric",
            Platform::Forge => "Forge",
            Platform::NeoForge => "NeoForge",
        }
    }

    /// Name of the `IPlatformHelper` implementation (`NeoforgePlatform`)
    pub fn helper_class(&self) -> String {
        format!("{}Platform", title_case(self.id()))
    }

    /// Name of the loader entrypoint class (`NeoForgeBootstrap`)
    pub fn bootstrap_class(&self) -> String {
        format!("{}Bootstrap", self.display_name())
    }

    /// Gradle project path of the platform module
    pub fn gradle_path(&self) -> String {
        format!(":core:app:platform:{}", self.id())
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for Platform {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fabric" => Ok(Platform::Fabric),
            "forge" => Ok(Platform::Forge),
            "neoforge" => Ok(Platform::NeoForge),
            other => Err(ScaffoldError::unrecognized("platform", other)),
        }
    }
}

/// Which module a `build.gradle` belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildLocation {
    Root,
    Plugins,
    CoreApi,
    CoreUtils,
    AppCommon,
    Platform(Platform),
}

impl fmt::Display for BuildLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildLocation::Root => write!(f, "root"),
            BuildLocation::Plugins => write!(f, "plugins"),
            BuildLocation::CoreApi => write!(f, "core:api"),
            BuildLocation::CoreUtils => write!(f, "core:utils"),
            BuildLocation::AppCommon => write!(f, "core:app:common"),
            BuildLocation::Platform(p) => write!(f, "core:app:platform:{}", p),
        }
    }
}

impl FromStr for BuildLocation {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "root" => Ok(BuildLocation::Root),
            "plugins" => Ok(BuildLocation::Plugins),
            "core:api" => Ok(BuildLocation::CoreApi),
            "core:utils" => Ok(BuildLocation::CoreUtils),
            "core:app:common" => Ok(BuildLocation::AppCommon),
            other => other
                .strip_prefix("core:app:platform:")
                .and_then(|p| p.parse::<Platform>().ok())
                .map(BuildLocation::Platform)
                .ok_or_else(|| ScaffoldError::unrecognized("build location", other)),
        }
    }
}

/// Convention plugin scripts under `plugins/src/main/groovy`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluginKind {
    Common,
    Library,
    Platform,
}

impl PluginKind {
    pub const ALL: [PluginKind; 3] = [PluginKind::Common, PluginKind::Library, PluginKind::Platform];

    /// `type-common.gradle` etc.
    pub fn file_name(&self) -> String {
        format!("type-{}.gradle", self)
    }
}

impl fmt::Display for PluginKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PluginKind::Common => "common",
            PluginKind::Library => "library",
            PluginKind::Platform => "platform",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for PluginKind {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "common" => Ok(PluginKind::Common),
            "library" => Ok(PluginKind::Library),
            "platform" => Ok(PluginKind::Platform),
            other => Err(ScaffoldError::unrecognized("plugin type", other)),
        }
    }
}

/// Module a mixin config is generated for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MixinTarget {
    Common,
    Platform(Platform),
}

impl MixinTarget {
    /// Java compatibility level declared in the mixin config
    pub fn compatibility_level(&self) -> &'static str {
        match self {
            MixinTarget::Common | MixinTarget::Platform(Platform::Forge) => "JAVA_18",
            MixinTarget::Platform(Platform::Fabric | Platform::NeoForge) => "JAVA_21",
        }
    }
}

impl fmt::Display for MixinTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MixinTarget::Common => write!(f, "common"),
            MixinTarget::Platform(p) => write!(f, "{}", p),
        }
    }
}

impl FromStr for MixinTarget {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "common" => Ok(MixinTarget::Common),
            other => other
                .parse::<Platform>()
                .map(MixinTarget::Platform)
                .map_err(|_| ScaffoldError::unrecognized("mixin target", other)),
        }
    }
}
