//! Assembles the full project layout from the generators
//!
//! Independent subtrees are produced concurrently and joined before the
//! parent is built. The first failing generator aborts the whole composition,
//! so a partially built tree is never returned.

use super::node::{TreeBuilder, TreeNode};
use crate::config::ProjectParameters;
use crate::error::{Result, ScaffoldError};
use crate::fetch::{Fetch, ReferenceData};
use crate::format::{render_class, to_json, to_toml, ClassSpec};
use crate::generate::{
    data, docs, gradle, java, wrapper, BuildLocation, MixinTarget, Platform, PluginKind,
};
use chrono::Datelike;
use futures::future::try_join_all;
use tracing::{debug, info};

/// Builds the project tree for one set of parameters
pub struct Composer<'a, F> {
    params: &'a ProjectParameters,
    reference: &'a ReferenceData<F>,
    platforms: Vec<Platform>,
    year: i32,
}

impl<'a, F: Fetch> Composer<'a, F> {
    /// All platforms, copyright year of today
    pub fn new(params: &'a ProjectParameters, reference: &'a ReferenceData<F>) -> Self {
        Self {
            params,
            reference,
            platforms: Platform::ALL.to_vec(),
            year: chrono::Local::now().year(),
        }
    }

    /// Restrict the loader modules; repeated entries are ignored
    pub fn platforms(mut self, platforms: &[Platform]) -> Self {
        let mut selected = Vec::with_capacity(platforms.len());
        for platform in platforms {
            if !selected.contains(platform) {
                selected.push(*platform);
            }
        }
        self.platforms = selected;
        self
    }

    /// Copyright year written into the license
    pub fn year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub async fn compose(&self) -> Result<Vec<TreeNode>> {
        if self.platforms.is_empty() {
            return Err(ScaffoldError::Parameter {
                name: "platforms",
                reason: "at least one platform must be selected".to_string(),
            });
        }

        let p = self.params;
        info!(
            project = %p.project_name,
            platforms = ?self.platforms,
            "composing project tree"
        );

        let (license, gradlew, gradlew_bat, gradle_dir, plugins_dir, core_dir) = tokio::try_join!(
            docs::license(p, self.reference, self.year),
            wrapper::gradlew(self.reference),
            wrapper::gradlew_bat(self.reference),
            self.gradle_folder(),
            self.plugins_folder(),
            self.core_folder(),
        )?;

        let mut root = TreeBuilder::new("");
        root.file("build.gradle", gradle::build_gradle(BuildLocation::Root))?
            .file("gradle.properties", gradle::gradle_properties(p))?
            .file("dependencies.gradle", gradle::dependencies_gradle())?
            .file("settings.gradle", gradle::settings_gradle(p, &self.platforms))?
            .file("LICENSE", license)?
            .file("README.md", docs::readme(p))?
            .file("gradlew", gradlew)?
            .file("gradlew.bat", gradlew_bat)?
            .node(gradle_dir)?
            .node(plugins_dir)?
            .node(core_dir)?;

        let forest = root.build();
        info!(entries = forest.len(), "project tree composed");
        Ok(forest)
    }

    async fn gradle_folder(&self) -> Result<TreeNode> {
        let jar = wrapper::wrapper_jar(self.params, self.reference).await?;
        debug!(bytes = jar.len(), "fetched gradle wrapper jar");

        let mut folder = TreeBuilder::new("gradle");
        folder
            .file("wrapper/gradle-wrapper.jar", jar)?
            .file(
                "wrapper/gradle-wrapper.properties",
                gradle::wrapper_properties(self.params),
            )?;
        Ok(folder.into_folder())
    }

    async fn plugins_folder(&self) -> Result<TreeNode> {
        let mut folder = TreeBuilder::new("plugins");
        folder.file("build.gradle", gradle::build_gradle(BuildLocation::Plugins))?;
        for kind in PluginKind::ALL {
            let path = format!("src/main/groovy/{}", kind.file_name());
            folder.file(&path, gradle::plugin_gradle(kind))?;
        }
        Ok(folder.into_folder())
    }

    async fn core_folder(&self) -> Result<TreeNode> {
        let (api, utils, app) =
            tokio::try_join!(self.api_module(), self.utils_module(), self.app_folder())?;
        Ok(TreeNode::folder("core", vec![api, utils, app]))
    }

    async fn app_folder(&self) -> Result<TreeNode> {
        let (common, platforms) = tokio::try_join!(
            self.common_module(),
            try_join_all(self.platforms.iter().map(|p| self.platform_module(*p))),
        )?;
        Ok(TreeNode::folder(
            "app",
            vec![common, TreeNode::folder("platform", platforms)],
        ))
    }

    async fn api_module(&self) -> Result<TreeNode> {
        let p = self.params;
        let sources = format!("src/main/java/{}", p.package_path());

        let mut module = TreeBuilder::new("api");
        module
            .file("build.gradle", gradle::build_gradle(BuildLocation::CoreApi))?
            .dir("src/main/resources")?
            .dir(&format!("src/test/java/{}", p.package_path()))?;
        add_class(&mut module, &sources, &java::api_class(p))?;
        add_class(
            &mut module,
            &format!("{}/platform/services", sources),
            &java::platform_helper_interface(p),
        )?;

        debug!(module = "core/api", "module generated");
        Ok(module.into_folder())
    }

    async fn utils_module(&self) -> Result<TreeNode> {
        let p = self.params;
        let mut module = TreeBuilder::new("utils");
        module
            .file("build.gradle", gradle::build_gradle(BuildLocation::CoreUtils))?
            .dir("src/main/resources")?
            .dir(&format!("src/test/java/{}", p.package_path()))?;
        add_class(
            &mut module,
            &format!("src/main/java/{}", p.package_path()),
            &java::utils_class(p),
        )?;

        debug!(module = "core/utils", "module generated");
        Ok(module.into_folder())
    }

    async fn common_module(&self) -> Result<TreeNode> {
        let p = self.params;
        let sources = format!("src/main/java/{}", p.package_path());
        let mixins = to_json(&data::mixin_config(MixinTarget::Common, p))?;
        let pack = to_json(&data::pack_metadata())?;

        let mut module = TreeBuilder::new("common");
        module
            .file("build.gradle", gradle::build_gradle(BuildLocation::AppCommon))?
            .dir(&format!("{}/mixins", sources))?
            .file(
                &format!(
                    "src/main/resources/{}",
                    data::mixin_file_name(MixinTarget::Common, p)
                ),
                mixins,
            )?
            .file("src/main/resources/pack.mcmeta", pack)?
            .dir(&format!("src/test/java/{}", p.package_path()))?;
        add_class(&mut module, &sources, &java::common_class(p))?;
        add_class(&mut module, &sources, &java::constants_class(p))?;

        debug!(module = "core/app/common", "module generated");
        Ok(module.into_folder())
    }

    async fn platform_module(&self, platform: Platform) -> Result<TreeNode> {
        let p = self.params;
        let sources = format!("src/main/java/{}", p.package_path());
        let target = MixinTarget::Platform(platform);
        let (service, implementation) = java::platform_helper_service(platform, p);

        let mut module = TreeBuilder::new(platform.id());
        module
            .file(
                "build.gradle",
                gradle::build_gradle(BuildLocation::Platform(platform)),
            )?
            .dir("src/test/java")?
            .dir("runs/client/resources")?
            .dir("runs/data")?
            .dir("runs/server")?
            .dir(&format!("{}/mixins", sources))?
            .file(
                &format!("src/main/resources/{}", data::mixin_file_name(target, p)),
                to_json(&data::mixin_config(target, p))?,
            )?
            .file(
                &format!("src/main/resources/META-INF/services/{}", service),
                format!("{}\n", implementation),
            )?;

        match platform {
            Platform::Fabric => {
                module.file(
                    "src/main/resources/fabric.mod.json",
                    to_json(&data::fabric_mod_json(p))?,
                )?;
            }
            Platform::Forge | Platform::NeoForge => {
                let path = format!(
                    "src/main/resources/META-INF/{}",
                    data::mods_toml_file_name(platform)?
                );
                module.file(&path, to_toml(&data::mods_toml(platform)?))?;
            }
        }

        add_class(
            &mut module,
            &format!("{}/platform", sources),
            &java::platform_helper_class(platform, p),
        )?;
        add_class(&mut module, &sources, &java::bootstrap_class(platform, p))?;

        debug!(module = %platform.gradle_path(), "module generated");
        Ok(module.into_folder())
    }
}

fn add_class(builder: &mut TreeBuilder, dir: &str, spec: &ClassSpec) -> Result<()> {
    builder.file(&format!("{}/{}", dir, spec.file_name()), render_class(spec))?;
    Ok(())
}
