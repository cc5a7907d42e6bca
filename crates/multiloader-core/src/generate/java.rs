//! Java source stubs for every module

use super::variant::Platform;
use crate::config::ProjectParameters;
use crate::format::{ClassKind, ClassSpec, FieldSpec, MethodSpec};

/// Package holding the platform abstraction interface
fn services_package(p: &ProjectParameters) -> String {
    format!("{}.platform.services", p.base_package())
}

fn bootstrap_body() -> Vec<String> {
    vec![
        "// Initialization code".to_string(),
        "Common.initialize();".to_string(),
    ]
}

/// `core/api`: `Api`
pub fn api_class(p: &ProjectParameters) -> ClassSpec {
    ClassSpec::new(ClassKind::Class, p.base_package(), "Api")
}

/// `core/api`: `platform.services.IPlatformHelper`
pub fn platform_helper_interface(p: &ProjectParameters) -> ClassSpec {
    ClassSpec::new(ClassKind::Interface, services_package(p), "IPlatformHelper")
}

/// `core/utils`: `Utils`
pub fn utils_class(p: &ProjectParameters) -> ClassSpec {
    ClassSpec::new(ClassKind::Class, p.base_package(), "Utils")
}

/// `core/app/common`: `Common` with the shared initialisation hook
pub fn common_class(p: &ProjectParameters) -> ClassSpec {
    ClassSpec {
        methods: vec![MethodSpec {
            modifiers: "public static".to_string(),
            return_type: Some("void".to_string()),
            name: "initialize".to_string(),
            body: vec!["// Add any needed initialization code here.".to_string()],
            ..Default::default()
        }],
        ..ClassSpec::new(ClassKind::Class, p.base_package(), "Common")
    }
}

/// `core/app/common`: `Constants` exposing the project id
pub fn constants_class(p: &ProjectParameters) -> ClassSpec {
    ClassSpec {
        fields: vec![FieldSpec {
            modifiers: "public".to_string(),
            static_final: true,
            ty: "String".to_string(),
            name: "PROJECT_ID".to_string(),
            initializer: Some(format!("\"{}\"", p.project_id)),
        }],
        ..ClassSpec::new(ClassKind::Class, p.base_package(), "Constants")
    }
}

/// Platform implementation of `IPlatformHelper`
pub fn platform_helper_class(platform: Platform, p: &ProjectParameters) -> ClassSpec {
    ClassSpec {
        interfaces: vec!["IPlatformHelper".to_string()],
        imports: vec![format!("{}.IPlatformHelper", services_package(p))],
        ..ClassSpec::new(
            ClassKind::Class,
            format!("{}.platform", p.base_package()),
            platform.helper_class(),
        )
    }
}

/// Fully qualified name of the platform helper (service loader registration)
pub fn platform_helper_service(platform: Platform, p: &ProjectParameters) -> (String, String) {
    (
        format!("{}.IPlatformHelper", services_package(p)),
        format!("{}.platform.{}", p.base_package(), platform.helper_class()),
    )
}

/// Loader entrypoint class for a platform
pub fn bootstrap_class(platform: Platform, p: &ProjectParameters) -> ClassSpec {
    let base = ClassSpec::new(ClassKind::Class, p.base_package(), platform.bootstrap_class());
    match platform {
        Platform::Fabric => ClassSpec {
            interfaces: vec!["ModInitializer".to_string()],
            imports: vec!["net.fabricmc.api.ModInitializer".to_string()],
            methods: vec![MethodSpec {
                annotations: vec!["Override".to_string()],
                modifiers: "public".to_string(),
                return_type: Some("void".to_string()),
                name: "onInitialize".to_string(),
                body: bootstrap_body(),
                ..Default::default()
            }],
            ..base
        },
        Platform::Forge => ClassSpec {
            imports: vec![
                "net.minecraftforge.fml.common.Mod".to_string(),
                "net.minecraftforge.fml.javafmlmod.FMLJavaModLoadingContext".to_string(),
            ],
            annotations: vec!["Mod(Constants.PROJECT_ID)".to_string()],
            methods: vec![MethodSpec {
                modifiers: "public".to_string(),
                name: platform.bootstrap_class(),
                parameters: vec!["FMLJavaModLoadingContext context".to_string()],
                body: bootstrap_body(),
                ..Default::default()
            }],
            ..base
        },
        Platform::NeoForge => ClassSpec {
            imports: vec![
                "net.neoforged.bus.api.IEventBus".to_string(),
                "net.neoforged.fml.common.Mod".to_string(),
            ],
            annotations: vec!["Mod(Constants.PROJECT_ID)".to_string()],
            methods: vec![MethodSpec {
                modifiers: "public".to_string(),
                name: platform.bootstrap_class(),
                parameters: vec!["IEventBus modBus".to_string()],
                body: bootstrap_body(),
                ..Default::default()
            }],
            ..base
        },
    }
}
