//! Class-template serializer for Java source stubs
//!
//! Imports are emitted in input order and never de-duplicated.

use std::fmt::Write;

const INDENT: &str = "    ";

/// Top-level declaration kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClassKind {
    #[default]
    Class,
    Interface,
}

impl ClassKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            ClassKind::Class => "class",
            ClassKind::Interface => "interface",
        }
    }
}

/// A field declaration
#[derive(Debug, Clone, Default)]
pub struct FieldSpec {
    pub modifiers: String,
    pub static_final: bool,
    pub ty: String,
    pub name: String,
    pub initializer: Option<String>,
}

/// A method (or constructor, when `return_type` is None) declaration
#[derive(Debug, Clone, Default)]
pub struct MethodSpec {
    pub annotations: Vec<String>,
    pub modifiers: String,
    pub return_type: Option<String>,
    pub name: String,
    pub parameters: Vec<String>,
    pub exceptions: Vec<String>,
    pub body: Vec<String>,
}

/// Description of one Java source file
#[derive(Debug, Clone, Default)]
pub struct ClassSpec {
    pub name: String,
    pub package: String,
    pub kind: ClassKind,
    pub superclass: Option<String>,
    pub interfaces: Vec<String>,
    pub imports: Vec<String>,
    pub fields: Vec<FieldSpec>,
    pub methods: Vec<MethodSpec>,
    pub annotations: Vec<String>,
}

impl ClassSpec {
    pub fn new(kind: ClassKind, package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package: package.into(),
            kind,
            ..Default::default()
        }
    }

    /// File name of the rendered source (`Name.java`)
    pub fn file_name(&self) -> String {
        format!("{}.java", self.name)
    }
}

/// Render a class description into Java source
pub fn render_class(spec: &ClassSpec) -> String {
    let mut sections: Vec<String> = Vec::new();

    if !spec.package.is_empty() {
        sections.push(format!("package {};", spec.package));
    }

    if !spec.imports.is_empty() {
        sections.push(
            spec.imports
                .iter()
                .map(|i| format!("import {};", i))
                .collect::<Vec<_>>()
                .join("\n"),
        );
    }

    sections.push(render_body(spec));

    let mut out = sections.join("\n\n");
    out.push('\n');
    out
}

fn render_body(spec: &ClassSpec) -> String {
    let mut out = String::new();

    for annotation in &spec.annotations {
        let _ = writeln!(out, "@{}", annotation);
    }

    let _ = write!(out, "public {} {}", spec.kind.keyword(), spec.name);
    if let Some(superclass) = &spec.superclass {
        let _ = write!(out, " extends {}", superclass);
    }
    if !spec.interfaces.is_empty() {
        // Interfaces extend other interfaces; classes implement them
        let keyword = match spec.kind {
            ClassKind::Class => "implements",
            ClassKind::Interface => "extends",
        };
        let _ = write!(out, " {} {}", keyword, spec.interfaces.join(", "));
    }
    out.push_str(" {\n");

    let mut members: Vec<String> = Vec::new();
    if !spec.fields.is_empty() {
        members.push(
            spec.fields
                .iter()
                .map(render_field)
                .collect::<Vec<_>>()
                .join("\n"),
        );
    }
    members.extend(spec.methods.iter().map(render_method));

    if !members.is_empty() {
        out.push_str(&members.join("\n\n"));
        out.push('\n');
    }
    out.push('}');
    out
}

fn render_field(field: &FieldSpec) -> String {
    let mut line = String::from(INDENT);
    push_word(&mut line, &field.modifiers);
    if field.static_final {
        line.push_str("static final ");
    }
    let _ = write!(line, "{} {}", field.ty, field.name);
    if let Some(init) = &field.initializer {
        let _ = write!(line, " = {}", init);
    }
    line.push(';');
    line
}

fn render_method(method: &MethodSpec) -> String {
    let mut out = String::new();
    for annotation in &method.annotations {
        let _ = writeln!(out, "{}@{}", INDENT, annotation);
    }

    out.push_str(INDENT);
    push_word(&mut out, &method.modifiers);
    if let Some(ret) = &method.return_type {
        push_word(&mut out, ret);
    }
    let _ = write!(out, "{}({})", method.name, method.parameters.join(", "));
    if !method.exceptions.is_empty() {
        let _ = write!(out, " throws {}", method.exceptions.join(", "));
    }
    out.push_str(" {\n");
    for line in &method.body {
        let _ = writeln!(out, "{}{}{}", INDENT, INDENT, line);
    }
    let _ = write!(out, "{}}}", INDENT);
    out
}

fn push_word(out: &mut String, word: &str) {
    if !word.is_empty() {
        out.push_str(word);
        out.push(' ');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_class() {
        let spec = ClassSpec::new(ClassKind::Class, "com.example.demo", "Api");
        assert_eq!(
            render_class(&spec),
            "package com.example.demo;\n\npublic class Api {\n}\n"
        );
    }

    #[test]
    fn test_interface() {
        let spec = ClassSpec::new(
            ClassKind::Interface,
            "com.example.demo.platform.services",
            "IPlatformHelper",
        );
        assert!(render_class(&spec).contains("public interface IPlatformHelper {\n}"));
    }

    #[test]
    fn test_full_class() {
        let spec = ClassSpec {
            imports: vec!["a.B".to_string(), "c.D".to_string()],
            annotations: vec!["Mod(Constants.PROJECT_ID)".to_string()],
            superclass: Some("Base".to_string()),
            interfaces: vec!["One".to_string(), "Two".to_string()],
            fields: vec![FieldSpec {
                modifiers: "public".to_string(),
                static_final: true,
                ty: "String".to_string(),
                name: "ID".to_string(),
                initializer: Some("\"demo\"".to_string()),
            }],
            methods: vec![
                MethodSpec {
                    modifiers: "public".to_string(),
                    name: "Sample".to_string(),
                    parameters: vec!["int a".to_string(), "int b".to_string()],
                    body: vec!["// init".to_string()],
                    ..Default::default()
                },
                MethodSpec {
                    annotations: vec!["Override".to_string()],
                    modifiers: "public".to_string(),
                    return_type: Some("void".to_string()),
                    name: "run".to_string(),
                    exceptions: vec!["Exception".to_string()],
                    ..Default::default()
                },
            ],
            ..ClassSpec::new(ClassKind::Class, "com.example", "Sample")
        };

        assert_eq!(
            render_class(&spec),
            r#"package com.example;

import a.B;
import c.D;

@Mod(Constants.PROJECT_ID)
public class Sample extends Base implements One, Two {
    public static final String ID = "demo";

    public Sample(int a, int b) {
        // init
    }

    @Override
    public void run() throws Exception {
    }
}
"#
        );
    }

    #[test]
    fn test_duplicate_imports_are_kept() {
        let spec = ClassSpec {
            imports: vec!["a.B".to_string(), "a.B".to_string()],
            ..ClassSpec::new(ClassKind::Class, "p", "X")
        };
        assert_eq!(render_class(&spec).matches("import a.B;").count(), 2);
    }

    #[test]
    fn test_no_package() {
        let spec = ClassSpec::new(ClassKind::Class, "", "Bare");
        assert_eq!(render_class(&spec), "public class Bare {\n}\n");
    }

    #[test]
    fn test_file_name() {
        assert_eq!(
            ClassSpec::new(ClassKind::Class, "p", "Common").file_name(),
            "Common.java"
        );
    }
}
