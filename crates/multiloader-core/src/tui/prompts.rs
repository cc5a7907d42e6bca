//! Charm-style CLI prompts using cliclack

use crate::config::{project_id_from_name, ParameterInfo, ProjectParameters, RawParameters, PARAMETERS};
use crate::fetch::{Fetch, ReferenceData};
use crate::generate::Platform;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// License ids offered in the selection, anything else goes through "Other"
const LICENSE_CHOICES: &[&str] = &["MIT", "Apache-2.0", "GPL-3.0-only", "LGPL-3.0-only", "MPL-2.0"];
const OTHER_LICENSE: &str = "Other";

/// CLI arguments for the create command
#[derive(Debug, Clone)]
pub struct CreateArgs {
    /// Answers known up front (parameters file), used as prompt defaults
    pub params: RawParameters,

    /// Loader platforms to generate, prompted when unset
    pub platforms: Option<Vec<Platform>>,

    /// Directory receiving `<project_name>.zip`
    pub output: PathBuf,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,
}

impl Default for CreateArgs {
    fn default() -> Self {
        Self {
            params: RawParameters::default(),
            platforms: None,
            output: PathBuf::from("."),
            yes: false,
        }
    }
}

/// Progress of the parameter collection
#[derive(Debug)]
enum PromptState {
    /// Asking every question, the carried answers are the defaults
    Collecting(RawParameters),
    Reviewing(RawParameters),
    Confirmed(ProjectParameters),
}

impl PromptState {
    /// Leave the review screen
    fn reviewed(answers: RawParameters, accepted: bool) -> Self {
        match (accepted, answers.clone().resolve()) {
            (true, Ok(params)) => PromptState::Confirmed(params),
            _ => PromptState::Collecting(answers),
        }
    }
}

/// Run the CLI with interactive prompts
pub async fn run<F: Fetch>(
    args: CreateArgs,
    reference: &ReferenceData<F>,
    cli_version: &str,
) -> Result<()> {
    cliclack::intro(format!("multiloader-create {}", cli_version))?;

    // Step 1: Collect and confirm parameters
    let params = collect_parameters(&args, reference).await?;

    // Step 2: Select platforms
    let platforms = select_platforms(&args)?;

    // Step 3: Check the output location
    let output = select_output(&args, &params.project_name)?;

    // Step 4: Generate the archive
    let archive = create_project(&params, reference, &platforms, &output).await?;

    // Step 5: Show next steps
    print_next_steps(&params, &archive)?;

    Ok(())
}

async fn collect_parameters<F: Fetch>(
    args: &CreateArgs,
    reference: &ReferenceData<F>,
) -> Result<ProjectParameters> {
    let mut state = if args.yes {
        PromptState::Reviewing(args.params.clone())
    } else {
        PromptState::Collecting(args.params.clone())
    };

    loop {
        state = match state {
            PromptState::Collecting(answers) => {
                PromptState::Reviewing(prompt_parameters(&answers, reference).await?)
            }
            PromptState::Reviewing(answers) => match answers.clone().resolve() {
                Err(err) if args.yes => {
                    return Err(err).context("Invalid project parameters");
                }
                Err(err) => {
                    cliclack::log::error(err.to_string())?;
                    PromptState::Collecting(answers)
                }
                Ok(params) => {
                    cliclack::note("Review your project details", summary(&params))?;
                    let accepted = args.yes
                        || cliclack::confirm("Are these details correct?")
                            .initial_value(true)
                            .interact()?;
                    if !accepted {
                        cliclack::log::info("Please re-enter the project details.")?;
                    }
                    PromptState::reviewed(answers, accepted)
                }
            },
            PromptState::Confirmed(params) => return Ok(params),
        };
    }
}

async fn prompt_parameters<F: Fetch>(
    previous: &RawParameters,
    reference: &ReferenceData<F>,
) -> Result<RawParameters> {
    let mut answers = RawParameters::default();

    for info in PARAMETERS {
        let default = default_answer(info, previous, &answers);
        let value = match info.name {
            "project_license" => prompt_license(&default, reference).await?,
            "gradle_version" => prompt_gradle_version(&default, reference).await?,
            _ => prompt_input(info, &default)?,
        };
        answers.set(info.name, value)?;
    }

    Ok(answers)
}

/// Default shown for a question: the previous answer, else a value derived
/// from the project name, else the built-in default
fn default_answer(info: &ParameterInfo, previous: &RawParameters, answers: &RawParameters) -> String {
    if let Some(value) = previous.get(info.name).filter(|v| !v.trim().is_empty()) {
        return value.to_string();
    }
    let name = answers.project_name.as_deref().unwrap_or_default();
    match info.name {
        "project_title" => name.to_string(),
        "project_id" => project_id_from_name(name),
        _ => info.default.to_string(),
    }
}

fn prompt_input(info: &ParameterInfo, default: &str) -> Result<String> {
    let mut input = cliclack::input(info.label).required(info.name == "project_name");
    if !default.is_empty() {
        input = input.placeholder(default).default_input(default);
    }
    let value: String = input.interact()?;
    Ok(value.trim().to_string())
}

/// Which select entry is highlighted for a license default
fn license_choice(default: &str) -> &str {
    LICENSE_CHOICES
        .iter()
        .copied()
        .find(|choice| *choice == default)
        .unwrap_or(OTHER_LICENSE)
}

async fn prompt_license<F: Fetch>(default: &str, reference: &ReferenceData<F>) -> Result<String> {
    let mut select = cliclack::select("Project License");
    for license in LICENSE_CHOICES {
        select = select.item(license.to_string(), *license, "");
    }
    let selected: String = select
        .item(OTHER_LICENSE.to_string(), OTHER_LICENSE, "any SPDX license id")
        .initial_value(license_choice(default).to_string())
        .interact()?;

    if selected != OTHER_LICENSE {
        return Ok(selected);
    }

    loop {
        let mut input = cliclack::input("Please enter your custom license ID");
        if license_choice(default) == OTHER_LICENSE {
            input = input.default_input(default);
        }
        let custom: String = input.interact()?;
        let custom = custom.trim().to_string();

        match reference.license_url(&custom).await {
            Ok(Some(_)) => return Ok(custom),
            Ok(None) => {
                cliclack::log::warning(format!("'{}' is not a known SPDX license id", custom))?;
            }
            Err(err) => {
                cliclack::log::warning(format!("Could not verify the license id: {}", err))?;
                return Ok(custom);
            }
        }
    }
}

/// Selectable Gradle versions, the default first when it is not a published tag
fn gradle_version_choices(versions: &[String], default: &str) -> Vec<String> {
    if versions.is_empty() {
        return Vec::new();
    }
    let mut choices = versions.to_vec();
    if !choices.iter().any(|v| v == default) {
        choices.insert(0, default.to_string());
    }
    choices
}

async fn prompt_gradle_version<F: Fetch>(
    default: &str,
    reference: &ReferenceData<F>,
) -> Result<String> {
    let spinner = cliclack::spinner();
    spinner.start("Loading Gradle releases...");

    let versions = match reference.gradle_versions().await {
        Ok(versions) => {
            spinner.stop(format!("Found {} Gradle releases", versions.len()));
            versions.to_vec()
        }
        Err(err) => {
            spinner.stop("Failed to load Gradle releases");
            cliclack::log::warning(err.to_string())?;
            Vec::new()
        }
    };

    let choices = gradle_version_choices(&versions, default);
    if choices.is_empty() {
        cliclack::log::warning(format!("No Gradle versions found, using {}", default))?;
        return Ok(default.to_string());
    }

    let mut select = cliclack::select("Select a Gradle version");
    for version in &choices {
        select = select.item(version.clone(), version, "");
    }
    let version: String = select.initial_value(default.to_string()).interact()?;
    Ok(version)
}

/// One `Label: value` line per parameter
fn summary(params: &ProjectParameters) -> String {
    params
        .entries()
        .into_iter()
        .map(|(name, value)| {
            let label = PARAMETERS
                .iter()
                .find(|info| info.name == name)
                .map_or(name, |info| info.label);
            // Labels may carry a "(Check latest: ...)" hint
            let label = label.split(" (").next().unwrap_or(label);
            format!("{}: {}", label, value)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn select_platforms(args: &CreateArgs) -> Result<Vec<Platform>> {
    let platforms = if let Some(platforms) = &args.platforms {
        platforms.clone()
    } else if args.yes {
        Platform::ALL.to_vec()
    } else {
        let mut multi = cliclack::multiselect("Select loader platforms");
        for platform in Platform::ALL {
            multi = multi.item(platform, platform.display_name(), "");
        }
        multi
            .initial_values(Platform::ALL.to_vec())
            .required(true)
            .interact()?
    };

    if platforms.is_empty() {
        anyhow::bail!("No platforms selected.");
    }

    let names: Vec<&str> = platforms.iter().map(|p| p.display_name()).collect();
    cliclack::log::success(format!("Platforms: {}", names.join(", ")))?;
    Ok(platforms)
}

fn select_output(args: &CreateArgs, project_name: &str) -> Result<PathBuf> {
    let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let output = if args.output.is_absolute() {
        args.output.clone()
    } else {
        current_dir.join(&args.output)
    };

    let target = output.join(format!("{}.zip", project_name));
    if target.exists() {
        cliclack::log::warning(format!("{} already exists", target.display()))?;

        // Auto-confirm with --yes flag
        let confirm = if args.yes {
            true
        } else {
            cliclack::confirm("Overwrite it?")
                .initial_value(false)
                .interact()?
        };

        if !confirm {
            anyhow::bail!("Setup cancelled.");
        }
    }

    Ok(output)
}

async fn create_project<F: Fetch>(
    params: &ProjectParameters,
    reference: &ReferenceData<F>,
    platforms: &[Platform],
    output: &Path,
) -> Result<PathBuf> {
    let spinner = cliclack::spinner();
    spinner.start("Generating project...");

    match crate::scaffold(params, reference, platforms, output).await {
        Ok(archive) => {
            spinner.stop(format!("Created {}", archive.display()));
            Ok(archive)
        }
        Err(err) => {
            spinner.stop("Failed to generate project");
            Err(err).context("Project generation failed")
        }
    }
}

fn print_next_steps(params: &ProjectParameters, archive: &Path) -> Result<()> {
    println!();
    println!("  Next steps");
    println!();

    let steps = [
        format!("unzip {}", archive.display()),
        format!("cd {}", params.project_name),
        "./gradlew build".to_string(),
    ];
    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy modding!")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(name: &str) -> &'static ParameterInfo {
        PARAMETERS.iter().find(|i| i.name == name).unwrap()
    }

    #[test]
    fn test_default_answer_prefers_previous_value() {
        let previous = RawParameters {
            project_version: Some("2.0.0".to_string()),
            ..Default::default()
        };
        let answers = RawParameters::default();
        assert_eq!(
            default_answer(info("project_version"), &previous, &answers),
            "2.0.0"
        );
        assert_eq!(
            default_answer(info("java_version"), &previous, &answers),
            info("java_version").default
        );
    }

    #[test]
    fn test_default_answer_derives_from_name() {
        let answers = RawParameters {
            project_name: Some("My Mod".to_string()),
            ..Default::default()
        };
        let previous = RawParameters::default();
        assert_eq!(default_answer(info("project_title"), &previous, &answers), "My Mod");
        assert_eq!(
            default_answer(info("project_id"), &previous, &answers),
            project_id_from_name("My Mod")
        );
    }

    #[test]
    fn test_license_choice() {
        assert_eq!(license_choice("MIT"), "MIT");
        assert_eq!(license_choice("Apache-2.0"), "Apache-2.0");
        assert_eq!(license_choice("BSD-3-Clause"), OTHER_LICENSE);
    }

    #[test]
    fn test_gradle_version_choices() {
        let versions = vec!["v8.12.1".to_string(), "v8.12.0".to_string()];
        assert_eq!(gradle_version_choices(&versions, "v8.12.1"), versions);
        assert_eq!(
            gradle_version_choices(&versions, "v8.10.0"),
            vec!["v8.10.0", "v8.12.1", "v8.12.0"]
        );
        assert!(gradle_version_choices(&[], "v8.12.1").is_empty());
    }

    #[test]
    fn test_review_transitions() {
        let valid = RawParameters::default();
        assert!(matches!(
            PromptState::reviewed(valid.clone(), true),
            PromptState::Confirmed(_)
        ));
        assert!(matches!(
            PromptState::reviewed(valid.clone(), false),
            PromptState::Collecting(answers) if answers == valid
        ));

        let invalid = RawParameters {
            project_group: Some("com..example".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            PromptState::reviewed(invalid, true),
            PromptState::Collecting(_)
        ));
    }

    #[test]
    fn test_summary_strips_label_hints() {
        let summary = summary(&ProjectParameters::default());
        assert!(summary.contains("Java Version: 21"));
        assert!(summary.contains("Gradle Version: v8.12.1"));
        assert!(!summary.contains("Check latest"));
    }
}
