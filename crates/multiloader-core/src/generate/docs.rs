//! README and LICENSE

use crate::config::ProjectParameters;
use crate::error::{Result, ScaffoldError};
use crate::fetch::{Fetch, ReferenceData};
use tracing::debug;
use url::Url;

/// shields.io badge for the project license
fn license_badge(license: &str) -> String {
    // shields.io uses `-` as a separator, literal dashes are doubled
    let label = license.replace('-', "--").replace('_', "__");
    let mut url = Url::parse("https://img.shields.io/badge").expect("valid badge URL");
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.push(&format!("license-{}-blue.svg", label));
    }
    url.to_string()
}

/// Project README with the parameter summary and dependency table
pub fn readme(p: &ProjectParameters) -> String {
    let description = if p.project_description.is_empty() {
        "No description provided."
    } else {
        p.project_description.as_str()
    };
    let author = if p.project_author.is_empty() {
        "*(No author specified.)*".to_string()
    } else {
        format!("Project author: `{}`", p.project_author)
    };
    let credits = if p.project_credits.is_empty() {
        String::new()
    } else {
        format!("\n### Additional Credits\n{}\n", p.project_credits)
    };

    format!(
        r#"# {title}

![License]({badge})

## Overview
{description}

## Project Information

- **Project Name:** {name}
- **Version:** {version}
- **Group:** {group}
- **ID:** {id}
- **License:** {license}
- **Minecraft Version:** {minecraft}
- **Minecraft Version Range:** {minecraft_range}
- **Java Version:** {java}
- **Gradle Version:** {gradle}

## Dependencies

| Dependency                  | Version |
|-----------------------------|---------|
| **NeoForm**                 | {neo_form} |
| **Parchment Minecraft**     | {parchment_minecraft} |
| **Parchment Version**       | {parchment_version} |
| **Fabric API**              | {fabric} |
| **Fabric Loader**           | {fabric_loader} |
| **Forge**                   | {forge} |
| **Forge Loader Version**    | {forge_loader} |
| **NeoForge**                | {neoforge} |
| **NeoForge Loader Version** | {neoforge_loader} |
| **Balm**                    | 21.0.29-SNAPSHOT |
| **Kuma**                    | [21.0,21.2) |
| **Night Config**            | 3.8.1 |
| **Log4j**                   | 2.20.0 |

## Installation & Usage

### Prerequisites
- Java {java}+
- Gradle {gradle}+
- A compatible Minecraft client ({minecraft})

## Contributing
Contributions are welcome! Please fork the repository and submit a pull request with any improvements.

## License
This project is licensed under the `{license}` License. See the `LICENSE` file for more details.

## Credits
{author}
{credits}
## Contact
For any issues or questions, please open an issue in the repository.
"#,
        title = p.project_title,
        badge = license_badge(&p.project_license),
        description = description,
        name = p.project_name,
        version = p.project_version,
        group = p.project_group,
        id = p.project_id,
        license = p.project_license,
        minecraft = p.minecraft_version,
        minecraft_range = p.minecraft_version_range,
        java = p.java_version,
        gradle = p.gradle_version,
        neo_form = p.neo_form_version,
        parchment_minecraft = p.parchment_minecraft,
        parchment_version = p.parchment_version,
        fabric = p.fabric_version,
        fabric_loader = p.fabric_loader_version,
        forge = p.forge_version,
        forge_loader = p.forge_loader_version_range,
        neoforge = p.neoforge_version,
        neoforge_loader = p.neoforge_loader_version_range,
        author = author,
        credits = credits,
    )
}

/// Fetch the SPDX text of the project license and fill in year and holder
pub async fn license<F: Fetch>(
    p: &ProjectParameters,
    reference: &ReferenceData<F>,
    year: i32,
) -> Result<String> {
    let url = reference
        .license_url(&p.project_license)
        .await?
        .ok_or_else(|| ScaffoldError::UnknownLicense(p.project_license.clone()))?;

    debug!(license = %p.project_license, %url, "fetching license text");
    let text = reference.fetcher().fetch_text(&url).await?;

    let holder = if p.project_author.is_empty() {
        "Unknown Author"
    } else {
        p.project_author.as_str()
    };
    Ok(text
        .replace("<year>", &year.to_string())
        .replace("<copyright holders>", holder))
}
