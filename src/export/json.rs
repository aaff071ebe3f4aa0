use miette::{Context, IntoDiagnostic, Result};

use crate::configuration::Configuration;


pub(super) fn render_json(configuration: &Configuration) -> Result<String> {
    let mut rendered = serde_json::to_string_pretty(configuration)
        .into_diagnostic()
        .wrap_err("Failed to serialize configuration to JSON.")?;
    rendered.push('\n');

    Ok(rendered)
}


#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    use super::*;
    use crate::configuration::fixtures::sample_configuration;

    #[test]
    fn json_mirrors_the_authored_record() {
        let rendered = render_json(&sample_configuration()).unwrap();
        let value: Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(
            value,
            json!({
                "doc_file": "Doxyfile",
                "project_url": "https://github.com/GameDevTecnico/cubos",
                "navbar": [
                    {
                        "label": "Guide",
                        "target": "pages",
                        "links": [
                            { "label": "Getting Started", "target": "getting-started" },
                            { "label": null, "target": "features" }
                        ]
                    },
                    { "label": null, "target": "namespaces", "links": [] }
                ],
                "secondary_navbar": [
                    { "label": "GitHub", "target": "github", "links": [] }
                ],
                "favicon_path": "{GENERATION_ROOT}/images/favicon.png",
                "stylesheets": [
                    "https://fonts.googleapis.com/css?family=Source+Sans+Pro",
                    "../docs/css/m-dark+documentation.compiled.css"
                ]
            })
        );
    }

    #[test]
    fn json_omits_the_source_file_path() {
        let rendered = render_json(&sample_configuration()).unwrap();
        assert!(!rendered.contains("file_path\""));
    }
}
