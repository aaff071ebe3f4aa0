//! Hands the configuration over to the external documentation generator,
//! either serialized as JSON or as an m.css-style Python `conf.py`.

use clap::ValueEnum;
use miette::Result;

use crate::configuration::Configuration;

mod json;
mod mcss;


#[derive(ValueEnum, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ExportFormat {
    /// Pretty-printed JSON.
    Json,

    /// Python source for m.css's Doxygen generator.
    Mcss,
}

impl ExportFormat {
    pub fn file_extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Mcss => "py",
        }
    }
}


/// Renders `configuration` in the given format. Every ordered sequence keeps its authored order.
pub fn render(configuration: &Configuration, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Json => json::render_json(configuration),
        ExportFormat::Mcss => Ok(mcss::render_mcss_conf(configuration)),
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::fixtures::sample_configuration;

    #[test]
    fn stylesheets_keep_their_order_in_every_format() {
        let configuration = sample_configuration();
        let first = configuration.stylesheets[0].url();
        let second = configuration.stylesheets[1].url();

        for format in [ExportFormat::Json, ExportFormat::Mcss] {
            let rendered = render(&configuration, format).unwrap();

            let first_position = rendered.find(first).unwrap();
            let second_position = rendered.find(second).unwrap();
            assert!(
                first_position < second_position,
                "{format:?} export reordered stylesheets"
            );
        }
    }

    #[test]
    fn rendering_is_deterministic() {
        let configuration = sample_configuration();

        for format in [ExportFormat::Json, ExportFormat::Mcss] {
            assert_eq!(
                render(&configuration, format).unwrap(),
                render(&configuration, format).unwrap()
            );
        }
    }
}
