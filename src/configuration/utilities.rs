use std::{env::current_dir, path::PathBuf};

use miette::{miette, Context, IntoDiagnostic, Result};


/// Location of the configuration file, relative to the current directory.
pub const DEFAULT_CONFIGURATION_FILE_RELATIVE_PATH: &str = "docs/configuration.toml";


/// Returns the default configuration filepath, which is at
/// `{current directory}/docs/configuration.toml`.
pub fn get_default_configuration_file_path() -> Result<PathBuf> {
    let mut configuration_filepath = current_dir()
        .into_diagnostic()
        .wrap_err_with(|| miette!("Could not get the current directory."))?;
    configuration_filepath.push(DEFAULT_CONFIGURATION_FILE_RELATIVE_PATH);

    if !configuration_filepath.is_file() {
        return Err(miette!(
            "Could not find the configuration file at {}.",
            configuration_filepath.display()
        ));
    }

    Ok(configuration_filepath)
}

/// Replaces every occurrence of each placeholder key in `original` with its value.
///
/// Placeholders are applied in the given order.
#[must_use = "function returns the substituted string"]
pub fn replace_placeholders<S>(original: S, placeholders: &[(&str, &str)]) -> String
where
    S: Into<String>,
{
    let mut substituted: String = original.into();

    for (key, value) in placeholders {
        substituted = substituted.replace(key, value);
    }

    substituted
}

/// Treats empty (or whitespace-only) optional strings as absent.
pub fn non_empty_or_none(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_every_occurrence_of_a_placeholder() {
        let substituted = replace_placeholders("{A}/x/{A}", &[("{A}", "root")]);
        assert_eq!(substituted, "root/x/root");
    }

    #[test]
    fn leaves_strings_without_placeholders_untouched() {
        let substituted = replace_placeholders("images/favicon.png", &[("{A}", "root")]);
        assert_eq!(substituted, "images/favicon.png");
    }

    #[test]
    fn empty_and_blank_strings_become_none() {
        assert_eq!(non_empty_or_none(None), None);
        assert_eq!(non_empty_or_none(Some(String::new())), None);
        assert_eq!(non_empty_or_none(Some("  ".to_string())), None);
        assert_eq!(
            non_empty_or_none(Some("Pages".to_string())),
            Some("Pages".to_string())
        );
    }
}
