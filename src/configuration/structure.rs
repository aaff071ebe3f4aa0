use std::fs;
use std::path::{Path, PathBuf};

use miette::{miette, Context, IntoDiagnostic, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use self::branding::FaviconPath;
pub use self::navbar::{NavbarGroup, NavbarLink};
use self::navbar::{resolve_navbar, UnresolvedNavbarGroup};
pub use self::styling::Stylesheet;
use self::styling::resolve_stylesheets;
use super::traits::ResolvableConfigurationWithContext;
use super::utilities::get_default_configuration_file_path;

mod branding;
mod navbar;
mod styling;



#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub(crate) struct UnresolvedConfiguration {
    /// Path to the Doxygen configuration file.
    doc_file: String,

    /// Base project URL.
    project_url: String,

    /// Primary navbar groups.
    #[serde(default)]
    navbar: Vec<UnresolvedNavbarGroup>,

    /// Secondary (right-hand) navbar groups.
    #[serde(default)]
    secondary_navbar: Vec<UnresolvedNavbarGroup>,

    /// Favicon path, may contain the generation root placeholder.
    favicon_path: String,

    /// Stylesheet URLs in load order.
    #[serde(default)]
    stylesheets: Vec<String>,
}


/// The entire documentation site configuration.
///
/// Created once per build and read-only afterwards.
#[derive(Serialize, Clone, PartialEq, Eq, Debug)]
pub struct Configuration {
    /// This is the file path this `Configuration` instance was loaded from.
    #[serde(skip)]
    pub file_path: PathBuf,

    /// Path to the Doxygen configuration file. Not parsed or checked here.
    pub doc_file: String,

    pub project_url: String,

    pub navbar: Vec<NavbarGroup>,

    pub secondary_navbar: Vec<NavbarGroup>,

    pub favicon_path: FaviconPath,

    pub stylesheets: Vec<Stylesheet>,
}


impl ResolvableConfigurationWithContext for UnresolvedConfiguration {
    type Resolved = Configuration;
    type Context = PathBuf;

    fn resolve(self, context: Self::Context) -> Result<Self::Resolved> {
        let navbar = resolve_navbar(self.navbar).wrap_err("Failed to resolve navbar.")?;

        let secondary_navbar = resolve_navbar(self.secondary_navbar)
            .wrap_err("Failed to resolve secondary_navbar.")?;


        Ok(Configuration {
            file_path: context,
            doc_file: self.doc_file,
            project_url: self.project_url,
            navbar,
            secondary_navbar,
            favicon_path: FaviconPath::new(self.favicon_path),
            stylesheets: resolve_stylesheets(self.stylesheets),
        })
    }
}


impl Configuration {
    /// Parse and resolve a configuration from TOML source.
    ///
    /// `file_path` is recorded as-is; nothing is read from disk.
    pub fn from_toml_str<P: Into<PathBuf>>(source: &str, file_path: P) -> Result<Self> {
        let unresolved_configuration = toml::from_str::<UnresolvedConfiguration>(source)
            .into_diagnostic()
            .wrap_err("Could not parse configuration file!")?;

        unresolved_configuration
            .resolve(file_path.into())
            .wrap_err("Failed to resolve configuration.")
    }

    /// Load the configuration from a specific file path.
    pub fn load_from_path<S: AsRef<Path>>(configuration_file_path: S) -> Result<Self> {
        let configuration_file_path = configuration_file_path.as_ref();

        // Read the configuration file into memory.
        let configuration_string = fs::read_to_string(configuration_file_path)
            .into_diagnostic()
            .wrap_err_with(|| {
                miette!(
                    "Could not read configuration file at {}.",
                    configuration_file_path.display()
                )
            })?;


        let canonical_file_path = dunce::canonicalize(configuration_file_path)
            .into_diagnostic()
            .wrap_err("Could not canonicalize configuration file path!")?;

        let configuration = Self::from_toml_str(&configuration_string, canonical_file_path)?;

        debug!(
            navbar_groups = configuration.navbar.len(),
            secondary_navbar_groups = configuration.secondary_navbar.len(),
            stylesheets = configuration.stylesheets.len(),
            "Configuration resolved."
        );

        Ok(configuration)
    }

    /// Load the configuration from the default path (`./docs/configuration.toml`).
    pub fn load_from_default_path() -> Result<Configuration> {
        Configuration::load_from_path(
            get_default_configuration_file_path()
                .wrap_err_with(|| "Could not load configuration file at default path.")?,
        )
    }

    /// Both navbars, primary first.
    pub fn all_navbar_groups(&self) -> impl Iterator<Item = &NavbarGroup> {
        self.navbar.iter().chain(self.secondary_navbar.iter())
    }
}
