use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};

use crate::configuration::utilities::replace_placeholders;


/// Token in `favicon_path` standing for the root directory of the generation run.
///
/// The external generator substitutes it; loading the configuration keeps it verbatim.
pub const GENERATION_ROOT_PLACEHOLDER: &str = "{GENERATION_ROOT}";


/// Favicon path exactly as authored, placeholder included.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct FaviconPath(String);

impl FaviconPath {
    pub(super) fn new(authored_path: String) -> Self {
        Self(authored_path)
    }

    pub fn as_authored(&self) -> &str {
        &self.0
    }

    pub fn contains_generation_root_placeholder(&self) -> bool {
        self.0.contains(GENERATION_ROOT_PLACEHOLDER)
    }

    /// Substitutes [`GENERATION_ROOT_PLACEHOLDER`] with `generation_root`.
    #[must_use = "function returns the resolved path"]
    pub fn resolve_against<P: AsRef<Path>>(&self, generation_root: P) -> PathBuf {
        let generation_root = generation_root.as_ref().to_string_lossy();

        PathBuf::from(replace_placeholders(
            self.0.as_str(),
            &[(GENERATION_ROOT_PLACEHOLDER, generation_root.as_ref())],
        ))
    }
}

impl Serialize for FaviconPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}
