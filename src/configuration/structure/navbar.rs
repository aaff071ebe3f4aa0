use miette::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::configuration::{traits::ResolvableConfiguration, utilities::non_empty_or_none};


/// Doxygen's special navbar targets and the titles the generator uses for them.
const SPECIAL_TARGET_LABELS: [(&str, &str); 5] = [
    ("pages", "Pages"),
    ("modules", "Modules"),
    ("namespaces", "Namespaces"),
    ("annotated", "Classes"),
    ("files", "Files"),
];


#[derive(Deserialize, Clone, Debug)]
pub(super) struct UnresolvedNavbarLink {
    #[serde(default)]
    label: Option<String>,

    target: String,
}

#[derive(Deserialize, Clone, Debug)]
pub(super) struct UnresolvedNavbarGroup {
    #[serde(default)]
    label: Option<String>,

    target: String,

    #[serde(default)]
    links: Vec<UnresolvedNavbarLink>,
}


/// A single sub-entry of a navbar group.
#[derive(Serialize, Clone, PartialEq, Eq, Debug)]
pub struct NavbarLink {
    /// Authored label. `None` means the generator derives one from `target`.
    pub label: Option<String>,

    /// Page or symbol identifier known to the external generator.
    pub target: String,
}

/// A top-level navbar entry with its (possibly empty) ordered sub-links.
#[derive(Serialize, Clone, PartialEq, Eq, Debug)]
pub struct NavbarGroup {
    pub label: Option<String>,

    pub target: String,

    pub links: Vec<NavbarLink>,
}


impl ResolvableConfiguration for UnresolvedNavbarLink {
    type Resolved = NavbarLink;

    fn resolve(self) -> Result<Self::Resolved> {
        Ok(NavbarLink {
            label: non_empty_or_none(self.label),
            target: self.target,
        })
    }
}

impl ResolvableConfiguration for UnresolvedNavbarGroup {
    type Resolved = NavbarGroup;

    fn resolve(self) -> Result<Self::Resolved> {
        let target = self.target;

        let links = self
            .links
            .into_iter()
            .map(ResolvableConfiguration::resolve)
            .collect::<Result<Vec<_>>>()
            .wrap_err_with(|| format!("Failed to resolve sub-links of navbar group {target:?}."))?;

        Ok(NavbarGroup {
            label: non_empty_or_none(self.label),
            target,
            links,
        })
    }
}


impl NavbarLink {
    /// The label to render: the authored one, or one derived from the target.
    pub fn display_label(&self) -> String {
        display_label_for(self.label.as_deref(), &self.target)
    }
}

impl NavbarGroup {
    /// The label to render: the authored one, or one derived from the target.
    pub fn display_label(&self) -> String {
        display_label_for(self.label.as_deref(), &self.target)
    }
}


fn display_label_for(label: Option<&str>, target: &str) -> String {
    match label {
        Some(label) => label.to_string(),
        None => default_label_for_target(target),
    }
}

/// Derives a label from a target identifier.
///
/// Doxygen's special pages map to their well-known titles, anything else is humanized:
/// `getting-started` becomes `Getting started`.
pub fn default_label_for_target(target: &str) -> String {
    if let Some((_, label)) = SPECIAL_TARGET_LABELS
        .iter()
        .find(|(special_target, _)| *special_target == target)
    {
        return label.to_string();
    }

    let spaced = target
        .split(['-', '_'])
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    let mut characters = spaced.chars();
    match characters.next() {
        Some(first) => first.to_uppercase().chain(characters).collect(),
        None => String::new(),
    }
}


pub(super) fn resolve_navbar(groups: Vec<UnresolvedNavbarGroup>) -> Result<Vec<NavbarGroup>> {
    groups
        .into_iter()
        .enumerate()
        .map(|(index, group)| {
            group
                .resolve()
                .wrap_err_with(|| format!("Failed to resolve navbar group #{index}."))
        })
        .collect()
}
