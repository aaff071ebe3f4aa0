//! Opt-in structural report over a loaded [`Configuration`].
//!
//! Loading never runs these checks: the configuration is trusted data and
//! real validation (broken targets, unreachable stylesheets, missing files)
//! belongs to the external generator. This only catches authoring slips.

use std::collections::HashSet;

use thiserror::Error;

use crate::configuration::{Configuration, NavbarGroup};


/// Which of the two navbars an issue was found in.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NavbarKind {
    Primary,
    Secondary,
}

impl NavbarKind {
    fn table_name(self) -> &'static str {
        match self {
            NavbarKind::Primary => "navbar",
            NavbarKind::Secondary => "secondary_navbar",
        }
    }
}


#[derive(Error, Clone, PartialEq, Eq, Debug)]
pub enum StructuralIssue {
    #[error("doc_file is empty")]
    EmptyDocFile,

    #[error("project_url is empty")]
    EmptyProjectUrl,

    #[error("favicon_path is empty")]
    EmptyFaviconPath,

    #[error("{}[{group_index}] has an empty target", .navbar.table_name())]
    EmptyGroupTarget {
        navbar: NavbarKind,
        group_index: usize,
    },

    #[error(
        "{}[{group_index}].links[{link_index}] has an empty target",
        .navbar.table_name()
    )]
    EmptyLinkTarget {
        navbar: NavbarKind,
        group_index: usize,
        link_index: usize,
    },

    #[error("stylesheet {url:?} is listed more than once (entry #{index})")]
    DuplicateStylesheet { url: String, index: usize },
}


/// Returns every structural issue in `configuration`, in field order.
pub fn structural_issues(configuration: &Configuration) -> Vec<StructuralIssue> {
    let mut issues = Vec::new();

    if configuration.doc_file.trim().is_empty() {
        issues.push(StructuralIssue::EmptyDocFile);
    }

    if configuration.project_url.trim().is_empty() {
        issues.push(StructuralIssue::EmptyProjectUrl);
    }

    collect_navbar_issues(&configuration.navbar, NavbarKind::Primary, &mut issues);
    collect_navbar_issues(
        &configuration.secondary_navbar,
        NavbarKind::Secondary,
        &mut issues,
    );

    if configuration.favicon_path.as_authored().trim().is_empty() {
        issues.push(StructuralIssue::EmptyFaviconPath);
    }

    let mut seen_stylesheets = HashSet::with_capacity(configuration.stylesheets.len());
    for (index, stylesheet) in configuration.stylesheets.iter().enumerate() {
        if !seen_stylesheets.insert(stylesheet.url()) {
            issues.push(StructuralIssue::DuplicateStylesheet {
                url: stylesheet.url().to_string(),
                index,
            });
        }
    }

    issues
}

fn collect_navbar_issues(
    groups: &[NavbarGroup],
    navbar: NavbarKind,
    issues: &mut Vec<StructuralIssue>,
) {
    for (group_index, group) in groups.iter().enumerate() {
        if group.target.trim().is_empty() {
            issues.push(StructuralIssue::EmptyGroupTarget {
                navbar,
                group_index,
            });
        }

        for (link_index, link) in group.links.iter().enumerate() {
            if link.target.trim().is_empty() {
                issues.push(StructuralIssue::EmptyLinkTarget {
                    navbar,
                    group_index,
                    link_index,
                });
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::configuration::fixtures::sample_configuration;

    #[test]
    fn well_formed_configuration_has_no_issues() {
        assert!(structural_issues(&sample_configuration()).is_empty());
    }

    #[test]
    fn reports_empty_fields_and_targets_in_order() {
        let configuration = Configuration::from_toml_str(
            r#"
doc_file = ""
project_url = "https://example.com"
favicon_path = " "
stylesheets = ["a.css", "b.css", "a.css"]

[[navbar]]
target = "pages"
links = [{ target = "intro" }, { target = "" }]

[[secondary_navbar]]
target = ""
"#,
            "configuration.toml",
        )
        .unwrap();

        assert_eq!(
            structural_issues(&configuration),
            vec![
                StructuralIssue::EmptyDocFile,
                StructuralIssue::EmptyLinkTarget {
                    navbar: NavbarKind::Primary,
                    group_index: 0,
                    link_index: 1,
                },
                StructuralIssue::EmptyGroupTarget {
                    navbar: NavbarKind::Secondary,
                    group_index: 0,
                },
                StructuralIssue::EmptyFaviconPath,
                StructuralIssue::DuplicateStylesheet {
                    url: "a.css".to_string(),
                    index: 2,
                },
            ]
        );
    }

    #[test]
    fn issue_messages_name_the_offending_entry() {
        let issue = StructuralIssue::EmptyLinkTarget {
            navbar: NavbarKind::Secondary,
            group_index: 1,
            link_index: 3,
        };

        assert_eq!(
            issue.to_string(),
            "secondary_navbar[1].links[3] has an empty target"
        );
    }
}
