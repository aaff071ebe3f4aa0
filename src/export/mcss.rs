use std::fmt::Write;

use crate::configuration::{Configuration, NavbarGroup};


const INDENT: &str = "    ";


/// Renders the configuration as the Python variables m.css reads from `conf.py`.
pub(super) fn render_mcss_conf(configuration: &Configuration) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "DOXYFILE = {}\n",
        python_string_literal(&configuration.doc_file)
    ));
    output.push_str(&format!(
        "MAIN_PROJECT_URL = {}\n",
        python_string_literal(&configuration.project_url)
    ));
    output.push('\n');

    output.push_str(&format!(
        "LINKS_NAVBAR1 = {}\n",
        render_navbar(&configuration.navbar)
    ));
    output.push_str(&format!(
        "LINKS_NAVBAR2 = {}\n",
        render_navbar(&configuration.secondary_navbar)
    ));
    output.push('\n');

    output.push_str(&format!(
        "FAVICON = {}\n",
        python_string_literal(configuration.favicon_path.as_authored())
    ));

    let stylesheets = configuration
        .stylesheets
        .iter()
        .map(|stylesheet| python_string_literal(stylesheet.url()))
        .collect::<Vec<_>>();
    output.push_str(&format!("STYLESHEETS = {}\n", render_list(&stylesheets, 1)));

    output
}


fn render_navbar(groups: &[NavbarGroup]) -> String {
    let entries = groups
        .iter()
        .map(|group| {
            let links = group
                .links
                .iter()
                .map(|link| {
                    format!(
                        "({}, {})",
                        python_optional_string(link.label.as_deref()),
                        python_string_literal(&link.target)
                    )
                })
                .collect::<Vec<_>>();

            format!(
                "({}, {}, {})",
                python_optional_string(group.label.as_deref()),
                python_string_literal(&group.target),
                render_list(&links, 2)
            )
        })
        .collect::<Vec<_>>();

    render_list(&entries, 1)
}

/// One element per line, trailing commas, `[]` when empty.
fn render_list(elements: &[String], depth: usize) -> String {
    if elements.is_empty() {
        return "[]".to_string();
    }

    let element_indent = INDENT.repeat(depth);
    let closing_indent = INDENT.repeat(depth - 1);

    let mut rendered = String::from("[\n");
    for element in elements {
        // Writing into a String cannot fail.
        let _ = writeln!(rendered, "{element_indent}{element},");
    }
    rendered.push_str(&closing_indent);
    rendered.push(']');

    rendered
}

fn python_optional_string(value: Option<&str>) -> String {
    match value {
        Some(value) => python_string_literal(value),
        None => "None".to_string(),
    }
}

/// Single-quoted Python string literal with backslashes, quotes and control characters escaped.
fn python_string_literal(value: &str) -> String {
    let mut literal = String::with_capacity(value.len() + 2);
    literal.push('\'');

    for character in value.chars() {
        match character {
            '\\' => literal.push_str("\\\\"),
            '\'' => literal.push_str("\\'"),
            '\n' => literal.push_str("\\n"),
            '\r' => literal.push_str("\\r"),
            '\t' => literal.push_str("\\t"),
            character if character.is_control() => {
                let _ = write!(literal, "\\x{:02x}", character as u32);
            }
            character => literal.push(character),
        }
    }

    literal.push('\'');
    literal
}
