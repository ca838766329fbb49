//! Help text rendered from the schema.

use itertools::Itertools;

use crate::schema::{Schema, Subargument, Subcommand};

const NAME_COLUMN_WIDTH: usize = 22;

/// Renders one line per subcommand and subargument.
///
/// Subcommands which take subarguments get a second line listing them,
/// required ones first.
#[must_use]
pub fn render_options(schema: &Schema) -> String {
    let mut out = String::from("Subcommands:\n");
    for subcommand in schema.subcommands() {
        out.push_str(&entry_line(&subcommand.subargument));
        if let Some(usage) = subcommand_usage(schema, subcommand) {
            out.push_str(&format!(
                "  {:width$}     {usage}\n",
                "",
                width = NAME_COLUMN_WIDTH
            ));
        }
    }

    if !schema.subarguments().is_empty() {
        out.push_str("\nSubarguments:\n");
        for subargument in schema.subarguments() {
            out.push_str(&entry_line(subargument));
        }
    }

    out
}

/// The subarguments a subcommand takes, e.g. `--url=URL [--image=FILE]`.
///
/// Returns `None` for subcommands which take no subarguments.
#[must_use]
pub fn subcommand_usage(schema: &Schema, subcommand: &Subcommand) -> Option<String> {
    let required = subcommand
        .required_subarguments
        .iter()
        .filter_map(|name| schema.subargument(name))
        .map(|subargument| subargument.format(false, false));
    let optional = subcommand
        .optional_subarguments
        .iter()
        .filter_map(|name| schema.subargument(name))
        .map(|subargument| subargument.format(false, true));

    let usage = required.chain(optional).join(" ");
    if usage.is_empty() {
        None
    } else {
        Some(usage)
    }
}

/// The hint printed when the tool is started without a subcommand.
#[must_use]
pub fn render_usage(program_name: &str) -> String {
    format!("  Usage: {program_name} --help")
}

fn entry_line(entry: &Subargument) -> String {
    format!(
        "  -{}, {:<width$} {}\n",
        entry.abbreviation,
        entry.format(false, false),
        entry.description,
        width = NAME_COLUMN_WIDTH
    )
}
