//! The validated result of a parse.

use indexmap::IndexMap;

use crate::schema::{Schema, Subargument, Subcommand};

/// Which subcommand was requested, with which subarguments and values.
///
/// A binding borrows the [`Schema`] it was validated against and records
/// only the entries which were set. It is the only thing the rest of the
/// program gets to see of the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding<'s> {
    schema: &'s Schema,
    program_name: String,
    selected: Option<&'s Subcommand>,
    values: IndexMap<String, String>,
}

impl<'s> Binding<'s> {
    pub(crate) fn new(
        schema: &'s Schema,
        program_name: String,
        selected: Option<&'s Subcommand>,
        values: IndexMap<String, String>,
    ) -> Self {
        Self {
            schema,
            program_name,
            selected,
            values,
        }
    }

    #[must_use]
    pub fn schema(&self) -> &'s Schema {
        self.schema
    }

    /// The program name shown in diagnostics and help.
    #[must_use]
    pub fn program_name(&self) -> &str {
        &self.program_name
    }

    #[must_use]
    pub fn selected_subcommand(&self) -> Option<&'s Subcommand> {
        self.selected
    }

    /// Returns `true` if the named entry was given on the command line.
    #[must_use]
    pub fn is_set(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// The value bound to the named entry.
    ///
    /// Unset entries and entries given without a value both yield the empty
    /// string; use [`Binding::is_set`] to tell them apart.
    #[must_use]
    pub fn value(&self, name: &str) -> &str {
        self.get(name).unwrap_or_default()
    }

    /// The value bound to the named entry, if it was set.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Every set subargument which is not a subcommand, in declaration
    /// order, with its value.
    pub fn subarguments(&self) -> impl Iterator<Item = (&'s Subargument, &str)> + '_ {
        self.schema
            .subarguments()
            .iter()
            .filter_map(|subargument| {
                self.get(&subargument.name)
                    .map(|value| (subargument, value))
            })
    }
}
