//! Matching of raw options against the schema.
//!
//! Validation runs in two stages. The first binds every declared entry to
//! its raw value, draining the raw maps and checking each entry's value
//! policy. The second checks the bound entries against the selected
//! subcommand.

use indexmap::IndexMap;
use log::{debug, info};

use crate::binding::Binding;
use crate::error::{Error, Result};
use crate::parsing::RawArguments;
use crate::schema::{Schema, Subargument, Subcommand};

/// Validates `raw` against `schema` and produces the binding.
///
/// # Errors
///
/// Returns an error if:
/// - An entry is given in both its long and short form
/// - A value is given to an entry which forbids one, or is missing from an
///   entry which requires one
/// - An option matches no declared entry
/// - More than one subcommand is given
/// - The selected subcommand misses a required subargument
/// - A subargument is given which the selected subcommand does not permit,
///   or no subcommand is selected at all
pub fn bind(schema: &Schema, mut raw: RawArguments, program_name: String) -> Result<Binding<'_>> {
    let values = bind_entries(schema, &mut raw)?;

    if let Some(leftover) = raw.first_leftover() {
        return Err(Error::UnknownParameter(leftover));
    }

    let selected = select_subcommand(schema, &values)?;
    match selected {
        Some(subcommand) => check_subcommand_scope(schema, subcommand, &values)?,
        None => check_no_subarguments(schema, &values)?,
    }

    Ok(Binding::new(schema, program_name, selected, values))
}

fn bind_entries(schema: &Schema, raw: &mut RawArguments) -> Result<IndexMap<String, String>> {
    let mut values = IndexMap::new();

    for entry in schema.entries() {
        let by_name = raw.take_name(&entry.name);
        let by_abbreviation = raw.take_abbreviation(entry.abbreviation);

        let value = match (by_name, by_abbreviation) {
            (Some(_), Some(_)) => return Err(Error::conflict(&entry.name, entry.abbreviation)),
            (Some(value), None) | (None, Some(value)) => value,
            (None, None) => continue,
        };

        check_value(entry, &value)?;
        debug!("Bound `--{}` to \"{}\"", entry.name, value);
        values.insert(entry.name.clone(), value);
    }

    Ok(values)
}

fn check_value(entry: &Subargument, value: &str) -> Result<()> {
    if !entry.value_allowed && !value.is_empty() {
        return Err(Error::invalid_value(&entry.name, value));
    }

    if !entry.value_empty_allowed && value.is_empty() {
        return Err(Error::MissingValue(entry.name.clone()));
    }

    Ok(())
}

fn select_subcommand<'s>(
    schema: &'s Schema,
    values: &IndexMap<String, String>,
) -> Result<Option<&'s Subcommand>> {
    let mut selected: Option<&'s Subcommand> = None;

    for subcommand in schema.subcommands() {
        if !values.contains_key(subcommand.name()) {
            continue;
        }

        if let Some(first) = selected {
            return Err(Error::MultipleSubcommands(
                first.name().to_string(),
                subcommand.name().to_string(),
            ));
        }
        selected = Some(subcommand);
    }

    if let Some(subcommand) = selected {
        info!("Selected subcommand `--{}`", subcommand.name());
    }

    Ok(selected)
}

fn check_subcommand_scope(
    schema: &Schema,
    subcommand: &Subcommand,
    values: &IndexMap<String, String>,
) -> Result<()> {
    if let Some(missing) = subcommand
        .required_subarguments
        .iter()
        .find(|name| !values.contains_key(name.as_str()))
    {
        return Err(Error::missing_required(subcommand.name(), missing));
    }

    if let Some(stray) = set_subarguments(schema, values).find(|name| !subcommand.permits(name)) {
        return Err(Error::not_applicable(subcommand.name(), stray));
    }

    Ok(())
}

fn check_no_subarguments(schema: &Schema, values: &IndexMap<String, String>) -> Result<()> {
    match set_subarguments(schema, values).next() {
        Some(stray) => Err(Error::SubargumentWithoutSubcommand(stray.to_string())),
        None => Ok(()),
    }
}

fn set_subarguments<'a>(
    schema: &'a Schema,
    values: &'a IndexMap<String, String>,
) -> impl Iterator<Item = &'a str> {
    schema
        .subarguments()
        .iter()
        .map(|subargument| subargument.name.as_str())
        .filter(|name| values.contains_key(*name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::parse_raw;
    use pretty_assertions::assert_eq;

    fn schema() -> Schema {
        Schema::new(
            vec![
                Subcommand::new(Subargument::flag("help", '?', "display this help and exit")),
                Subcommand::new(Subargument::flag("version", 'V', "output version information")),
                Subcommand::new(Subargument::flag("sign", 's', "sign a post"))
                    .requires(&["platform"])
                    .accepts(&["image"]),
                Subcommand::new(Subargument::flag("verify", 'v', "verify a post"))
                    .requires(&["url"])
                    .accepts(&["image"]),
            ],
            vec![
                Subargument::with_value("platform", 'p', "platform id", "PLATFORM"),
                Subargument::with_value("url", 'u', "post URL", "URL"),
                Subargument::with_value("image", 'i', "signature image", "FILE"),
                Subargument::with_optional_value("level", 'l', "log level", "LEVEL"),
            ],
        )
        .unwrap()
    }

    fn validate<'s>(schema: &'s Schema, arguments: &[&str]) -> Result<Binding<'s>> {
        let raw = parse_raw(arguments)?;
        bind(schema, raw, "smsigner".to_string())
    }

    #[test]
    fn test_nothing_given() {
        let schema = schema();
        let binding = validate(&schema, &[]).unwrap();
        assert!(binding.selected_subcommand().is_none());
        assert_eq!(binding.subarguments().count(), 0);
    }

    #[test]
    fn test_long_form() {
        let schema = schema();
        let binding = validate(&schema, &["--verify", "--url=https://x/y"]).unwrap();
        assert_eq!(binding.selected_subcommand().map(Subcommand::name), Some("verify"));
        assert_eq!(binding.value("url"), "https://x/y");
    }

    #[test]
    fn test_short_form_matches_long_form() {
        let schema = schema();
        let long = validate(&schema, &["--verify", "--url=https://x/y"]).unwrap();
        let short = validate(&schema, &["-v", "-u", "https://x/y"]).unwrap();
        assert_eq!(long, short);
    }

    #[test]
    fn test_optional_subargument() {
        let schema = schema();
        let binding = validate(&schema, &["-s", "-p", "x", "--image=sig.png"]).unwrap();
        assert_eq!(binding.value("platform"), "x");
        assert_eq!(binding.value("image"), "sig.png");
    }

    #[test]
    fn test_conflict() {
        let schema = schema();
        let result = validate(&schema, &["-v", "--url=a", "-u", "b"]);
        assert_eq!(result.unwrap_err(), Error::conflict("url", 'u'));
    }

    #[test]
    fn test_value_on_flag() {
        let schema = schema();
        let result = validate(&schema, &["--help=yes"]);
        assert_eq!(result.unwrap_err(), Error::invalid_value("help", "yes"));
    }

    #[test]
    fn test_short_flag_steals_value() {
        let schema = schema();
        let result = validate(&schema, &["-?", "stray"]);
        assert_eq!(result.unwrap_err(), Error::invalid_value("help", "stray"));
    }

    #[test]
    fn test_missing_value() {
        let schema = schema();
        let result = validate(&schema, &["--verify", "--url"]);
        assert_eq!(result.unwrap_err(), Error::MissingValue("url".to_string()));
    }

    #[test]
    fn test_explicit_empty_value_counts_as_missing() {
        let schema = schema();
        let result = validate(&schema, &["--verify", "--url="]);
        assert_eq!(result.unwrap_err(), Error::MissingValue("url".to_string()));
    }

    #[test]
    fn test_optional_value_may_be_empty() {
        let schema = schema();
        let result = validate(&schema, &["--level="]);
        // Bound fine, but no subcommand permits it
        assert_eq!(
            result.unwrap_err(),
            Error::SubargumentWithoutSubcommand("level".to_string())
        );
    }

    #[test]
    fn test_multiple_subcommands() {
        let schema = schema();
        let result = validate(&schema, &["--help", "--version"]);
        assert_eq!(
            result.unwrap_err(),
            Error::MultipleSubcommands("help".to_string(), "version".to_string())
        );
    }

    #[test]
    fn test_missing_required() {
        let schema = schema();
        let result = validate(&schema, &["--verify"]);
        assert_eq!(result.unwrap_err(), Error::missing_required("verify", "url"));
    }

    #[test]
    fn test_not_applicable() {
        let schema = schema();
        let result = validate(&schema, &["--verify", "--url=a", "--platform=x"]);
        assert_eq!(result.unwrap_err(), Error::not_applicable("verify", "platform"));
    }

    #[test]
    fn test_without_subcommand() {
        let schema = schema();
        let result = validate(&schema, &["--url=a"]);
        assert_eq!(
            result.unwrap_err(),
            Error::SubargumentWithoutSubcommand("url".to_string())
        );
    }

    #[test]
    fn test_unknown_long_name() {
        let schema = schema();
        let result = validate(&schema, &["--bogus"]);
        assert_eq!(
            result.unwrap_err(),
            Error::UnknownParameter("--bogus".to_string())
        );
    }

    #[test]
    fn test_unknown_reported_before_scope_checks() {
        let schema = schema();
        let result = validate(&schema, &["-x", "--verify", "--bogus"]);
        assert_eq!(
            result.unwrap_err(),
            Error::UnknownParameter("--bogus".to_string())
        );
    }

    #[test]
    fn test_unknown_abbreviation() {
        let schema = schema();
        let result = validate(&schema, &["-?", "-x"]);
        assert_eq!(result.unwrap_err(), Error::UnknownParameter("-x".to_string()));
    }
}
