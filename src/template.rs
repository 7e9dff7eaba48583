//! Command template substitution.
//!
//! Hook commands and plugin command templates may reference run-time values
//! through `{variable}` placeholders. The vocabulary is fixed; referencing a
//! variable outside it is a hard error, detected both at configuration
//! validation time and at render time.

use regex::Regex;

use crate::context::RunContext;
use crate::error::{ReleaseError, Result};

/// The fixed substitution vocabulary.
pub const VARIABLES: &[&str] = &[
    "name",
    "version",
    "latestVersion",
    "tagName",
    "date",
    "commitSubject",
];

const PLACEHOLDER: &str = r"\{([A-Za-z]+)\}";

fn placeholder_regex() -> Result<Regex> {
    Regex::new(PLACEHOLDER).map_err(|e| ReleaseError::config(format!("bad placeholder pattern: {}", e)))
}

/// List the variable names referenced by a template, in order of appearance.
pub fn referenced_variables(template: &str) -> Result<Vec<String>> {
    let re = placeholder_regex()?;
    Ok(re
        .captures_iter(template)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
        .collect())
}

/// Check that every placeholder in a template is part of the vocabulary.
///
/// # Returns
/// * `Ok(())` - All placeholders are known
/// * `Err(ReleaseError::UnknownVariable)` - First offending variable
pub fn validate(template: &str) -> Result<()> {
    for variable in referenced_variables(template)? {
        if !VARIABLES.contains(&variable.as_str()) {
            return Err(ReleaseError::UnknownVariable {
                variable,
                template: template.to_string(),
            });
        }
    }
    Ok(())
}

/// Render a template against the current run context.
///
/// Substitutes every `{variable}` placeholder with its resolved value.
/// Text without placeholders passes through unchanged.
pub fn render(template: &str, ctx: &RunContext) -> Result<String> {
    let re = placeholder_regex()?;
    let mut rendered = String::with_capacity(template.len());
    let mut last = 0;

    for caps in re.captures_iter(template) {
        let whole = match caps.get(0) {
            Some(m) => m,
            None => continue,
        };
        let variable = caps
            .get(1)
            .map(|m| m.as_str())
            .unwrap_or_default()
            .to_string();

        let value = ctx
            .template_value(&variable)
            .ok_or_else(|| ReleaseError::UnknownVariable {
                variable,
                template: template.to_string(),
            })?;

        rendered.push_str(&template[last..whole.start()]);
        rendered.push_str(&value);
        last = whole.end();
    }

    rendered.push_str(&template[last..]);
    Ok(rendered)
}
