//! Helper functions callable from template text.

use convert_case::{Case, Casing};
use minijinja::{Environment, Error, ErrorKind};

use crate::domain::names::pluralize;

type Helper = fn(&str) -> Result<String, Error>;

/// The fixed helper set. Registered once per environment, never mutated.
static HELPERS: [(&str, Helper); 4] =
    [("lower", lower), ("kebab", kebab), ("plural", plural), ("gha_expr", gha_expr)];

pub fn register_helpers(env: &mut Environment<'_>) {
    for (name, helper) in HELPERS {
        env.add_function(name, helper);
    }
}

pub fn helper_names() -> impl Iterator<Item = &'static str> {
    HELPERS.iter().map(|(name, _)| *name)
}

fn lower(value: &str) -> Result<String, Error> {
    Ok(value.to_lowercase())
}

fn kebab(value: &str) -> Result<String, Error> {
    Ok(value.to_case(Case::Kebab))
}

fn plural(value: &str) -> Result<String, Error> {
    if value.is_empty() {
        return Err(Error::new(ErrorKind::InvalidOperation, "plural() requires a non-empty word"));
    }
    Ok(pluralize(value))
}

/// Emit a GitHub Actions expression without clashing with template syntax.
fn gha_expr(expr: &str) -> Result<String, Error> {
    Ok(format!("${{{{ {} }}}}", expr))
}
