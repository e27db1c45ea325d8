use std::collections::HashSet;
use std::fmt::Write as _;

use serde::Serialize;

use crate::foundation::error::{StudioError, StudioResult};
use crate::tokens::catalog::{TYPE_PRESETS, Token, TokenGroup, TypePreset, all_groups, all_tokens};

/// Reference string copied for a token: `var(--name)`.
pub fn css_reference(name: &str) -> String {
    format!("var({name})")
}

/// Concrete value of the catalog token `name`, following aliases.
pub fn resolve(name: &str) -> StudioResult<&'static str> {
    let tokens: Vec<&'static Token> = all_tokens().collect();
    resolve_in(&tokens, name)
}

/// Follow `name` through `tokens` until a token without a reference; unknown names and alias
/// cycles are errors.
pub fn resolve_in<'a>(tokens: &[&'a Token], name: &str) -> StudioResult<&'a str> {
    let mut seen = HashSet::new();
    let mut current = name;
    loop {
        if !seen.insert(current) {
            return Err(StudioError::evaluation(format!(
                "token reference cycle through '{current}' while resolving '{name}'"
            )));
        }
        let token = tokens
            .iter()
            .find(|t| t.name == current)
            .ok_or_else(|| StudioError::evaluation(format!("unknown token '{current}'")))?;
        match token.reference {
            Some(next) => current = next,
            None => return Ok(token.value),
        }
    }
}

/// Catalog as a `:root { ... }` stylesheet; aliases render as `var(--ref)`.
pub fn to_css<'a>(groups: impl IntoIterator<Item = &'a TokenGroup>) -> String {
    let mut out = String::from(":root {\n");
    for g in groups {
        let _ = writeln!(out, "  /* {} */", g.title);
        for t in g.tokens {
            let value = match t.reference {
                Some(r) => css_reference(r),
                None => t.value.to_owned(),
            };
            let _ = writeln!(out, "  {}: {value};", t.name);
        }
    }
    out.push_str("}\n");
    out
}

/// The whole catalog as CSS.
pub fn catalog_css() -> String {
    to_css(all_groups())
}

#[derive(Serialize)]
struct CatalogJson<'a> {
    groups: Vec<&'a TokenGroup>,
    presets: &'a [TypePreset],
}

/// The whole catalog, groups and typography presets, as pretty JSON.
pub fn catalog_json() -> StudioResult<String> {
    let doc = CatalogJson {
        groups: all_groups().collect(),
        presets: &TYPE_PRESETS,
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

#[cfg(test)]
#[path = "../../tests/unit/tokens/export.rs"]
mod tests;
