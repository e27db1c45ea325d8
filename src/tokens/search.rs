use serde::Serialize;

use crate::tokens::catalog::{Category, Token, TokenGroup, TypePreset};

/// A token group narrowed to the rows matching a query.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GroupView {
    /// Group kind.
    pub category: Category,
    /// Display title.
    pub title: &'static str,
    /// Matching tokens in catalog order.
    pub tokens: Vec<&'static Token>,
}

/// Normalized search query.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query {
    needle: String,
}

impl Query {
    /// Lowercase `raw`. Whitespace is kept, so `" "` only matches text containing a space.
    pub fn new(raw: &str) -> Self {
        Self {
            needle: raw.to_lowercase(),
        }
    }

    /// Return `true` when the query matches everything.
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// A token matches on its name, or on its value or usage note compared case-insensitively.
    pub fn matches(&self, token: &Token) -> bool {
        if self.is_empty() {
            return true;
        }
        let q = self.needle.as_str();
        token.name.contains(q)
            || token.value.to_lowercase().contains(q)
            || token.usage.is_some_and(|u| u.to_lowercase().contains(q))
    }

    /// Presets match on their name.
    pub fn matches_preset(&self, preset: &TypePreset) -> bool {
        self.is_empty() || preset.name.contains(self.needle.as_str())
    }
}

/// Narrow `groups` to the matching rows, dropping groups left empty.
pub fn filter_groups<'a>(
    groups: impl IntoIterator<Item = &'a TokenGroup>,
    query: &Query,
) -> Vec<GroupView> {
    groups
        .into_iter()
        .filter_map(|g| {
            let tokens: Vec<&'static Token> =
                g.tokens.iter().filter(|t| query.matches(t)).collect();
            (!tokens.is_empty()).then_some(GroupView {
                category: g.category,
                title: g.title,
                tokens,
            })
        })
        .collect()
}

/// Presets whose name matches.
pub fn filter_presets<'a>(
    presets: impl IntoIterator<Item = &'a TypePreset>,
    query: &Query,
) -> Vec<&'a TypePreset> {
    presets
        .into_iter()
        .filter(|p| query.matches_preset(p))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/tokens/search.rs"]
mod tests;
