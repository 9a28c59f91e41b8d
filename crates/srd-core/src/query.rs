//! # Names and List Filters
//!
//! Turns tool arguments into the two things the upstream API understands:
//! resource indexes (`magic-missile`) and list query strings
//! (`level=3&school=evocation`).

// =============================================================================
// NAME → INDEX
// =============================================================================

/// Convert a free-form name into an upstream index.
///
/// Lowercases, trims surrounding whitespace and replaces each space with `-`.
/// Already-kebab input is returned unchanged.
#[must_use]
pub fn to_index(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "-")
}

// =============================================================================
// FILTERS
// =============================================================================

/// A filter that renders to a list query string (without the leading `?`).
pub trait ListFilter {
    /// Empty when no filter is set.
    fn query_string(&self) -> String;
}

/// Filters accepted by `GET /spells`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpellFilter {
    /// Spell level; `0` selects cantrips.
    pub level: Option<u8>,
    /// Magic school index (e.g. `evocation`).
    pub school: Option<String>,
}

impl ListFilter for SpellFilter {
    fn query_string(&self) -> String {
        let mut params = Vec::new();
        if let Some(level) = self.level {
            params.push(format!("level={level}"));
        }
        if let Some(school) = self.school.as_deref().map(str::trim)
            && !school.is_empty()
        {
            params.push(format!("school={}", to_index(school)));
        }
        params.join("&")
    }
}

/// Filters accepted by `GET /monsters`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonsterFilter {
    /// Challenge ratings to match (any of).
    pub challenge_rating: Vec<f64>,
}

impl ListFilter for MonsterFilter {
    fn query_string(&self) -> String {
        if self.challenge_rating.is_empty() {
            return String::new();
        }
        let ratings: Vec<String> = self
            .challenge_rating
            .iter()
            .map(|cr| format_challenge_rating(*cr))
            .collect();
        format!("challenge_rating={}", ratings.join(","))
    }
}

/// Render a challenge rating the way the upstream API spells it:
/// `0.125`, `0.25`, `1`, `10`. Whole ratings carry no fractional part.
#[must_use]
pub fn format_challenge_rating(cr: f64) -> String {
    cr.to_string()
}
