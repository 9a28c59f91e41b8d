//! Links and list payloads shared by every category.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// A link to another upstream resource.
///
/// The upstream API uses this shape for list entries and for every nested
/// reference (a spell's school, a class's saving throws, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceRef {
    pub index: String,
    pub name: String,
    pub url: String,
}

/// Spell list entry. The spell list is the only list that carries a level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpellRef {
    pub index: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
    pub url: String,
}

/// Payload of every `GET /{category}` list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    #[serde(default)]
    pub count: usize,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

impl<T> ListResponse<T> {
    /// Build a list whose count matches its results.
    #[must_use]
    pub fn new(results: Vec<T>) -> Self {
        Self {
            count: results.len(),
            results,
        }
    }

    /// Pick one entry uniformly at random. `None` when the list is empty.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&T> {
        self.results.choose(rng)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl<T> Default for ListResponse<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn entry(index: &str) -> ResourceRef {
        ResourceRef {
            index: index.to_string(),
            name: index.to_uppercase(),
            url: format!("/api/things/{index}"),
        }
    }

    #[test]
    fn list_defaults_missing_fields() {
        let list: ListResponse<ResourceRef> = serde_json::from_str("{}").unwrap();
        assert_eq!(list.count, 0);
        assert!(list.is_empty());
    }

    #[test]
    fn choose_from_empty_list_is_none() {
        let list: ListResponse<ResourceRef> = ListResponse::default();
        let mut rng = StdRng::seed_from_u64(7);
        assert!(list.choose(&mut rng).is_none());
    }

    #[test]
    fn choose_returns_a_member() {
        let list = ListResponse::new(vec![entry("a"), entry("b"), entry("c")]);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let picked = list.choose(&mut rng).unwrap();
            assert!(list.results.contains(picked));
        }
    }

    #[test]
    fn spell_ref_omits_unknown_level() {
        let spell = SpellRef {
            index: "light".into(),
            name: "Light".into(),
            level: None,
            url: "/api/spells/light".into(),
        };
        let json = serde_json::to_string(&spell).unwrap();
        assert!(!json.contains("level"));
    }
}
