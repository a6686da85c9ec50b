//! Keyword resolution of player-typed fragments to items.
//!
//! Candidate collections (a ground pile, a shop list, an inventory) may hold
//! duplicates. Candidates are deduplicated and visited in identifier order, so
//! "first match" is the lexically smallest matching identifier.

use std::collections::BTreeSet;

use townsquare_foundation::ItemId;

use crate::item::{Item, ItemCatalog};

/// Resolves fragments against item keywords.
#[derive(Clone, Copy, Debug)]
pub struct Lexicon<'a> {
    catalog: &'a ItemCatalog,
}

impl<'a> Lexicon<'a> {
    /// Creates a lexicon over a catalog.
    #[must_use]
    pub fn new(catalog: &'a ItemCatalog) -> Self {
        Self { catalog }
    }

    /// Deduplicated, ordered templates for the candidates. Unknown
    /// identifiers are skipped.
    fn candidates<'i>(&self, ids: impl IntoIterator<Item = &'i ItemId>) -> Vec<&'a Item> {
        ids.into_iter()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .filter_map(|id| self.catalog.get(id.as_str()))
            .collect()
    }

    /// Returns the first item whose keywords contain `fragment`.
    #[must_use]
    pub fn first_match<'i>(
        &self,
        fragment: &str,
        ids: impl IntoIterator<Item = &'i ItemId>,
    ) -> Option<&'a Item> {
        let word = normalize(fragment);
        self.candidates(ids).into_iter().find(|item| item.matches(&word))
    }

    /// Returns every item whose keywords contain `fragment`.
    #[must_use]
    pub fn all_matches<'i>(
        &self,
        fragment: &str,
        ids: impl IntoIterator<Item = &'i ItemId>,
    ) -> Vec<&'a Item> {
        let word = normalize(fragment);
        self.candidates(ids)
            .into_iter()
            .filter(|item| item.matches(&word))
            .collect()
    }

    /// Union of every keyword of every candidate.
    #[must_use]
    pub fn all_keywords<'i>(&self, ids: impl IntoIterator<Item = &'i ItemId>) -> BTreeSet<&'a str> {
        self.candidates(ids)
            .into_iter()
            .flat_map(|item| item.keywords.iter().map(String::as_str))
            .collect()
    }

    /// Union of each candidate's primary keyword.
    #[must_use]
    pub fn primary_keywords<'i>(
        &self,
        ids: impl IntoIterator<Item = &'i ItemId>,
    ) -> BTreeSet<&'a str> {
        self.candidates(ids)
            .into_iter()
            .map(Item::primary_keyword)
            .collect()
    }
}

fn normalize(fragment: &str) -> String {
    fragment.trim().to_lowercase()
}
