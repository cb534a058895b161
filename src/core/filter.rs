use std::collections::HashSet;

use super::{
    models::Amiibo,
    utils::text_matches_search,
};

/// The three table predicates. Empty fields match everything; all three are AND-combined.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    pub search: String,
    pub amiibo_series: String,
    pub game_series: String,
}

impl CatalogFilter {
    pub fn new(
        search: impl Into<String>,
        amiibo_series: impl Into<String>,
        game_series: impl Into<String>,
    ) -> Self {
        Self {
            search: search.into(),
            amiibo_series: amiibo_series.into(),
            game_series: game_series.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.amiibo_series.is_empty() && self.game_series.is_empty()
    }

    pub fn matches(&self, amiibo: &Amiibo) -> bool {
        text_matches_search(&amiibo.character, &self.search)
            && (self.amiibo_series.is_empty() || amiibo.amiibo_series == self.amiibo_series)
            && (self.game_series.is_empty() || amiibo.game_series == self.game_series)
    }
}

pub fn filter_catalog<'a>(records: &'a [Amiibo], filter: &CatalogFilter) -> Vec<&'a Amiibo> {
    records.iter().filter(|amiibo| filter.matches(amiibo)).collect()
}

pub fn filter_indices(records: &[Amiibo], filter: &CatalogFilter) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, amiibo)| filter.matches(amiibo))
        .map(|(index, _)| index)
        .collect()
}

/// Dropdown vocabularies, in first-encounter order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub amiibo_series: Vec<String>,
    pub game_series: Vec<String>,
}

pub fn filter_options(records: &[Amiibo]) -> FilterOptions {
    FilterOptions {
        amiibo_series: distinct(records.iter().map(|amiibo| amiibo.amiibo_series.as_str())),
        game_series: distinct(records.iter().map(|amiibo| amiibo.game_series.as_str())),
    }
}

fn distinct<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    labels.filter(|label| seen.insert(*label)).map(str::to_string).collect()
}
