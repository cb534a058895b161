use std::sync::Arc;

use tracing::info;

use super::{
    filter::{
        filter_options,
        FilterOptions,
    },
    models::{
        Amiibo,
        Region,
    },
    stats::{
        origin_leaderboard,
        release_timeline,
        series_distribution,
        top_series,
        SeriesSlice,
        TimelineBucket,
        TOP_SERIES_COUNT,
    },
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryCounts {
    pub total: usize,
    pub top_origin: String,
    pub game_count: usize,
}

/// Immutable view of the fetched catalog and everything derived from it.
///
/// Built once when the fetch completes and swapped in wholesale; the derived views are
/// memoized here so the dashboard never recomputes them per frame. The default value is the
/// empty state shown before (or instead of) a successful fetch.
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    records: Arc<Vec<Amiibo>>,
    region: Region,
    summary: SummaryCounts,
    timeline: Vec<TimelineBucket>,
    distribution: Vec<SeriesSlice>,
    top_series: Vec<String>,
    options: FilterOptions,
}

impl CatalogSnapshot {
    pub fn new(records: Vec<Amiibo>, region: Region) -> Self {
        Self::derive(Arc::new(records), region)
    }

    fn derive(records: Arc<Vec<Amiibo>>, region: Region) -> Self {
        let leaderboard = origin_leaderboard(&records);
        let summary = SummaryCounts {
            total: records.len(),
            top_origin: leaderboard.top_origin,
            game_count: leaderboard.game_count,
        };

        let snapshot = Self {
            timeline: release_timeline(&records, region),
            distribution: series_distribution(&records),
            top_series: top_series(&records, TOP_SERIES_COUNT),
            options: filter_options(&records),
            summary,
            region,
            records,
        };

        info!(
            records = snapshot.summary.total,
            top_origin = %snapshot.summary.top_origin,
            games = snapshot.summary.game_count,
            months = snapshot.timeline.len(),
            region = region.key(),
            "catalog snapshot ready"
        );

        snapshot
    }

    /// Same records, views rebuilt for another release region.
    pub fn with_region(&self, region: Region) -> Self {
        Self::derive(Arc::clone(&self.records), region)
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Amiibo] {
        &self.records
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn summary(&self) -> &SummaryCounts {
        &self.summary
    }

    pub fn timeline(&self) -> &[TimelineBucket] {
        &self.timeline
    }

    pub fn distribution(&self) -> &[SeriesSlice] {
        &self.distribution
    }

    pub fn top_series(&self) -> &[String] {
        &self.top_series
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    /// First record whose identifier equals `id`.
    pub fn find(&self, id: &str) -> Option<&Amiibo> {
        self.records.iter().find(|amiibo| amiibo.id() == id)
    }
}
