use std::collections::{
    BTreeMap,
    HashMap,
    HashSet,
};

use tracing::debug;

use super::{
    models::{
        Amiibo,
        Region,
    },
    utils::{
        month_bucket,
        parse_release_date,
    },
};

pub const DISTRIBUTION_SLICES: usize = 8;
pub const OTHERS_LABEL: &str = "Others";
pub const TOP_SERIES_COUNT: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OriginLeaderboard {
    /// Game series with the most amiibo. Empty when there is no data.
    pub top_origin: String,
    /// Number of distinct amiibo series; a missing series counts as one label.
    pub game_count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimelineBucket {
    pub date: String, // YYYY-MM
    pub total: usize,
    pub series: BTreeMap<String, usize>,
}

impl TimelineBucket {
    pub fn series_count(&self, series: &str) -> usize {
        self.series.get(series).copied().unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesSlice {
    pub name: String,
    pub value: usize,
}

/// Counts labels in first-encounter order.
fn tally<'a, F>(records: &'a [Amiibo], label: F) -> Vec<(&'a str, usize)>
where
    F: Fn(&'a Amiibo) -> &'a str,
{
    let mut positions: HashMap<&'a str, usize> = HashMap::new();
    let mut counts: Vec<(&'a str, usize)> = Vec::new();

    for amiibo in records {
        let key = label(amiibo);
        match positions.get(key) {
            Some(&index) => counts[index].1 += 1,
            None => {
                positions.insert(key, counts.len());
                counts.push((key, 1));
            }
        }
    }

    counts
}

/// Amiibo series ordered by descending count. `sort_by` is stable, so equal counts keep
/// the order in which the series first appeared.
fn ranked_series(records: &[Amiibo]) -> Vec<(&str, usize)> {
    let mut counts = tally(records, |amiibo| amiibo.amiibo_series.as_str());
    counts.retain(|(name, _)| !name.is_empty());
    counts.sort_by(|lhs, rhs| rhs.1.cmp(&lhs.1));
    counts
}

pub fn origin_leaderboard(records: &[Amiibo]) -> OriginLeaderboard {
    let origins = tally(records, |amiibo| amiibo.game_series.as_str());

    let mut top_origin = "";
    let mut max_count = 0;
    for (origin, count) in origins {
        if count > max_count {
            max_count = count;
            top_origin = origin;
        }
    }

    let games: HashSet<&str> = records
        .iter()
        .map(|amiibo| amiibo.amiibo_series.as_str())
        .collect();

    OriginLeaderboard { top_origin: top_origin.to_string(), game_count: games.len() }
}

pub fn release_timeline(records: &[Amiibo], region: Region) -> Vec<TimelineBucket> {
    let mut buckets: BTreeMap<String, TimelineBucket> = BTreeMap::new();
    let mut skipped = 0usize;

    for amiibo in records {
        let Some(date) = amiibo.release_date(region).and_then(parse_release_date) else {
            skipped += 1;
            continue;
        };

        let key = month_bucket(date);
        let bucket = buckets
            .entry(key.clone())
            .or_insert_with(|| TimelineBucket { date: key, ..Default::default() });

        bucket.total += 1;
        if !amiibo.amiibo_series.is_empty() {
            *bucket.series.entry(amiibo.amiibo_series.clone()).or_insert(0) += 1;
        }
    }

    debug!(
        region = region.key(),
        buckets = buckets.len(),
        skipped,
        "built release timeline"
    );

    buckets.into_values().collect()
}

pub fn series_distribution(records: &[Amiibo]) -> Vec<SeriesSlice> {
    let ranked = ranked_series(records);

    let mut slices: Vec<SeriesSlice> = ranked
        .iter()
        .take(DISTRIBUTION_SLICES)
        .map(|(name, value)| SeriesSlice { name: name.to_string(), value: *value })
        .collect();

    if ranked.len() > DISTRIBUTION_SLICES {
        let others: usize = ranked[DISTRIBUTION_SLICES..].iter().map(|(_, count)| count).sum();
        if others > 0 {
            slices.push(SeriesSlice { name: OTHERS_LABEL.to_string(), value: others });
        }
    }

    slices
}

pub fn top_series(records: &[Amiibo], n: usize) -> Vec<String> {
    ranked_series(records).into_iter().take(n).map(|(name, _)| name.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::ReleaseDates;

    fn amiibo(character: &str, series: &str, game: &str, na: Option<&str>) -> Amiibo {
        Amiibo {
            tail: format!("{:08x}", character.len()),
            character: character.to_string(),
            amiibo_series: series.to_string(),
            game_series: game.to_string(),
            release: Some(ReleaseDates { na: na.map(str::to_string), ..Default::default() }),
            ..Default::default()
        }
    }

    fn scenario() -> Vec<Amiibo> {
        vec![
            amiibo("Mario", "Super Mario", "Super Mario", Some("2014-11-21")),
            amiibo("Luigi", "Super Mario", "Super Mario", Some("2014-11-21")),
            amiibo("Link", "Zelda", "Zelda", Some("2014-11-21")),
        ]
    }

    /// Series `s0..s{n}` where `s{i}` appears `n - i` times.
    fn descending_series(n: usize) -> Vec<Amiibo> {
        let mut records = Vec::new();
        for i in 0..n {
            for _ in 0..(n - i) {
                records.push(amiibo("x", &format!("s{i}"), "g", None));
            }
        }
        records
    }

    #[test]
    fn mario_scenario() {
        let records = scenario();

        let leaderboard = origin_leaderboard(&records);
        assert_eq!(leaderboard.top_origin, "Super Mario");
        assert_eq!(leaderboard.game_count, 2);

        let timeline = release_timeline(&records, Region::Na);
        assert_eq!(timeline.len(), 1);
        assert_eq!(timeline[0].date, "2014-11");
        assert_eq!(timeline[0].total, 3);
        assert_eq!(timeline[0].series_count("Super Mario"), 2);
        assert_eq!(timeline[0].series_count("Zelda"), 1);

        assert_eq!(
            series_distribution(&records),
            vec![
                SeriesSlice { name: "Super Mario".to_string(), value: 2 },
                SeriesSlice { name: "Zelda".to_string(), value: 1 },
            ]
        );

        assert_eq!(top_series(&records, TOP_SERIES_COUNT), vec!["Super Mario", "Zelda"]);
    }

    #[test]
    fn empty_input() {
        assert_eq!(origin_leaderboard(&[]), OriginLeaderboard::default());
        assert!(release_timeline(&[], Region::Na).is_empty());
        assert!(series_distribution(&[]).is_empty());
        assert!(top_series(&[], 5).is_empty());
    }

    #[test]
    fn leaderboard_tie_goes_to_first_seen() {
        let records = vec![
            amiibo("a", "S1", "Zelda", None),
            amiibo("b", "S1", "Kirby", None),
            amiibo("c", "S2", "Kirby", None),
            amiibo("d", "S2", "Zelda", None),
        ];
        assert_eq!(origin_leaderboard(&records).top_origin, "Zelda");
    }

    #[test]
    fn leaderboard_keeps_missing_origin_as_empty_key() {
        let records = vec![amiibo("a", "S1", "", None), amiibo("b", "", "", None)];
        let leaderboard = origin_leaderboard(&records);
        assert_eq!(leaderboard.top_origin, "");
        assert_eq!(leaderboard.game_count, 2);
    }

    #[test]
    fn timeline_skips_missing_and_bad_dates() {
        let mut records = vec![
            amiibo("a", "S1", "g", Some("2015-03-20")),
            amiibo("b", "S1", "g", None),
            amiibo("c", "S2", "g", Some("")),
            amiibo("d", "S2", "g", Some("not a date")),
            amiibo("e", "S2", "g", Some("2014-12-05")),
            amiibo("f", "S1", "g", Some("2015-03-01")),
        ];
        records.push(Amiibo { release: None, ..amiibo("g", "S3", "g", None) });

        let timeline = release_timeline(&records, Region::Na);
        let keys: Vec<&str> = timeline.iter().map(|bucket| bucket.date.as_str()).collect();
        assert_eq!(keys, vec!["2014-12", "2015-03"]);
        assert!(timeline.iter().all(|bucket| bucket.total > 0));
        assert_eq!(timeline[1].total, 2);
        assert_eq!(timeline[1].series_count("S1"), 2);
        assert_eq!(timeline[1].series_count("S2"), 0);

        let total: usize = timeline.iter().map(|bucket| bucket.total).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn timeline_reads_designated_region() {
        let record = Amiibo {
            amiibo_series: "S1".to_string(),
            release: Some(ReleaseDates {
                na: Some("2014-11-21".to_string()),
                jp: Some("2014-12-06".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let records = vec![record];

        assert_eq!(release_timeline(&records, Region::Jp)[0].date, "2014-12");
        assert!(release_timeline(&records, Region::Eu).is_empty());
    }

    #[test]
    fn timeline_keys_sort_across_months_and_years() {
        let records = vec![
            amiibo("a", "S", "g", Some("2016-10-01")),
            amiibo("b", "S", "g", Some("2016-02-01")),
            amiibo("c", "S", "g", Some("2015-11-01")),
            amiibo("d", "S", "g", Some("2016-02-15")),
        ];
        let keys: Vec<String> =
            release_timeline(&records, Region::Na).into_iter().map(|bucket| bucket.date).collect();
        assert_eq!(keys, vec!["2015-11", "2016-02", "2016-10"]);
    }

    #[test]
    fn distribution_without_others_up_to_eight_series() {
        let records = descending_series(8);
        let slices = series_distribution(&records);
        assert_eq!(slices.len(), 8);
        assert!(slices.iter().all(|slice| slice.name != OTHERS_LABEL));
        assert_eq!(slices.iter().map(|slice| slice.value).sum::<usize>(), records.len());
    }

    #[test]
    fn distribution_merges_tail_into_others() {
        let records = descending_series(11);
        let slices = series_distribution(&records);

        assert_eq!(slices.len(), DISTRIBUTION_SLICES + 1);
        assert_eq!(slices[0], SeriesSlice { name: "s0".to_string(), value: 11 });
        // s8, s9, s10 appear 3 + 2 + 1 times
        assert_eq!(slices[8], SeriesSlice { name: OTHERS_LABEL.to_string(), value: 6 });
        assert_eq!(slices.iter().map(|slice| slice.value).sum::<usize>(), records.len());
    }

    #[test]
    fn distribution_ignores_empty_series() {
        let records = vec![amiibo("a", "S1", "g", None), amiibo("b", "", "g", None)];
        let slices = series_distribution(&records);
        assert_eq!(slices, vec![SeriesSlice { name: "S1".to_string(), value: 1 }]);
    }

    #[test]
    fn ties_keep_first_encounter_order() {
        let records = vec![
            amiibo("a", "Kirby", "g", None),
            amiibo("b", "Zelda", "g", None),
            amiibo("c", "Animal Crossing", "g", None),
            amiibo("d", "Zelda", "g", None),
        ];

        let names: Vec<String> =
            series_distribution(&records).into_iter().map(|slice| slice.name).collect();
        assert_eq!(names, vec!["Zelda", "Kirby", "Animal Crossing"]);
        assert_eq!(top_series(&records, 2), vec!["Zelda", "Kirby"]);
    }

    #[test]
    fn top_series_is_bounded_and_non_increasing() {
        let records = descending_series(9);
        let top = top_series(&records, TOP_SERIES_COUNT);
        assert_eq!(top, vec!["s0", "s1", "s2", "s3", "s4"]);

        let counts: Vec<usize> = top
            .iter()
            .map(|name| records.iter().filter(|a| &a.amiibo_series == name).count())
            .collect();
        assert!(counts.windows(2).all(|pair| pair[0] >= pair[1]));

        assert_eq!(top_series(&records, 0).len(), 0);
        assert_eq!(top_series(&records, 50).len(), 9);
    }
}
