use chrono::{
    DateTime,
    Datelike,
    NaiveDate,
    NaiveDateTime,
};

/// Parses a catalog release date. The API sends `YYYY-MM-DD`; full timestamps are accepted
/// as well. Empty or unparseable input yields `None`.
pub fn parse_release_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.date_naive());
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S").ok().map(|dt| dt.date())
}

/// Zero-padded `YYYY-MM` key; fixed width so lexicographic order is chronological.
pub fn month_bucket(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

pub fn text_matches_search(text: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    text.to_lowercase().contains(&query.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_catalog_dates() {
        let date = parse_release_date("2014-11-21").unwrap();
        assert_eq!(month_bucket(date), "2014-11");

        let stamped = parse_release_date("2019-03-01T00:00:00Z").unwrap();
        assert_eq!(month_bucket(stamped), "2019-03");

        let naive = parse_release_date("2020-07-15T10:30:00").unwrap();
        assert_eq!(month_bucket(naive), "2020-07");
    }

    #[test]
    fn rejects_bad_dates() {
        assert!(parse_release_date("").is_none());
        assert!(parse_release_date("   ").is_none());
        assert!(parse_release_date("TBA").is_none());
        assert!(parse_release_date("2014-13-01").is_none());
    }

    #[test]
    fn buckets_are_zero_padded() {
        let date = NaiveDate::from_ymd_opt(2015, 2, 28).unwrap();
        assert_eq!(month_bucket(date), "2015-02");
        assert!(month_bucket(date) < "2015-10".to_string());
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        assert!(text_matches_search("Mario", ""));
        assert!(text_matches_search("Mario", "mAR"));
        assert!(text_matches_search("Dr. Mario", "mario"));
        assert!(!text_matches_search("Luigi", "mario"));
        assert!(!text_matches_search("", "a"));
    }
}
