use std::fmt;

use serde::{
    Deserialize,
    Deserializer,
    Serialize,
};

/// Release regions reported by the catalog. The designated region decides which date feeds
/// the timeline, the table and the detail view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    #[default]
    Na,
    Eu,
    Jp,
    Au,
}

impl Region {
    pub const ALL: [Region; 4] = [Region::Na, Region::Eu, Region::Jp, Region::Au];

    pub fn key(&self) -> &'static str {
        match self {
            Region::Na => "na",
            Region::Eu => "eu",
            Region::Jp => "jp",
            Region::Au => "au",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Region::Na => "North America",
            Region::Eu => "Europe",
            Region::Jp => "Japan",
            Region::Au => "Australia",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key().to_uppercase())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseDates {
    #[serde(default)]
    pub na: Option<String>,
    #[serde(default)]
    pub eu: Option<String>,
    #[serde(default)]
    pub jp: Option<String>,
    #[serde(default)]
    pub au: Option<String>,
}

impl ReleaseDates {
    /// Raw date string for `region`; empty strings count as absent.
    pub fn get(&self, region: Region) -> Option<&str> {
        let date = match region {
            Region::Na => &self.na,
            Region::Eu => &self.eu,
            Region::Jp => &self.jp,
            Region::Au => &self.au,
        };
        date.as_deref().filter(|d| !d.is_empty())
    }
}

/// One catalog entry as returned by the amiibo API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Amiibo {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub head: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tail: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub character: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub amiibo_series: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub game_series: String,
    #[serde(default, rename = "type", deserialize_with = "null_as_empty")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub image: String,
    #[serde(default)]
    pub release: Option<ReleaseDates>,
}

impl Amiibo {
    /// Detail-view key. The catalog does not guarantee uniqueness.
    pub fn id(&self) -> &str {
        &self.tail
    }

    pub fn full_id(&self) -> String {
        format!("{}{}", self.head, self.tail)
    }

    pub fn release_date(&self, region: Region) -> Option<&str> {
        self.release.as_ref().and_then(|release| release.get(region))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogResponse {
    #[serde(default)]
    pub amiibo: Vec<Amiibo>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_api_record() {
        let json = r#"{
            "amiiboSeries": "Super Smash Bros.",
            "character": "Mario",
            "gameSeries": "Super Mario",
            "head": "00000000",
            "image": "https://raw.githubusercontent.com/N3evin/AmiiboAPI/master/images/icon_00000000-00000002.png",
            "name": "Mario",
            "release": {"au": "2014-11-29", "eu": "2014-11-28", "jp": "2014-12-06", "na": "2014-11-21"},
            "tail": "00000002",
            "type": "Figure"
        }"#;

        let amiibo: Amiibo = serde_json::from_str(json).unwrap();
        assert_eq!(amiibo.id(), "00000002");
        assert_eq!(amiibo.full_id(), "0000000000000002");
        assert_eq!(amiibo.amiibo_series, "Super Smash Bros.");
        assert_eq!(amiibo.kind, "Figure");
        assert_eq!(amiibo.release_date(Region::Na), Some("2014-11-21"));
        assert_eq!(amiibo.release_date(Region::Jp), Some("2014-12-06"));
    }

    #[test]
    fn coerces_nulls_and_missing_fields() {
        let json = r#"{
            "character": null,
            "gameSeries": "Zelda",
            "release": {"na": null, "eu": "", "jp": "2016-12-01"},
            "tail": "01010000"
        }"#;

        let amiibo: Amiibo = serde_json::from_str(json).unwrap();
        assert_eq!(amiibo.character, "");
        assert_eq!(amiibo.amiibo_series, "");
        assert_eq!(amiibo.game_series, "Zelda");
        assert_eq!(amiibo.release_date(Region::Na), None);
        assert_eq!(amiibo.release_date(Region::Eu), None);
        assert_eq!(amiibo.release_date(Region::Au), None);
        assert_eq!(amiibo.release_date(Region::Jp), Some("2016-12-01"));

        let no_release: Amiibo = serde_json::from_str(r#"{"tail": "1", "release": null}"#).unwrap();
        assert!(no_release.release.is_none());
        assert_eq!(no_release.release_date(Region::Na), None);
    }

    #[test]
    fn region_keys_round_trip() {
        for region in Region::ALL {
            let json = serde_json::to_string(&region).unwrap();
            assert_eq!(json, format!("\"{}\"", region.key()));
            let back: Region = serde_json::from_str(&json).unwrap();
            assert_eq!(back, region);
        }
        assert_eq!(Region::default(), Region::Na);
        assert_eq!(Region::Eu.to_string(), "EU");
    }
}
