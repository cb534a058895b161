use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::core::{
    utils::parse_release_date,
    Amiibo,
    Region,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Character,
    AmiiboSeries,
    GameSeries,
    ReleaseDate,
}

impl SortField {
    pub fn title(self) -> &'static str {
        match self {
            SortField::Character => "Character",
            SortField::AmiiboSeries => "Amiibo",
            SortField::GameSeries => "Origin",
            SortField::ReleaseDate => "Date",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// `field: None` keeps catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub field: Option<SortField>,
    pub direction: SortDirection,
}

impl SortState {
    pub fn default_direction(field: SortField) -> SortDirection {
        match field {
            SortField::Character | SortField::AmiiboSeries | SortField::GameSeries => {
                SortDirection::Ascending
            }
            SortField::ReleaseDate => SortDirection::Descending,
        }
    }

    pub fn toggle_or_set(&mut self, field: SortField) {
        match self.field {
            Some(current) if current == field => {
                self.direction = self.direction.reversed();
            }
            _ => {
                self.field = Some(field);
                self.direction = Self::default_direction(field);
            }
        }
    }
}

impl Default for SortState {
    fn default() -> Self {
        Self { field: None, direction: SortDirection::Ascending }
    }
}

/// Stable sort of `indices` into `records`. Records without a release date in `region`
/// stay at the end in both directions.
pub fn sort_indices(
    indices: &mut [usize],
    records: &[Amiibo],
    field: SortField,
    direction: SortDirection,
    region: Region,
) {
    match field {
        SortField::Character => {
            sort_by_label(indices, records, direction, |a| a.character.as_str())
        }
        SortField::AmiiboSeries => {
            sort_by_label(indices, records, direction, |a| a.amiibo_series.as_str())
        }
        SortField::GameSeries => {
            sort_by_label(indices, records, direction, |a| a.game_series.as_str())
        }
        SortField::ReleaseDate => {
            let mut keyed: Vec<(usize, Option<NaiveDate>)> = indices
                .iter()
                .map(|&idx| (idx, records[idx].release_date(region).and_then(parse_release_date)))
                .collect();
            keyed.sort_by(|(_, left), (_, right)| match (left, right) {
                (Some(left), Some(right)) => direction.apply(left.cmp(right)),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            });
            write_back(indices, keyed);
        }
    }
}

fn sort_by_label<F>(indices: &mut [usize], records: &[Amiibo], direction: SortDirection, label: F)
where
    F: Fn(&Amiibo) -> &str,
{
    let mut keyed: Vec<(usize, String)> =
        indices.iter().map(|&idx| (idx, label(&records[idx]).to_lowercase())).collect();
    keyed.sort_by(|(_, left), (_, right)| direction.apply(left.cmp(right)));
    write_back(indices, keyed);
}

fn write_back<K>(indices: &mut [usize], keyed: Vec<(usize, K)>) {
    for (slot, (idx, _)) in indices.iter_mut().zip(keyed) {
        *slot = idx;
    }
}
