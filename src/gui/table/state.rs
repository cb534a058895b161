use super::sort::{
    self,
    SortField,
    SortState,
};
use crate::core::{
    filter::filter_indices,
    Amiibo,
    CatalogFilter,
    Region,
};

pub struct TableState {
    filter: CatalogFilter,
    sort: SortState,
    region: Region,
    visible_indices: Vec<usize>,
    dirty: bool,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            filter: CatalogFilter::default(),
            sort: SortState::default(),
            region: Region::default(),
            visible_indices: Vec::new(),
            dirty: true,
        }
    }
}

impl TableState {
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn filter(&self) -> &CatalogFilter {
        &self.filter
    }

    pub fn set_search(&mut self, search: String) {
        if self.filter.search != search {
            self.filter.search = search;
            self.dirty = true;
        }
    }

    pub fn set_amiibo_series(&mut self, series: String) {
        if self.filter.amiibo_series != series {
            self.filter.amiibo_series = series;
            self.dirty = true;
        }
    }

    pub fn set_game_series(&mut self, series: String) {
        if self.filter.game_series != series {
            self.filter.game_series = series;
            self.dirty = true;
        }
    }

    pub fn sort_state(&self) -> SortState {
        self.sort
    }

    pub fn toggle_sort(&mut self, field: SortField) {
        self.sort.toggle_or_set(field);
        self.dirty = true;
    }

    pub fn clear_sort(&mut self) {
        if self.sort.field.is_some() {
            self.sort = SortState::default();
            self.dirty = true;
        }
    }

    /// Date sorting and the Date column follow the release region.
    pub fn set_region(&mut self, region: Region) {
        if self.region != region {
            self.region = region;
            if self.sort.field == Some(SortField::ReleaseDate) {
                self.dirty = true;
            }
        }
    }

    pub fn ensure_indices(&mut self, records: &[Amiibo]) {
        let needs_rebuild = self.dirty
            || self.visible_indices.len() > records.len()
            || self.visible_indices.iter().any(|&idx| idx >= records.len());

        if needs_rebuild {
            self.recompute_indices(records);
        }
    }

    pub fn visible_indices(&self) -> &[usize] {
        &self.visible_indices
    }

    fn recompute_indices(&mut self, records: &[Amiibo]) {
        self.visible_indices = filter_indices(records, &self.filter);

        if let Some(field) = self.sort.field {
            sort::sort_indices(
                &mut self.visible_indices,
                records,
                field,
                self.sort.direction,
                self.region,
            );
        }

        self.dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amiibo(character: &str, amiibo_series: &str, game_series: &str) -> Amiibo {
        Amiibo {
            character: character.to_string(),
            amiibo_series: amiibo_series.to_string(),
            game_series: game_series.to_string(),
            ..Default::default()
        }
    }

    fn catalog() -> Vec<Amiibo> {
        vec![
            amiibo("Mario", "Super Smash Bros.", "Super Mario"),
            amiibo("Luigi", "Super Smash Bros.", "Super Mario"),
            amiibo("Link", "The Legend of Zelda", "The Legend of Zelda"),
            amiibo("Dr. Mario", "Super Mario Bros.", "Super Mario"),
        ]
    }

    #[test]
    fn unfiltered_table_keeps_catalog_order() {
        let records = catalog();
        let mut state = TableState::default();
        state.ensure_indices(&records);
        assert_eq!(state.visible_indices(), [0, 1, 2, 3]);
    }

    #[test]
    fn filters_and_sort_compose() {
        let records = catalog();
        let mut state = TableState::default();

        state.set_search("MARIO".to_string());
        state.ensure_indices(&records);
        assert_eq!(state.visible_indices(), [0, 3]);

        state.toggle_sort(SortField::Character);
        state.ensure_indices(&records);
        assert_eq!(state.visible_indices(), [3, 0]);

        state.set_amiibo_series("Super Smash Bros.".to_string());
        state.ensure_indices(&records);
        assert_eq!(state.visible_indices(), [0]);

        state.set_game_series("The Legend of Zelda".to_string());
        state.ensure_indices(&records);
        assert!(state.visible_indices().is_empty());
    }

    #[test]
    fn clean_state_is_not_rebuilt() {
        let records = catalog();
        let mut state = TableState::default();
        state.ensure_indices(&records);

        state.set_search(String::new());
        state.clear_sort();
        assert!(!state.dirty);
    }

    #[test]
    fn shrinking_catalog_forces_rebuild() {
        let mut state = TableState::default();
        state.ensure_indices(&catalog());
        assert_eq!(state.visible_indices().len(), 4);

        let smaller = vec![amiibo("Kirby", "Kirby", "Kirby")];
        state.ensure_indices(&smaller);
        assert_eq!(state.visible_indices(), [0]);
    }
}
