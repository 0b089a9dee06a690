//! Filter / sort / selection / visibility / pagination state of one table
//! and the reducer that moves it between gestures.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use super::column::ColumnDef;

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const PAGE_SIZE_OPTIONS: [usize; 5] = [10, 20, 30, 40, 50];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub key: String,
    pub direction: SortDirection,
}

/// A filter, sort or selection entry that no longer points at anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StaleReference {
    Filter(String),
    Sort(String),
    Selection(String),
}

/// Tri-state of the select-all checkbox for the rows of the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSelection {
    None,
    Some,
    All,
}

/// User gesture understood by [`ViewState::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableAction {
    /// `None` or a blank value clears the filter of that column.
    SetFilter { key: String, value: Option<String> },
    ClearAllFilters,
    SetSort(String),
    ToggleRowSelection(String),
    ToggleAllOnPage(Vec<String>),
    ClearSelection,
    SetColumnVisibility { key: String, visible: bool },
    SetPage { page: usize, total_pages: usize },
    SetPageSize(usize),
    PruneSelection(Vec<String>),
    ResetView,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub filters: BTreeMap<String, String>,
    pub sort: Option<SortSpec>,
    pub selection: BTreeSet<String>,
    pub visible_columns: BTreeSet<String>,
    /// 1-based.
    pub page: usize,
    pub page_size: usize,
    known_columns: BTreeSet<String>,
    pinned_columns: BTreeSet<String>,
    sortable_columns: BTreeSet<String>,
}

impl ViewState {
    /// Fresh state for a table with these columns: no filters, no sort,
    /// nothing selected, every column visible, page 1.
    pub fn for_columns<R>(columns: &[ColumnDef<R>]) -> Self {
        let keys = |pred: fn(&ColumnDef<R>) -> bool| -> BTreeSet<String> {
            columns
                .iter()
                .filter(|c| pred(c))
                .map(|c| c.key.to_string())
                .collect()
        };
        let known_columns = keys(|_| true);
        Self {
            filters: BTreeMap::new(),
            sort: None,
            selection: BTreeSet::new(),
            visible_columns: known_columns.clone(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            pinned_columns: keys(|c| !c.hideable),
            sortable_columns: keys(|c| c.sortable),
            known_columns,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn apply(&mut self, action: TableAction) {
        match action {
            TableAction::SetFilter { key, value } => self.set_filter(&key, value),
            TableAction::ClearAllFilters => self.clear_all_filters(),
            TableAction::SetSort(key) => self.set_sort(&key),
            TableAction::ToggleRowSelection(id) => self.toggle_row_selection(&id),
            TableAction::ToggleAllOnPage(ids) => self.toggle_all_on_page(&ids),
            TableAction::ClearSelection => self.selection.clear(),
            TableAction::SetColumnVisibility { key, visible } => {
                self.set_column_visibility(&key, visible)
            }
            TableAction::SetPage { page, total_pages } => self.set_page(page, total_pages),
            TableAction::SetPageSize(size) => {
                self.page_size = size.max(1);
                self.page = 1;
            }
            TableAction::PruneSelection(ids) => {
                let ids: HashSet<String> = ids.into_iter().collect();
                self.prune_selection(&ids);
            }
            // Selection survives; it is pruned only by Row Store changes.
            TableAction::ResetView => {
                self.filters.clear();
                self.sort = None;
                self.visible_columns = self.known_columns.clone();
                self.page = 1;
            }
        }
    }

    pub fn set_filter(&mut self, key: &str, value: Option<String>) {
        match value {
            Some(v) if !v.trim().is_empty() => {
                self.filters.insert(key.to_string(), v);
            }
            _ => {
                self.filters.remove(key);
            }
        }
        self.page = 1;
    }

    pub fn clear_all_filters(&mut self) {
        self.filters.clear();
        self.page = 1;
    }

    pub fn filter_value(&self, key: &str) -> Option<&str> {
        self.filters.get(key).map(String::as_str)
    }

    /// Ascending -> descending -> unsorted on the same column; a different
    /// column always starts ascending and replaces the previous sort.
    pub fn set_sort(&mut self, key: &str) {
        if !self.sortable_columns.contains(key) {
            return;
        }
        self.sort = match self.sort.take() {
            Some(SortSpec { key: current, direction }) if current == key => match direction {
                SortDirection::Ascending => Some(SortSpec {
                    key: current,
                    direction: SortDirection::Descending,
                }),
                SortDirection::Descending => None,
            },
            _ => Some(SortSpec {
                key: key.to_string(),
                direction: SortDirection::Ascending,
            }),
        };
    }

    pub fn sort_direction(&self, key: &str) -> Option<SortDirection> {
        self.sort
            .as_ref()
            .filter(|s| s.key == key)
            .map(|s| s.direction)
    }

    pub fn toggle_row_selection(&mut self, id: &str) {
        if !self.selection.remove(id) {
            self.selection.insert(id.to_string());
        }
    }

    /// Deselects the page when all of it is selected, otherwise adds the
    /// whole page to the selection. Rows on other pages keep their state.
    pub fn toggle_all_on_page(&mut self, ids: &[String]) {
        if ids.is_empty() {
            return;
        }
        if ids.iter().all(|id| self.selection.contains(id)) {
            for id in ids {
                self.selection.remove(id);
            }
        } else {
            self.selection.extend(ids.iter().cloned());
        }
    }

    pub fn page_selection(&self, ids: &[String]) -> PageSelection {
        let selected = ids.iter().filter(|id| self.selection.contains(*id)).count();
        match selected {
            0 => PageSelection::None,
            n if n == ids.len() => PageSelection::All,
            _ => PageSelection::Some,
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.contains(id)
    }

    pub fn set_column_visibility(&mut self, key: &str, visible: bool) {
        if self.pinned_columns.contains(key) || !self.known_columns.contains(key) {
            return;
        }
        if visible {
            self.visible_columns.insert(key.to_string());
        } else {
            self.visible_columns.remove(key);
        }
    }

    pub fn is_visible(&self, key: &str) -> bool {
        self.visible_columns.contains(key)
    }

    pub fn is_pinned(&self, key: &str) -> bool {
        self.pinned_columns.contains(key)
    }

    pub fn set_page(&mut self, page: usize, total_pages: usize) {
        self.page = page.clamp(1, total_pages.max(1));
    }

    pub fn prune_selection(&mut self, current_ids: &HashSet<String>) -> Vec<String> {
        let stale: Vec<String> = self
            .selection
            .iter()
            .filter(|id| !current_ids.contains(*id))
            .cloned()
            .collect();
        for id in &stale {
            self.selection.remove(id);
        }
        stale
    }

    /// Drops filters and sort on columns this table does not have and
    /// selected ids missing from `current_ids`.
    pub fn drop_stale(&mut self, current_ids: &HashSet<String>) -> Vec<StaleReference> {
        let mut stale = Vec::new();

        let known = &self.known_columns;
        let stale_filters: Vec<String> = self
            .filters
            .keys()
            .filter(|k| !known.contains(*k))
            .cloned()
            .collect();
        for key in stale_filters {
            self.filters.remove(&key);
            stale.push(StaleReference::Filter(key));
        }

        if let Some(sort) = self.sort.take() {
            if self.sortable_columns.contains(&sort.key) {
                self.sort = Some(sort);
            } else {
                stale.push(StaleReference::Sort(sort.key));
            }
        }

        stale.extend(
            self.prune_selection(current_ids)
                .into_iter()
                .map(StaleReference::Selection),
        );
        stale
    }
}
