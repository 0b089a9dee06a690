//! Pure derivation of the rendered page from rows, columns and view state.

use std::cmp::Ordering;

use super::column::{find_column, ColumnDef};
use super::row::TableRow;
use super::value::CellValue;
use super::view_state::{SortDirection, ViewState};

/// One rendered page plus the aggregate facts the pager and toolbar need.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSlice<'a, R> {
    pub page_rows: Vec<&'a R>,
    pub total_filtered_count: usize,
    pub total_page_count: usize,
    /// Page actually shown after clamping, 1-based.
    pub page: usize,
}

impl<R: TableRow> PageSlice<'_, R> {
    pub fn row_ids(&self) -> Vec<String> {
        self.page_rows.iter().map(|r| r.row_id()).collect()
    }
}

/// Number of pages for `filtered` rows; never less than 1.
pub fn page_count(filtered: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    filtered.div_ceil(page_size).max(1)
}

/// Rows passing every active filter, in sorted order.
///
/// Filters and sorts that name a column this table does not have (or one
/// that is not filterable / sortable) are skipped.
pub fn filter_and_sort<'a, R: TableRow>(
    rows: &'a [R],
    columns: &[ColumnDef<R>],
    state: &ViewState,
) -> Vec<&'a R> {
    let active: Vec<(&ColumnDef<R>, &str)> = state
        .filters
        .iter()
        .filter_map(|(key, value)| {
            find_column(columns, key)
                .filter(|c| c.filterable)
                .map(|c| (c, value.as_str()))
        })
        .collect();

    let filtered: Vec<&R> = rows
        .iter()
        .filter(|row| active.iter().all(|(column, value)| column.matches(row, value)))
        .collect();

    let Some(sort) = state.sort.as_ref() else {
        return filtered;
    };
    let Some(column) = find_column(columns, &sort.key).filter(|c| c.sortable) else {
        return filtered;
    };

    let mut keyed: Vec<(CellValue, &R)> = filtered
        .into_iter()
        .map(|row| (column.value(row), row))
        .collect();
    // `sort_by` is stable, so equal keys keep row-store order in both directions.
    keyed.sort_by(|(a, _), (b, _)| compare_for_sort(a, b, sort.direction));
    keyed.into_iter().map(|(_, row)| row).collect()
}

fn compare_for_sort(a: &CellValue, b: &CellValue, direction: SortDirection) -> Ordering {
    match (a.is_null(), b.is_null()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => match direction {
            SortDirection::Ascending => a.compare(b),
            SortDirection::Descending => a.compare(b).reverse(),
        },
    }
}

/// Filter, sort and paginate. A page past the end is clamped to the last
/// page, so rows are never hidden behind an empty page.
pub fn compute_visible_rows<'a, R: TableRow>(
    rows: &'a [R],
    columns: &[ColumnDef<R>],
    state: &ViewState,
) -> PageSlice<'a, R> {
    let sorted = filter_and_sort(rows, columns, state);
    let total_filtered_count = sorted.len();
    let page_size = state.page_size.max(1);
    let total_page_count = page_count(total_filtered_count, page_size);
    let page = state.page.clamp(1, total_page_count);

    let page_rows = sorted
        .into_iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .collect();

    PageSlice {
        page_rows,
        total_filtered_count,
        total_page_count,
        page,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data_table::column::FilterMode;
    use crate::shared::data_table::row::tests::Fruit;

    fn columns() -> Vec<ColumnDef<Fruit>> {
        vec![
            ColumnDef::new("id", "ID").pinned(),
            ColumnDef::new("name", "Name").filter_mode(FilterMode::Contains),
            ColumnDef::new("qty", "Qty"),
            ColumnDef::new("status", "Status"),
        ]
    }

    fn rows() -> Vec<Fruit> {
        vec![
            Fruit::new("1", "Apple", 100.0).with_status("active"),
            Fruit::new("2", "Banana", 50.0),
            Fruit::new("3", "Cherry", 75.0).with_status("active"),
            Fruit::new("4", "Date", 50.0),
            Fruit::new("5", "Elder", 20.0),
        ]
    }

    fn names(slice: &PageSlice<'_, Fruit>) -> Vec<String> {
        slice.page_rows.iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn test_sort_descending_by_total() {
        let cols = columns();
        let rows = vec![
            Fruit::new("1", "a", 100.0),
            Fruit::new("2", "b", 50.0),
            Fruit::new("3", "c", 75.0),
        ];
        let mut state = ViewState::for_columns(&cols);
        state.set_sort("qty");
        state.set_sort("qty");
        let slice = compute_visible_rows(&rows, &cols, &state);
        let qty: Vec<f64> = slice.page_rows.iter().map(|r| r.qty).collect();
        assert_eq!(qty, vec![100.0, 75.0, 50.0]);
    }

    #[test]
    fn test_last_partial_page() {
        let cols = columns();
        let rows = rows();
        let mut state = ViewState::for_columns(&cols).with_page_size(2);
        state.page = 3;
        let slice = compute_visible_rows(&rows, &cols, &state);
        assert_eq!(names(&slice), vec!["Elder"]);
        assert_eq!(slice.total_page_count, 3);
        assert_eq!(slice.total_filtered_count, 5);
    }

    #[test]
    fn test_page_past_end_is_clamped() {
        let cols = columns();
        let rows = rows();
        let mut state = ViewState::for_columns(&cols).with_page_size(2);
        state.page = 10;
        let slice = compute_visible_rows(&rows, &cols, &state);
        assert_eq!(slice.page, 3);
        assert_eq!(names(&slice), vec!["Elder"]);
    }

    #[test]
    fn test_filter_without_match_is_empty() {
        let cols = columns();
        let rows = vec![Fruit::new("1", "Apple", 1.0).with_status("archived")];
        let mut state = ViewState::for_columns(&cols);
        state.set_filter("status", Some("active".into()));
        let slice = compute_visible_rows(&rows, &cols, &state);
        assert!(slice.page_rows.is_empty());
        assert_eq!(slice.total_filtered_count, 0);
        assert_eq!(slice.total_page_count, 1);
    }

    #[test]
    fn test_every_shown_row_passes_all_filters() {
        let cols = columns();
        let rows = rows();
        let mut state = ViewState::for_columns(&cols);
        state.set_filter("status", Some("active".into()));
        state.set_filter("name", Some("e".into()));
        let all = filter_and_sort(&rows, &cols, &state);
        assert_eq!(all.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(), vec!["1", "3"]);

        let passing = rows
            .iter()
            .filter(|r| r.status.as_deref() == Some("active") && r.name.to_lowercase().contains('e'))
            .count();
        assert_eq!(all.len(), passing);
    }

    #[test]
    fn test_hidden_columns_still_filter_and_sort() {
        let cols = columns();
        let rows = rows();
        let mut state = ViewState::for_columns(&cols);
        state.set_column_visibility("status", false);
        state.set_column_visibility("qty", false);
        state.set_filter("status", Some("active".into()));
        state.set_sort("qty");
        assert!(!state.visible_columns.contains("status"));

        let slice = compute_visible_rows(&rows, &cols, &state);
        assert_eq!(names(&slice), vec!["Cherry", "Apple"]);
        assert_eq!(slice.total_filtered_count, 2);
    }

    #[test]
    fn test_sort_is_stable_in_both_directions() {
        let cols = columns();
        let rows = rows();
        let mut state = ViewState::for_columns(&cols);
        state.set_sort("qty");
        let asc = filter_and_sort(&rows, &cols, &state);
        assert_eq!(
            asc.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(),
            vec!["5", "2", "4", "3", "1"]
        );
        state.set_sort("qty");
        let desc = filter_and_sort(&rows, &cols, &state);
        assert_eq!(
            desc.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(),
            vec!["1", "3", "2", "4", "5"]
        );
    }

    #[test]
    fn test_nulls_sort_last_either_way() {
        let cols = columns();
        let rows = rows();
        let mut state = ViewState::for_columns(&cols);
        state.set_sort("status");
        let asc = filter_and_sort(&rows, &cols, &state);
        assert_eq!(asc[0].status.as_deref(), Some("active"));
        assert!(asc[4].status.is_none());
        state.set_sort("status");
        let desc = filter_and_sort(&rows, &cols, &state);
        assert_eq!(desc[0].status.as_deref(), Some("active"));
        assert!(desc[4].status.is_none());
    }

    #[test]
    fn test_stale_filter_and_sort_are_ignored() {
        let cols = columns();
        let rows = rows();
        let mut state = ViewState::for_columns(&cols);
        state.filters.insert("removed".into(), "x".into());
        state.sort = Some(crate::shared::data_table::view_state::SortSpec {
            key: "removed".into(),
            direction: SortDirection::Descending,
        });
        let slice = compute_visible_rows(&rows, &cols, &state);
        assert_eq!(slice.total_filtered_count, 5);
        assert_eq!(names(&slice), vec!["Apple", "Banana", "Cherry", "Date", "Elder"]);
    }

    #[test]
    fn test_deterministic() {
        let cols = columns();
        let rows = rows();
        let mut state = ViewState::for_columns(&cols).with_page_size(2);
        state.set_sort("name");
        state.set_filter("name", Some("a".into()));
        let first = compute_visible_rows(&rows, &cols, &state);
        let second = compute_visible_rows(&rows, &cols, &state);
        assert_eq!(first, second);
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(5, 0), 1);
    }
}
