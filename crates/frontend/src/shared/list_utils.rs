/// Helpers shared by list screens: sort indicators and header classes.
use crate::shared::data_table::SortDirection;

/// Glyph after a sortable header: `▲` ascending, `▼` descending, `⇅` unsorted.
pub fn get_sort_indicator(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(SortDirection::Ascending) => " ▲",
        Some(SortDirection::Descending) => " ▼",
        None => " ⇅",
    }
}

pub fn get_sort_class(direction: Option<SortDirection>) -> &'static str {
    if direction.is_some() {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

/// `aria-sort` value for a header cell.
pub fn get_aria_sort(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(SortDirection::Ascending) => "ascending",
        Some(SortDirection::Descending) => "descending",
        None => "none",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator(Some(SortDirection::Ascending)), " ▲");
        assert_eq!(get_sort_indicator(Some(SortDirection::Descending)), " ▼");
        assert_eq!(get_sort_indicator(None), " ⇅");
    }

    #[test]
    fn test_sort_class_marks_active_column() {
        assert!(get_sort_class(Some(SortDirection::Descending)).ends_with("--active"));
        assert_eq!(get_sort_class(None), "table__sort-indicator");
        assert_eq!(get_aria_sort(None), "none");
    }
}
