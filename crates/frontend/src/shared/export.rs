//! Downloads of table data: client-side CSV of the current view and the
//! backend's Excel export.

use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::shared::api_utils::{ApiClient, ApiError};
use crate::shared::data_table::{filter_and_sort, CellKind, ColumnDef, TableRow, ViewState};

const CSV_SEPARATOR: &str = ";";
const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// CSV text (UTF-8 BOM, `;` separated) of `rows` restricted to `columns`.
pub fn build_csv<R: TableRow>(rows: &[&R], columns: &[&ColumnDef<R>]) -> String {
    let mut csv = String::new();
    // BOM so Excel picks UTF-8
    csv.push('\u{FEFF}');

    let headers: Vec<String> = columns.iter().map(|c| escape_csv_cell(c.header)).collect();
    csv.push_str(&headers.join(CSV_SEPARATOR));
    csv.push('\n');

    for row in rows {
        let cells: Vec<String> = columns
            .iter()
            .map(|c| escape_csv_cell(&csv_cell(c, row)))
            .collect();
        csv.push_str(&cells.join(CSV_SEPARATOR));
        csv.push('\n');
    }
    csv
}

fn csv_cell<R: TableRow>(column: &ColumnDef<R>, row: &R) -> String {
    match column.kind {
        // the URL, not the "No Image" placeholder
        CellKind::Image { .. } => column.value(row).to_filter_string(),
        _ => column.display(row),
    }
}

fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(CSV_SEPARATOR) || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

/// Download the filtered and sorted view (every page, visible columns only)
/// as `<file_stem>.csv`. Returns the number of exported rows.
pub fn export_view_csv<R: TableRow>(
    rows: &[R],
    columns: &[ColumnDef<R>],
    state: &ViewState,
    file_stem: &str,
) -> Result<usize, ApiError> {
    let visible: Vec<&ColumnDef<R>> = columns.iter().filter(|c| state.is_visible(c.key)).collect();
    let sorted = filter_and_sort(rows, columns, state);
    if sorted.is_empty() {
        return Err(ApiError::Download("Nothing to export".to_string()));
    }
    let csv = build_csv(&sorted, &visible);
    let blob = create_text_blob(&csv, "text/csv;charset=utf-8;")?;
    download_blob(&blob, &format!("{}.csv", file_stem))?;
    Ok(sorted.len())
}

/// Fetch `<path>/export` and offer it as `<file_stem>.xlsx`.
pub async fn download_server_export(
    client: &ApiClient,
    path: &str,
    file_stem: &str,
) -> Result<(), ApiError> {
    let bytes = client.get_bytes(&format!("{}/export", path)).await?;
    let blob = create_bytes_blob(&bytes, XLSX_MIME)?;
    download_blob(&blob, &format!("{}.xlsx", file_stem))
}

fn blob_error(e: wasm_bindgen::JsValue) -> ApiError {
    ApiError::Download(format!("{:?}", e))
}

fn create_text_blob(content: &str, mime: &str) -> Result<Blob, ApiError> {
    let parts = js_sys::Array::new();
    parts.push(&wasm_bindgen::JsValue::from_str(content));
    let properties = BlobPropertyBag::new();
    properties.set_type(mime);
    Blob::new_with_str_sequence_and_options(&parts, &properties).map_err(blob_error)
}

fn create_bytes_blob(bytes: &[u8], mime: &str) -> Result<Blob, ApiError> {
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));
    let properties = BlobPropertyBag::new();
    properties.set_type(mime);
    Blob::new_with_u8_array_sequence_and_options(&parts, &properties).map_err(blob_error)
}

/// Click a temporary `<a download>` pointing at an object URL of `blob`.
fn download_blob(blob: &Blob, filename: &str) -> Result<(), ApiError> {
    let no = |what: &str| ApiError::Download(format!("No {} object", what));
    let window = web_sys::window().ok_or_else(|| no("window"))?;
    let document = window.document().ok_or_else(|| no("document"))?;
    let body = document.body().ok_or_else(|| no("body"))?;

    let url = Url::create_object_url_with_blob(blob).map_err(blob_error)?;
    let anchor = document
        .create_element("a")
        .map_err(blob_error)?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| ApiError::Download("Failed to cast to anchor".to_string()))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.style().set_property("display", "none").map_err(blob_error)?;

    body.append_child(&anchor).map_err(blob_error)?;
    anchor.click();
    body.remove_child(&anchor).map_err(blob_error)?;

    Url::revoke_object_url(&url).map_err(blob_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data_table::row::tests::Fruit;

    fn columns() -> Vec<ColumnDef<Fruit>> {
        vec![
            ColumnDef::new("id", "ID"),
            ColumnDef::new("name", "Name"),
            ColumnDef::new("qty", "Qty").kind(CellKind::Number { decimals: 0 }),
        ]
    }

    #[test]
    fn test_build_csv_header_and_rows() {
        let cols = columns();
        let rows = vec![Fruit::new("A", "Apple", 1200.0), Fruit::new("B", "Banana", 2.0)];
        let refs: Vec<&Fruit> = rows.iter().collect();
        let visible: Vec<&ColumnDef<Fruit>> = cols.iter().collect();

        let csv = build_csv(&refs, &visible);
        assert!(csv.starts_with('\u{FEFF}'));
        let lines: Vec<&str> = csv.trim_start_matches('\u{FEFF}').lines().collect();
        assert_eq!(lines, vec!["ID;Name;Qty", "A;Apple;1 200", "B;Banana;2"]);
    }

    #[test]
    fn test_build_csv_only_given_columns() {
        let cols = columns();
        let rows = vec![Fruit::new("A", "Apple", 1.0)];
        let refs: Vec<&Fruit> = rows.iter().collect();
        let visible = vec![&cols[1]];
        assert_eq!(build_csv(&refs, &visible), "\u{FEFF}Name\nApple\n");
    }

    #[test]
    fn test_image_column_exports_url() {
        let photo = ColumnDef::<Fruit>::new("status", "Photo").kind(CellKind::Image { alt: "Fruit" });
        let rows = vec![
            Fruit::new("A", "Apple", 1.0).with_status("https://cdn.test/a.png"),
            Fruit::new("B", "Banana", 2.0),
        ];
        let refs: Vec<&Fruit> = rows.iter().collect();
        assert_eq!(
            build_csv(&refs, &[&photo]),
            "\u{FEFF}Photo\nhttps://cdn.test/a.png\n\n"
        );
    }

    #[test]
    fn test_escape_csv_cell() {
        assert_eq!(escape_csv_cell("plain"), "plain");
        assert_eq!(escape_csv_cell("a;b"), "\"a;b\"");
        assert_eq!(escape_csv_cell("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_csv_cell("two\nlines"), "\"two\nlines\"");
    }
}
