//! The `DataTable` screen component: toolbar, bulk-action bar, table and pager
//! for one entity.

use std::collections::BTreeSet;

use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Badge, Button, ButtonAppearance};

use super::column::{validate_columns, CellKind, ColumnDef};
use super::dispatcher::{ActionDispatcher, EntityApi};
use super::model::TableModel;
use super::row::TableRow;
use super::value::CellValue;
use super::view_state::{TableAction, ViewState, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
use crate::shared::api_utils::ApiError;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::{SortableHeaderCell, TableHeaderCheckbox};
use crate::shared::components::table_checkbox::TableCheckbox;
use crate::shared::export::export_view_csv;
use crate::shared::icons::icon;
use crate::shared::notify::{use_notifications, NotificationService};
use crate::system::auth::context::{end_session, AuthState};

/// Owned copy of the visible page, so the view does not borrow the model.
#[derive(Debug, Clone, PartialEq)]
struct RenderedPage<R> {
    rows: Vec<R>,
    ids: Vec<String>,
    filtered: usize,
    pages: usize,
    page: usize,
}

fn render_page<R: TableRow>(model: &TableModel<R>, columns: &[ColumnDef<R>]) -> RenderedPage<R> {
    let slice = model.visible(columns);
    RenderedPage {
        ids: slice.row_ids(),
        rows: slice.page_rows.into_iter().cloned().collect(),
        filtered: slice.total_filtered_count,
        pages: slice.total_page_count,
        page: slice.page,
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

fn report_error(
    notify: NotificationService,
    set_auth: Option<WriteSignal<AuthState>>,
    action: &str,
    err: &ApiError,
) {
    notify.error(format!("{}: {}", action, err));
    if err.is_auth() {
        if let Some(set_auth) = set_auth {
            end_session(set_auth);
        }
    }
}

/// Table screen for one entity. Loads every row on mount; filtering,
/// sorting and paging happen in the browser.
#[component]
pub fn DataTable<A>(
    dispatcher: ActionDispatcher<A>,
    columns: Vec<ColumnDef<A::Row>>,
    #[prop(optional)] page_size: Option<usize>,
) -> impl IntoView
where
    A: EntityApi + Clone + Send + Sync + 'static,
    A::Row: PartialEq + Send + Sync,
{
    let notify = use_notifications();
    let set_auth = use_context::<WriteSignal<AuthState>>();
    let entity = dispatcher.entity_name();

    let column_error = validate_columns(&columns).err().map(|e| {
        log::error!("{} table: {}", entity, e);
        e.to_string()
    });

    let state =
        ViewState::for_columns(&columns).with_page_size(page_size.unwrap_or(DEFAULT_PAGE_SIZE));
    let table = RwSignal::new(TableModel::<A::Row>::new(state));
    let columns = StoredValue::new(columns);
    let dispatcher = StoredValue::new(dispatcher);

    let dispatch = move |action: TableAction| table.update(|m| m.apply(action));

    let page = Memo::new(move |_| table.with(|m| columns.with_value(|cols| render_page(m, cols))));
    let visible_keys: Memo<BTreeSet<String>> =
        Memo::new(move |_| table.with(|m| m.state.visible_columns.clone()));
    let in_flight = Signal::derive(move || table.with(|m| m.in_flight));
    let selected_count = Signal::derive(move || table.with(|m| m.state.selection.len()));
    let has_filters = Signal::derive(move || table.with(|m| !m.state.filters.is_empty()));

    let reload = move || {
        let d = dispatcher.get_value();
        spawn_local(async move {
            if let Err(e) = d.reload(&table).await {
                report_error(notify, set_auth, &format!("Failed to load {}", entity), &e);
            }
        });
    };

    Effect::new(move |_| {
        if !table.with_untracked(|m| m.loaded) {
            reload();
        }
    });

    let delete_one = move |id: String| {
        if !confirm(&format!("Delete {} {}?", entity, id)) {
            return;
        }
        let d = dispatcher.get_value();
        spawn_local(async move {
            match d.delete_one(&table, &id).await {
                Ok(()) => notify.success(format!("Deleted {}", id)),
                Err(e) => report_error(notify, set_auth, &format!("Failed to delete {}", id), &e),
            }
        });
    };

    let delete_selected = move || {
        let count = selected_count.get_untracked();
        if count == 0 || !confirm(&format!("Delete {} selected {}?", count, entity)) {
            return;
        }
        let d = dispatcher.get_value();
        spawn_local(async move {
            match d.delete_selected(&table).await {
                Ok(n) => notify.success(format!("Deleted {} {}", n, entity)),
                Err(e) => report_error(notify, set_auth, "Bulk delete failed", &e),
            }
        });
    };

    let export_excel = move || {
        let d = dispatcher.get_value();
        spawn_local(async move {
            if let Err(e) = d.export_current_view(&table).await {
                report_error(notify, set_auth, "Export failed", &e);
            }
        });
    };

    let export_csv = move || {
        let result = table.with_untracked(|m| {
            columns.with_value(|cols| export_view_csv(m.store.rows(), cols, &m.state, entity))
        });
        match result {
            Ok(n) => notify.success(format!("Exported {} rows", n)),
            Err(e) => notify.error(e.to_string()),
        }
    };

    let filter_inputs = move || {
        visible_keys.with(|vis| {
            columns.with_value(|cols| {
                cols.iter()
                    .filter(|c| c.filterable && vis.contains(c.key))
                    .map(|c| {
                        let key = c.key;
                        let placeholder = format!("Filter {}...", c.header);
                        let label = placeholder.clone();
                        view! {
                            <input
                                type="text"
                                class="data-table__filter"
                                aria-label=label
                                placeholder=placeholder
                                prop:value=move || {
                                    table.with(|m| m.state.filter_value(key).unwrap_or_default().to_string())
                                }
                                on:input=move |ev| {
                                    dispatch(TableAction::SetFilter {
                                        key: key.to_string(),
                                        value: Some(event_target_value(&ev)),
                                    })
                                }
                            />
                        }
                    })
                    .collect_view()
            })
        })
    };

    let column_menu = columns.with_value(|cols| {
        cols.iter()
            .filter(|c| c.hideable)
            .map(|c| {
                let key = c.key;
                view! {
                    <label class="data-table__column-option">
                        <input
                            type="checkbox"
                            prop:checked=move || visible_keys.with(|v| v.contains(key))
                            on:change=move |ev| {
                                dispatch(TableAction::SetColumnVisibility {
                                    key: key.to_string(),
                                    visible: event_target_checked(&ev),
                                })
                            }
                        />
                        {c.header}
                    </label>
                }
            })
            .collect_view()
    });

    let header_cells = move || {
        visible_keys.with(|vis| {
            columns.with_value(|cols| {
                cols.iter()
                    .filter(|c| vis.contains(c.key))
                    .map(|c| header_cell(c, table))
                    .collect_view()
            })
        })
    };

    let body_rows = move || {
        let p = page.get();
        let vis = visible_keys.get();
        if p.rows.is_empty() {
            let text = table.with(|m| match (m.loaded, m.load_failed) {
                (true, _) => "No results.",
                (false, true) => "Failed to load.",
                (false, false) => "Loading...",
            });
            return view! {
                <tr class="table__row">
                    <td class="table__cell table__empty" colspan={vis.len() + 2}>{text}</td>
                </tr>
            }
            .into_any();
        }
        columns
            .with_value(|cols| {
                let visible: Vec<&ColumnDef<A::Row>> =
                    cols.iter().filter(|c| vis.contains(c.key)).collect();
                p.rows
                    .iter()
                    .map(|row| body_row(row, &visible, table, in_flight, delete_one))
                    .collect_view()
            })
            .into_any()
    };

    view! {
        <div class="data-table">
            {column_error.map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="data-table__toolbar">
                <div class="data-table__filters">{filter_inputs}</div>
                <div class="data-table__actions">
                    <Badge>{move || page.with(|p| p.filtered.to_string())}</Badge>
                    <Show when=move || has_filters.get()>
                        <button
                            class="button button--link"
                            on:click=move |_| dispatch(TableAction::ClearAllFilters)
                        >
                            "Reset"
                        </button>
                    </Show>
                    <details class="data-table__columns">
                        <summary>{icon("columns")}" Columns"</summary>
                        <div class="data-table__columns-menu">
                            {column_menu}
                            <button
                                class="button button--link"
                                on:click=move |_| dispatch(TableAction::ResetView)
                            >
                                "Reset view"
                            </button>
                        </div>
                    </details>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| reload()
                        disabled=in_flight
                    >
                        {move || if in_flight.get() { "Loading..." } else { "Refresh" }}
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| export_csv()>
                        "Export CSV"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| export_excel()
                        disabled=in_flight
                    >
                        "Export Excel"
                    </Button>
                </div>
            </div>

            <Show when=move || { selected_count.get() > 0 }>
                <div class="data-table__bulk-bar">
                    <span>{move || format!("{} row(s) selected", selected_count.get())}</span>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| delete_selected()
                        disabled=in_flight
                    >
                        {icon("trash")}" Delete Selected"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| dispatch(TableAction::ClearSelection)
                    >
                        "Clear selection"
                    </Button>
                </div>
            </Show>

            <div class="table-wrapper">
                <table class="table">
                    <thead>
                        <tr>
                            <TableHeaderCheckbox
                                state=Signal::derive(move || {
                                    let ids = page.with(|p| p.ids.clone());
                                    table.with(|m| m.state.page_selection(&ids))
                                })
                                on_toggle=Callback::new(move |_| {
                                    let ids = page.with_untracked(|p| p.ids.clone());
                                    dispatch(TableAction::ToggleAllOnPage(ids));
                                })
                            />
                            {header_cells}
                            <th class="table__header-cell table__header-cell--actions">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>{body_rows}</tbody>
                </table>
            </div>

            <PaginationControls
                current_page=Signal::derive(move || page.with(|p| p.page))
                total_pages=Signal::derive(move || page.with(|p| p.pages))
                total_count=Signal::derive(move || page.with(|p| p.filtered))
                page_size=Signal::derive(move || table.with(|m| m.state.page_size))
                on_page_change=Callback::new(move |n: usize| {
                    let total_pages = page.with_untracked(|p| p.pages);
                    dispatch(TableAction::SetPage { page: n, total_pages });
                })
                on_page_size_change=Callback::new(move |n: usize| dispatch(TableAction::SetPageSize(n)))
                page_size_options=PAGE_SIZE_OPTIONS.to_vec()
            />
        </div>
    }
}

fn header_cell<R>(column: &ColumnDef<R>, table: RwSignal<TableModel<R>>) -> AnyView
where
    R: TableRow + Send + Sync,
{
    let key = column.key;
    if !column.sortable {
        return view! { <th class="table__header-cell">{column.header}</th> }.into_any();
    }
    let align = if matches!(column.kind, CellKind::Number { .. }) { "right" } else { "left" };
    view! {
        <SortableHeaderCell
            label=column.header
            direction=Signal::derive(move || table.with(|m| m.state.sort_direction(key)))
            on_sort=Callback::new(move |_| {
                table.update(|m| m.apply(TableAction::SetSort(key.to_string())))
            })
            align=align
        />
    }
    .into_any()
}

fn body_row<R, F>(
    row: &R,
    columns: &[&ColumnDef<R>],
    table: RwSignal<TableModel<R>>,
    in_flight: Signal<bool>,
    on_delete: F,
) -> impl IntoView
where
    R: TableRow + Send + Sync,
    F: Fn(String) + Copy + Send + Sync + 'static,
{
    let id = row.row_id();
    let id_for_check = id.clone();
    let id_for_toggle = id.clone();
    let id_for_delete = id.clone();
    let cells = columns.iter().map(|c| render_cell(c, row)).collect_view();

    view! {
        <tr class="table__row">
            <TableCheckbox
                checked=Signal::derive(move || table.with(|m| m.state.is_selected(&id_for_check)))
                on_change=Callback::new(move |_| {
                    table.update(|m| m.apply(TableAction::ToggleRowSelection(id_for_toggle.clone())))
                })
                label=format!("Select row {}", id)
            />
            {cells}
            <td class="table__cell table__cell--actions">
                <button
                    class="button button--danger button--small"
                    title="Delete"
                    disabled=move || in_flight.get()
                    on:click=move |_| on_delete(id_for_delete.clone())
                >
                    {icon("trash")}
                </button>
            </td>
        </tr>
    }
}

fn render_cell<R: TableRow>(column: &ColumnDef<R>, row: &R) -> AnyView {
    let value = column.value(row);
    match column.kind {
        CellKind::Number { .. } => {
            let text = column.kind.display(&value);
            view! { <td class="table__cell table__cell--number">{text}</td> }.into_any()
        }
        CellKind::Badge { tone, label } => {
            let class = format!("badge badge--{}", tone(&value).css_modifier());
            view! {
                <td class="table__cell">
                    <span class=class>{label(&value)}</span>
                </td>
            }
            .into_any()
        }
        CellKind::Image { alt } => match value {
            CellValue::Text(src) if !src.is_empty() => view! {
                <td class="table__cell">
                    <img class="table__thumb" src=src alt=alt />
                </td>
            }
            .into_any(),
            _ => view! {
                <td class="table__cell">
                    <span class="table__no-image">"No Image"</span>
                </td>
            }
            .into_any(),
        },
        CellKind::Tags => {
            let tags = match value {
                CellValue::List(tags) => tags,
                _ => Vec::new(),
            };
            view! {
                <td class="table__cell">
                    {tags.into_iter().map(|t| view! { <span class="tag">{t}</span> }).collect_view()}
                </td>
            }
            .into_any()
        }
        _ => {
            let text = column.kind.display(&value);
            let title = text.clone();
            view! { <td class="table__cell" title=title>{text}</td> }.into_any()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data_table::row::tests::Fruit;

    fn columns() -> Vec<ColumnDef<Fruit>> {
        vec![ColumnDef::new("id", "ID"), ColumnDef::new("qty", "Qty")]
    }

    #[test]
    fn test_render_page_copies_visible_slice() {
        let cols = columns();
        let mut model = TableModel::new(ViewState::for_columns(&cols).with_page_size(2));
        model.replace_rows(vec![
            Fruit::new("A", "Apple", 50.0),
            Fruit::new("B", "Banana", 100.0),
            Fruit::new("C", "Cherry", 75.0),
        ]);
        model.apply(TableAction::SetSort("qty".into()));
        model.apply(TableAction::SetSort("qty".into()));

        let page = render_page(&model, &cols);
        assert_eq!(page.ids, vec!["B", "C"]);
        assert_eq!(page.filtered, 3);
        assert_eq!(page.pages, 2);
        assert_eq!(page.page, 1);
    }
}
