use super::column::{Cell, ColumnDef};
use super::state::{body_kind, total_pages, BodyKind, TableState};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::list_utils::SortDirection;
use leptos::prelude::*;
use std::sync::Arc;
use thaw::*;

pub type RowKey<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

/// Таблица с клиентской сортировкой и постраничным выводом (10 строк)
///
/// Renders "No columns defined" when `columns` is empty and "No data" when
/// `data` is empty, in place of the table. Sort and page state live only as
/// long as the component.
#[component]
pub fn DataTable<T>(
    #[prop(into)]
    data: Signal<Vec<T>>,

    columns: Vec<ColumnDef<T>>,

    /// Stable identifier written to each row as `data-row-key`
    #[prop(optional)]
    row_key: Option<RowKey<T>>,

    /// Колонка начальной сортировки
    #[prop(optional)]
    default_sort: Option<&'static str>,

    /// Направление начальной сортировки (по умолчанию по убыванию)
    #[prop(optional)]
    default_sort_direction: SortDirection,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    let state = RwSignal::new(TableState::new(default_sort, default_sort_direction));
    let column_count = columns.len();
    let columns = Arc::new(columns);

    let kind = Memo::new(move |_| body_kind(column_count, data.with(Vec::len)));
    let page_count = Signal::derive(move || data.with(|d| total_pages(d.len())));
    let current_page =
        Signal::derive(move || state.with(|s| s.effective_page(page_count.get())));
    let on_page_change = Callback::new(move |page: usize| {
        let total = page_count.get_untracked();
        state.update(|s| s.go_to_page(page, total));
    });

    let table = move || {
        let header = render_header(&columns, state);
        let columns = Arc::clone(&columns);
        let row_key = row_key.clone();
        let rows = move || {
            let visible: Vec<T> = data.with(|d| {
                state.with(|s| s.visible_rows(d, &columns).into_iter().cloned().collect())
            });
            visible
                .into_iter()
                .map(|record| render_row(&record, &columns, row_key.as_ref()))
                .collect_view()
        };

        view! {
            <Table>
                <TableHeader>
                    <TableRow>{header}</TableRow>
                </TableHeader>
                <TableBody>{rows}</TableBody>
            </Table>
            <PaginationControls
                current_page=current_page
                total_pages=page_count
                on_page_change=on_page_change
            />
        }
    };

    view! {
        <div class="table">
            {move || match kind.get() {
                BodyKind::NoColumns => {
                    view! { <div class="table__placeholder">"No columns defined"</div> }.into_any()
                }
                BodyKind::NoData => {
                    view! { <div class="table__placeholder">"No data"</div> }.into_any()
                }
                BodyKind::Rows => table().into_any(),
            }}
        </div>
    }
}

fn render_header<T>(columns: &[ColumnDef<T>], state: RwSignal<TableState>) -> impl IntoView
where
    T: 'static,
{
    columns
        .iter()
        .map(|column| {
            let label = column.label().to_string();
            if column.is_sortable() {
                let key = column.key();
                view! {
                    <SortableHeaderCell
                        label=label
                        is_active=Signal::derive(move || state.with(|s| s.sort.field == Some(key)))
                        direction=Signal::derive(move || state.with(|s| s.sort.direction))
                        on_sort=Callback::new(move |_| state.update(|s| s.toggle_sort(key, true)))
                    />
                }
                .into_any()
            } else {
                view! { <TableHeaderCell>{label}</TableHeaderCell> }.into_any()
            }
        })
        .collect_view()
}

fn render_row<T>(record: &T, columns: &[ColumnDef<T>], row_key: Option<&RowKey<T>>) -> impl IntoView {
    let key = row_key.map(|key| key(record));
    let cells = columns
        .iter()
        .map(|column| {
            let content = match column.cell(record) {
                Cell::Actions(actions) => {
                    view! { <div class="table__actions">{actions}</div> }.into_any()
                }
                Cell::Rendered(rendered) => rendered,
                Cell::Raw(text) => view! { <TableCellLayout>{text}</TableCellLayout> }.into_any(),
            };
            view! { <TableCell>{content}</TableCell> }
        })
        .collect_view();

    view! {
        <TableRow attr:data-row-key=key>{cells}</TableRow>
    }
}
