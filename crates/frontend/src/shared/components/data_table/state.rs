//! Состояние сортировки и пагинации таблицы
//!
//! Everything here is pure so the table behaviour can be checked without a DOM.

use super::column::{find_sortable, ColumnDef};
use crate::shared::list_utils::{sort_by_value, SortDirection};

/// Фиксированный размер страницы
pub const ITEMS_PER_PAGE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub field: Option<&'static str>,
    pub direction: SortDirection,
}

/// Что показывать в теле таблицы
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    NoColumns,
    NoData,
    Rows,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    pub sort: SortState,
    /// 1-based
    pub current_page: usize,
}

impl TableState {
    pub fn new(default_sort: Option<&'static str>, direction: SortDirection) -> Self {
        Self {
            sort: SortState {
                field: default_sort,
                direction,
            },
            current_page: 1,
        }
    }

    /// Header click. Same sortable column flips direction, another sortable
    /// column becomes active ascending, non-sortable headers do nothing.
    pub fn toggle_sort(&mut self, key: &'static str, sortable: bool) {
        if !sortable {
            return;
        }
        if self.sort.field == Some(key) {
            self.sort.direction = self.sort.direction.flipped();
        } else {
            self.sort.field = Some(key);
            self.sort.direction = SortDirection::Ascending;
        }
    }

    /// Moves to `page`, clamped to `1..=max(total_pages, 1)`.
    pub fn go_to_page(&mut self, page: usize, total_pages: usize) {
        self.current_page = page.clamp(1, total_pages.max(1));
    }

    /// Page actually shown; stays in range when the data shrank under it.
    pub fn effective_page(&self, total_pages: usize) -> usize {
        self.current_page.clamp(1, total_pages.max(1))
    }

    /// Sorted and paginated slice of `data` for the current state.
    pub fn visible_rows<'a, T, V>(&self, data: &'a [T], columns: &[ColumnDef<T, V>]) -> Vec<&'a T> {
        let sorted = sort_rows(data, columns, &self.sort);
        let page = self.effective_page(total_pages(sorted.len()));
        page_slice(&sorted, page).to_vec()
    }
}

pub fn total_pages(count: usize) -> usize {
    count.div_ceil(ITEMS_PER_PAGE)
}

/// Full re-sort of `data`. Unset or unknown sort field keeps input order.
pub fn sort_rows<'a, T, V>(data: &'a [T], columns: &[ColumnDef<T, V>], sort: &SortState) -> Vec<&'a T> {
    let rows: Vec<&T> = data.iter().collect();
    match sort.field.and_then(|key| find_sortable(columns, key)) {
        Some(column) => sort_by_value(
            rows,
            |row| column.sort_value(row).unwrap_or_default(),
            sort.direction,
        ),
        None => rows,
    }
}

/// Slice `[(page-1)*10, page*10)` of already sorted rows.
pub fn page_slice<T>(rows: &[T], page: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(ITEMS_PER_PAGE);
    if start >= rows.len() {
        return &[];
    }
    let end = (start + ITEMS_PER_PAGE).min(rows.len());
    &rows[start..end]
}

/// Columns are checked before data.
pub fn body_kind(column_count: usize, row_count: usize) -> BodyKind {
    if column_count == 0 {
        BodyKind::NoColumns
    } else if row_count == 0 {
        BodyKind::NoData
    } else {
        BodyKind::Rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::FieldValue;

    #[derive(Debug, Clone, PartialEq)]
    struct Account {
        id: u32,
        holder: String,
        balance: f64,
        tag: Option<bool>,
    }

    fn account(id: u32, holder: &str, balance: f64) -> Account {
        Account {
            id,
            holder: holder.to_string(),
            balance,
            tag: None,
        }
    }

    fn columns() -> Vec<ColumnDef<Account, String>> {
        vec![
            ColumnDef::data("id", "Id", |a: &Account| a.id.into()),
            ColumnDef::data("holder", "Holder", |a: &Account| (&a.holder).into()).sortable(),
            ColumnDef::data("balance", "Balance", |a: &Account| a.balance.into()).sortable(),
            ColumnDef::data("tag", "Tag", |a: &Account| a.tag.into()).sortable(),
            ColumnDef::actions("", |a: &Account| format!("open {}", a.id)),
        ]
    }

    fn accounts(n: u32) -> Vec<Account> {
        // Distinct, deliberately shuffled balances and holders.
        (0..n)
            .map(|i| {
                let k = (i * 7919) % 1009;
                account(i, &format!("holder-{:04}", (k * 31) % 1013), k as f64 * 1.5)
            })
            .collect()
    }

    fn ids(rows: &[&Account]) -> Vec<u32> {
        rows.iter().map(|a| a.id).collect()
    }

    fn sort_by(field: &'static str, direction: SortDirection) -> SortState {
        SortState {
            field: Some(field),
            direction,
        }
    }

    #[test]
    fn test_ascending_is_reverse_of_descending() {
        let data = accounts(37);
        for field in ["holder", "balance"] {
            let asc = ids(&sort_rows(&data, &columns(), &sort_by(field, SortDirection::Ascending)));
            let mut desc =
                ids(&sort_rows(&data, &columns(), &sort_by(field, SortDirection::Descending)));
            desc.reverse();
            assert_eq!(asc, desc, "field {field}");
        }
    }

    #[test]
    fn test_numeric_sort_is_not_lexicographic() {
        let data = vec![account(1, "a", 100.0), account(2, "b", 9.0), account(3, "c", 20.0)];
        let rows = sort_rows(&data, &columns(), &sort_by("balance", SortDirection::Ascending));
        assert_eq!(ids(&rows), vec![2, 3, 1]);
    }

    #[test]
    fn test_unset_sort_preserves_input_order() {
        let data = accounts(23);
        let sort = SortState {
            field: None,
            direction: SortDirection::Descending,
        };
        let rows = sort_rows(&data, &columns(), &sort);
        assert_eq!(ids(&rows), (0..23).collect::<Vec<_>>());
    }

    #[test]
    fn test_non_sortable_or_unknown_field_preserves_order() {
        let data = vec![account(5, "b", 1.0), account(2, "a", 2.0)];
        for field in ["id", "missing", "actions"] {
            let rows = sort_rows(&data, &columns(), &sort_by(field, SortDirection::Ascending));
            assert_eq!(ids(&rows), vec![5, 2]);
        }
    }

    #[test]
    fn test_incomparable_column_does_not_reorder() {
        let mut data = vec![account(1, "a", 1.0), account(2, "b", 2.0), account(3, "c", 3.0)];
        data[0].tag = Some(true);
        data[2].tag = Some(false);
        let rows = sort_rows(&data, &columns(), &sort_by("tag", SortDirection::Ascending));
        assert_eq!(ids(&rows), vec![1, 2, 3]);
    }

    #[test]
    fn test_mixed_value_types_do_not_panic() {
        let cols: Vec<ColumnDef<(u32, FieldValue), String>> =
            vec![ColumnDef::data("v", "V", |r: &(u32, FieldValue)| r.1.clone()).sortable()];
        let data = vec![
            (1, FieldValue::Number(3.0)),
            (2, FieldValue::from("x")),
            (3, FieldValue::Empty),
            (4, FieldValue::Number(1.0)),
        ];
        let rows = sort_rows(&data, &cols, &sort_by("v", SortDirection::Ascending));
        assert_eq!(rows.len(), 4);
    }

    fn mixed_column(n: u32, cell: impl Fn(u32) -> FieldValue) -> Vec<(u32, FieldValue)> {
        (0..n).map(|i| (i, cell((i * 7919) % 1009))).collect()
    }

    fn assert_sorts_whole_column(data: &[(u32, FieldValue)]) {
        let cols: Vec<ColumnDef<(u32, FieldValue), String>> =
            vec![ColumnDef::data("v", "V", |r: &(u32, FieldValue)| r.1.clone()).sortable()];
        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            let rows = sort_rows(data, &cols, &sort_by("v", direction));
            let mut seen: Vec<u32> = rows.iter().map(|r| r.0).collect();
            seen.sort_unstable();
            assert_eq!(seen, (0..data.len() as u32).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_large_mixed_columns_sort_without_panic() {
        for n in [56, 150, 420] {
            // Option<f64> column: numbers with gaps
            assert_sorts_whole_column(&mixed_column(n, |k| {
                if k % 3 == 0 {
                    FieldValue::Empty
                } else {
                    FieldValue::Number(k as f64)
                }
            }));
            // NaN amounts from the backend
            assert_sorts_whole_column(&mixed_column(n, |k| {
                if k % 4 == 0 {
                    FieldValue::Number(f64::NAN)
                } else {
                    FieldValue::Number(k as f64)
                }
            }));
            // text, numbers and blanks in one column
            assert_sorts_whole_column(&mixed_column(n, |k| match k % 3 {
                0 => FieldValue::Text(format!("acc-{k}")),
                1 => FieldValue::Number(k as f64),
                _ => FieldValue::Empty,
            }));
        }
    }

    #[test]
    fn test_pages_reconstruct_sorted_sequence() {
        for n in [1usize, 9, 10, 11, 25, 30, 101] {
            let data = accounts(n as u32);
            let sort = sort_by("balance", SortDirection::Descending);
            let sorted = sort_rows(&data, &columns(), &sort);
            let pages = total_pages(n);
            let mut joined = Vec::new();
            for page in 1..=pages {
                let slice = page_slice(&sorted, page);
                assert!(!slice.is_empty() && slice.len() <= ITEMS_PER_PAGE);
                joined.extend_from_slice(slice);
            }
            assert_eq!(ids(&joined), ids(&sorted), "n = {n}");
            assert!(page_slice(&sorted, pages + 1).is_empty());
        }
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0), 0);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(10), 1);
        assert_eq!(total_pages(11), 2);
    }

    #[test]
    fn test_toggle_same_field_flips_direction() {
        let mut state = TableState::new(Some("holder"), SortDirection::Descending);
        state.toggle_sort("holder", true);
        assert_eq!(state.sort, sort_by("holder", SortDirection::Ascending));
        state.toggle_sort("holder", true);
        assert_eq!(state.sort, sort_by("holder", SortDirection::Descending));
    }

    #[test]
    fn test_toggle_other_field_resets_to_ascending() {
        let mut state = TableState::new(Some("holder"), SortDirection::Descending);
        state.toggle_sort("balance", true);
        assert_eq!(state.sort, sort_by("balance", SortDirection::Ascending));

        let mut state = TableState::new(None, SortDirection::Descending);
        state.toggle_sort("holder", true);
        assert_eq!(state.sort, sort_by("holder", SortDirection::Ascending));
    }

    #[test]
    fn test_toggle_non_sortable_is_noop() {
        let mut state = TableState::new(Some("holder"), SortDirection::Descending);
        state.toggle_sort("id", false);
        assert_eq!(state.sort, sort_by("holder", SortDirection::Descending));
    }

    #[test]
    fn test_page_requests_are_clamped() {
        let mut state = TableState::new(None, SortDirection::Descending);
        state.go_to_page(7, 3);
        assert_eq!(state.current_page, 3);
        state.go_to_page(0, 3);
        assert_eq!(state.current_page, 1);
        state.go_to_page(2, 0);
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn test_visible_rows_clamps_stale_page() {
        let data = accounts(12);
        let mut state = TableState::new(None, SortDirection::Descending);
        state.current_page = 5;
        let rows = state.visible_rows(&data, &columns());
        assert_eq!(ids(&rows), vec![10, 11]);
    }

    #[test]
    fn test_body_kind() {
        assert_eq!(body_kind(0, 0), BodyKind::NoColumns);
        assert_eq!(body_kind(0, 5), BodyKind::NoColumns);
        assert_eq!(body_kind(3, 0), BodyKind::NoData);
        assert_eq!(body_kind(3, 5), BodyKind::Rows);
    }
}
