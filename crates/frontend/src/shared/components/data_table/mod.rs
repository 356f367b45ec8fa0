//! Универсальная таблица: сортировка, пагинация, колонки действий
//!
//! Screens hand over their records and a list of [`ColumnDef`]s; the table
//! owns sort and page state and nothing else.

pub mod column;
pub mod state;
pub mod view;

pub use column::{Cell, ColumnDef, ACTIONS_KEY};
pub use state::{BodyKind, SortState, TableState, ITEMS_PER_PAGE};
pub use view::{DataTable, RowKey};
