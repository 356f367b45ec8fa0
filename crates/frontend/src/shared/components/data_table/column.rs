//! Описания колонок универсальной таблицы
//!
//! A column is either a data column (typed accessor plus optional renderer)
//! or the single actions column. The two are separate enum variants, so an
//! actions column can never fall back to a renderer or a raw field value.

use crate::shared::list_utils::FieldValue;
use leptos::prelude::AnyView;
use std::sync::Arc;

/// Key reported by the actions column.
pub const ACTIONS_KEY: &str = "actions";

type ValueFn<T> = Arc<dyn Fn(&T) -> FieldValue + Send + Sync>;
type ViewFn<T, V> = Arc<dyn Fn(&T) -> V + Send + Sync>;

pub struct DataColumn<T, V> {
    key: &'static str,
    label: String,
    sortable: bool,
    value: ValueFn<T>,
    render: Option<ViewFn<T, V>>,
}

pub struct ActionColumn<T, V> {
    label: String,
    actions: ViewFn<T, V>,
}

/// Описание колонки: данные или действия над строкой
pub enum ColumnDef<T, V = AnyView> {
    Data(DataColumn<T, V>),
    Actions(ActionColumn<T, V>),
}

/// Содержимое ячейки с указанием, каким путём оно получено
#[derive(Debug, Clone, PartialEq)]
pub enum Cell<V> {
    Actions(V),
    Rendered(V),
    Raw(String),
}

impl<T, V> ColumnDef<T, V> {
    /// Data column. `value` is the typed field lookup used for sorting and,
    /// when no renderer is set, for the cell text.
    pub fn data<F>(key: &'static str, label: impl Into<String>, value: F) -> Self
    where
        F: Fn(&T) -> FieldValue + Send + Sync + 'static,
    {
        ColumnDef::Data(DataColumn {
            key,
            label: label.into(),
            sortable: false,
            value: Arc::new(value),
            render: None,
        })
    }

    pub fn actions<F>(label: impl Into<String>, actions: F) -> Self
    where
        F: Fn(&T) -> V + Send + Sync + 'static,
    {
        ColumnDef::Actions(ActionColumn {
            label: label.into(),
            actions: Arc::new(actions),
        })
    }

    /// Marks a data column sortable. No effect on the actions column.
    pub fn sortable(mut self) -> Self {
        if let ColumnDef::Data(column) = &mut self {
            column.sortable = true;
        }
        self
    }

    /// Sets a custom cell renderer. Ignored by the actions column.
    pub fn render<F>(mut self, render: F) -> Self
    where
        F: Fn(&T) -> V + Send + Sync + 'static,
    {
        if let ColumnDef::Data(column) = &mut self {
            column.render = Some(Arc::new(render));
        }
        self
    }

    pub fn key(&self) -> &'static str {
        match self {
            ColumnDef::Data(column) => column.key,
            ColumnDef::Actions(_) => ACTIONS_KEY,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            ColumnDef::Data(column) => &column.label,
            ColumnDef::Actions(column) => &column.label,
        }
    }

    pub fn is_sortable(&self) -> bool {
        matches!(self, ColumnDef::Data(column) if column.sortable)
    }

    pub fn is_actions(&self) -> bool {
        matches!(self, ColumnDef::Actions(_))
    }

    /// Value used for sorting; `None` for the actions column.
    pub fn sort_value(&self, record: &T) -> Option<FieldValue> {
        match self {
            ColumnDef::Data(column) => Some((column.value)(record)),
            ColumnDef::Actions(_) => None,
        }
    }

    /// Resolves a cell: actions, then renderer, then the stringified field.
    pub fn cell(&self, record: &T) -> Cell<V> {
        match self {
            ColumnDef::Actions(column) => Cell::Actions((column.actions)(record)),
            ColumnDef::Data(DataColumn {
                render: Some(render),
                ..
            }) => Cell::Rendered(render(record)),
            ColumnDef::Data(column) => Cell::Raw((column.value)(record).to_string()),
        }
    }
}

impl<T, V> Clone for ColumnDef<T, V> {
    fn clone(&self) -> Self {
        match self {
            ColumnDef::Data(column) => ColumnDef::Data(DataColumn {
                key: column.key,
                label: column.label.clone(),
                sortable: column.sortable,
                value: Arc::clone(&column.value),
                render: column.render.clone(),
            }),
            ColumnDef::Actions(column) => ColumnDef::Actions(ActionColumn {
                label: column.label.clone(),
                actions: Arc::clone(&column.actions),
            }),
        }
    }
}

/// Finds the column a sort key refers to, if it is sortable.
pub fn find_sortable<'a, T, V>(
    columns: &'a [ColumnDef<T, V>],
    key: &str,
) -> Option<&'a ColumnDef<T, V>> {
    columns
        .iter()
        .find(|column| column.is_sortable() && column.key() == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Meter {
        number: String,
        reading: f64,
    }

    fn meter() -> Meter {
        Meter {
            number: "M-7".to_string(),
            reading: 41.5,
        }
    }

    #[test]
    fn test_raw_lookup_stringifies_value() {
        let column: ColumnDef<Meter, String> =
            ColumnDef::data("reading", "Reading", |m: &Meter| m.reading.into());
        assert_eq!(column.cell(&meter()), Cell::Raw("41.5".to_string()));
    }

    #[test]
    fn test_render_takes_precedence_over_lookup() {
        let column: ColumnDef<Meter, String> =
            ColumnDef::data("number", "Meter", |m: &Meter| (&m.number).into())
                .render(|m| format!("#{}", m.number));
        assert_eq!(column.cell(&meter()), Cell::Rendered("#M-7".to_string()));
    }

    #[test]
    fn test_actions_column_ignores_render() {
        let column: ColumnDef<Meter, String> =
            ColumnDef::actions("", |m: &Meter| format!("edit {}", m.number))
                .render(|_| "rendered".to_string())
                .sortable();
        assert_eq!(column.cell(&meter()), Cell::Actions("edit M-7".to_string()));
        assert_eq!(column.key(), ACTIONS_KEY);
        assert!(!column.is_sortable());
        assert_eq!(column.sort_value(&meter()), None);
    }

    #[test]
    fn test_find_sortable_skips_plain_columns() {
        let columns: Vec<ColumnDef<Meter, String>> = vec![
            ColumnDef::data("number", "Meter", |m: &Meter| (&m.number).into()),
            ColumnDef::data("reading", "Reading", |m: &Meter| m.reading.into()).sortable(),
        ];
        assert!(find_sortable(&columns, "number").is_none());
        assert_eq!(
            find_sortable(&columns, "reading").map(|c| c.label()),
            Some("Reading")
        );
    }
}
