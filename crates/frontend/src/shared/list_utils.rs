/// Универсальные утилиты для сортировки списков
use std::cmp::Ordering;
use std::fmt;

/// Значение ячейки, по которому сортируется и отображается колонка
///
/// Only `Text`/`Text` and `Number`/`Number` pairs are comparable; every other
/// pairing compares as equal so the sort keeps their relative order.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Bool(bool),
    #[default]
    Empty,
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Empty => Ok(()),
        }
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<&String> for FieldValue {
    fn from(value: &String) -> Self {
        FieldValue::Text(value.clone())
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value as f64)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Number(value as f64)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(FieldValue::Empty)
    }
}

/// Направление сортировки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Сравнение строк без учёта регистра; при равенстве строчные идут раньше заглавных
///
/// Plain Unicode case folding, not locale collation: accented letters sort by
/// code point (`"é"` after `"z"`).
pub fn compare_text(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| b.cmp(a))
}

/// Сравнивает два значения ячеек. Несравнимые пары считаются равными.
pub fn compare_values(a: &FieldValue, b: &FieldValue) -> Ordering {
    match (a, b) {
        (FieldValue::Text(a), FieldValue::Text(b)) => compare_text(a, b),
        (FieldValue::Number(a), FieldValue::Number(b)) => {
            a.partial_cmp(b).unwrap_or(Ordering::Equal)
        }
        _ => Ordering::Equal,
    }
}

/// Сортирует список по значению, извлечённому из каждого элемента (стабильно)
///
/// `compare_values` is not a total order once a column mixes numbers with
/// empty or text cells, so this is a merge sort that only ever asks "is the
/// right element strictly smaller"; it never panics and ties keep input order.
pub fn sort_by_value<T, F>(items: Vec<T>, value: F, direction: SortDirection) -> Vec<T>
where
    F: Fn(&T) -> FieldValue,
{
    let keyed: Vec<(FieldValue, T)> = items
        .into_iter()
        .map(|item| (value(&item), item))
        .collect();
    merge_sort(keyed, direction)
        .into_iter()
        .map(|(_, item)| item)
        .collect()
}

fn merge_sort<T>(mut items: Vec<(FieldValue, T)>, direction: SortDirection) -> Vec<(FieldValue, T)> {
    if items.len() <= 1 {
        return items;
    }
    let right = items.split_off(items.len() / 2);
    let mut left = merge_sort(items, direction).into_iter().peekable();
    let mut right = merge_sort(right, direction).into_iter().peekable();

    let mut merged = Vec::with_capacity(left.len() + right.len());
    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => {
                direction.apply(compare_values(&l.0, &r.0)) == Ordering::Greater
            }
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };
        merged.extend(if take_right { right.next() } else { left.next() });
    }
    merged
}

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(is_active: bool, direction: SortDirection) -> &'static str {
    match (is_active, direction) {
        (false, _) => " ⇅",
        (true, SortDirection::Ascending) => " ▲",
        (true, SortDirection::Descending) => " ▼",
    }
}

/// CSS-класс индикатора сортировки
pub fn get_sort_class(is_active: bool) -> &'static str {
    if is_active {
        "sort-indicator sort-indicator--active"
    } else {
        "sort-indicator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_comparison_ignores_case() {
        assert_eq!(compare_text("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_text("Zeta", "alpha"), Ordering::Greater);
        assert_eq!(compare_text("a", "A"), Ordering::Less);
        assert_eq!(compare_text("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_numbers_compare_numerically() {
        let a = FieldValue::Number(9.0);
        let b = FieldValue::Number(10.0);
        assert_eq!(compare_values(&a, &b), Ordering::Less);
        assert_eq!(
            compare_values(&FieldValue::Number(f64::NAN), &b),
            Ordering::Equal
        );
    }

    #[test]
    fn test_incomparable_pairs_are_equal() {
        let text = FieldValue::from("10");
        let number = FieldValue::Number(10.0);
        assert_eq!(compare_values(&text, &number), Ordering::Equal);
        assert_eq!(
            compare_values(&FieldValue::Bool(true), &FieldValue::Bool(false)),
            Ordering::Equal
        );
        assert_eq!(
            compare_values(&FieldValue::Empty, &FieldValue::Empty),
            Ordering::Equal
        );
    }

    #[test]
    fn test_sort_by_value_keeps_incomparable_order() {
        let items = vec![
            ("a", FieldValue::Bool(true)),
            ("b", FieldValue::Empty),
            ("c", FieldValue::from("x")),
        ];
        let items = sort_by_value(items, |item| item.1.clone(), SortDirection::Ascending);
        let order: Vec<&str> = items.iter().map(|i| i.0).collect();
        assert_eq!(order, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_sort_by_value_is_stable_for_ties() {
        let items = vec![(1, 2.0), (2, 1.0), (3, 2.0), (4, 1.0), (5, 2.0)];
        let sorted = sort_by_value(items, |item| item.1.into(), SortDirection::Ascending);
        let order: Vec<i32> = sorted.iter().map(|i| i.0).collect();
        assert_eq!(order, vec![2, 4, 1, 3, 5]);

        let items = vec![(1, 2.0), (2, 1.0), (3, 2.0), (4, 1.0)];
        let sorted = sort_by_value(items, |item| item.1.into(), SortDirection::Descending);
        let order: Vec<i32> = sorted.iter().map(|i| i.0).collect();
        assert_eq!(order, vec![1, 3, 2, 4]);
    }

    #[test]
    fn test_compare_text_is_not_collation_aware() {
        assert_eq!(compare_text("zebra", "éclair"), Ordering::Less);
    }

    #[test]
    fn test_display() {
        assert_eq!(FieldValue::Number(14.5).to_string(), "14.5");
        assert_eq!(FieldValue::Number(3.0).to_string(), "3");
        assert_eq!(FieldValue::from(None::<String>).to_string(), "");
        assert_eq!(FieldValue::Bool(false).to_string(), "false");
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator(false, SortDirection::Ascending), " ⇅");
        assert_eq!(get_sort_indicator(true, SortDirection::Ascending), " ▲");
        assert_eq!(get_sort_indicator(true, SortDirection::Descending), " ▼");
    }
}
