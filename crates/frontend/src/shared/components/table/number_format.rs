//! Утилиты форматирования чисел для таблиц и счетов

/// Groups the integer digits of `digits` in threes with `,`.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Форматирует число с разделителем тысяч и указанным количеством знаков после точки
///
/// `1234.567` with 2 decimals becomes `1,234.57`.
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer, fraction) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };
    let is_zero = formatted.chars().all(|c| c == '0' || c == '.');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };
    match fraction {
        Some(f) => format!("{}{}.{}", sign, group_thousands(integer), f),
        None => format!("{}{}", sign, group_thousands(integer)),
    }
}

/// Денежное значение: 2 знака после точки
pub fn format_money(value: f64) -> String {
    format_number_with_decimals(value, 2)
}

/// Объём потребления в кубометрах
pub fn format_volume(value: f64) -> String {
    format!("{} m³", format_number_with_decimals(value, 2))
}
