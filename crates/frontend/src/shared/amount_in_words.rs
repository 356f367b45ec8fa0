//! Сумма прописью для счетов

const ONES: [&str; 20] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

const SCALES: [(u64, &str); 3] = [
    (1_000_000_000, "billion"),
    (1_000_000, "million"),
    (1_000, "thousand"),
];

/// Words for 1..=999
fn below_thousand(n: u64) -> String {
    let hundreds = n / 100;
    let rest = n % 100;
    let mut parts = Vec::new();
    if hundreds > 0 {
        parts.push(format!("{} hundred", ONES[hundreds as usize]));
    }
    if rest > 0 {
        if rest < 20 {
            parts.push(ONES[rest as usize].to_string());
        } else if rest % 10 == 0 {
            parts.push(TENS[(rest / 10) as usize].to_string());
        } else {
            parts.push(format!(
                "{}-{}",
                TENS[(rest / 10) as usize],
                ONES[(rest % 10) as usize]
            ));
        }
    }
    parts.join(" ")
}

/// Whole number in lowercase English words
pub fn number_in_words(n: u64) -> String {
    if n == 0 {
        return ONES[0].to_string();
    }
    let mut remaining = n;
    let mut parts = Vec::new();
    for (scale, name) in SCALES {
        let chunk = remaining / scale;
        if chunk > 0 {
            parts.push(format!("{} {}", number_in_words(chunk), name));
            remaining %= scale;
        }
    }
    if remaining > 0 {
        parts.push(below_thousand(remaining));
    }
    parts.join(" ")
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Сумма прописью: `123.45` -> "One hundred twenty-three dollars and 45/100"
///
/// Cents are rounded to the nearest hundredth before splitting, so `0.999`
/// reads as one dollar. Non-finite input is treated as zero.
pub fn amount_in_words(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let total_cents = (amount.abs() * 100.0).round() as u64;
    let dollars = total_cents / 100;
    let cents = total_cents % 100;

    let unit = if dollars == 1 { "dollar" } else { "dollars" };
    let mut words = format!("{} {} and {:02}/100", number_in_words(dollars), unit, cents);
    if amount < 0.0 && total_cents > 0 {
        words = format!("minus {}", words);
    }
    capitalize(&words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_amount() {
        assert_eq!(
            amount_in_words(123.45),
            "One hundred twenty-three dollars and 45/100"
        );
    }

    #[test]
    fn test_zero_and_single_dollar() {
        assert_eq!(amount_in_words(0.0), "Zero dollars and 00/100");
        assert_eq!(amount_in_words(1.0), "One dollar and 00/100");
        assert_eq!(amount_in_words(0.07), "Zero dollars and 07/100");
    }

    #[test]
    fn test_cents_rounding_carries_into_dollars() {
        assert_eq!(amount_in_words(0.999), "One dollar and 00/100");
        assert_eq!(amount_in_words(9.996), "Ten dollars and 00/100");
    }

    #[test]
    fn test_scales() {
        assert_eq!(
            number_in_words(1_234_567),
            "one million two hundred thirty-four thousand five hundred sixty-seven"
        );
        assert_eq!(number_in_words(2_000_000_015), "two billion fifteen");
        assert_eq!(number_in_words(40), "forty");
        assert_eq!(number_in_words(100_000), "one hundred thousand");
    }

    #[test]
    fn test_negative_and_non_finite() {
        assert_eq!(amount_in_words(-5.5), "Minus five dollars and 50/100");
        assert_eq!(amount_in_words(f64::NAN), "Zero dollars and 00/100");
    }
}
