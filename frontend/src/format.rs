use chrono::NaiveDate;

use crate::config::CURRENCY_SYMBOL;

/// Groups digits the way `en-IN` does: the last three, then pairs (`12,34,567`).
fn format_with_commas(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (left, right) = rest.split_at(rest.len() - 2);
        groups.push(right);
        rest = left;
    }
    groups.push(rest);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// Whole-rupee amount, e.g. `₹31,500`. Used by the charts.
pub fn format_currency(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let rounded = amount.abs().round() as u64;
    let sign = if amount < 0.0 && rounded > 0 { "-" } else { "" };
    format!("{}{}{}", sign, CURRENCY_SYMBOL, format_with_commas(rounded))
}

/// Amount with up to two decimals and trailing zeros dropped, e.g. `1,250.5`.
pub fn format_amount(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    let whole = format_with_commas(cents / 100);
    match cents % 100 {
        0 => format!("{sign}{whole}"),
        c if c % 10 == 0 => format!("{sign}{whole}.{}", c / 10),
        c => format!("{sign}{whole}.{c:02}"),
    }
}

/// Table date, e.g. `May 3, 2025`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn currency_groups_indian_style() {
        assert_eq!(format_currency(0.0), "₹0");
        assert_eq!(format_currency(999.0), "₹999");
        assert_eq!(format_currency(20000.0), "₹20,000");
        assert_eq!(format_currency(31500.0), "₹31,500");
        assert_eq!(format_currency(1234567.0), "₹12,34,567");
        assert_eq!(format_currency(123456789.0), "₹12,34,56,789");
    }

    #[test]
    fn currency_rounds_and_signs() {
        assert_eq!(format_currency(1499.6), "₹1,500");
        assert_eq!(format_currency(-500.0), "-₹500");
        assert_eq!(format_currency(-0.2), "₹0");
        assert_eq!(format_currency(f64::NAN), "₹0");
    }

    #[test]
    fn amount_keeps_significant_decimals() {
        assert_eq!(format_amount(1250.5), "1,250.5");
        assert_eq!(format_amount(1250.05), "1,250.05");
        assert_eq!(format_amount(100000.0), "1,00,000");
        assert_eq!(format_amount(-42.25), "-42.25");
    }

    #[test]
    fn date_is_short_month_day_year() {
        let date = NaiveDate::from_ymd_opt(2025, 5, 3).unwrap();
        assert_eq!(format_date(date), "May 3, 2025");
    }
}
