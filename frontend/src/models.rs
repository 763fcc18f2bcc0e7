use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::month::Month;

/// A single income or expense record as the API returns it.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Transaction {
    #[serde(default)]
    pub id: i64,
    pub transaction_id: String,
    pub transaction_type: String,
    #[serde(default)]
    pub transaction_category: String,
    #[serde(default)]
    pub description: String,
    /// Decimal amount, kept in the server's string form so edits send it back untouched.
    #[serde(deserialize_with = "string_or_number")]
    pub amount: String,
    #[serde(default)]
    pub month: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub user: String,
}

impl Transaction {
    pub fn amount_value(&self) -> f64 {
        parse_amount(&self.amount)
    }

    /// The UTC calendar date the record was created on, if `created_at` is readable.
    pub fn created_date(&self) -> Option<NaiveDate> {
        parse_timestamp(&self.created_at).map(|ts| ts.date_naive())
    }
}

/// One page of `get-transactions`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TransactionPage {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub total: u64,
    #[serde(default = "one")]
    pub num_pages: u32,
    #[serde(default = "one")]
    pub current_page: u32,
}

fn one() -> u32 {
    1
}

/// Totals for one month, aggregated by the server.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MonthlySummary {
    #[serde(default)]
    pub id: i64,
    pub month: String,
    #[serde(deserialize_with = "string_or_number")]
    pub total_expense: String,
    #[serde(deserialize_with = "string_or_number")]
    pub total_income: String,
    #[serde(deserialize_with = "string_or_number")]
    pub balance: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub monthly_budget: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub user: String,
}

impl MonthlySummary {
    pub fn total_expense(&self) -> f64 {
        parse_amount(&self.total_expense)
    }

    pub fn total_income(&self) -> f64 {
        parse_amount(&self.total_income)
    }

    pub fn balance(&self) -> f64 {
        parse_amount(&self.balance)
    }

    pub fn monthly_budget(&self) -> f64 {
        parse_amount(&self.monthly_budget)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewTransaction {
    pub transaction_type: String,
    pub amount: f64,
    pub description: String,
    pub month: Month,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BudgetUpdate {
    pub amount: f64,
    pub month: Month,
}

#[derive(Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
pub struct SignupRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// Error body shape used by the API for non-2xx responses.
#[derive(Deserialize)]
pub struct ErrorBody {
    pub detail: Option<String>,
}

/// Reads a decimal string, treating blanks and garbage as zero.
pub fn parse_amount(text: &str) -> f64 {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Accepts RFC 3339 timestamps as well as naive `YYYY-MM-DDTHH:MM:SS[.f]` values (read as UTC).
pub fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(text) {
        return Some(ts.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
        Nothing,
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
        Raw::Nothing => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE_JSON: &str = r#"{
        "transactions": [
            {
                "id": 7,
                "transaction_id": "b5c1",
                "transaction_type": "Grocery",
                "transaction_category": "Expenses",
                "description": "Weekly shop",
                "amount": "1250.50",
                "month": "2025-05-01",
                "created_at": "2025-05-03T09:15:00.123456Z",
                "user": "3f2a"
            }
        ],
        "total": 11,
        "num_pages": 2,
        "current_page": 1
    }"#;

    #[test]
    fn decodes_transaction_page() {
        let page: TransactionPage = serde_json::from_str(PAGE_JSON).unwrap();

        assert_eq!(page.total, 11);
        assert_eq!(page.num_pages, 2);
        assert_eq!(page.current_page, 1);
        let tx = &page.transactions[0];
        assert_eq!(tx.transaction_id, "b5c1");
        assert_eq!(tx.amount_value(), 1250.5);
        assert_eq!(tx.created_date(), NaiveDate::from_ymd_opt(2025, 5, 3));
    }

    #[test]
    fn decodes_summary_with_numeric_fields() {
        let summary: MonthlySummary = serde_json::from_str(
            r#"{"id": 1, "month": "2025-05-01", "total_expense": 31500, "total_income": "50000.00",
                "balance": "18500.00", "monthly_budget": null, "user": 4}"#,
        )
        .unwrap();

        assert_eq!(summary.total_expense(), 31500.0);
        assert_eq!(summary.total_income(), 50000.0);
        assert_eq!(summary.balance(), 18500.0);
        assert_eq!(summary.monthly_budget(), 0.0);
        assert_eq!(summary.user, "4");
    }

    #[test]
    fn null_summary_means_no_data() {
        let summary: Option<MonthlySummary> = serde_json::from_str("null").unwrap();
        assert!(summary.is_none());
    }

    #[test]
    fn new_transaction_wire_shape() {
        let body = NewTransaction {
            transaction_type: "Salary".to_string(),
            amount: 2500.0,
            description: "May salary".to_string(),
            month: Month::new(2025, 5).unwrap(),
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "transaction_type": "Salary",
                "amount": 2500.0,
                "description": "May salary",
                "month": "2025-05-01"
            })
        );
    }

    #[test]
    fn parse_amount_is_forgiving() {
        assert_eq!(parse_amount(" 12.5 "), 12.5);
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("NaN"), 0.0);
    }

    #[test]
    fn parse_timestamp_handles_naive_values() {
        let ts = parse_timestamp("2025-01-31T23:59:59").unwrap();
        assert_eq!(ts.date_naive(), NaiveDate::from_ymd_opt(2025, 1, 31).unwrap());

        let ts = parse_timestamp("2025-02-01T01:00:00+05:30").unwrap();
        assert_eq!(ts.date_naive(), NaiveDate::from_ymd_opt(2025, 1, 31).unwrap());

        assert!(parse_timestamp("yesterday").is_none());
    }
}
