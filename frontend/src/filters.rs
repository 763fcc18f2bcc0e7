use chrono::NaiveDate;

use crate::models::Transaction;

pub const CATEGORY_OPTIONS: [&str; 2] = ["Income", "Expenses"];

/// Narrowing applied in the browser to the page already fetched. Empty fields match everything.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransactionFilter {
    pub category: String,
    pub date: String,
    pub min_amount: String,
}

impl TransactionFilter {
    pub fn is_empty(&self) -> bool {
        self.category.is_empty() && self.date.is_empty() && self.min_amount.is_empty()
    }

    pub fn matches(&self, tx: &Transaction) -> bool {
        self.matches_category(tx) && self.matches_date(tx) && self.matches_amount(tx)
    }

    pub fn apply<'a>(&self, transactions: &'a [Transaction]) -> Vec<&'a Transaction> {
        transactions.iter().filter(|tx| self.matches(tx)).collect()
    }

    fn matches_category(&self, tx: &Transaction) -> bool {
        self.category.is_empty()
            || tx.transaction_category == self.category
            || tx.transaction_type == self.category
    }

    fn matches_date(&self, tx: &Transaction) -> bool {
        let Ok(wanted) = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d") else {
            return true;
        };
        tx.created_date() == Some(wanted)
    }

    fn matches_amount(&self, tx: &Transaction) -> bool {
        match self.min_amount.trim().parse::<f64>() {
            Ok(min) if min.is_finite() => tx.amount_value() >= min,
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TransactionFilter;
    use crate::models::Transaction;

    fn tx(id: &str, kind: &str, category: &str, amount: &str, created_at: &str) -> Transaction {
        Transaction {
            id: 0,
            transaction_id: id.to_string(),
            transaction_type: kind.to_string(),
            transaction_category: category.to_string(),
            description: String::new(),
            amount: amount.to_string(),
            month: "2025-05-01".to_string(),
            created_at: created_at.to_string(),
            user: String::new(),
        }
    }

    fn sample() -> Vec<Transaction> {
        vec![
            tx("a", "Salary", "Income", "50000", "2025-05-01T08:00:00Z"),
            tx("b", "Grocery", "Expenses", "1250.50", "2025-05-03T09:15:00Z"),
            tx("c", "Entertainment", "Expenses", "800", "2025-05-03T21:40:00Z"),
        ]
    }

    fn ids(filter: &TransactionFilter, transactions: &[Transaction]) -> Vec<String> {
        filter
            .apply(transactions)
            .into_iter()
            .map(|tx| tx.transaction_id.clone())
            .collect()
    }

    #[test]
    fn empty_filter_keeps_everything() {
        let filter = TransactionFilter::default();
        assert!(filter.is_empty());
        assert_eq!(ids(&filter, &sample()), ["a", "b", "c"]);
    }

    #[test]
    fn category_matches_category_or_type() {
        let transactions = sample();
        let by_category = TransactionFilter {
            category: "Expenses".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&by_category, &transactions), ["b", "c"]);

        let by_type = TransactionFilter {
            category: "Salary".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&by_type, &transactions), ["a"]);
    }

    #[test]
    fn date_compares_calendar_day() {
        let filter = TransactionFilter {
            date: "2025-05-03".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter, &sample()), ["b", "c"]);
    }

    #[test]
    fn min_amount_is_inclusive() {
        let filter = TransactionFilter {
            min_amount: "1250.5".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter, &sample()), ["a", "b"]);
    }

    #[test]
    fn unreadable_min_amount_is_ignored() {
        let filter = TransactionFilter {
            min_amount: "lots".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter, &sample()).len(), 3);
    }

    #[test]
    fn filters_combine() {
        let filter = TransactionFilter {
            category: "Expenses".to_string(),
            date: "2025-05-03".to_string(),
            min_amount: "1000".to_string(),
        };
        assert!(!filter.is_empty());
        assert_eq!(ids(&filter, &sample()), ["b"]);
    }
}
