//! Dialog inputs and the required-field checks run before anything is sent.

use thiserror::Error;

use crate::{
    models::{BudgetUpdate, NewTransaction, Transaction},
    month::Month,
};

pub const TRANSACTION_TYPES: [&str; 3] = ["Salary", "Grocery", "Entertainment"];

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("Amount must be a number")]
    InvalidAmount,
}

/// Text as typed into the add/edit transaction dialog.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransactionForm {
    pub transaction_type: String,
    pub amount: String,
    pub description: String,
}

impl TransactionForm {
    pub fn from_transaction(tx: &Transaction) -> Self {
        Self {
            transaction_type: tx.transaction_type.clone(),
            amount: tx.amount.clone(),
            description: tx.description.clone(),
        }
    }

    fn checked(&self) -> Result<(String, f64, String), FormError> {
        let transaction_type = self.transaction_type.trim();
        if transaction_type.is_empty() {
            return Err(FormError::Missing("Transaction type"));
        }
        let amount = parse_required_amount(&self.amount)?;
        let description = self.description.trim();
        if description.is_empty() {
            return Err(FormError::Missing("Description"));
        }
        Ok((transaction_type.to_string(), amount, description.to_string()))
    }

    pub fn to_new_transaction(&self, month: Month) -> Result<NewTransaction, FormError> {
        let (transaction_type, amount, description) = self.checked()?;
        Ok(NewTransaction {
            transaction_type,
            amount,
            description,
            month,
        })
    }

    /// A copy of `original` with the edited fields; everything else is sent back as it was.
    pub fn apply_to(&self, original: &Transaction) -> Result<Transaction, FormError> {
        self.checked()?;
        Ok(Transaction {
            transaction_type: self.transaction_type.trim().to_string(),
            amount: self.amount.trim().to_string(),
            description: self.description.trim().to_string(),
            ..original.clone()
        })
    }
}

pub fn budget_update(amount: &str, month: Month) -> Result<BudgetUpdate, FormError> {
    Ok(BudgetUpdate {
        amount: parse_required_amount(amount)?,
        month,
    })
}

fn parse_required_amount(text: &str) -> Result<f64, FormError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(FormError::Missing("Amount"));
    }
    text.parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
        .ok_or(FormError::InvalidAmount)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn may() -> Month {
        Month::new(2025, 5).unwrap()
    }

    fn form(kind: &str, amount: &str, description: &str) -> TransactionForm {
        TransactionForm {
            transaction_type: kind.to_string(),
            amount: amount.to_string(),
            description: description.to_string(),
        }
    }

    fn existing() -> Transaction {
        Transaction {
            id: 9,
            transaction_id: "t-9".to_string(),
            transaction_type: "Grocery".to_string(),
            transaction_category: "Expenses".to_string(),
            description: "Veg".to_string(),
            amount: "300.00".to_string(),
            month: "2025-05-01".to_string(),
            created_at: "2025-05-02T10:00:00Z".to_string(),
            user: "u1".to_string(),
        }
    }

    #[test]
    fn complete_form_builds_request() {
        let new = form("Salary", " 2500.75 ", " May salary ")
            .to_new_transaction(may())
            .unwrap();

        assert_eq!(new.transaction_type, "Salary");
        assert_eq!(new.amount, 2500.75);
        assert_eq!(new.description, "May salary");
        assert_eq!(new.month, may());
    }

    #[test]
    fn missing_fields_are_reported_in_order() {
        assert_eq!(
            form("", "1", "x").to_new_transaction(may()),
            Err(FormError::Missing("Transaction type"))
        );
        assert_eq!(
            form("Salary", "  ", "x").to_new_transaction(may()),
            Err(FormError::Missing("Amount"))
        );
        assert_eq!(
            form("Salary", "1", "").to_new_transaction(may()),
            Err(FormError::Missing("Description"))
        );
        assert_eq!(
            form("Salary", "ten", "x").to_new_transaction(may()),
            Err(FormError::InvalidAmount)
        );
    }

    #[test]
    fn edit_keeps_identity_fields() {
        let original = existing();
        let edited = form("Entertainment", "450.5", "Cinema")
            .apply_to(&original)
            .unwrap();

        assert_eq!(edited.transaction_id, "t-9");
        assert_eq!(edited.created_at, original.created_at);
        assert_eq!(edited.transaction_category, "Expenses");
        assert_eq!(edited.transaction_type, "Entertainment");
        assert_eq!(edited.amount, "450.5");
        assert_eq!(edited.description, "Cinema");
    }

    #[test]
    fn edit_form_starts_from_record() {
        let form = TransactionForm::from_transaction(&existing());
        assert_eq!(form, super::TransactionForm {
            transaction_type: "Grocery".to_string(),
            amount: "300.00".to_string(),
            description: "Veg".to_string(),
        });
    }

    #[test]
    fn budget_requires_a_number() {
        assert_eq!(budget_update("20000", may()).unwrap().amount, 20000.0);
        assert_eq!(budget_update("", may()), Err(FormError::Missing("Amount")));
        assert_eq!(budget_update("abc", may()), Err(FormError::InvalidAmount));
    }

    #[test]
    fn error_messages() {
        assert_eq!(FormError::Missing("Amount").to_string(), "Amount is required");
        assert_eq!(FormError::InvalidAmount.to_string(), "Amount must be a number");
    }
}
