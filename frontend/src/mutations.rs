//! Writes against the API. Nothing is updated locally: on success the affected data hooks
//! are asked to reload, on failure the user gets a blocking alert.

use std::future::Future;

use wasm_bindgen_futures::spawn_local;
use yew::Callback;

use crate::{components::alert, error::ApiError};

/// Reload handles for the two data sources on the dashboard.
#[derive(Clone, PartialEq)]
pub struct Refetch {
    pub transactions: Callback<()>,
    pub summary: Callback<()>,
}

impl Refetch {
    pub fn all(&self) {
        self.transactions.emit(());
        self.summary.emit(());
    }

    pub fn summary_only(&self) {
        self.summary.emit(());
    }
}

/// What a mutation invalidates once it succeeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Invalidates {
    Everything,
    Summary,
}

/// Runs `request`, then reloads what it invalidates and calls `on_success`.
///
/// `action` completes the alert text, e.g. "add transaction" gives
/// "Failed to add transaction: ...".
pub fn run<F>(
    action: &'static str,
    request: F,
    invalidates: Invalidates,
    refetch: Refetch,
    on_success: Callback<()>,
    on_settled: Callback<()>,
) where
    F: Future<Output = Result<(), ApiError>> + 'static,
{
    spawn_local(async move {
        let result = request.await;
        on_settled.emit(());
        settle(action, result, invalidates, &refetch, &on_success, &alert);
    });
}

fn settle(
    action: &str,
    result: Result<(), ApiError>,
    invalidates: Invalidates,
    refetch: &Refetch,
    on_success: &Callback<()>,
    report: &dyn Fn(&str),
) -> bool {
    match result {
        Ok(()) => {
            log::info!("{action} succeeded");
            on_success.emit(());
            match invalidates {
                Invalidates::Everything => refetch.all(),
                Invalidates::Summary => refetch.summary_only(),
            }
            true
        }
        Err(err) => {
            log::error!("Error trying to {action}: {err}");
            report(&format!("Failed to {action}: {}", err.message()));
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use yew::Callback;

    use super::*;

    fn counter() -> (Rc<Cell<u32>>, Callback<()>) {
        let count = Rc::new(Cell::new(0));
        let callback = {
            let count = count.clone();
            Callback::from(move |_| count.set(count.get() + 1))
        };
        (count, callback)
    }

    #[test]
    fn success_reloads_both_sources() {
        let (transactions, transactions_cb) = counter();
        let (summary, summary_cb) = counter();
        let (done, done_cb) = counter();
        let refetch = Refetch {
            transactions: transactions_cb,
            summary: summary_cb,
        };

        assert!(settle(
            "add transaction",
            Ok(()),
            Invalidates::Everything,
            &refetch,
            &done_cb,
            &|_| panic!("no alert expected"),
        ));
        assert_eq!(transactions.get(), 1);
        assert_eq!(summary.get(), 1);
        assert_eq!(done.get(), 1);
    }

    #[test]
    fn budget_change_reloads_summary_only() {
        let (transactions, transactions_cb) = counter();
        let (summary, summary_cb) = counter();
        let (_, done_cb) = counter();
        let refetch = Refetch {
            transactions: transactions_cb,
            summary: summary_cb,
        };

        settle(
            "add budget",
            Ok(()),
            Invalidates::Summary,
            &refetch,
            &done_cb,
            &|_| panic!("no alert expected"),
        );
        assert_eq!(transactions.get(), 0);
        assert_eq!(summary.get(), 1);
    }

    #[test]
    fn failure_leaves_everything_alone() {
        let (transactions, transactions_cb) = counter();
        let (summary, summary_cb) = counter();
        let (done, done_cb) = counter();
        let refetch = Refetch {
            transactions: transactions_cb,
            summary: summary_cb,
        };

        let alerts = std::cell::RefCell::new(Vec::new());
        let ok = settle(
            "delete transaction",
            Err(ApiError::Network("offline".to_string())),
            Invalidates::Everything,
            &refetch,
            &done_cb,
            &|message| alerts.borrow_mut().push(message.to_string()),
        );
        assert!(!ok);
        assert_eq!(
            alerts.into_inner(),
            ["Failed to delete transaction: network error: offline"]
        );
        assert_eq!(transactions.get() + summary.get() + done.get(), 0);
    }
}
