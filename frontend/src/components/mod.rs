pub mod auth_guard;
pub mod budget_comparison;
pub mod budget_dialog;
pub mod comparison_chart;
pub mod dashboard;
pub mod icons;
pub mod login;
pub mod navbar;
pub mod pagination;
pub mod signup;
pub mod summary_panel;
pub mod transaction_dialog;
pub mod transactions_table;

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// Blocking browser alert, used for failed mutations.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

pub fn input_value(e: InputEvent) -> String {
    let input: HtmlInputElement = e.target_unchecked_into();
    input.value()
}

pub fn select_value(e: Event) -> String {
    let select: HtmlSelectElement = e.target_unchecked_into();
    select.value()
}
