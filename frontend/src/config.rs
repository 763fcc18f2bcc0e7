//! Build-time settings.

/// Root URL of the expense-tracker API, overridable with `API_BASE_URL` at build time.
pub const API_BASE_URL: &str = match option_env!("API_BASE_URL") {
    Some(url) => url,
    None => "http://localhost:8000",
};

pub const CURRENCY_SYMBOL: &str = "₹";
pub const CURRENCY_NAME: &str = "(Indian Rupees)";

pub const CHART_WIDTH: f64 = 600.0;
pub const CHART_HEIGHT: f64 = 400.0;
