//! Typed access to the expense-tracker REST API.
//!
//! Authentication rides on the session cookie the server sets at login, so every request
//! is sent with credentials included and nothing is kept in local storage.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use web_sys::RequestCredentials;

use crate::{
    config::API_BASE_URL,
    error::ApiError,
    models::{
        BudgetUpdate, ErrorBody, LoginRequest, MonthlySummary, NewTransaction, SignupRequest,
        Transaction, TransactionPage,
    },
    month::Month,
};

pub const SIGNUP: &str = "/api/users/signup/";
pub const LOGIN: &str = "/api/users/login/";
pub const LOGOUT: &str = "/api/users/logout/";
pub const VALIDATE_SESSION: &str = "/api/users/validate-session/";
pub const GET_TRANSACTIONS: &str = "/api/expense-tracker/get-transactions/";
pub const GET_SUMMARY: &str = "/api/expense-tracker/get-transaction-summary-by-month/";
pub const ADD_TRANSACTION: &str = "/api/expense-tracker/add-transaction/";
pub const EDIT_TRANSACTION: &str = "/api/expense-tracker/edit-transaction/";
pub const DELETE_TRANSACTION: &str = "/api/expense-tracker/delete-transaction/";
pub const ADD_MONTHLY_BUDGET: &str = "/api/expense-tracker/add-monthly-budget/";

/// Handle passed to every component that talks to the API.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(API_BASE_URL)
    }
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn signup(&self, name: &str, email: &str, password: &str) -> Result<(), ApiError> {
        let body = SignupRequest {
            name,
            email,
            password,
        };
        let request = with_json(post(&self.url(SIGNUP)), &body)?;
        send(request).await.map(drop)
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<(), ApiError> {
        let body = LoginRequest { email, password };
        let request = with_json(post(&self.url(LOGIN)), &body)?;
        send(request).await.map(drop)
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        let request = post(&self.url(LOGOUT)).build()?;
        send(request).await.map(drop)
    }

    pub async fn validate_session(&self) -> Result<(), ApiError> {
        let request = get(&self.url(VALIDATE_SESSION), &[]).build()?;
        send(request).await.map(drop)
    }

    pub async fn get_transactions(
        &self,
        month: Month,
        page: u32,
    ) -> Result<TransactionPage, ApiError> {
        let query = transactions_query(month, page);
        let request = get(&self.url(GET_TRANSACTIONS), &query).build()?;
        read_json(send(request).await?).await
    }

    /// `None` when the server answers `null` for a month it has nothing recorded for.
    pub async fn get_summary(&self, month: Month) -> Result<Option<MonthlySummary>, ApiError> {
        let query = [("month", month.to_string())];
        let request = get(&self.url(GET_SUMMARY), &query).build()?;
        read_json(send(request).await?).await
    }

    pub async fn add_transaction(&self, transaction: &NewTransaction) -> Result<(), ApiError> {
        let request = with_json(post(&self.url(ADD_TRANSACTION)), transaction)?;
        send(request).await.map(drop)
    }

    /// Sends the whole record back, keyed by its `transaction_id`.
    pub async fn edit_transaction(&self, transaction: &Transaction) -> Result<(), ApiError> {
        let query = transaction_key(&transaction.transaction_id);
        let request = with_json(patch(&self.url(EDIT_TRANSACTION), &query), transaction)?;
        send(request).await.map(drop)
    }

    pub async fn delete_transaction(&self, transaction_id: &str) -> Result<(), ApiError> {
        let query = transaction_key(transaction_id);
        let request = delete(&self.url(DELETE_TRANSACTION), &query).build()?;
        send(request).await.map(drop)
    }

    pub async fn set_monthly_budget(&self, update: &BudgetUpdate) -> Result<(), ApiError> {
        let request = with_json(patch(&self.url(ADD_MONTHLY_BUDGET), &[]), update)?;
        send(request).await.map(drop)
    }
}

type Query = [(&'static str, String)];

fn transactions_query(month: Month, page: u32) -> [(&'static str, String); 2] {
    [("month", month.to_string()), ("page", page.to_string())]
}

fn transaction_key(transaction_id: &str) -> [(&'static str, String); 1] {
    [("transaction_id", transaction_id.to_string())]
}

/// Credentials go on every request. Query values are escaped by the browser's
/// `URLSearchParams` when gloo-net builds the request.
fn prepare(builder: RequestBuilder, query: &Query) -> RequestBuilder {
    let builder = builder.credentials(RequestCredentials::Include);
    if query.is_empty() {
        builder
    } else {
        builder.query(query.iter().map(|(key, value)| (*key, value.as_str())))
    }
}

fn get(url: &str, query: &Query) -> RequestBuilder {
    prepare(Request::get(url), query)
}

fn post(url: &str) -> RequestBuilder {
    prepare(Request::post(url), &[])
}

fn patch(url: &str, query: &Query) -> RequestBuilder {
    prepare(Request::patch(url), query)
}

fn delete(url: &str, query: &Query) -> RequestBuilder {
    prepare(Request::delete(url), query)
}

fn with_json<T: Serialize>(builder: RequestBuilder, body: &T) -> Result<Request, ApiError> {
    builder
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))
}

async fn send(request: Request) -> Result<Response, ApiError> {
    log::debug!("{} {}", request.method(), request.url());

    let response = request.send().await.map_err(|e| {
        log::warn!("Request failed: {e}");
        ApiError::Network(e.to_string())
    })?;

    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let detail = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.detail);
    log::warn!("{} returned {status}: {detail:?}", response.url());

    Err(ApiError::Status { status, detail })
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_base_and_path() {
        let client = ApiClient::new("http://localhost:8000/");

        assert_eq!(
            client.url(VALIDATE_SESSION),
            "http://localhost:8000/api/users/validate-session/"
        );
    }

    #[test]
    fn transactions_are_requested_by_month_and_page() {
        let may = Month::new(2025, 5).unwrap();

        assert_eq!(
            transactions_query(may, 2),
            [("month", "2025-05-01".to_string()), ("page", "2".to_string())]
        );
    }

    #[test]
    fn transaction_id_is_passed_unescaped_to_the_builder() {
        assert_eq!(
            transaction_key("a b&c"),
            [("transaction_id", "a b&c".to_string())]
        );
    }

    #[test]
    fn default_client_uses_configured_base() {
        let client = ApiClient::default();

        assert!(client.url(LOGIN).starts_with(API_BASE_URL.trim_end_matches('/')));
    }
}
