use std::time::Duration;

use api_types::{
    ErrorResponse,
    account::AccountView,
    analytics::{CategorySpending, FinancialOverview, Period},
    budget::{BudgetGoals, BudgetGoalsView},
    transaction::{TransactionDraft, TransactionView},
};
use reqwest::{RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;

use crate::error::{AppError, Result};

#[derive(Debug)]
pub enum ClientError {
    NotFound,
    BadRequest(String),
    Validation(String),
    Server(String),
    Transport(reqwest::Error),
}

impl ClientError {
    /// One-line text for the dashboard banner.
    pub fn message(&self) -> String {
        match self {
            Self::NotFound => "Not found.".to_string(),
            Self::BadRequest(message) => format!("Bad request: {message}"),
            Self::Validation(message) => format!("Validation error: {message}"),
            Self::Server(message) => format!("Server error: {message}"),
            Self::Transport(err) => format!("Server unreachable: {err}"),
        }
    }
}

type ClientResult<T> = std::result::Result<T, ClientError>;

#[derive(Debug, Clone)]
pub struct Client {
    base_url: Url,
    http: reqwest::Client,
}

impl Client {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|err| AppError::Setting(format!("invalid base_url: {err}")))?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self { base_url, http })
    }

    fn endpoint(&self, path: &str) -> ClientResult<Url> {
        self.base_url
            .join(path)
            .map_err(|err| ClientError::Server(format!("invalid base_url: {err}")))
    }

    async fn send(&self, request: RequestBuilder) -> ClientResult<Response> {
        let res = request.send().await.map_err(ClientError::Transport)?;
        if res.status().is_success() {
            return Ok(res);
        }

        let status = res.status();
        let body = res
            .json::<ErrorResponse>()
            .await
            .map(|err| err.error)
            .unwrap_or_else(|_| "unknown error".to_string());

        let err = match status.as_u16() {
            400 => ClientError::BadRequest(body),
            404 => ClientError::NotFound,
            422 => ClientError::Validation(body),
            _ => ClientError::Server(body),
        };
        Err(err)
    }

    async fn json<T: DeserializeOwned>(&self, request: RequestBuilder) -> ClientResult<T> {
        self.send(request)
            .await?
            .json::<T>()
            .await
            .map_err(ClientError::Transport)
    }

    pub async fn transactions(&self) -> ClientResult<Vec<TransactionView>> {
        let url = self.endpoint("transactions")?;
        self.json(self.http.get(url)).await
    }

    pub async fn add_transaction(&self, draft: &TransactionDraft) -> ClientResult<TransactionView> {
        let url = self.endpoint("transactions")?;
        self.json(self.http.post(url).json(draft)).await
    }

    pub async fn update_transaction(
        &self,
        id: i64,
        draft: &TransactionDraft,
    ) -> ClientResult<TransactionView> {
        let url = self.endpoint(&format!("transactions/{id}"))?;
        self.json(self.http.put(url).json(draft)).await
    }

    pub async fn delete_transaction(&self, id: i64) -> ClientResult<()> {
        let url = self.endpoint(&format!("transactions/{id}"))?;
        self.send(self.http.delete(url)).await.map(|_| ())
    }

    pub async fn financial_overview(&self, period: Period) -> ClientResult<FinancialOverview> {
        let url = self.endpoint("analytics/financial-overview")?;
        self.json(self.http.get(url).query(&[("period", period.as_str())]))
            .await
    }

    pub async fn spending_by_category(
        &self,
        period: Period,
    ) -> ClientResult<Vec<CategorySpending>> {
        let url = self.endpoint("analytics/spending-by-category")?;
        self.json(self.http.get(url).query(&[("period", period.as_str())]))
            .await
    }

    pub async fn budget_goals(&self) -> ClientResult<BudgetGoalsView> {
        let url = self.endpoint("budget-goals")?;
        self.json(self.http.get(url)).await
    }

    pub async fn save_budget_goals(&self, goals: &BudgetGoals) -> ClientResult<BudgetGoalsView> {
        let url = self.endpoint("budget-goals")?;
        self.json(self.http.post(url).json(goals)).await
    }

    pub async fn accounts(&self) -> ClientResult<Vec<AccountView>> {
        let url = self.endpoint("accounts")?;
        self.json(self.http.get(url)).await
    }

    pub async fn categories(&self) -> ClientResult<Vec<String>> {
        let url = self.endpoint("categories")?;
        self.json(self.http.get(url)).await
    }
}
