//! Asynchronous client for the Performer Logistics quoting backend.
//!
//! - Every call except `login` takes the session explicitly and sends its bearer token.
//! - Non-2xx responses become [`ApiError::Backend`] carrying the backend's `message`.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, Url};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::{
    ComparativeQuote, MarginCalculation, MarginRequest, QuoteId, QuoteRecord, QuoteSuggestion,
    RequestId, Role, Session,
};
use crate::util::config::AppConfig;
use crate::util::version::user_agent;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("backend returned {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Backend { status: u16, message: Option<String> },
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text for a notification: the backend's own message when it sent one, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Backend {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Backend { status: 401, .. })
    }
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    token: String,
    #[serde(default)]
    rol: Option<String>,
    #[serde(default)]
    nombre: Option<String>,
}

impl From<LoginResponse> for Session {
    fn from(value: LoginResponse) -> Self {
        Session {
            token: value.token,
            role: value.rol.map(Role::from).unwrap_or_default(),
            name: value.nombre.unwrap_or_default(),
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Result<Self, ApiError> {
        Self::with_base_url(&config.api_base_url, config.request_timeout)
    }

    pub fn with_base_url(base: &str, timeout: Duration) -> Result<Self, ApiError> {
        let base_url = Url::parse(base)?;
        let http = Client::builder()
            .user_agent(user_agent())
            .timeout(timeout)
            .build()?;
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        let url = self.url("auth/login")?;
        let response: LoginResponse = self
            .fetch_json(self.http.post(url).json(&LoginRequest { email, password }))
            .await?;
        let session = Session::from(response);
        debug!(role = %session.role, "login accepted");
        Ok(session)
    }

    pub async fn calculate_margin(
        &self,
        session: &Session,
        request: &MarginRequest,
    ) -> Result<MarginCalculation, ApiError> {
        let mut url = self.url("cotizaciones/calcular-margen")?;
        url.query_pairs_mut().extend_pairs(request.query_pairs());
        debug!(%url, "requesting margin calculation");
        self.fetch_json(self.authorized(self.http.post(url), session))
            .await
    }

    pub async fn compare_quotes(
        &self,
        session: &Session,
        request_id: RequestId,
    ) -> Result<Vec<ComparativeQuote>, ApiError> {
        let mut url = self.url("cotizaciones/comparar")?;
        url.query_pairs_mut()
            .append_pair("solicitudId", &request_id.to_string());
        self.fetch_json(self.authorized(self.http.get(url), session))
            .await
    }

    pub async fn list_quotes(&self, session: &Session) -> Result<Vec<QuoteRecord>, ApiError> {
        let url = self.url("cotizaciones")?;
        self.fetch_json(self.authorized(self.http.get(url), session))
            .await
    }

    /// Full replacement; `record` must carry every field the backend expects.
    pub async fn update_quote(
        &self,
        session: &Session,
        record: &QuoteRecord,
    ) -> Result<QuoteRecord, ApiError> {
        let url = self.url(&format!("cotizaciones/{}", record.id))?;
        self.fetch_json(self.authorized(self.http.put(url).json(record), session))
            .await
    }

    pub async fn delete_quote(&self, session: &Session, id: QuoteId) -> Result<(), ApiError> {
        let url = self.url(&format!("cotizaciones/{id}"))?;
        self.send(self.authorized(self.http.delete(url), session))
            .await?;
        Ok(())
    }

    pub async fn advanced_suggestions(
        &self,
        session: &Session,
        request_id: RequestId,
    ) -> Result<Vec<QuoteSuggestion>, ApiError> {
        let mut url = self.url("cotizaciones/sugerencias-avanzadas")?;
        url.query_pairs_mut()
            .append_pair("solicitudId", &request_id.to_string());
        self.fetch_json(self.authorized(self.http.get(url), session))
            .await
    }

    /// Copies quote `id` onto another request, optionally with a new provider cost.
    pub async fn reuse_quote(
        &self,
        session: &Session,
        id: QuoteId,
        new_request_id: RequestId,
        new_cost: Option<f64>,
    ) -> Result<QuoteRecord, ApiError> {
        let mut url = self.url(&format!("cotizaciones/reutilizar/{id}"))?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("nuevaSolicitudId", &new_request_id.to_string());
            if let Some(cost) = new_cost {
                query.append_pair("nuevoCosto", &cost.to_string());
            }
        }
        self.fetch_json(self.authorized(self.http.post(url), session))
            .await
    }

    fn authorized(&self, builder: RequestBuilder, session: &Session) -> RequestBuilder {
        builder.bearer_auth(&session.token)
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = backend_message(&body);
        warn!(status = status.as_u16(), message = ?message, "backend rejected request");
        Err(ApiError::Backend {
            status: status.as_u16(),
            message,
        })
    }

    async fn fetch_json<T>(&self, builder: RequestBuilder) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let response = self.send(builder).await?;
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|err| ApiError::Decode(err.to_string()))
    }

    fn url(&self, path: &str) -> Result<Url, url::ParseError> {
        self.base_url.join(path)
    }
}

/// Pulls `message` (or Spring's `error` reason) out of an error body.
fn backend_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    parsed
        .message
        .filter(|message| !message.trim().is_empty())
        .or(parsed.error)
        .filter(|message| !message.trim().is_empty())
}
