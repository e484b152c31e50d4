//! HTTP client for the Vanguard fund price API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    jsonp,
    types::{FundQuote, HistoricalPriceResponse},
    user_agent::get_user_agent,
    Error,
};

/// Callback name echoed into the JSONP envelope. The value is arbitrary as
/// far as the API is concerned; this is the one the retail site sends.
const JSONP_CALLBACK: &str = "angular.callbacks._2";

/// HTTP client for the Vanguard fund price API.
///
/// Sends requests with browser-like headers and a randomized user agent to
/// avoid being blocked. Each request builds a fresh `reqwest::Client` with
/// a 30-second timeout.
pub struct Client {
    /// Base URL for the API. Defaults to `https://api.vanguard.com`.
    base_api_url: String,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at the production Vanguard API.
    pub fn new() -> Self {
        Self {
            base_api_url: "https://api.vanguard.com".to_string(),
        }
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.to_string(),
        }
    }

    fn get_url(&self, path: &str) -> Result<Url, Error> {
        let mut url =
            Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
                tracing::error!("Invalid URL constructed: {}", e);
                Error::RequestFailed
            })?;
        url.query_pairs_mut().append_pair("callback", JSONP_CALLBACK);
        Ok(url)
    }

    async fn get<T>(&self, path: &str) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let url = self.get_url(path)?;
        let client = reqwest::Client::builder()
            .user_agent(get_user_agent())
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        let resp = client
            .get(url)
            .header("origin", "https://investor.vanguard.com")
            .header("referer", "https://investor.vanguard.com")
            .header("accept", "*/*")
            .header("accept-language", "en-US,en;q=0.9")
            .header("sec-fetch-dest", "empty")
            .header("sec-fetch-mode", "cors")
            .header("sec-fetch-site", "same-site")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let json = jsonp::unwrap(&body)?;
        let parsed = serde_json::from_str::<T>(json).map_err(|e| {
            let snippet = truncate_body(json);
            tracing::error!("Failed to parse payload: {} | body: {}", e, snippet);
            Error::MalformedPayload(format!("{} | body: {}", e, snippet))
        })?;

        Ok(parsed)
    }

    /// Fetches the recent daily NAV history for a fund. One call returns
    /// roughly the last two weeks of closes.
    pub async fn get_price_history(&self, fund_id: &str) -> Result<HistoricalPriceResponse, Error> {
        self.get::<HistoricalPriceResponse>(
            format!("/rs/ire/01/pe/fund/{}/price/.jsonp", fund_id).as_str(),
        )
        .await
    }

    /// Fetches the single most recent quote for a fund.
    pub async fn get_latest_price(&self, fund_id: &str) -> Result<FundQuote, Error> {
        self.get::<FundQuote>(
            format!("/rs/ire/01/pe/fund/{}/price/latest/.jsonp", fund_id).as_str(),
        )
        .await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        format!("{}...[truncated]", &body[..MAX])
    }
}
