use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{
    error::{AppError, AppResult},
    models::MarketRecord,
};

const PAGE_LIMIT: &str = "100";

/// Client for the data.gov.in "current daily price of commodities" resource.
#[derive(Clone)]
pub struct MandiClient {
    http: Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MandiFilters {
    pub state: Option<String>,
    pub district: Option<String>,
    pub commodity: Option<String>,
}

/// How specific the query was that finally returned rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchLevel {
    District,
    State,
    National,
}

#[derive(Debug, Deserialize)]
struct RecordsResponse {
    #[serde(default)]
    records: Vec<MarketRecord>,
}

fn non_blank(v: &Option<String>) -> Option<&str> {
    v.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl MandiClient {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            http: Client::new(),
            api_key,
            base_url,
        }
    }

    fn has_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    pub async fn fetch_records(&self, filters: &MandiFilters) -> AppResult<Vec<MarketRecord>> {
        if !self.has_key() {
            return Err(AppError::Upstream(
                "DATA_GOV_API_KEY is missing in .env".to_string(),
            ));
        }

        let mut query: Vec<(&str, &str)> = vec![
            ("api-key", self.api_key.as_str()),
            ("format", "json"),
            ("limit", PAGE_LIMIT),
        ];
        if let Some(s) = non_blank(&filters.state) {
            query.push(("filters[state]", s));
        }
        if let Some(d) = non_blank(&filters.district) {
            query.push(("filters[district]", d));
        }
        if let Some(c) = non_blank(&filters.commodity) {
            query.push(("filters[commodity]", c));
        }

        let res = self.http.get(&self.base_url).query(&query).send().await?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            return Err(AppError::Upstream(format!(
                "mandi rates request failed: {status} {body}"
            )));
        }

        let parsed = res.json::<RecordsResponse>().await?;
        Ok(parsed.records)
    }

    /// District first, then the whole state, then all of India, stopping at
    /// the first level that has rows.
    pub async fn fetch_with_fallback(
        &self,
        state: Option<String>,
        district: Option<String>,
    ) -> AppResult<(FetchLevel, Vec<MarketRecord>)> {
        if non_blank(&district).is_some() {
            let records = self
                .fetch_records(&MandiFilters {
                    state: state.clone(),
                    district,
                    commodity: None,
                })
                .await?;
            if !records.is_empty() {
                return Ok((FetchLevel::District, records));
            }
            tracing::warn!("district mandi data not found, trying state level");
        }

        if non_blank(&state).is_some() {
            let records = self
                .fetch_records(&MandiFilters {
                    state,
                    ..Default::default()
                })
                .await?;
            if !records.is_empty() {
                return Ok((FetchLevel::State, records));
            }
            tracing::warn!("state mandi data not found, trying national level");
        }

        let records = self.fetch_records(&MandiFilters::default()).await?;
        Ok((FetchLevel::National, records))
    }
}
