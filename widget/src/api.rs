use anyhow::Result;
use async_trait::async_trait;

use crate::card::AnimalRecord;

/// Transport port for the widget. The reducer never sees this; only
/// the driver does, which keeps the machine testable offline.
#[async_trait]
pub trait AnimalsApi: Send + Sync {
    async fn search(&self, term: &str) -> Result<Vec<AnimalRecord>>;
}

pub struct HttpAnimalsApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpAnimalsApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl AnimalsApi for HttpAnimalsApi {
    async fn search(&self, term: &str) -> Result<Vec<AnimalRecord>> {
        let url = format!("{}/animals", self.base_url);
        log::debug!("[API] GET {url}?search={term}");

        let records = self
            .client
            .get(&url)
            .query(&[("search", term)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(records)
    }
}
