// NASA InSight weather API client
use crate::application::ports::WeatherSource;
use crate::error::FetchError;
use crate::infrastructure::config::WeatherSettings;
use async_trait::async_trait;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct InsightClient {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl InsightClient {
    pub fn new(settings: &WeatherSettings) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(settings.connect_timeout_secs))
            .read_timeout(Duration::from_secs(settings.read_timeout_secs))
            .build()?;

        Ok(Self {
            base_url: settings.base_url.clone(),
            api_key: settings.api_key.clone(),
            client,
        })
    }

    fn build_feed_url(&self) -> String {
        format!(
            "{}?api_key={}&feedtype=json&ver=1.0",
            self.base_url,
            urlencoding::encode(&self.api_key)
        )
    }
}

#[async_trait]
impl WeatherSource for InsightClient {
    async fn fetch_document(&self) -> Result<String, FetchError> {
        let url = self.build_feed_url();
        tracing::debug!("Fetching weather feed from {}", self.base_url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!("Weather feed returned status {}", status);
            return Err(FetchError::Status(status));
        }

        Ok(response.text().await?)
    }
}
