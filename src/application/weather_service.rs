// Weather service - Use case for listing and inspecting sols
use crate::application::ports::WeatherSource;
use crate::domain::weather::WeatherRecord;
use crate::error::FetchError;
use crate::infrastructure::weather_json::parse_weather_document;
use std::sync::Arc;

#[derive(Clone)]
pub struct WeatherService {
    source: Arc<dyn WeatherSource>,
}

impl WeatherService {
    pub fn new(source: Arc<dyn WeatherSource>) -> Self {
        Self { source }
    }

    /// Fetch a fresh batch, newest sol first.
    pub async fn list_sols(&self) -> Result<Vec<WeatherRecord>, FetchError> {
        let document = self.source.fetch_document().await?;
        let records = parse_weather_document(&document)?;
        tracing::debug!("Parsed {} sols from weather document", records.len());
        Ok(records)
    }

    pub async fn find_sol(&self, sol: &str) -> Result<Option<WeatherRecord>, FetchError> {
        let records = self.list_sols().await?;
        Ok(records.into_iter().find(|r| r.sol == sol))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct StaticSource(&'static str);

    #[async_trait]
    impl WeatherSource for StaticSource {
        async fn fetch_document(&self) -> Result<String, FetchError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl WeatherSource for FailingSource {
        async fn fetch_document(&self) -> Result<String, FetchError> {
            Err(FetchError::Status(reqwest::StatusCode::SERVICE_UNAVAILABLE))
        }
    }

    #[tokio::test]
    async fn test_list_and_find() {
        let service = WeatherService::new(Arc::new(StaticSource(
            r#"{"sol_keys": ["9", "10"], "9": {"PRE": {"av": 700.1}}, "10": {"PRE": {"av": 710.4}}}"#,
        )));

        let sols: Vec<String> = service
            .list_sols()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.sol)
            .collect();
        assert_eq!(sols, vec!["10", "9"]);

        let record = service.find_sol("9").await.unwrap().unwrap();
        assert_eq!(record.average_pressure, 700.1);
        assert!(service.find_sol("11").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_parse_error_surfaces() {
        let service = WeatherService::new(Arc::new(StaticSource("{not json")));
        let err = service.list_sols().await.unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)));
    }

    #[tokio::test]
    async fn test_fetch_error_surfaces() {
        let service = WeatherService::new(Arc::new(FailingSource));
        let err = service.list_sols().await.unwrap_err();
        assert!(matches!(err, FetchError::Status(_)));
    }
}
