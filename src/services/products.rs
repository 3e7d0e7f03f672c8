// src/services/products.rs

//! HTTP product service.
//!
//! Issues a single `GET` for the static product resource and maps every
//! failure to one human-readable message.

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::error::{AppError, Result};
use crate::models::{ClientConfig, Product};
use crate::services::ProductSource;

/// Fetches the product collection over HTTP.
pub struct ProductService {
    client: Client,
    url: Url,
}

impl ProductService {
    /// Create a service for the endpoint described by the configuration.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Self::from_url(config, config.products_url()?)
    }

    /// Create a service for an explicit resource URL.
    pub fn from_url(config: &ClientConfig, url: Url) -> Result<Self> {
        let client = Client::builder().user_agent(&config.user_agent).build()?;
        Ok(Self::with_client(client, url))
    }

    /// Create a service around an existing client.
    pub fn with_client(client: Client, url: Url) -> Self {
        Self { client, url }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    async fn fetch(&self) -> Result<Vec<Product>> {
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(AppError::client)?;

        let status = response.status();
        if !status.is_success() {
            let mut message = format!(
                "Http failure response for {}: {} {}",
                self.url,
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown Status")
            );
            let body = response.text().await.unwrap_or_default();
            let body = body.trim();
            if !body.is_empty() {
                message.push_str(&format!(" ({body})"));
            }
            return Err(AppError::server(status.as_u16(), message));
        }

        response
            .json::<Vec<Product>>()
            .await
            .map_err(AppError::client)
    }

    fn handle_error(err: AppError) -> AppError {
        log::error!("{}", err);
        err
    }
}

#[async_trait]
impl ProductSource for ProductService {
    async fn get_products(&self) -> Result<Vec<Product>> {
        let products = self.fetch().await.map_err(Self::handle_error)?;
        if log::log_enabled!(log::Level::Debug) {
            log::debug!(
                "ProductService::get_products all: {}",
                serde_json::to_string(&products)?
            );
        }
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::InMemoryProductSource;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(server: &MockServer) -> ClientConfig {
        ClientConfig {
            base_url: server.uri(),
            ..ClientConfig::default()
        }
    }

    #[tokio::test]
    async fn test_fetches_product_array() {
        let server = MockServer::start().await;
        let sample = InMemoryProductSource::sample().into_products();
        Mock::given(method("GET"))
            .and(path("/api/products/products.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&sample))
            .expect(1)
            .mount(&server)
            .await;

        let service = ProductService::new(&config_for(&server)).unwrap();
        let products = service.get_products().await.unwrap();
        assert_eq!(products, sample);
    }

    #[tokio::test]
    async fn test_server_error_reports_status_and_text() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("database offline"))
            .mount(&server)
            .await;

        let service = ProductService::new(&config_for(&server)).unwrap();
        let err = service.get_products().await.unwrap_err();

        match &err {
            AppError::Server { status, .. } => assert_eq!(*status, 500),
            other => panic!("expected server error, got {other:?}"),
        }
        let message = err.to_string();
        assert!(message.contains("500"));
        assert!(message.contains("Internal Server Error"));
        assert!(message.contains("database offline"));
    }

    #[tokio::test]
    async fn test_not_found_status() {
        let server = MockServer::start().await;
        let service = ProductService::new(&config_for(&server)).unwrap();

        let err = service.get_products().await.unwrap_err();
        assert!(err.to_string().starts_with("Server returned code: 404"));
    }

    #[tokio::test]
    async fn test_malformed_body_is_client_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let service = ProductService::new(&config_for(&server)).unwrap();
        let err = service.get_products().await.unwrap_err();
        assert!(matches!(err, AppError::Client(_)));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_client_error() {
        let config = ClientConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            ..ClientConfig::default()
        };
        let service = ProductService::new(&config).unwrap();

        let err = service.get_products().await.unwrap_err();
        assert!(err.to_string().starts_with("An error occurred: "));
    }
}
