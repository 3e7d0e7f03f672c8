//! Data access layer for the product catalog.
//!
//! Every view receives a [`ProductSource`] explicitly:
//! - HTTP fetch of the static product resource (`ProductService`)
//! - JSON file on disk (`LocalProductSource`)
//! - Fixed in-memory list (`InMemoryProductSource`)

mod local;
mod memory;
mod products;

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{ClientConfig, Product};

pub use local::LocalProductSource;
pub use memory::InMemoryProductSource;
pub use products::ProductService;

/// Anything able to hand out the full product collection.
///
/// Each call is one independent fetch resolved exactly once.
#[async_trait]
pub trait ProductSource: Send + Sync {
    async fn get_products(&self) -> Result<Vec<Product>>;
}

/// Build the source described by the client configuration.
///
/// A configured `products_file` wins over the HTTP endpoint.
pub fn from_config(config: &ClientConfig) -> Result<Arc<dyn ProductSource>> {
    match &config.products_file {
        Some(path) => {
            log::debug!("Reading products from file {}", path.display());
            Ok(Arc::new(LocalProductSource::new(path)))
        }
        None => {
            let service = ProductService::new(config)?;
            log::debug!("Fetching products from {}", service.url());
            Ok(Arc::new(service))
        }
    }
}
