// src/services/local.rs

//! Product source backed by a JSON file on disk.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::{AppError, Result};
use crate::models::Product;
use crate::services::ProductSource;

/// Reads the product array from a local `products.json`.
#[derive(Debug, Clone)]
pub struct LocalProductSource {
    path: PathBuf,
}

impl LocalProductSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ProductSource for LocalProductSource {
    async fn get_products(&self) -> Result<Vec<Product>> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            let err = AppError::client(format!("{}: {}", self.path.display(), e));
            log::error!("{}", err);
            err
        })?;

        let products: Vec<Product> = serde_json::from_slice(&bytes).map_err(|e| {
            let err = AppError::client(format!("{}: {}", self.path.display(), e));
            log::error!("{}", err);
            err
        })?;

        log::debug!(
            "LocalProductSource loaded {} products from {}",
            products.len(),
            self.path.display()
        );
        Ok(products)
    }
}
