// src/models/mod.rs

//! Domain models for the product catalog.

mod config;
mod product;

// Re-export all public types
pub use config::{ClientConfig, Config, ViewConfig};
pub use product::{Product, ProductId, ProductKey};
