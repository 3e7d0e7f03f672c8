// src/views/product_detail.rs

//! Detail view for a single product.

use crate::error::{AppError, Result};
use crate::models::{Product, ProductKey, ViewConfig};
use crate::router::Route;
use crate::services::ProductSource;
use crate::views::StarRating;

const DEFAULT_TITLE: &str = "Product Detail";

#[derive(Debug, Clone)]
pub struct ProductDetailView {
    pub page_title: String,
    star_max_width: f64,
    product: Option<Product>,
    error_message: Option<String>,
}

impl ProductDetailView {
    pub fn new(config: &ViewConfig) -> Self {
        Self {
            page_title: DEFAULT_TITLE.to_string(),
            star_max_width: config.star_max_width,
            product: None,
            error_message: None,
        }
    }

    /// Fetch the collection and select the product named by `key`.
    ///
    /// The error is also kept as the view's message so the page can show it.
    pub async fn load(&mut self, source: &dyn ProductSource, key: &ProductKey) -> Result<()> {
        self.page_title = format!("{DEFAULT_TITLE}: {key}");
        self.product = None;

        let found = source
            .get_products()
            .await
            .and_then(|products| find_product(products, key));

        match found {
            Ok(product) => {
                self.error_message = None;
                self.product = Some(product);
                Ok(())
            }
            Err(e) => {
                self.error_message = Some(e.to_string());
                Err(e)
            }
        }
    }

    pub fn product(&self) -> Option<&Product> {
        self.product.as_ref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Where the Back button leads.
    pub fn on_back(&self) -> Route {
        Route::ProductList
    }

    pub fn render(&self) -> String {
        let mut out = vec![self.page_title.clone(), String::new()];

        match (&self.product, &self.error_message) {
            (Some(product), _) => {
                let stars = StarRating::with_rating(product.star_rating, self.star_max_width);
                out.push(format!("Name:          {}", product.product_name));
                out.push(format!("Code:          {}", product.display_code()));
                out.push(format!("Availability:  {}", product.release_date));
                out.push(format!("Price:         {}", product.formatted_price()));
                out.push(format!("5 Star Rating: {}", stars.render()));
                out.push(format!("Description:   {}", product.description));
                out.push(format!("Image:         {}", product.image_url));
            }
            (None, Some(message)) => out.push(format!("Error: {message}")),
            (None, None) => out.push("Loading...".to_string()),
        }

        out.push(String::new());
        out.push(format!("[Back] {}", self.on_back()));
        out.join("\n")
    }
}

/// Look a product up by route key in a loaded collection.
pub fn find_product(products: Vec<Product>, key: &ProductKey) -> Result<Product> {
    key.id()
        .and_then(|id| products.into_iter().find(|p| p.product_id == id))
        .ok_or_else(|| AppError::ProductNotFound(key.clone()))
}
