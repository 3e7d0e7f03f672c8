// src/views/product_list.rs

//! Master view: the filterable product table.

use crate::filter::perform_filter;
use crate::models::{Product, ProductId, ViewConfig};
use crate::services::ProductSource;
use crate::utils::fit;
use crate::views::StarRating;

const DEFAULT_TITLE: &str = "Product List";

/// State behind the product list page.
#[derive(Debug, Clone)]
pub struct ProductListView {
    pub page_title: String,
    pub image_width: u32,
    pub image_margin: u32,
    pub show_image: bool,
    star_max_width: f64,
    list_filter: String,
    products: Vec<Product>,
    filtered_products: Vec<Product>,
    error_message: Option<String>,
}

impl ProductListView {
    pub fn new(config: &ViewConfig) -> Self {
        Self {
            page_title: DEFAULT_TITLE.to_string(),
            image_width: config.image_width,
            image_margin: config.image_margin,
            show_image: false,
            star_max_width: config.star_max_width,
            list_filter: config.initial_filter.clone(),
            products: Vec::new(),
            filtered_products: Vec::new(),
            error_message: None,
        }
    }

    /// Fetch the collection once. A failure is kept as the view's error message.
    pub async fn load(&mut self, source: &dyn ProductSource) {
        match source.get_products().await {
            Ok(products) => {
                log::info!("Product list loaded {} products", products.len());
                self.products = products;
                self.error_message = None;
            }
            Err(e) => {
                self.products.clear();
                self.error_message = Some(e.to_string());
            }
        }
        self.refresh();
    }

    /// Bind new filter text and recompute the visible rows.
    pub fn set_list_filter(&mut self, value: impl Into<String>) {
        self.list_filter = value.into();
        self.refresh();
    }

    fn refresh(&mut self) {
        self.filtered_products = perform_filter(&self.products, &self.list_filter);
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn filtered_products(&self) -> &[Product] {
        &self.filtered_products
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn toggle_image(&mut self) {
        self.show_image = !self.show_image;
    }

    /// Handle the payload raised by a row's star widget.
    pub fn on_rating_clicked(&mut self, message: &str) {
        log::debug!("Product list received rating click: {}", message);
        self.page_title = format!("{DEFAULT_TITLE}: {message}");
    }

    /// Click the stars of a visible row. Returns the emitted payload.
    pub fn click_rating(&mut self, id: ProductId) -> Option<String> {
        let rating = self
            .filtered_products
            .iter()
            .find(|p| p.product_id == id)?
            .star_rating;
        let message = StarRating::with_rating(rating, self.star_max_width).click();
        self.on_rating_clicked(&message);
        Some(message)
    }

    pub fn render(&self) -> String {
        let mut out = Vec::new();
        out.push(self.page_title.clone());
        out.push(String::new());
        out.push(format!("Filter by: {}", self.list_filter));
        if !self.list_filter.is_empty() {
            out.push(format!("Filtered by: {}", self.list_filter));
        }
        out.push(String::new());

        if let Some(message) = &self.error_message {
            out.push(format!("Error: {message}"));
            return out.join("\n");
        }

        if self.filtered_products.is_empty() {
            out.push("No products to display.".to_string());
            return out.join("\n");
        }

        let mut header = String::new();
        if self.show_image {
            header.push_str(&fit("Image", 12));
        }
        header.push_str(&format!(
            "{} {} {} {} {}",
            fit("Product", 24),
            fit("Code", 10),
            fit("Available", 18),
            fit("Price", 9),
            "5 Star Rating"
        ));
        out.push(header);

        for product in &self.filtered_products {
            let mut row = String::new();
            if self.show_image {
                row.push_str(&fit(&product.image_url, 12));
            }
            row.push_str(&format!(
                "{} {} {} {} {}",
                fit(&product.product_name, 24),
                fit(&product.display_code(), 10),
                fit(&product.release_date, 18),
                fit(&product.formatted_price(), 9),
                StarRating::with_rating(product.star_rating, self.star_max_width).render()
            ));
            out.push(row);
        }

        out.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AppError, Result};
    use crate::services::InMemoryProductSource;
    use async_trait::async_trait;

    struct FailingSource;

    #[async_trait]
    impl ProductSource for FailingSource {
        async fn get_products(&self) -> Result<Vec<Product>> {
            Err(AppError::server(
                500,
                "Http failure response for api/products/products.json: 500 Internal Server Error",
            ))
        }
    }

    async fn loaded() -> ProductListView {
        let mut view = ProductListView::new(&ViewConfig::default());
        view.load(&InMemoryProductSource::sample()).await;
        view
    }

    #[tokio::test]
    async fn test_load_shows_everything() {
        let view = loaded().await;
        assert_eq!(view.products().len(), 5);
        assert_eq!(view.filtered_products().len(), 5);
        assert!(view.error_message().is_none());
    }

    #[tokio::test]
    async fn test_filter_change_recomputes() {
        let mut view = loaded().await;
        view.set_list_filter("cart");
        assert_eq!(view.filtered_products().len(), 1);
        assert_eq!(view.filtered_products()[0].product_name, "Garden Cart");
        assert_eq!(view.products().len(), 5);

        view.set_list_filter("");
        assert_eq!(view.filtered_products().len(), 5);
    }

    #[tokio::test]
    async fn test_initial_filter_applies_after_load() {
        let config = ViewConfig {
            initial_filter: "cart".to_string(),
            ..ViewConfig::default()
        };
        let mut view = ProductListView::new(&config);
        view.load(&InMemoryProductSource::sample()).await;
        assert_eq!(view.filtered_products().len(), 1);
    }

    #[tokio::test]
    async fn test_server_failure_leaves_list_empty() {
        let mut view = ProductListView::new(&ViewConfig::default());
        view.load(&FailingSource).await;

        assert!(view.products().is_empty());
        assert!(view.filtered_products().is_empty());
        let message = view.error_message().unwrap();
        assert!(message.contains("500"));
        assert!(message.contains("Internal Server Error"));
        assert!(view.render().contains("Error: Server returned code: 500"));
    }

    #[tokio::test]
    async fn test_rating_click_updates_title() {
        let mut view = loaded().await;
        let message = view.click_rating(ProductId::new(1).unwrap()).unwrap();
        assert_eq!(message, "The rating 3.2 was clicked!");
        assert_eq!(view.page_title, "Product List: The rating 3.2 was clicked!");

        view.set_list_filter("hammer");
        assert!(view.click_rating(ProductId::new(1).unwrap()).is_none());
    }

    #[tokio::test]
    async fn test_render_rows_and_images() {
        let mut view = loaded().await;
        let text = view.render();
        assert!(text.contains("GDN 0011"));
        assert!(text.contains("$19.95"));
        assert!(!text.contains("Image"));

        view.toggle_image();
        assert!(view.show_image);
        assert!(view.render().contains("Image"));

        view.set_list_filter("drill");
        assert!(view.render().contains("No products to display."));
    }
}
