// src/services/memory.rs

//! In-memory product source.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::error::Result;
use crate::models::{Product, ProductId};
use crate::services::ProductSource;

/// Serves a fixed list of products.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductSource {
    products: Vec<Product>,
}

impl InMemoryProductSource {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The built-in Acme sample catalog.
    pub fn sample() -> Self {
        let item = |id: u32,
                    name: &str,
                    code: &str,
                    released: &str,
                    description: &str,
                    cents: i64,
                    rating: f64,
                    image: &str| Product {
            product_id: ProductId::new(id).unwrap_or(ProductId::MIN),
            product_name: name.to_string(),
            product_code: code.to_string(),
            release_date: released.to_string(),
            description: description.to_string(),
            price: Decimal::new(cents, 2),
            star_rating: rating,
            image_url: format!("https://openclipart.org/image/300px/svg_to_png/{image}"),
        };

        Self::new(vec![
            item(
                1,
                "Leaf Rake",
                "GDN-0011",
                "March 19, 2016",
                "Leaf rake with 48-inch wooden handle.",
                1995,
                3.2,
                "26215/Anonymous_Leaf_Rake.png",
            ),
            item(
                2,
                "Garden Cart",
                "GDN-0023",
                "March 18, 2016",
                "15 gallon capacity rolling garden cart",
                3299,
                4.2,
                "58471/garden_cart.png",
            ),
            item(
                5,
                "Hammer",
                "TBX-0048",
                "May 21, 2016",
                "Curved claw steel hammer",
                890,
                4.8,
                "73/rejon_Hammer.png",
            ),
            item(
                8,
                "Saw",
                "TBX-0022",
                "May 15, 2016",
                "15-inch steel blade hand saw",
                1155,
                3.7,
                "27070/egore911_saw.png",
            ),
            item(
                10,
                "Video Game Controller",
                "GMG-0042",
                "October 15, 2015",
                "Standard two-button video game controller",
                3595,
                4.6,
                "120337/xbox-controller_01.png",
            ),
        ])
    }

    pub fn into_products(self) -> Vec<Product> {
        self.products
    }
}

#[async_trait]
impl ProductSource for InMemoryProductSource {
    async fn get_products(&self) -> Result<Vec<Product>> {
        Ok(self.products.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sample_catalog() {
        let products = InMemoryProductSource::sample().get_products().await.unwrap();
        let ids: Vec<u32> = products.iter().map(|p| p.product_id.get()).collect();
        assert_eq!(ids, [1, 2, 5, 8, 10]);
        assert_eq!(products[2].formatted_price(), "$8.90");
    }

    #[tokio::test]
    async fn test_empty_source() {
        let source = InMemoryProductSource::default();
        assert!(source.get_products().await.unwrap().is_empty());
    }
}
