//! Product data structure.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::utils::convert_to_spaces;

/// Positive product identifier (always >= 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct ProductId(u32);

impl ProductId {
    pub const MIN: ProductId = ProductId(1);

    /// Wrap a raw id, rejecting zero.
    pub fn new(raw: u32) -> Option<Self> {
        (raw >= 1).then_some(Self(raw))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for ProductId {
    type Error = String;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        Self::new(raw).ok_or_else(|| format!("product id must be >= 1, got {raw}"))
    }
}

impl From<ProductId> for u32 {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

/// Positive integer taken from a `products/:id` route segment.
///
/// Any length is accepted. Leading zeros are dropped, so `"007"` and `"7"`
/// name the same product. Keys that do not fit a [`ProductId`] simply match
/// no product.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductKey(String);

impl ProductKey {
    /// The catalog id this key names, if it is in range.
    pub fn id(&self) -> Option<ProductId> {
        self.0.parse::<u32>().ok().and_then(ProductId::new)
    }
}

impl FromStr for ProductKey {
    type Err = AppError;

    /// Only plain decimal digits with a nonzero value are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AppError::InvalidProductId(s.to_string()));
        }
        let digits = s.trim_start_matches('0');
        if digits.is_empty() {
            return Err(AppError::InvalidProductId(s.to_string()));
        }
        Ok(Self(digits.to_string()))
    }
}

impl From<ProductId> for ProductKey {
    fn from(id: ProductId) -> Self {
        Self(id.get().to_string())
    }
}

impl fmt::Display for ProductKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A catalog item as served by `products.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: ProductId,

    pub product_name: String,

    /// Code such as `GDN-0011`
    pub product_code: String,

    /// Release date as served (e.g. "March 19, 2016")
    pub release_date: String,

    #[serde(default)]
    pub description: String,

    pub price: Decimal,

    /// Average rating on a 0 to 5 scale
    pub star_rating: f64,

    #[serde(default)]
    pub image_url: String,
}

impl Product {
    /// Product code with dashes rendered as spaces (`GDN-0011` -> `GDN 0011`).
    pub fn display_code(&self) -> String {
        convert_to_spaces(&self.product_code, '-')
    }

    /// Price in USD with exactly two decimals.
    pub fn formatted_price(&self) -> String {
        format!("${:.2}", self.price.round_dp(2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "productId": 2,
            "productName": "Garden Cart",
            "productCode": "GDN-0023",
            "releaseDate": "March 18, 2016",
            "description": "15 gallon capacity rolling garden cart",
            "price": 32.99,
            "starRating": 4.2,
            "imageUrl": "https://openclipart.org/image/300px/svg_to_png/58471/garden_cart.png"
        }"#
    }

    #[test]
    fn test_deserialize_camel_case() {
        let product: Product = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(product.product_id.get(), 2);
        assert_eq!(product.product_name, "Garden Cart");
        assert_eq!(product.price, Decimal::new(3299, 2));
        assert_eq!(product.formatted_price(), "$32.99");
        assert_eq!(product.display_code(), "GDN 0023");
    }

    #[test]
    fn test_zero_id_rejected_on_decode() {
        let json = sample_json().replace("\"productId\": 2", "\"productId\": 0");
        assert!(serde_json::from_str::<Product>(&json).is_err());
    }

    #[test]
    fn test_product_key_from_str() {
        let key: ProductKey = "5".parse().unwrap();
        assert_eq!(key.id().unwrap().get(), 5);
        let key: ProductKey = "007".parse().unwrap();
        assert_eq!(key.to_string(), "7");
        assert_eq!(key.id().unwrap().get(), 7);
        for bad in ["", "0", "000", "-1", "1.5", "abc", " 3", "+4"] {
            assert!(bad.parse::<ProductKey>().is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn test_product_key_beyond_id_range() {
        for big in ["4294967296", "99999999999", "123456789012345678901234567890"] {
            let key: ProductKey = big.parse().unwrap();
            assert_eq!(key.to_string(), big);
            assert!(key.id().is_none());
        }
        let max: ProductKey = "4294967295".parse().unwrap();
        assert_eq!(max.id().unwrap().get(), u32::MAX);
    }

    #[test]
    fn test_formatted_price_pads_decimals() {
        let json = sample_json().replace("32.99", "8.9");
        let product: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(product.formatted_price(), "$8.90");
    }
}
