// src/router/guard.rs

//! Guard protecting the product detail route.

use crate::models::ProductKey;
use crate::router::Route;

/// Notification shown when the detail route is refused.
pub const INVALID_PRODUCT_ID: &str = "Invalid product id";

/// Outcome of a guard check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Navigation proceeds with the parsed key
    Allow(ProductKey),
    /// Navigation is refused; the user is told why and sent elsewhere
    Reject { notification: String, redirect: Route },
}

impl GuardDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow(_))
    }
}

/// Only lets `products/:id` through when `:id` is an integer >= 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductDetailGuard;

impl ProductDetailGuard {
    pub fn can_activate(&self, param: &str) -> GuardDecision {
        match param.parse::<ProductKey>() {
            Ok(key) => GuardDecision::Allow(key),
            Err(e) => {
                log::warn!("Refusing product detail navigation: {}", e);
                GuardDecision::Reject {
                    notification: INVALID_PRODUCT_ID.to_string(),
                    redirect: Route::ProductList,
                }
            }
        }
    }
}
