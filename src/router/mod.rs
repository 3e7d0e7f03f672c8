//! Client-side routing.
//!
//! Routes are matched in declaration order and the first match wins:
//!
//! ```text
//! products        -> product list
//! products/:id    -> product detail (guarded)
//! welcome         -> welcome page
//! ""              -> redirect to welcome
//! **              -> redirect to welcome
//! ```

mod guard;

use std::fmt;

use crate::error::{AppError, Result};
use crate::models::ProductKey;

pub use guard::{GuardDecision, INVALID_PRODUCT_ID, ProductDetailGuard};

/// Redirect chains longer than this are treated as a configuration bug.
const MAX_REDIRECTS: usize = 8;

/// A view the router can activate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Welcome,
    ProductList,
    ProductDetail(ProductKey),
}

impl Route {
    /// Canonical path for this route.
    pub fn path(&self) -> String {
        match self {
            Route::Welcome => "/welcome".to_string(),
            Route::ProductList => "/products".to_string(),
            Route::ProductDetail(key) => format!("/products/{key}"),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// What a single route definition does once matched.
#[derive(Debug, Clone, Copy)]
enum Target {
    Welcome,
    ProductList,
    ProductDetail,
    Redirect(&'static str),
}

#[derive(Debug, Clone, Copy)]
struct RouteDef {
    pattern: &'static str,
    target: Target,
}

const ROUTES: &[RouteDef] = &[
    RouteDef {
        pattern: "products",
        target: Target::ProductList,
    },
    RouteDef {
        pattern: "products/:id",
        target: Target::ProductDetail,
    },
    RouteDef {
        pattern: "welcome",
        target: Target::Welcome,
    },
    RouteDef {
        pattern: "",
        target: Target::Redirect("welcome"),
    },
    RouteDef {
        pattern: "**",
        target: Target::Redirect("welcome"),
    },
];

/// Result of matching one path against the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Activate(Route),
    Redirect {
        to: String,
        notification: Option<String>,
    },
}

/// Final outcome of a navigation after all redirects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub route: Route,
    /// Paths visited on the way, in order (excluding the final one)
    pub redirects: Vec<String>,
    /// Blocking messages raised by guards
    pub notifications: Vec<String>,
}

/// Path router with the detail guard wired in.
#[derive(Debug, Clone, Default)]
pub struct Router {
    guard: ProductDetailGuard,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Match a single path, without following redirects.
    pub fn resolve(&self, path: &str) -> Resolution {
        let segments = segments(path);

        for def in ROUTES {
            let Some(param) = matches(def.pattern, &segments) else {
                continue;
            };

            return match def.target {
                Target::Welcome => Resolution::Activate(Route::Welcome),
                Target::ProductList => Resolution::Activate(Route::ProductList),
                Target::ProductDetail => match self.guard.can_activate(param.unwrap_or_default()) {
                    GuardDecision::Allow(key) => Resolution::Activate(Route::ProductDetail(key)),
                    GuardDecision::Reject {
                        notification,
                        redirect,
                    } => Resolution::Redirect {
                        to: redirect.path(),
                        notification: Some(notification),
                    },
                },
                Target::Redirect(to) => Resolution::Redirect {
                    to: to.to_string(),
                    notification: None,
                },
            };
        }

        // "**" always matches
        Resolution::Redirect {
            to: "welcome".to_string(),
            notification: None,
        }
    }

    /// Resolve a path, following redirects until a view activates.
    pub fn navigate(&self, path: &str) -> Result<Resolved> {
        let mut current = path.to_string();
        let mut redirects = Vec::new();
        let mut notifications = Vec::new();

        for _ in 0..=MAX_REDIRECTS {
            match self.resolve(&current) {
                Resolution::Activate(route) => {
                    log::debug!("Navigated {:?} -> {}", path, route);
                    return Ok(Resolved {
                        route,
                        redirects,
                        notifications,
                    });
                }
                Resolution::Redirect { to, notification } => {
                    log::debug!("Redirect {:?} -> {:?}", current, to);
                    notifications.extend(notification);
                    redirects.push(std::mem::replace(&mut current, to));
                }
            }
        }

        Err(AppError::config(format!(
            "Too many redirects while navigating to {path:?}"
        )))
    }
}

/// Split a path into segments, ignoring query, fragment and extra slashes.
fn segments(path: &str) -> Vec<&str> {
    let path = path.split(['?', '#']).next().unwrap_or("");
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Match a pattern against path segments, returning the `:param` value if any.
fn matches<'a>(pattern: &str, segments: &[&'a str]) -> Option<Option<&'a str>> {
    if pattern == "**" {
        return Some(None);
    }

    let parts: Vec<&str> = pattern.split('/').filter(|s| !s.is_empty()).collect();
    if parts.len() != segments.len() {
        return None;
    }

    let mut param = None;
    for (part, segment) in parts.iter().zip(segments) {
        if part.starts_with(':') {
            param = Some(*segment);
        } else if part != segment {
            return None;
        }
    }
    Some(param)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(raw: &str) -> ProductKey {
        raw.parse().unwrap()
    }

    #[test]
    fn test_segments() {
        assert_eq!(segments("/products/5/"), ["products", "5"]);
        assert_eq!(segments("products?x=1#top"), ["products"]);
        assert!(segments("/").is_empty());
    }

    #[test]
    fn test_resolve_views() {
        let router = Router::new();
        assert_eq!(router.resolve("/products"), Resolution::Activate(Route::ProductList));
        assert_eq!(router.resolve("/welcome"), Resolution::Activate(Route::Welcome));
        assert_eq!(
            router.resolve("/products/10"),
            Resolution::Activate(Route::ProductDetail(key("10")))
        );
    }

    #[test]
    fn test_empty_and_unknown_redirect_to_welcome() {
        let router = Router::new();
        for path in ["", "/", "/nowhere", "/products/5/reviews"] {
            assert_eq!(
                router.resolve(path),
                Resolution::Redirect {
                    to: "welcome".to_string(),
                    notification: None
                },
                "{path:?}"
            );
        }
    }

    #[test]
    fn test_detail_zero_redirects_to_list() {
        let resolved = Router::new().navigate("/products/0").unwrap();
        assert_eq!(resolved.route, Route::ProductList);
        assert_eq!(resolved.redirects, ["/products/0"]);
        assert_eq!(resolved.notifications, [INVALID_PRODUCT_ID]);
    }

    #[test]
    fn test_detail_beyond_id_range_is_activated() {
        let resolved = Router::new().navigate("/products/99999999999").unwrap();
        assert_eq!(resolved.route, Route::ProductDetail(key("99999999999")));
        assert!(resolved.redirects.is_empty());
        assert!(resolved.notifications.is_empty());
    }

    #[test]
    fn test_navigate_default_lands_on_welcome() {
        let resolved = Router::new().navigate("/").unwrap();
        assert_eq!(resolved.route, Route::Welcome);
        assert!(resolved.notifications.is_empty());
    }

    #[test]
    fn test_route_paths_round_trip() {
        let router = Router::new();
        for route in [Route::Welcome, Route::ProductList, Route::ProductDetail(key("8"))] {
            assert_eq!(router.resolve(&route.path()), Resolution::Activate(route));
        }
    }
}
