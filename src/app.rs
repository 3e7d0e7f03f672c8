// src/app.rs

//! Application shell: navigation plus page composition.

use std::sync::Arc;

use crate::error::Result;
use crate::models::Config;
use crate::router::{Route, Router};
use crate::services::ProductSource;
use crate::views::{Page, ProductDetailView, ProductListView, WelcomeView};

/// Everything a navigation produced.
#[derive(Debug, Clone)]
pub struct Navigation {
    /// Path as requested by the user
    pub requested: String,
    /// Route that finally activated
    pub route: Route,
    /// Paths redirected away from, in order
    pub redirects: Vec<String>,
    /// Blocking notifications raised along the way
    pub notifications: Vec<String>,
    pub page: Page,
}

/// The catalog application with its collaborators passed in explicitly.
pub struct App {
    config: Config,
    source: Arc<dyn ProductSource>,
    router: Router,
}

impl App {
    pub fn new(config: Config, source: Arc<dyn ProductSource>) -> Self {
        Self {
            config,
            source,
            router: Router::new(),
        }
    }

    /// Resolve `path`, then build and load the view it lands on.
    pub async fn navigate(&self, path: &str) -> Result<Navigation> {
        let resolved = self.router.navigate(path)?;
        for notification in &resolved.notifications {
            log::warn!("{}", notification);
        }

        let page = match &resolved.route {
            Route::Welcome => Page::Welcome(WelcomeView::new(&self.config.view.app_title)),
            Route::ProductList => {
                let mut view = ProductListView::new(&self.config.view);
                view.load(self.source.as_ref()).await;
                Page::ProductList(view)
            }
            Route::ProductDetail(key) => {
                let mut view = ProductDetailView::new(&self.config.view);
                if let Err(e) = view.load(self.source.as_ref(), key).await {
                    // Fetch failures are already logged by the source
                    if !e.is_fetch_failure() {
                        log::warn!("Product detail {} unavailable: {}", key, e);
                    }
                }
                Page::ProductDetail(view)
            }
        };

        log::info!("Showing {} ({})", resolved.route, page.title());
        Ok(Navigation {
            requested: path.to_string(),
            route: resolved.route,
            redirects: resolved.redirects,
            notifications: resolved.notifications,
            page,
        })
    }

    /// Shell chrome around the active page.
    pub fn render(&self, navigation: &Navigation) -> String {
        let mut out = vec![
            self.config.view.app_title.clone(),
            format!(
                "[Home] {}  [Product List] {}",
                Route::Welcome,
                Route::ProductList
            ),
            "─".repeat(60),
        ];
        for notification in &navigation.notifications {
            out.push(format!("! {notification}"));
        }
        out.push(navigation.page.render());
        out.join("\n")
    }
}
