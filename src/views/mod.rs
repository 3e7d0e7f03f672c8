//! View state and text rendering for each page.
//!
//! Views keep their derived state explicit: whenever a bound input changes
//! (filter text, rating), the owning setter recomputes what depends on it.

mod product_detail;
mod product_list;
mod star;
mod welcome;

pub use product_detail::{ProductDetailView, find_product};
pub use product_list::ProductListView;
pub use star::StarRating;
pub use welcome::WelcomeView;

/// The page currently shown by the shell.
#[derive(Debug, Clone)]
pub enum Page {
    Welcome(WelcomeView),
    ProductList(ProductListView),
    ProductDetail(ProductDetailView),
}

impl Page {
    pub fn title(&self) -> &str {
        match self {
            Page::Welcome(view) => &view.page_title,
            Page::ProductList(view) => &view.page_title,
            Page::ProductDetail(view) => &view.page_title,
        }
    }

    pub fn render(&self) -> String {
        match self {
            Page::Welcome(view) => view.render(),
            Page::ProductList(view) => view.render(),
            Page::ProductDetail(view) => view.render(),
        }
    }
}
