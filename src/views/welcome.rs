// src/views/welcome.rs

//! Landing page shown for the default route.

/// Credit line at the bottom of the welcome page.
const DEVELOPER_LINE: &str = "Developed by: Acme Product Management team";

#[derive(Debug, Clone)]
pub struct WelcomeView {
    pub page_title: String,
    app_title: String,
}

impl WelcomeView {
    pub fn new(app_title: impl Into<String>) -> Self {
        Self {
            page_title: "Welcome".to_string(),
            app_title: app_title.into(),
        }
    }

    pub fn render(&self) -> String {
        [
            self.page_title.as_str(),
            "",
            self.app_title.as_str(),
            "Open the Product List to browse the catalog.",
            "",
            DEVELOPER_LINE,
        ]
        .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_includes_title_and_developer() {
        let text = WelcomeView::new("Acme Product Management").render();
        assert!(text.starts_with("Welcome\n"));
        assert!(text.contains("Acme Product Management"));
        assert!(text.ends_with(DEVELOPER_LINE));
    }
}
