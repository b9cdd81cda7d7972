//! Root layout shared by every HTML page.
//!
//! The markup itself lives in `templates/layout.html`; pages extend it and
//! fill the `content` block. This module owns the metadata the layout prints
//! into `<head>`.

/// Title and description rendered into the document head
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteMetadata {
    pub default_title: String,
    /// `%s` is replaced by the page title
    pub title_template: String,
    pub description: String,
}

impl Default for SiteMetadata {
    fn default() -> Self {
        Self {
            default_title: "Content Site Challenge".to_string(),
            title_template: "%s | Content Site Challenge".to_string(),
            description: "A mini content site challenge built with Axum.".to_string(),
        }
    }
}

impl SiteMetadata {
    /// Document title for a page; pages without their own title get the default.
    pub fn page_title(&self, page: Option<&str>) -> String {
        match page {
            Some(title) => self.title_template.replacen("%s", title, 1),
            None => self.default_title.clone(),
        }
    }
}
