//! Page shell: document head plus the chrome around page content.

use super::{escape_html, render_footer, render_navbar};

/// Head content for the shell.
#[derive(Debug, Clone, Default)]
pub struct HeadContent {
    /// Page title.
    pub title: Option<String>,
    /// Meta tags.
    pub meta: Vec<(String, String)>,
    /// Link and style tags.
    pub links: Vec<String>,
}

impl HeadContent {
    /// Create new head content with a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Add a meta tag.
    pub fn with_meta(mut self, name: &str, content: &str) -> Self {
        self.meta.push((name.to_string(), content.to_string()));
        self
    }

    /// Add inline CSS styles.
    pub fn with_style(mut self, css: &str) -> Self {
        self.links.push(format!("<style>{}</style>", css));
        self
    }

    /// Render head content to HTML.
    pub fn render(&self) -> String {
        let mut html = String::new();

        if let Some(title) = &self.title {
            html.push_str(&format!("<title>{}</title>\n", escape_html(title)));
        }

        for (name, content) in &self.meta {
            html.push_str(&format!(
                r#"<meta name="{}" content="{}">"#,
                escape_html(name),
                escape_html(content)
            ));
            html.push('\n');
        }

        for link in &self.links {
            html.push_str(link);
            html.push('\n');
        }

        html
    }
}

/// Full-page layout: navbar above the content, footer below.
#[derive(Debug, Clone)]
pub struct Shell {
    /// Head content.
    pub head: HeadContent,
    /// Year printed in the footer copyright.
    pub year: i32,
}

impl Shell {
    pub fn new(head: HeadContent, year: i32) -> Self {
        Self { head, year }
    }

    /// Render everything before the page content.
    pub fn render_opening(&self) -> String {
        let mut html = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("<meta charset=\"utf-8\">\n");
        html.push_str(&self.head.render());
        html.push_str("</head>\n<body>\n");
        html.push_str(&render_navbar());
        html.push_str("\n<main class=\"page\">\n");
        html
    }

    /// Render everything after the page content.
    pub fn render_closing(&self) -> String {
        format!("\n</main>\n{}\n</body>\n</html>\n", render_footer(self.year))
    }

    /// Wrap page content in the full document.
    pub fn render(&self, content: &str) -> String {
        let mut html = self.render_opening();
        html.push_str(content);
        html.push_str(&self.render_closing());
        html
    }
}
