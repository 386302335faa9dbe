//! Embedded search page.

/// The single-page search UI served at `/`.
pub fn index_html() -> &'static str {
    include_str!("../static/index.html")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_talks_to_api() {
        let html = index_html();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("/api/search"));
        assert!(html.contains("/api/topics"));
    }
}
