use std::collections::HashSet;

/// Strips all HTML tags from a string, leaving only the plain text content.
/// Applied to admin-entered text fields before they reach the database.
pub fn strip_all_html(input: &str) -> String {
    ammonia::Builder::new()
        .tags(HashSet::new())
        .clean(input)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(strip_all_html("Summer meetup"), "Summer meetup");
        assert_eq!(strip_all_html("2024-01-01"), "2024-01-01");
    }

    #[test]
    fn tags_are_removed() {
        assert_eq!(strip_all_html("<script>alert(1)</script>hi"), "hi");
        assert_eq!(strip_all_html("<b>bold</b> title"), "bold title");
    }
}
