//! Text helpers shared by cards, SEO metadata and URLs.

/// First `max_chars` characters of `text`, with "..." appended when cut.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let trimmed = text.trim();
    match trimmed.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", trimmed[..cut].trim_end()),
        None => trimmed.to_string(),
    }
}

/// URL slug: lowercase ASCII alphanumerics separated by single dashes.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;
    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// Case-insensitive substring test. `needle` is compared as given after lowercasing.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excerpt_cuts_on_char_boundary() {
        assert_eq!(excerpt("héllo wörld", 5), "héllo...");
        assert_eq!(excerpt("short", 100), "short");
        assert_eq!(excerpt("  padded  ", 100), "padded");
    }

    #[test]
    fn test_slugify_collapses_separators() {
        assert_eq!(slugify("Hello, World!  Rust & WASM"), "hello-world-rust-wasm");
        assert_eq!(slugify("--Leading"), "leading");
        assert_eq!(slugify("日本"), "");
    }

    #[test]
    fn test_contains_ignore_case_matches() {
        assert!(contains_ignore_case("Portfolio Site", "folio"));
        assert!(contains_ignore_case("anything", ""));
        assert!(!contains_ignore_case("Portfolio", "blog"));
    }
}
