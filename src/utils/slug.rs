//! URL slugification for taxonomy term names.

use deunicode::deunicode;

/// Turn free text into a URL path segment: transliterate Unicode to
/// ASCII, lowercase, collapse separator runs into a single dash.
///
/// `"Go Programming"` -> `"go-programming"`, `"C++ & Rust"` -> `"c-rust"`.
pub fn slugify(text: &str) -> String {
    let ascii = deunicode(text);
    let mut slug = String::with_capacity(ascii.len());
    let mut pending_dash = false;
    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple() {
        assert_eq!(slugify("go"), "go");
        assert_eq!(slugify("Go Programming"), "go-programming");
    }

    #[test]
    fn test_separator_runs_collapse() {
        assert_eq!(slugify("C++ & Rust"), "c-rust");
        assert_eq!(slugify("  spaced   out  "), "spaced-out");
    }

    #[test]
    fn test_transliteration() {
        assert_eq!(slugify("Café"), "cafe");
        assert_eq!(slugify("日本語"), "ri-ben-yu");
    }

    #[test]
    fn test_no_leading_or_trailing_dash() {
        assert_eq!(slugify("-edge-"), "edge");
        assert_eq!(slugify("!!!"), "");
    }
}
