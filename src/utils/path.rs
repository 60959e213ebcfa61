//! Route path composition and handle extraction.
//!
//! All storefront routes are built from up to three segments: a site-wide
//! base path, a per-entity-kind segment, and the entity's handle. Empty
//! segments are omitted entirely so a route never contains `//`.

/// Strip leading and trailing slashes from a path segment.
pub fn trim_slashes(s: &str) -> &str {
    s.trim_matches('/')
}

/// Join segments into an absolute route, skipping empty ones.
///
/// Each segment is trimmed of surrounding slashes before composing.
/// Returns `"/"` when every segment is empty.
///
/// | Input | Output |
/// |-------|--------|
/// | `["", "", "h"]` | `/h` |
/// | `["shop", "product", "mug"]` | `/shop/product/mug` |
/// | `["", "blog", ""]` | `/blog` |
/// | `["", "", ""]` | `/` |
pub fn route(segments: &[&str]) -> String {
    let mut path = String::new();
    for segment in segments {
        let segment = trim_slashes(segment);
        if segment.is_empty() {
            continue;
        }
        path.push('/');
        path.push_str(segment);
    }
    if path.is_empty() {
        path.push('/');
    }
    path
}

/// Build an entity route from base path, kind segment and handle.
pub fn theme_path(base: &str, segment: &str, leaf: &str) -> String {
    route(&[base, segment, leaf])
}

/// Extract the handle from a URL-like field: the last `/`-separated token.
///
/// Catalog sources expose blog and article handles only as the tail of an
/// admin URL (`https://shop.example/blogs/news` → `news`).
pub fn handle_from_url(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}
