//! Display formatting helpers. These never touch the underlying data.

/// Compact count: `999`, `1.0K`, `1.5M`.
///
/// The scaled value is rounded to one decimal as a float, so `1150` is
/// `1.1K` (1.15 is stored just below the tie).
pub fn format_number(value: u64) -> String {
    if value >= 1_000_000 {
        format!("{:.1}M", value as f64 / 1_000_000.0)
    } else if value >= 1_000 {
        format!("{:.1}K", value as f64 / 1_000.0)
    } else {
        value.to_string()
    }
}

/// Percentage as sent by the backend, e.g. `45.5%` or `50%`.
pub fn format_percentage(percentage: f64) -> String {
    format!("{}%", percentage)
}

/// A profile's blog link, ready to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogLink {
    pub href: String,
    pub text: String,
}

/// Placeholder the backend sends for a profile without a blog.
pub const NO_BLOG_PLACEHOLDER: &str = "Нет";

/// Normalise a profile blog field. Blank or the backend's placeholder means
/// no link; a missing scheme gets `https://`.
pub fn blog_link(blog: Option<&str>) -> Option<BlogLink> {
    let text = blog
        .map(str::trim)
        .filter(|b| !b.is_empty() && *b != NO_BLOG_PLACEHOLDER)?;
    let href = if text.starts_with("http://") || text.starts_with("https://") {
        text.to_string()
    } else {
        format!("https://{}", text)
    };

    Some(BlogLink {
        href,
        text: text.to_string(),
    })
}
