//! # Shared Utility Functions
//!
//! Display-formatting helpers used by the story catalog UI.
//!
//! ## Functions
//!
//! - [`format_read_count`] - Compact read-count display ("1.2k reads")
//! - [`capitalize`] - Capitalize the first letter of a tier name
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::format_read_count;
//!
//! assert_eq!(format_read_count(1234), "1.2k");
//! assert_eq!(format_read_count(892), "892");
//! ```

/// Format a read count compactly: values of 1000 and above are shown in
/// thousands with one decimal place, smaller values verbatim.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_read_count;
///
/// assert_eq!(format_read_count(756), "756");
/// assert_eq!(format_read_count(1234), "1.2k");
/// assert_eq!(format_read_count(15000), "15.0k");
/// ```
pub fn format_read_count(count: u64) -> String {
    if count >= 1000 {
        format!("{:.1}k", count as f64 / 1000.0)
    } else {
        count.to_string()
    }
}

/// Capitalize the first character of a string.
///
/// Used to render subscription tier identifiers ("premium" -> "Premium").
/// Empty input is returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::capitalize;
///
/// assert_eq!(capitalize("premium"), "Premium");
/// assert_eq!(capitalize("free"), "Free");
/// ```
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_read_count() {
        assert_eq!(format_read_count(0), "0");
        assert_eq!(format_read_count(999), "999");
        assert_eq!(format_read_count(1000), "1.0k");
        assert_eq!(format_read_count(1234), "1.2k");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("premium"), "Premium");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("a"), "A");
    }
}
