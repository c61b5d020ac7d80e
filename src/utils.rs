//! Small text helpers shared by the client and the TUI.

/// Safely truncate a UTF-8 string to at most `max_bytes` bytes at a char boundary.
///
/// Response bodies and status messages get clipped for display; slicing
/// blindly would panic inside a multi-byte character, so the cut always
/// lands on a valid boundary.
///
/// # Example
///
/// ```
/// use docpost::utils::truncate_str;
///
/// assert_eq!(truncate_str("Hello, World!", 5), "Hello");
///
/// // Multi-byte content is clipped at a boundary, never inside a char
/// let clipped = truncate_str("señal de publicación", 10);
/// assert!(clipped.len() <= 10);
/// assert!(clipped.is_char_boundary(clipped.len()));
///
/// assert_eq!(truncate_str("Hi", 10), "Hi");
/// ```
#[inline]
#[must_use]
pub fn truncate_str(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    // Find the largest char boundary <= max_bytes
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
