//! Shared utility functions.

/// Clip a string to at most `max_len` bytes, appending "..." when cut.
///
/// Truncation lands on a valid UTF-8 character boundary. Used by the
/// progress and logging surfaces to keep long message bodies readable.
pub fn clip(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }
    let mut end = max_len.saturating_sub(3).min(s.len());
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &s[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_short_string_unchanged() {
        assert_eq!(clip("hello", 10), "hello");
    }

    #[test]
    fn test_clip_long_string() {
        assert_eq!(clip("hello world", 8), "hello...");
    }

    #[test]
    fn test_clip_multibyte_boundary() {
        // 'の' is 3 bytes; clipping inside it must back up to a boundary
        assert_eq!(clip("あのね、すごく長い", 10), "あの...");
    }

    #[test]
    fn test_clip_empty() {
        assert_eq!(clip("", 10), "");
    }
}
