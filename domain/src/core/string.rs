//! String utilities for the domain layer.

/// Truncate a string to a maximum length with ellipsis (UTF-8 safe)
///
/// Uses byte length for max_len but cuts at a valid character boundary.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let target = max_len.saturating_sub(3);
        let mut end = target.min(s.len());
        while end > 0 && !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &s[..end])
    }
}

/// Trim user input, returning `None` when nothing is left
pub fn non_blank(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate("Will I move?", 20), "Will I move?");
        assert_eq!(truncate("Will I find a new job soon?", 12), "Will I fi...");
    }

    #[test]
    fn test_truncate_multibyte() {
        // 'Ç' takes 2 of the 7 available bytes
        assert_eq!(truncate("Ça va-t-il réussir ?", 10), "Ça va-...");
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank("  Ada  "), Some("Ada"));
        assert_eq!(non_blank("   "), None);
        assert_eq!(non_blank(""), None);
    }
}
