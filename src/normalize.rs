use std::borrow::Cow;

/// Lower-case a term for comparison. Both queries and corpus fields go through this.
pub fn normalize(term: &str) -> String {
    term.to_lowercase()
}

/// Trim and normalize a raw query. Returns `None` for an empty or whitespace-only query.
pub fn prepare_query(query: &str) -> Option<String> {
    let query = query.trim();
    if query.is_empty() {
        None
    } else {
        Some(normalize(query))
    }
}

/// Truncate a query to at most `max_chars` characters, on a character boundary.
pub fn clamp_query(query: &str, max_chars: usize) -> Cow<'_, str> {
    match query.char_indices().nth(max_chars) {
        Some((end, _)) => {
            tracing::warn!(
                max_chars,
                query_chars = query.chars().count(),
                "Query too long, truncating"
            );
            Cow::Owned(query[..end].trim_end().to_string())
        }
        None => Cow::Borrowed(query),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn prepare_trims_and_lowercases() {
        assert_eq!(prepare_query("  TyLeNoL "), Some("tylenol".to_string()));
    }

    #[test]
    fn prepare_empty() {
        assert_eq!(prepare_query(""), None);
        assert_eq!(prepare_query(" \t\n"), None);
    }

    #[test]
    fn clamp_short_query_is_borrowed() {
        assert!(matches!(clamp_query("aspirin", 64), Cow::Borrowed("aspirin")));
    }

    #[test]
    fn clamp_respects_char_boundaries() {
        assert_eq!(clamp_query("ééééé", 3), "ééé");
        assert_eq!(clamp_query("abcdef", 6), "abcdef");
        assert_eq!(clamp_query("abcdef", 2), "ab");
    }
}
