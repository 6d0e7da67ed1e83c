//! Derived-tag extraction.
//!
//! Tags are not user-editable: they are recomputed from the entry content on
//! every write, so the stored tag string can never disagree with the content
//! it came from.

/// Derive the stored tag string from entry content.
///
/// A tag is a `#` followed by one or more word characters (ASCII letters,
/// digits or underscore). Returns the de-duplicated tokens in order of first
/// occurrence, comma-joined, or `None` when the content is empty or carries
/// no tags. Case is preserved as typed — `#Rust` and `#rust` are distinct.
///
/// Pure and deterministic: the same content always yields the same result.
pub fn extract_tags(content: &str) -> Option<String> {
    if content.is_empty() {
        return None;
    }

    let mut tags: Vec<&str> = Vec::new();
    let mut chars = content.char_indices().peekable();
    while let Some((start, c)) = chars.next() {
        if c != '#' {
            continue;
        }
        let mut end = start + c.len_utf8();
        while let Some(&(pos, next)) = chars.peek() {
            if !is_word_char(next) {
                break;
            }
            end = pos + next.len_utf8();
            chars.next();
        }
        // A bare '#' with no word characters after it is not a tag
        if end > start + 1 {
            let token = &content[start..end];
            if !tags.contains(&token) {
                tags.push(token);
            }
        }
    }

    if tags.is_empty() {
        None
    } else {
        Some(tags.join(","))
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_tags_in_first_occurrence_order() {
        assert_eq!(
            extract_tags("walked the #dog, then #coffee with #dog people"),
            Some("#dog,#coffee".to_string())
        );
    }

    #[test]
    fn returns_none_without_tags() {
        assert_eq!(extract_tags("an ordinary day"), None);
        assert_eq!(extract_tags(""), None);
    }

    #[test]
    fn bare_hash_is_not_a_tag() {
        assert_eq!(extract_tags("issue # 42 and # again"), None);
        assert_eq!(extract_tags("##nested"), Some("#nested".to_string()));
    }

    #[test]
    fn token_stops_at_non_word_characters() {
        assert_eq!(
            extract_tags("#self-care day, #win!"),
            Some("#self,#win".to_string())
        );
        assert_eq!(
            extract_tags("#day_3 of the #2024 challenge"),
            Some("#day_3,#2024".to_string())
        );
    }

    #[test]
    fn case_is_preserved_and_distinct() {
        assert_eq!(
            extract_tags("#Rust and #rust"),
            Some("#Rust,#rust".to_string())
        );
    }

    #[test]
    fn is_deterministic_across_calls() {
        let content = "repeat #me #twice #me";
        assert_eq!(extract_tags(content), extract_tags(content));
    }

    #[test]
    fn non_ascii_ends_a_token() {
        // word characters follow the ASCII rule; an emoji terminates the tag
        assert_eq!(extract_tags("#fun🎉"), Some("#fun".to_string()));
    }
}
