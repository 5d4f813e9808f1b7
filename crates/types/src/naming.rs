//! Element id derivation for form field names

/// Derive a deterministic element id from a form field name.
///
/// Reproduces the classic form-helper convention for array-style field
/// names: `user[name]` becomes `user_name`, `user[addr][city]` becomes
/// `user_addr_city`, and a trailing `[]` is dropped (`tags[]` becomes
/// `tags`). Names without brackets pass through unchanged, so the result
/// is a pure function of the input and stable across calls.
pub fn id_from_name(name: &str) -> String {
    if !name.contains('[') {
        return name.to_string();
    }

    name.replace("[]", "")
        .replace("][", "_")
        .replace('[', "_")
        .replace(']', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_name_is_unchanged() {
        assert_eq!(id_from_name("intro"), "intro");
    }

    #[test]
    fn test_array_name_becomes_underscored() {
        assert_eq!(id_from_name("article[body]"), "article_body");
        assert_eq!(id_from_name("user[addr][city]"), "user_addr_city");
    }

    #[test]
    fn test_trailing_empty_brackets_are_dropped() {
        assert_eq!(id_from_name("tags[]"), "tags");
    }

    #[test]
    fn test_deterministic_across_calls() {
        assert_eq!(id_from_name("a[b]"), id_from_name("a[b]"));
    }
}
