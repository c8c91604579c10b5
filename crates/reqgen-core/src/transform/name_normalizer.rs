use heck::ToLowerCamelCase;

/// Derive the output file stem for a tag.
///
/// The description is split on single spaces, its last word dropped, the
/// first remaining word's first character lower-cased, and the rest joined
/// without a separator: `User Management Controller` → `userManagement`.
/// Descriptions with fewer than two words (or that would produce a path
/// separator) fall back to the tag name in lowerCamelCase. Returns `None`
/// when neither gives a usable name.
pub fn module_file_stem(tag_name: &str, description: Option<&str>) -> Option<String> {
    if let Some(stem) = description.and_then(stem_from_description) {
        return Some(stem);
    }
    let fallback = tag_name.to_lower_camel_case();
    (!fallback.is_empty()).then_some(fallback)
}

fn stem_from_description(description: &str) -> Option<String> {
    let words: Vec<&str> = description.split(' ').collect();
    let (_, kept) = words.split_last()?;
    let (first, rest) = kept.split_first()?;

    let mut stem = lower_first(first);
    for word in rest {
        stem.push_str(word);
    }

    let usable = !stem.is_empty() && !stem.contains(['/', '\\']) && stem != "." && stem != "..";
    usable.then_some(stem)
}

fn lower_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drops_last_word() {
        assert_eq!(
            module_file_stem("User", Some("User Management Controller")).as_deref(),
            Some("userManagement")
        );
        assert_eq!(
            module_file_stem("User", Some("User Controller")).as_deref(),
            Some("user")
        );
    }

    #[test]
    fn test_only_first_character_is_lowered() {
        assert_eq!(
            module_file_stem("t", Some("SMS Code Controller")).as_deref(),
            Some("sMSCode")
        );
    }

    #[test]
    fn test_falls_back_to_tag_name() {
        assert_eq!(
            module_file_stem("order-controller", Some("Orders")).as_deref(),
            Some("orderController")
        );
        assert_eq!(
            module_file_stem("Payment API", None).as_deref(),
            Some("paymentApi")
        );
        assert_eq!(
            module_file_stem("Files", Some("a/b Controller")).as_deref(),
            Some("files")
        );
    }

    #[test]
    fn test_no_usable_name() {
        assert_eq!(module_file_stem("", Some("Controller")), None);
        assert_eq!(module_file_stem("--", None), None);
    }
}
