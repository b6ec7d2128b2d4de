use std::collections::HashSet;
use unicode_normalization::UnicodeNormalization;

/// Turns a display name into a URL-safe token: lowercase ASCII letters,
/// digits and single hyphens, never starting or ending with a hyphen.
///
/// Diacritics are stripped (`"Zoë"` becomes `"zoe"`). Input with nothing
/// usable left yields an empty string; callers pick the fallback.
pub fn slugify(name: &str) -> String {
    let folded: String = name
        .to_lowercase()
        .nfkd()
        .filter(|c| !('\u{0300}'..='\u{036f}').contains(c))
        .collect();

    let mut slug = String::with_capacity(folded.len());
    let mut pending_hyphen = false;

    for c in folded.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// Returns `base` if free, otherwise the first free `base-2`, `base-3`, ...
///
/// `used` is left untouched; insert the result before the next call.
pub fn ensure_unique_slug(base: &str, used: &HashSet<String>) -> String {
    if !used.contains(base) {
        return base.to_string();
    }

    let mut counter = 2;
    loop {
        let candidate = format!("{base}-{counter}");
        if !used.contains(&candidate) {
            return candidate;
        }
        counter += 1;
    }
}

/// Best-effort display name for a slug no stored guest carries:
/// `"budi-santoso"` becomes `"Budi Santoso"`.
pub fn slug_to_display_name(slug: &str) -> String {
    slug.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    let mut titled: String = first.to_uppercase().collect();
                    titled.push_str(&chars.as_str().to_lowercase());
                    titled
                }
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
