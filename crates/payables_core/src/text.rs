//! Text helpers shared by the engines: query matching and name collation.

use std::cmp::Ordering;

/// Normalizes a free-text query: trimmed and lowercased. `None` means "no filter".
pub(crate) fn normalize_query(raw: &str) -> Option<String> {
    let needle = raw.trim().to_lowercase();
    if needle.is_empty() {
        None
    } else {
        Some(needle)
    }
}

/// True when any field contains the (already normalized) needle, ignoring case.
pub(crate) fn any_field_contains<'a>(
    fields: impl IntoIterator<Item = &'a str>,
    needle: &str,
) -> bool {
    fields
        .into_iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Compares two strings the way a human-facing list sorts names.
///
/// Letters compare case- and accent-insensitively first (`"bolletta"` sorts
/// next to `"Bolletta"`, `"è"` next to `"e"`). Remaining ties put unaccented
/// before accented and lowercase before uppercase, then fall back to code
/// points so the ordering is total.
pub fn collate(a: &str, b: &str) -> Ordering {
    let primary = a
        .chars()
        .map(fold_char)
        .cmp(b.chars().map(fold_char));
    if primary != Ordering::Equal {
        return primary;
    }
    let tertiary = a
        .chars()
        .map(tie_break_key)
        .cmp(b.chars().map(tie_break_key));
    tertiary.then_with(|| a.cmp(b))
}

fn tie_break_key(c: char) -> (bool, bool) {
    (is_accented(c), c.is_uppercase())
}

fn is_accented(c: char) -> bool {
    let lower = lower_char(c);
    strip_accent(lower) != lower
}

fn lower_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

fn fold_char(c: char) -> char {
    strip_accent(lower_char(c))
}

fn strip_accent(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'ç' => 'c',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ñ' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ý' | 'ÿ' => 'y',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_query_is_no_filter() {
        assert_eq!(normalize_query("   "), None);
        assert_eq!(normalize_query(" AwS "), Some("aws".to_string()));
    }

    #[test]
    fn collate_ignores_case_at_first_level() {
        assert_eq!(collate("apple", "Banana"), Ordering::Less);
        assert_eq!(collate("Zeta", "alpha"), Ordering::Greater);
    }

    #[test]
    fn collate_puts_lowercase_first_on_ties() {
        assert_eq!(collate("fattura", "Fattura"), Ordering::Less);
        assert_eq!(collate("Fattura", "Fattura"), Ordering::Equal);
    }

    #[test]
    fn collate_sorts_accents_next_to_base_letter() {
        assert_eq!(collate("perché", "perf"), Ordering::Less);
        assert_eq!(collate("e", "è"), Ordering::Less);
    }
}
