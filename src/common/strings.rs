//! String heuristics used when comparing and merging extracted values.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Collapses runs of whitespace into single spaces and trims both ends.
pub fn simplified(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Simplifies an optional field in place, clearing it when nothing is left.
pub fn simplify_field(field: &mut Option<String>) {
    if let Some(value) = field.take() {
        let value = simplified(&value);
        if !value.is_empty() {
            *field = Some(value);
        }
    }
}

/// Trims an optional field in place, clearing it when nothing is left.
pub fn trim_field(field: &mut Option<String>) {
    if let Some(value) = field.take() {
        let value = value.trim();
        if !value.is_empty() {
            *field = Some(value.to_string());
        }
    }
}

/// Case-folds and strips diacritics, expanding Latin ligatures.
pub fn normalize(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars().flat_map(char::to_lowercase) {
        let mut canonical = std::iter::once(c).nfd();
        match canonical.next() {
            Some(base) if base != c => out.push(base),
            _ => {
                let compat: String = std::iter::once(c).nfkd().collect();
                if c.is_alphabetic() && compat != c.to_string() && compat.is_ascii() {
                    out.push_str(&compat);
                } else {
                    out.push(c);
                }
            }
        }
    }
    out
}

/// Removes combining marks after canonical decomposition.
pub fn strip_diacritics(s: &str) -> String {
    s.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Spells out umlauts and similar letters the way ASCII-only systems do.
pub fn transliterate(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            'ä' => out.push_str("ae"),
            'ö' | 'ø' | 'ő' => out.push_str("oe"),
            'ü' => out.push_str("ue"),
            _ => match std::iter::once(c).nfd().next() {
                Some(base) => out.push(base),
                None => out.push(c),
            },
        }
    }
    out
}

fn is_mixed_case(s: &str) -> bool {
    let letters = s.chars().filter(|c| c.is_alphabetic()).count();
    let upper = s.chars().filter(|c| c.is_uppercase()).count();
    upper != letters && upper != 0
}

fn longest_uppercase_run(s: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for c in s.chars() {
        if c.is_uppercase() {
            current += 1;
        } else {
            longest = longest.max(current);
            current = 0;
        }
    }
    longest.max(current)
}

/// Picks the more plausible of two spellings of the same value.
///
/// Preference order: present over empty, Unicode over ASCII, mixed case
/// over uniform case, then the longer one. Ties go to `rhs`.
pub fn better_string<'a>(lhs: &'a str, rhs: &'a str) -> &'a str {
    if lhs.is_empty() {
        return rhs;
    }
    if rhs.is_empty() {
        return lhs;
    }

    match (!lhs.is_ascii(), !rhs.is_ascii()) {
        (true, false) => return lhs,
        (false, true) => return rhs,
        _ => {}
    }

    let lhs_mixed = is_mixed_case(lhs);
    let rhs_mixed = is_mixed_case(rhs);
    if lhs_mixed != rhs_mixed {
        return if lhs_mixed { lhs } else { rhs };
    }

    let lhs_len = lhs.chars().count();
    let rhs_len = rhs.chars().count();
    if lhs_len == rhs_len {
        let lhs_run = longest_uppercase_run(lhs);
        let rhs_run = longest_uppercase_run(rhs);
        if lhs_run != rhs_run {
            // mixed case: fewer shouted words is better; uniform: upper beats lower
            return match (lhs_mixed, lhs_run > rhs_run) {
                (true, true) | (false, false) => rhs,
                (true, false) | (false, true) => lhs,
            };
        }
    }

    if rhs_len < lhs_len {
        lhs
    } else {
        rhs
    }
}

pub fn eq_ignore_case(lhs: &str, rhs: &str) -> bool {
    lhs.chars()
        .flat_map(char::to_lowercase)
        .eq(rhs.chars().flat_map(char::to_lowercase))
}

pub fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.len() >= prefix.len()
        && s.is_char_boundary(prefix.len())
        && eq_ignore_case(&s[..prefix.len()], prefix)
}
