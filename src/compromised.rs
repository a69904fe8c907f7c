//! Compromised-pattern detection.
//!
//! Unlike the requirements, which scan for a weakness anywhere in the
//! password, these checks only fire when the structure covers the whole
//! string.

/// Returns `true` when the whole password is a well-known weak structure:
///
/// - one character repeated (at least twice)
/// - back-to-back ascending digit triplets (`012`, `123`, ... `890`, `901`)
/// - back-to-back ascending letter triplets (`abc` ... `xyz`, any case)
/// - digits only
/// - letters only
pub fn detect_common_pattern(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();

    is_single_repeated(&chars)
        || is_triplet_chain(&chars, is_numeric_triplet)
        || is_triplet_chain(&chars, is_alphabetic_triplet)
        || (!chars.is_empty() && chars.iter().all(|c| c.is_ascii_digit()))
        || (!chars.is_empty() && chars.iter().all(|c| c.is_ascii_alphabetic()))
}

fn is_single_repeated(chars: &[char]) -> bool {
    match chars.split_first() {
        Some((first, rest)) if !rest.is_empty() => {
            !matches!(first, '\n' | '\r' | '\u{2028}' | '\u{2029}') && rest.iter().all(|c| c == first)
        }
        _ => false,
    }
}

fn is_triplet_chain(chars: &[char], triplet: fn(&[char]) -> bool) -> bool {
    !chars.is_empty() && chars.len() % 3 == 0 && chars.chunks(3).all(triplet)
}

/// `012` through `789`, plus the wrapping `890` and `901`.
fn is_numeric_triplet(t: &[char]) -> bool {
    let digits: Option<Vec<u32>> = t.iter().map(|c| c.to_digit(10)).collect();
    match digits.as_deref() {
        Some([a, b, c]) => *b == (a + 1) % 10 && *c == (b + 1) % 10,
        _ => false,
    }
}

/// `abc` through `xyz`, without wrapping, case-insensitive per character.
fn is_alphabetic_triplet(t: &[char]) -> bool {
    if !t.iter().all(|c| c.is_ascii_alphabetic()) {
        return false;
    }
    let lower: Vec<u8> = t.iter().map(|c| c.to_ascii_lowercase() as u8).collect();
    matches!(lower.as_slice(), [a, b, c] if *b == a + 1 && *c == b + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_character_repeated() {
        assert!(detect_common_pattern("aaaaaaaa"));
        assert!(detect_common_pattern("!!!!!!!!"));
        assert!(!detect_common_pattern("!"));
    }

    #[test]
    fn test_numeric_triplet_chain() {
        assert!(detect_common_pattern("123456"));
        assert!(detect_common_pattern("890901"));
        assert!(is_triplet_chain(&['9', '0', '1'], is_numeric_triplet));
        assert!(!is_triplet_chain(&['1', '2', '4'], is_numeric_triplet));
    }

    #[test]
    fn test_alphabetic_triplet_chain() {
        assert!(is_triplet_chain(&['a', 'B', 'c', 'X', 'y', 'Z'], is_alphabetic_triplet));
        assert!(!is_triplet_chain(&['y', 'z', 'a'], is_alphabetic_triplet));
    }

    #[test]
    fn test_digits_or_letters_only() {
        assert!(detect_common_pattern("90210"));
        assert!(detect_common_pattern("Summer"));
    }

    #[test]
    fn test_patterns_must_span_whole_string() {
        assert!(!detect_common_pattern("123abc!X"));
        assert!(!detect_common_pattern("aaaaaaa1"));
        assert!(!detect_common_pattern("Tr0ub4dor&3"));
    }

    #[test]
    fn test_empty_and_mixed() {
        assert!(!detect_common_pattern(""));
        assert!(!detect_common_pattern("K9!mP2×qL#"));
        assert!(!detect_common_pattern("éééé1"));
    }
}
