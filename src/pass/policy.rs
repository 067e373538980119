//! Composition-policy predicate.

/// Whether `candidate` satisfies the composition policy for the given
/// flags:
///
/// * at least one lowercase and one uppercase ASCII letter,
/// * at least two digits when `include_digits`,
/// * at least one punctuation character when `include_symbols`.
///
/// Total over any string; too-short or empty candidates simply fail.
pub fn satisfies_policy(candidate: &str, include_digits: bool, include_symbols: bool) -> bool {
    let mut has_lower = false;
    let mut has_upper = false;
    let mut has_symbol = false;
    let mut digit_count = 0usize;

    for c in candidate.chars() {
        if c.is_ascii_lowercase() {
            has_lower = true;
        } else if c.is_ascii_uppercase() {
            has_upper = true;
        } else if c.is_ascii_digit() {
            digit_count += 1;
        } else if c.is_ascii_punctuation() {
            has_symbol = true;
        }
    }

    has_lower
        && has_upper
        && (!include_digits || digit_count >= 2)
        && (!include_symbols || has_symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_both_cases() {
        assert!(satisfies_policy("aB", false, false));
        assert!(!satisfies_policy("ab", false, false));
        assert!(!satisfies_policy("AB", false, false));
        assert!(!satisfies_policy("", false, false));
    }

    #[test]
    fn digit_clause_needs_two_digits() {
        assert!(!satisfies_policy("aB1", true, false));
        assert!(satisfies_policy("aB12", true, false));
        // Vacuously true when digits are off.
        assert!(satisfies_policy("aB", false, false));
    }

    #[test]
    fn symbol_clause_needs_one_punctuation_char() {
        assert!(!satisfies_policy("aB12", true, true));
        assert!(satisfies_policy("aB12!", true, true));
        assert!(satisfies_policy("aB#", false, true));
    }

    #[test]
    fn digits_do_not_count_as_symbols() {
        assert!(!satisfies_policy("aB123", false, true));
    }
}
