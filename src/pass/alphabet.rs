//! Character pool building for password generation.

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Ordered, duplicate-free pool of characters a password may be drawn from.
///
/// Letters are always present; digits and symbols are appended behind their
/// policy flags, in that order. The order carries no meaning beyond making
/// sampling reproducible under a fixed RNG stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet(Vec<u8>);

impl Alphabet {
    /// Build the pool for a pair of policy flags. Never empty.
    pub fn build(include_digits: bool, include_symbols: bool) -> Self {
        let mut chars = Vec::with_capacity(94);
        chars.extend_from_slice(LOWERCASE);
        chars.extend_from_slice(UPPERCASE);

        if include_digits {
            chars.extend_from_slice(DIGITS);
        }
        if include_symbols {
            chars.extend_from_slice(SYMBOLS);
        }

        Alphabet(chars)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: letters are unconditional.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn byte(&self, idx: usize) -> u8 {
        self.0[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distinct(alphabet: &Alphabet) -> usize {
        let mut seen = [false; 128];
        let mut count = 0;
        for i in 0..alphabet.len() {
            let b = alphabet.byte(i) as usize;
            if !seen[b] {
                seen[b] = true;
                count += 1;
            }
        }
        count
    }

    #[test]
    fn letters_only_pool_has_52_distinct_chars() {
        let a = Alphabet::build(false, false);
        assert!(!a.is_empty());
        assert_eq!(a.len(), 52);
        assert_eq!(distinct(&a), 52);
    }

    #[test]
    fn digits_grow_pool_to_62() {
        let a = Alphabet::build(true, false);
        assert_eq!(a.len(), 62);
        assert_eq!(distinct(&a), 62);
    }

    #[test]
    fn symbols_strictly_grow_the_pool() {
        assert!(Alphabet::build(false, true).len() > Alphabet::build(false, false).len());
        assert!(Alphabet::build(true, true).len() > Alphabet::build(true, false).len());
        assert_eq!(Alphabet::build(true, true).len(), 94);
    }

    #[test]
    fn order_is_letters_then_digits_then_symbols() {
        let a = Alphabet::build(true, true);
        assert_eq!(a.byte(0), b'a');
        assert_eq!(a.byte(26), b'A');
        assert_eq!(a.byte(52), b'0');
        assert!(a.byte(62).is_ascii_punctuation());
        // Same flags, same pool.
        assert_eq!(a, Alphabet::build(true, true));
    }
}
