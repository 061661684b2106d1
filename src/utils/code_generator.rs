//! Short code generation.
//!
//! Codes are drawn uniformly from the 62-character alphanumeric alphabet
//! using the thread-local CSPRNG. At the default length of 7 that is
//! 62^7 (about 3.5 * 10^12) possible codes.

use rand::{Rng, distr::Alphanumeric};

/// Default number of characters in a generated code.
pub const DEFAULT_CODE_LENGTH: usize = 7;

/// Smallest configurable code length.
pub const MIN_CODE_LENGTH: usize = 4;

/// Largest configurable code length; matches the `short_id` column width.
pub const MAX_CODE_LENGTH: usize = 32;

/// Generates a random alphanumeric short code of `length` characters.
///
/// Uniqueness is not checked here; the store rejects duplicates and the
/// caller regenerates.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(7);
/// assert_eq!(code.len(), 7);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_requested_length() {
        assert_eq!(generate_code(DEFAULT_CODE_LENGTH).len(), 7);
        assert_eq!(generate_code(MIN_CODE_LENGTH).len(), 4);
        assert_eq!(generate_code(MAX_CODE_LENGTH).len(), 32);
    }

    #[test]
    fn test_generate_code_alphanumeric_only() {
        for _ in 0..100 {
            let code = generate_code(DEFAULT_CODE_LENGTH);
            assert!(code.chars().all(|c| c.is_ascii_alphanumeric()), "{code}");
        }
    }

    #[test]
    fn test_generate_code_produces_unique_codes() {
        let codes: HashSet<String> = (0..1000)
            .map(|_| generate_code(DEFAULT_CODE_LENGTH))
            .collect();

        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn test_generate_code_uses_mixed_case_and_digits() {
        let sample: String = (0..200)
            .map(|_| generate_code(DEFAULT_CODE_LENGTH))
            .collect();

        assert!(sample.chars().any(|c| c.is_ascii_uppercase()));
        assert!(sample.chars().any(|c| c.is_ascii_lowercase()));
        assert!(sample.chars().any(|c| c.is_ascii_digit()));
    }
}
