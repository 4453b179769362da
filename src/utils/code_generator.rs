//! Short code generation.

use rand::Rng;

/// Length of generated short codes.
const CODE_LENGTH: usize = 6;

/// Allowed characters: lowercase letters and digits.
const CODE_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Generates a random 6-character lowercase-alphanumeric short code.
///
/// Each character is a uniform independent draw from the 36-symbol alphabet,
/// giving 36^6 possible codes. Uniqueness is NOT guaranteed here; the
/// registry enforces it with an atomic insert-if-absent and bounded retry.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
/// ```
pub fn generate_code() -> String {
    let mut rng = rand::rng();

    (0..CODE_LENGTH)
        .map(|_| CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())] as char)
        .collect()
}
