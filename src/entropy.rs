//! Entropy estimate based on alphabet size and length.

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

const CHARACTER_CLASSES: [&str; 4] = [LOWERCASE, UPPERCASE, DIGITS, SYMBOLS];

/// Sum of the sizes of every character class that appears in `password`.
pub fn alphabet_size(password: &str) -> usize {
    CHARACTER_CLASSES
        .iter()
        .filter(|class| password.chars().any(|c| class.contains(c)))
        .map(|class| class.len())
        .sum()
}

/// Estimates entropy in bits as `length * log2(alphabet size)`.
///
/// Returns `0.0` when no known character class is present, including for
/// the empty password.
pub fn estimate_entropy(password: &str) -> f64 {
    let alphabet = alphabet_size(password);
    if alphabet == 0 {
        return 0.0;
    }
    password.chars().count() as f64 * (alphabet as f64).log2()
}
