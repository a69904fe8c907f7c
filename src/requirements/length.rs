//! Length requirement - checks password minimum length.

pub const MIN_LENGTH: usize = 8;

/// Checks if the password has at least [`MIN_LENGTH`] characters.
///
/// Length is counted in `char`s, so multi-byte characters count once.
pub fn min_length(password: &str) -> bool {
    password.chars().count() >= MIN_LENGTH
}
