//! Common-word requirement - rejects passwords built around well-known passwords.

/// Well-known passwords, matched as case-insensitive substrings.
pub const COMMON_PASSWORDS: [&str; 24] = [
    "password", "123456", "123456789", "qwerty", "abc123", "password123",
    "admin", "letmein", "welcome", "monkey", "1234567890", "dragon",
    "sunshine", "princess", "football", "iloveyou", "superman", "trustno1",
    "master", "jordan", "access", "flower", "passw0rd", "1qaz2wsx",
];

/// Returns `true` when no entry of [`COMMON_PASSWORDS`] appears anywhere in
/// the lowercased password.
pub fn no_common_words(password: &str) -> bool {
    let lowered = password.to_lowercase();
    !COMMON_PASSWORDS.iter().any(|common| lowered.contains(common))
}
