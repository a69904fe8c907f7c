//! Pattern requirements - detects repeated runs and ascending digit sequences
//! anywhere in the password.

const SEQUENTIAL_NUMBERS: [&str; 8] = ["123", "234", "345", "456", "567", "678", "789", "890"];

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Returns `true` unless the password contains the same character three or
/// more times in a row.
pub fn no_repeated_run(password: &str) -> bool {
    let mut prev: Option<char> = None;
    let mut run = 0usize;

    for c in password.chars() {
        if Some(c) == prev {
            run += 1;
        } else {
            prev = Some(c);
            run = 1;
        }
        if run >= 3 && !is_line_terminator(c) {
            return false;
        }
    }
    true
}

/// Returns `true` unless the password contains an ascending three-digit run
/// such as `123` or `890`.
pub fn no_sequential_numbers(password: &str) -> bool {
    !SEQUENTIAL_NUMBERS.iter().any(|seq| password.contains(seq))
}
