//! Password requirements
//!
//! Each requirement is a named predicate over the raw password. The set is
//! fixed and ordered; strength scoring counts how many of them pass.

mod common;
mod length;
mod pattern;
mod variety;

pub use common::{COMMON_PASSWORDS, no_common_words};
pub use length::{MIN_LENGTH, min_length};
pub use pattern::{no_repeated_run, no_sequential_numbers};
pub use variety::{SPECIAL_CHARACTERS, has_digit, has_lowercase, has_special, has_uppercase};

/// A single named pass/fail rule.
#[derive(Debug, Clone, Copy)]
pub struct Requirement {
    pub label: &'static str,
    pub test: fn(&str) -> bool,
}

impl Requirement {
    pub fn is_satisfied_by(&self, password: &str) -> bool {
        (self.test)(password)
    }
}

/// Outcome of applying one requirement to a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequirementCheck {
    pub label: &'static str,
    pub satisfied: bool,
}

/// The canonical requirement set, in display order.
pub static REQUIREMENTS: [Requirement; 8] = [
    Requirement { label: "At least 8 characters", test: min_length },
    Requirement { label: "Contains uppercase letter", test: has_uppercase },
    Requirement { label: "Contains lowercase letter", test: has_lowercase },
    Requirement { label: "Contains number", test: has_digit },
    Requirement { label: "Contains special character", test: has_special },
    Requirement { label: "No common words", test: no_common_words },
    Requirement { label: "No repeated characters (3+)", test: no_repeated_run },
    Requirement { label: "No sequential numbers", test: no_sequential_numbers },
];

/// Applies every requirement to `password`, in declaration order.
pub fn evaluate_requirements(password: &str) -> Vec<RequirementCheck> {
    REQUIREMENTS
        .iter()
        .map(|req| RequirementCheck {
            label: req.label,
            satisfied: req.is_satisfied_by(password),
        })
        .collect()
}

/// Number of requirements `password` satisfies (0..=8).
pub fn satisfied_count(password: &str) -> u8 {
    REQUIREMENTS
        .iter()
        .filter(|req| req.is_satisfied_by(password))
        .count() as u8
}
