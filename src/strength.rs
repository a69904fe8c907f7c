//! Strength classification derived from the requirement score.

use std::fmt;

use crate::requirements::{REQUIREMENTS, satisfied_count};

/// Discrete strength label, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthLevel {
    None,
    VeryWeak,
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthLevel {
    /// Maps a requirement score onto a level.
    ///
    /// | score | level     |
    /// |-------|-----------|
    /// | 0     | none      |
    /// | 1-2   | very weak |
    /// | 3-4   | weak      |
    /// | 5-6   | fair      |
    /// | 7     | good      |
    /// | 8+    | strong    |
    pub fn from_score(score: u8) -> Self {
        match score {
            0 => StrengthLevel::None,
            1..=2 => StrengthLevel::VeryWeak,
            3..=4 => StrengthLevel::Weak,
            5..=6 => StrengthLevel::Fair,
            7 => StrengthLevel::Good,
            _ => StrengthLevel::Strong,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StrengthLevel::None => "none",
            StrengthLevel::VeryWeak => "very weak",
            StrengthLevel::Weak => "weak",
            StrengthLevel::Fair => "fair",
            StrengthLevel::Good => "good",
            StrengthLevel::Strong => "strong",
        }
    }

    /// Background token for the strength meter bar.
    pub fn color(&self) -> &'static str {
        match self {
            StrengthLevel::None => "bg-gray-200",
            StrengthLevel::VeryWeak => "bg-red-500",
            StrengthLevel::Weak => "bg-orange-500",
            StrengthLevel::Fair => "bg-yellow-500",
            StrengthLevel::Good => "bg-blue-500",
            StrengthLevel::Strong => "bg-green-500",
        }
    }

    /// Text token for the strength label.
    pub fn text_color(&self) -> &'static str {
        match self {
            StrengthLevel::None => "text-gray-500",
            StrengthLevel::VeryWeak => "text-red-600",
            StrengthLevel::Weak => "text-orange-600",
            StrengthLevel::Fair => "text-yellow-600",
            StrengthLevel::Good => "text-blue-600",
            StrengthLevel::Strong => "text-green-600",
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthResult {
    pub level: StrengthLevel,
    /// Number of satisfied requirements.
    pub score: u8,
}

impl StrengthResult {
    pub fn from_score(score: u8) -> Self {
        Self {
            level: StrengthLevel::from_score(score),
            score,
        }
    }

    /// Share of requirements met, in `0.0..=1.0`, for the meter width.
    pub fn fraction(&self) -> f64 {
        f64::from(self.score) / REQUIREMENTS.len() as f64
    }

    pub fn color(&self) -> &'static str {
        self.level.color()
    }

    pub fn text_color(&self) -> &'static str {
        self.level.text_color()
    }
}

/// Classifies `password` by how many requirements it satisfies.
pub fn classify_strength(password: &str) -> StrengthResult {
    StrengthResult::from_score(satisfied_count(password))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_boundaries() {
        let expected = [
            (0, StrengthLevel::None),
            (1, StrengthLevel::VeryWeak),
            (2, StrengthLevel::VeryWeak),
            (3, StrengthLevel::Weak),
            (4, StrengthLevel::Weak),
            (5, StrengthLevel::Fair),
            (6, StrengthLevel::Fair),
            (7, StrengthLevel::Good),
            (8, StrengthLevel::Strong),
        ];
        for (score, level) in expected {
            assert_eq!(StrengthLevel::from_score(score), level, "score {score}");
        }
    }

    #[test]
    fn test_level_is_monotonic_in_score() {
        for score in 0..8u8 {
            assert!(StrengthLevel::from_score(score) <= StrengthLevel::from_score(score + 1));
        }
    }

    #[test]
    fn test_classify_empty_password() {
        // Only the three "absence" requirements pass.
        let result = classify_strength("");
        assert_eq!(result.score, 3);
        assert_eq!(result.level, StrengthLevel::Weak);
    }

    #[test]
    fn test_classify_common_password() {
        // length, lowercase, no repeat, no sequence
        let result = classify_strength("password");
        assert_eq!(result.score, 4);
        assert_eq!(result.level, StrengthLevel::Weak);
        assert_eq!(result.color(), "bg-orange-500");
    }

    #[test]
    fn test_classify_good_and_strong() {
        // Everything except sequential numbers.
        let good = classify_strength("MyPass123!");
        assert_eq!(good.score, 7);
        assert_eq!(good.level, StrengthLevel::Good);

        let strong = classify_strength("K9!mP2×qL#");
        assert_eq!(strong.score, 8);
        assert_eq!(strong.level, StrengthLevel::Strong);
        assert_eq!(strong.text_color(), "text-green-600");
        assert_eq!(strong.fraction(), 1.0);
    }

    #[test]
    fn test_display_label() {
        assert_eq!(StrengthLevel::VeryWeak.to_string(), "very weak");
    }
}
