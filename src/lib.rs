//! Job application tracker core
//!
//! The rule-driven password security evaluator used at sign-up and password
//! reset, plus the job application model behind the Kanban board.
//!
//! # Features
//!
//! - `async` (default): Enables cancellable, channel-based evaluation and the
//!   async job store
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use jobtrack_core::{StrengthLevel, classify_strength, validate};
//!
//! let strength = classify_strength("K9!mP2×qL#");
//! assert_eq!(strength.level, StrengthLevel::Strong);
//!
//! let verdict = validate("MyPass123!", Some("mypass@example.com"));
//! assert!(!verdict.is_valid);
//! for error in &verdict.errors {
//!     println!("{error}");
//! }
//! ```

mod board;
mod compromised;
mod entropy;
mod evaluator;
mod forms;
mod job;
mod requirements;
#[cfg(feature = "async")]
mod store;
mod strength;

// Password security
pub use compromised::detect_common_pattern;
pub use entropy::{alphabet_size, estimate_entropy};
pub use evaluator::{PasswordReport, ValidationResult, evaluate, validate};
pub use requirements::{
    COMMON_PASSWORDS, MIN_LENGTH, REQUIREMENTS, Requirement, RequirementCheck, SPECIAL_CHARACTERS,
    evaluate_requirements,
};
pub use strength::{StrengthLevel, StrengthResult, classify_strength};

#[cfg(feature = "async")]
pub use evaluator::{evaluate_cancellable, evaluate_password_tx};

// Credentials
pub use forms::{CredentialError, ResetPasswordForm, SignUpForm};

// Job board
pub use board::{Board, Column, StatusCounts};
pub use job::{JobApplication, JobError, JobStatus, NewJobApplication, ParseStatusError};
#[cfg(feature = "async")]
pub use store::{InMemoryJobStore, JobStore, StoreError, UserId};
