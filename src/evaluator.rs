//! Password security evaluator - validation verdict and full report.

#[cfg(feature = "async")]
use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::compromised::detect_common_pattern;
use crate::entropy::estimate_entropy;
use crate::requirements::{RequirementCheck, evaluate_requirements};
use crate::strength::StrengthResult;

pub const REQUIREMENTS_NOT_MET: &str = "Password does not meet all security requirements";
pub const COMMON_PATTERN: &str = "Password uses a common pattern and may be easily guessed";
pub const CONTAINS_EMAIL: &str = "Password should not contain parts of your email address";

/// Verdict of [`validate`]: valid iff `errors` is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

/// Everything the evaluator knows about one password.
#[derive(Debug, Clone, PartialEq)]
pub struct PasswordReport {
    pub requirements: Vec<RequirementCheck>,
    pub strength: StrengthResult,
    pub compromised: bool,
    pub entropy: f64,
    pub validation: ValidationResult,
}

/// Lowercased text before the first `@`. An empty email counts as absent;
/// an empty local part does not.
fn email_local_part(email: Option<&str>) -> Option<String> {
    let email = email.filter(|e| !e.is_empty())?;
    let local = email.split('@').next().unwrap_or_default();
    Some(local.to_lowercase())
}

fn contains_email(password: &str, email: Option<&str>) -> bool {
    email_local_part(email).is_some_and(|local| password.to_lowercase().contains(&local))
}

// Errors are reported in this order; unmet requirements yield one message.
fn collect_errors(
    requirements: &[RequirementCheck],
    compromised: bool,
    contains_email: bool,
) -> ValidationResult {
    let mut errors = Vec::new();
    if requirements.iter().any(|check| !check.satisfied) {
        errors.push(REQUIREMENTS_NOT_MET.to_string());
    }
    if compromised {
        errors.push(COMMON_PATTERN.to_string());
    }
    if contains_email {
        errors.push(CONTAINS_EMAIL.to_string());
    }
    ValidationResult::from_errors(errors)
}

fn assemble(
    password: &str,
    requirements: Vec<RequirementCheck>,
    compromised: bool,
    contains_email: bool,
) -> PasswordReport {
    let score = requirements.iter().filter(|check| check.satisfied).count() as u8;
    PasswordReport {
        validation: collect_errors(&requirements, compromised, contains_email),
        strength: StrengthResult::from_score(score),
        requirements,
        compromised,
        entropy: estimate_entropy(password),
    }
}

/// Validates a password, optionally against the account's email address.
///
/// All failing checks are reported; unmet requirements produce a single
/// aggregated message no matter how many of them fail.
pub fn validate(password: &str, email: Option<&str>) -> ValidationResult {
    collect_errors(
        &evaluate_requirements(password),
        detect_common_pattern(password),
        contains_email(password, email),
    )
}

/// Runs every evaluator operation on `password`.
pub fn evaluate(password: &str, email: Option<&str>) -> PasswordReport {
    assemble(
        password,
        evaluate_requirements(password),
        detect_common_pattern(password),
        contains_email(password, email),
    )
}

/// Like [`evaluate`], but gives up between stages once `token` is cancelled.
///
/// Returns `None` if the evaluation was cancelled.
#[cfg(feature = "async")]
pub fn evaluate_cancellable(
    password: &str,
    email: Option<&str>,
    token: &CancellationToken,
) -> Option<PasswordReport> {
    let cancelled_before = |stage: &str| {
        let cancelled = token.is_cancelled();
        #[cfg(feature = "tracing")]
        {
            if cancelled {
                tracing::debug!("password evaluation cancelled before {} stage", stage);
            }
        }
        #[cfg(not(feature = "tracing"))]
        let _ = stage;
        cancelled
    };

    if cancelled_before("requirements") {
        return None;
    }
    let requirements = evaluate_requirements(password);

    if cancelled_before("pattern") {
        return None;
    }
    let compromised = detect_common_pattern(password);

    if cancelled_before("email") {
        return None;
    }
    let embeds_email = contains_email(password, email);

    if cancelled_before("report") {
        return None;
    }
    Some(assemble(password, requirements, compromised, embeds_email))
}

/// Evaluates a password typed into a form and sends the report on `tx`.
///
/// Meant to be spawned per keystroke: the caller cancels `token` when a newer
/// value arrives, in which case nothing is sent.
#[cfg(feature = "async")]
pub async fn evaluate_password_tx(
    password: &SecretString,
    email: Option<&str>,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordReport>,
) {
    #[cfg(feature = "tracing")]
    tracing::debug!("password evaluation is about to start...");

    // Let a newer keystroke cancel us before doing any work.
    tokio::task::yield_now().await;

    let Some(report) = evaluate_cancellable(password.expose_secret(), email, &token) else {
        return;
    };

    if let Err(e) = tx.send(report).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    #[tokio::test]
    async fn test_evaluate_with_cancellation() {
        let token = CancellationToken::new();
        token.cancel();

        assert!(evaluate_cancellable("SomePassword123!", None, &token).is_none());
    }

    #[tokio::test]
    async fn test_evaluate_without_cancellation() {
        let token = CancellationToken::new();

        let report = evaluate_cancellable("TestPass123!", None, &token)
            .expect("evaluation should complete");
        assert_eq!(report, evaluate("TestPass123!", None));
    }

    #[tokio::test]
    async fn test_evaluate_password_tx() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        let pwd = SecretString::new("TestPass123!".to_string().into());

        evaluate_password_tx(&pwd, Some("someone@example.com"), token, tx).await;

        let report = rx.recv().await.expect("Should receive report");
        assert_eq!(report.strength.score, 7);
    }

    #[tokio::test]
    async fn test_evaluate_password_tx_cancelled_sends_nothing() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        let pwd = SecretString::new("TestPass123!".to_string().into());
        evaluate_password_tx(&pwd, None, token, tx).await;

        // Sender dropped without sending.
        assert!(rx.recv().await.is_none());
    }
}
