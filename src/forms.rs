//! Sign-up and password-reset submissions.
//!
//! Both forms apply the evaluator's canonical rules. The identity provider is
//! only called once `check` passes.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::evaluator::validate;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CredentialError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("{}", .0.join("; "))]
    WeakPassword(Vec<String>),
}

fn check_password(password: &str, email: Option<&str>) -> Result<(), CredentialError> {
    let verdict = validate(password, email);
    if !verdict.is_valid {
        return Err(CredentialError::WeakPassword(verdict.errors));
    }
    Ok(())
}

/// Account creation request.
#[derive(Debug)]
pub struct SignUpForm {
    pub full_name: String,
    pub email: String,
    pub password: SecretString,
}

impl SignUpForm {
    pub fn new(full_name: impl Into<String>, email: impl Into<String>, password: SecretString) -> Self {
        Self {
            full_name: full_name.into(),
            email: email.into(),
            password,
        }
    }

    pub fn check(&self) -> Result<(), CredentialError> {
        if self.full_name.trim().is_empty() {
            return Err(CredentialError::MissingField("Full name"));
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(CredentialError::MissingField("Email"));
        }
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {}
            _ => return Err(CredentialError::InvalidEmail(email.to_string())),
        }

        let result = check_password(self.password.expose_secret(), Some(email));

        #[cfg(feature = "tracing")]
        {
            if let Err(e) = &result {
                tracing::info!("sign-up rejected: {}", e);
            }
        }

        result
    }
}

/// New password submitted from the reset link.
#[derive(Debug)]
pub struct ResetPasswordForm {
    pub password: SecretString,
    pub confirm_password: SecretString,
}

impl ResetPasswordForm {
    pub fn new(password: SecretString, confirm_password: SecretString) -> Self {
        Self {
            password,
            confirm_password,
        }
    }

    pub fn check(&self) -> Result<(), CredentialError> {
        if self.password.expose_secret() != self.confirm_password.expose_secret() {
            return Err(CredentialError::PasswordMismatch);
        }
        check_password(self.password.expose_secret(), None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::{COMMON_PATTERN, CONTAINS_EMAIL, REQUIREMENTS_NOT_MET};

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_sign_up_accepts_strong_password() {
        let form = SignUpForm::new("Ada Lovelace", "ada@example.com", secret("K9!mP2×qL#"));
        assert_eq!(form.check(), Ok(()));
    }

    #[test]
    fn test_sign_up_missing_fields() {
        let form = SignUpForm::new("  ", "ada@example.com", secret("K9!mP2×qL#"));
        assert_eq!(form.check(), Err(CredentialError::MissingField("Full name")));

        let form = SignUpForm::new("Ada", "", secret("K9!mP2×qL#"));
        assert_eq!(form.check(), Err(CredentialError::MissingField("Email")));
    }

    #[test]
    fn test_sign_up_invalid_email() {
        let form = SignUpForm::new("Ada", "@example.com", secret("K9!mP2×qL#"));
        assert!(matches!(form.check(), Err(CredentialError::InvalidEmail(_))));

        let form = SignUpForm::new("Ada", "ada", secret("K9!mP2×qL#"));
        assert!(matches!(form.check(), Err(CredentialError::InvalidEmail(_))));
    }

    #[test]
    fn test_sign_up_password_contains_email() {
        let form = SignUpForm::new("Ada", "mypass@example.com", secret("MyPass123!"));
        let Err(CredentialError::WeakPassword(errors)) = form.check() else {
            panic!("expected WeakPassword");
        };
        assert_eq!(errors, vec![REQUIREMENTS_NOT_MET, CONTAINS_EMAIL]);
    }

    #[test]
    fn test_sign_up_common_pattern() {
        let form = SignUpForm::new("Ada", "ada@example.com", secret("12345678"));
        let Err(CredentialError::WeakPassword(errors)) = form.check() else {
            panic!("expected WeakPassword");
        };
        assert_eq!(errors, vec![REQUIREMENTS_NOT_MET, COMMON_PATTERN]);
    }

    #[test]
    fn test_reset_mismatch_checked_first() {
        let form = ResetPasswordForm::new(secret("abc"), secret("abd"));
        assert_eq!(form.check(), Err(CredentialError::PasswordMismatch));
    }

    #[test]
    fn test_reset_applies_canonical_rules() {
        // Six characters was enough for the old reset form; no longer.
        let form = ResetPasswordForm::new(secret("Ab1!xy"), secret("Ab1!xy"));
        assert!(matches!(form.check(), Err(CredentialError::WeakPassword(_))));

        let form = ResetPasswordForm::new(secret("K9!mP2×qL#"), secret("K9!mP2×qL#"));
        assert_eq!(form.check(), Ok(()));
    }

    #[test]
    fn test_weak_password_message() {
        let err = CredentialError::WeakPassword(vec!["a".into(), "b".into()]);
        assert_eq!(err.to_string(), "a; b");
    }
}
