//! Sign-in Forms
//!
//! Login and sign-up drafts. Nothing is authenticated; validation mirrors
//! the browser's required/email checks so a simulated request only starts
//! for a complete form.

use crate::error::{FormError, FormResult};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoginDraft {
    pub email: String,
    pub password: String,
}

impl LoginDraft {
    pub fn validate(&self) -> FormResult<()> {
        validate_email(&self.email)?;
        if self.password.is_empty() {
            return Err(FormError::MissingField("Password"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SignupDraft {
    pub full_name: String,
    pub email: String,
    pub student_id: String,
    pub password: String,
}

impl SignupDraft {
    pub fn validate(&self) -> FormResult<()> {
        if self.full_name.trim().is_empty() {
            return Err(FormError::MissingField("Full Name"));
        }
        validate_email(&self.email)?;
        if self.student_id.trim().is_empty() {
            return Err(FormError::MissingField("Student ID"));
        }
        if self.password.is_empty() {
            return Err(FormError::MissingField("Password"));
        }
        Ok(())
    }
}

/// Same shape check as an `<input type="email">`: something@domain
fn validate_email(email: &str) -> FormResult<()> {
    let email = email.trim();
    if email.is_empty() {
        return Err(FormError::MissingField("Email"));
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => Ok(()),
        _ => Err(FormError::InvalidEmail),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_validation() {
        let mut draft = LoginDraft {
            email: "student@ccet.edu".to_string(),
            password: "secret".to_string(),
        };
        assert_eq!(draft.validate(), Ok(()));

        draft.password.clear();
        assert_eq!(draft.validate(), Err(FormError::MissingField("Password")));

        draft.email = "student".to_string();
        assert_eq!(draft.validate(), Err(FormError::InvalidEmail));
    }

    #[test]
    fn test_email_shapes() {
        assert_eq!(validate_email(""), Err(FormError::MissingField("Email")));
        assert_eq!(validate_email("@ccet.edu"), Err(FormError::InvalidEmail));
        assert_eq!(validate_email("a@b@c"), Err(FormError::InvalidEmail));
        assert_eq!(validate_email(" a@b "), Ok(()));
    }

    #[test]
    fn test_signup_requires_every_field() {
        let draft = SignupDraft {
            full_name: "John Doe".to_string(),
            email: "john@ccet.edu".to_string(),
            student_id: String::new(),
            password: "pw".to_string(),
        };
        assert_eq!(draft.validate(), Err(FormError::MissingField("Student ID")));
    }
}
