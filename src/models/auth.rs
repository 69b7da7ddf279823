//! Mock accounts and the credential payloads of the auth endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::db::Record;

/// A sign-in identity. Passwords are kept in plain text; these are mock accounts.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub id: String,
    pub email: String,
    pub password: String,
    pub name: Option<String>,
    pub email_verified: bool,
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Record for Account {
    fn id(&self) -> &str {
        &self.id
    }
}

/// What clients get to see of an [`Account`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountView {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub email_verified: bool,
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Account> for AccountView {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            email: account.email,
            name: account.name,
            email_verified: account.email_verified,
            avatar: account.avatar,
            created_at: account.created_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginInput {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    #[serde(default)]
    pub remember_me: bool,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterInput {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(
        length(min = 8, message = "Password must be at least 8 characters"),
        custom(function = "password_strength")
    )]
    pub password: String,
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: Option<String>,
}

impl RegisterInput {
    /// New accounts start unverified.
    pub fn into_account(self, id: String, now: DateTime<Utc>) -> Account {
        Account {
            id,
            email: self.email,
            password: self.password,
            name: self.name,
            email_verified: false,
            avatar: None,
            created_at: now,
        }
    }
}

/// Requires one uppercase letter, one lowercase letter and one digit.
fn password_strength(password: &str) -> Result<(), ValidationError> {
    let rules: [(fn(&char) -> bool, &'static str); 3] = [
        (char::is_ascii_uppercase, "Password must contain at least one uppercase letter"),
        (char::is_ascii_lowercase, "Password must contain at least one lowercase letter"),
        (char::is_ascii_digit, "Password must contain at least one number"),
    ];

    match rules.iter().find(|(check, _)| !password.chars().any(|c| check(&c))) {
        Some((_, message)) => Err(ValidationError::new("password_strength").with_message((*message).into())),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register(password: &str) -> RegisterInput {
        RegisterInput {
            email: "new@example.com".to_string(),
            password: password.to_string(),
            name: None,
        }
    }

    #[test]
    fn password_strength_names_the_missing_class() {
        assert!(password_strength("Password123").is_ok());

        let err = password_strength("password123").unwrap_err();
        assert_eq!(
            err.message.as_deref(),
            Some("Password must contain at least one uppercase letter")
        );
        let err = password_strength("PASSWORD123").unwrap_err();
        assert_eq!(
            err.message.as_deref(),
            Some("Password must contain at least one lowercase letter")
        );
        let err = password_strength("Passwordxyz").unwrap_err();
        assert_eq!(err.message.as_deref(), Some("Password must contain at least one number"));
    }

    #[test]
    fn register_checks_length_and_strength() {
        assert!(register("Password123").validate().is_ok());
        assert!(register("Pa1").validate().is_err());
        assert!(register("alllowercase1").validate().is_err());
    }

    #[test]
    fn short_name_is_rejected_but_absent_name_is_fine() {
        let mut input = register("Password123");
        input.name = Some("A".to_string());
        assert!(input.validate().is_err());
        input.name = None;
        assert!(input.validate().is_ok());
    }

    #[test]
    fn view_hides_password() {
        let account = register("Password123").into_account("acc-1".to_string(), Utc::now());
        let json = serde_json::to_value(AccountView::from(account)).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["emailVerified"], false);
    }

    #[test]
    fn remember_me_defaults_to_false() {
        let input: LoginInput =
            serde_json::from_str(r#"{"email":"demo@example.com","password":"Password123"}"#).unwrap();
        assert!(!input.remember_me);
    }
}
