use actix_web::{HttpResponse, web};
use chrono::{TimeDelta, Utc};
use uuid::Uuid;
use validator::Validate;

use crate::db::Repository;
use crate::error::ApiError;
use crate::models::FieldError;
use crate::models::auth::{Account, AccountView, LoginInput, RegisterInput};

fn find_by_email(repo: &dyn Repository<Account>, email: &str) -> Option<Account> {
    repo.list()
        .into_iter()
        .find(|a| a.email.eq_ignore_ascii_case(email))
}

/// POST /api/auth/register — create an unverified account.
pub async fn register(
    repo: web::Data<dyn Repository<Account>>,
    body: web::Json<RegisterInput>,
) -> Result<HttpResponse, ApiError> {
    let input = body.into_inner();
    input.validate()?;

    if find_by_email(repo.get_ref(), &input.email).is_some() {
        return Err(ApiError::Conflict(
            "Email already exists".to_string(),
            vec![FieldError::new("email", "This email is already registered")],
        ));
    }

    let account = repo.insert(input.into_account(Uuid::new_v4().to_string(), Utc::now()));
    tracing::info!(id = %account.id, email = %account.email, "account registered");

    Ok(HttpResponse::Created().json(serde_json::json!({
        "success": true,
        "message": "Registration successful! Please check your email to verify your account.",
        "data": {
            "email": account.email,
            "verificationRequired": true,
        },
    })))
}

/// POST /api/auth/login — check credentials and hand out a session token.
/// Unverified accounts are refused with 403.
pub async fn login(
    repo: web::Data<dyn Repository<Account>>,
    body: web::Json<LoginInput>,
) -> Result<HttpResponse, ApiError> {
    let input = body.into_inner();
    input.validate()?;

    let account = find_by_email(repo.get_ref(), &input.email)
        .filter(|a| a.password == input.password)
        .ok_or_else(|| {
            tracing::warn!(email = %input.email, "login rejected");
            ApiError::Unauthorized(
                "Invalid credentials".to_string(),
                vec![FieldError::new("email", "Invalid email or password")],
            )
        })?;

    if !account.email_verified {
        return Err(ApiError::Forbidden(
            "Email not verified".to_string(),
            vec![FieldError::new("email", "Please verify your email address")],
        ));
    }

    let lifetime = if input.remember_me {
        TimeDelta::days(30)
    } else {
        TimeDelta::days(1)
    };
    tracing::info!(id = %account.id, remember_me = input.remember_me, "login");

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "user": AccountView::from(account),
        "token": Uuid::new_v4().simple().to_string(),
        "expiresAt": Utc::now() + lifetime,
    })))
}
