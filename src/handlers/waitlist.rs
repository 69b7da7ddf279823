use actix_web::{HttpResponse, web};
use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::db::Repository;
use crate::error::ApiError;
use crate::models::FieldError;
use crate::models::waitlist::{WaitlistEntry, WaitlistInput};

/// POST /api/waitlist — add an email to the launch waitlist, once.
pub async fn join_waitlist(
    repo: web::Data<dyn Repository<WaitlistEntry>>,
    body: web::Json<WaitlistInput>,
) -> Result<HttpResponse, ApiError> {
    let input = body.into_inner();
    input.validate()?;

    if repo.list().iter().any(|e| e.email.eq_ignore_ascii_case(&input.email)) {
        tracing::info!(email = %input.email, "waitlist signup already present");
        return Err(ApiError::Conflict(
            "Email is already on the waitlist".to_string(),
            vec![FieldError::new("email", "This email is already on the waitlist")],
        ));
    }

    let entry = repo.insert(input.into_entry(Uuid::new_v4().to_string(), Utc::now()));
    tracing::info!(email = %entry.email, plan = ?entry.plan, "waitlist signup");

    Ok(HttpResponse::Created().json(serde_json::json!({
        "success": true,
        "message": "Successfully joined the waitlist",
        "data": { "email": entry.email },
    })))
}
