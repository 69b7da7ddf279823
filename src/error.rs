use actix_web::{HttpRequest, HttpResponse, ResponseError, error::JsonPayloadError, http::StatusCode};
use thiserror::Error;
use validator::{ValidationErrors, ValidationErrorsKind};

use crate::db::RepoError;
use crate::models::FieldError;

/// Errors surfaced by the HTTP handlers. List endpoints never produce one.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("Validation error")]
    Validation(Vec<FieldError>),

    #[error("{0}")]
    Conflict(String, Vec<FieldError>),

    #[error("{0}")]
    Unauthorized(String, Vec<FieldError>),

    #[error("{0}")]
    Forbidden(String, Vec<FieldError>),
}

impl ApiError {
    fn field_errors(&self) -> &[FieldError] {
        match self {
            ApiError::NotFound(_) => &[],
            ApiError::Validation(errors)
            | ApiError::Conflict(_, errors)
            | ApiError::Unauthorized(_, errors)
            | ApiError::Forbidden(_, errors) => errors,
        }
    }

    fn flatten_validation_errors(prefix: &str, errs: &ValidationErrors, buff: &mut Vec<FieldError>) {
        for (field, kind) in errs.errors() {
            let path = if prefix.is_empty() {
                field.to_string()
            } else {
                format!("{prefix}.{field}")
            };
            match kind {
                ValidationErrorsKind::Struct(nested) => {
                    Self::flatten_validation_errors(&path, nested, buff);
                }
                ValidationErrorsKind::List(items) => {
                    for (index, nested) in items {
                        Self::flatten_validation_errors(&format!("{path}.{index}"), nested, buff);
                    }
                }
                ValidationErrorsKind::Field(errors) => {
                    for err in errors {
                        let message = err
                            .message
                            .as_ref()
                            .map_or_else(|| err.code.to_string(), |m| m.to_string());
                        buff.push(FieldError::new(&path, &message));
                    }
                }
            }
        }
    }
}

/// Flattens nested validator output into one `FieldError` per failed check,
/// ordered by field path so responses are stable.
impl From<ValidationErrors> for ApiError {
    fn from(e: ValidationErrors) -> Self {
        let mut errors = vec![];
        Self::flatten_validation_errors("", &e, &mut errors);
        errors.sort_by(|a, b| a.field.cmp(&b.field));
        ApiError::Validation(errors)
    }
}

impl From<RepoError> for ApiError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::NotFound(id) => ApiError::NotFound(format!("Record {id}")),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(..) => StatusCode::CONFLICT,
            ApiError::Unauthorized(..) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(..) => StatusCode::FORBIDDEN,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let errors = self.field_errors();
        let body = if errors.is_empty() && !matches!(self, ApiError::Validation(_)) {
            serde_json::json!({
                "error": self.to_string(),
            })
        } else {
            serde_json::json!({
                "error": self.to_string(),
                "errors": errors,
            })
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

/// Turns a JSON body that fails to parse into the same 400 shape field
/// validation produces.
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    let field = match &err {
        JsonPayloadError::Deserialize(e) => missing_field(&e.to_string()).unwrap_or("body").to_string(),
        _ => "body".to_string(),
    };
    tracing::warn!(path = %req.path(), error = %err, "rejected request body");
    ApiError::Validation(vec![FieldError::new(&field, &err.to_string())]).into()
}

/// serde names the field only for missing ones: "missing field `name` at ...".
fn missing_field(message: &str) -> Option<&str> {
    let rest = message.strip_prefix("missing field `")?;
    rest.split('`').next()
}

/// Startup configuration problems.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be {expected}, got {value:?}")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Signup {
        #[validate(email(message = "Invalid email address"))]
        email: String,
        #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
        password: String,
    }

    #[test]
    fn validation_errors_flatten_to_sorted_fields() {
        let bad = Signup {
            email: "nope".to_string(),
            password: "short".to_string(),
        };
        let ApiError::Validation(errors) = ApiError::from(bad.validate().unwrap_err()) else {
            panic!("expected a validation error");
        };
        assert_eq!(
            errors,
            vec![
                FieldError::new("email", "Invalid email address"),
                FieldError::new("password", "Password must be at least 8 characters"),
            ]
        );
    }

    #[test]
    fn missing_field_reads_serde_message() {
        assert_eq!(missing_field("missing field `name` at line 1 column 2"), Some("name"));
        assert_eq!(missing_field("unknown variant `bogus`"), None);
    }

    #[test]
    fn conflict_keeps_its_message_and_status() {
        let err = ApiError::Conflict("Email already exists".to_string(), vec![]);
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
        assert_eq!(err.to_string(), "Email already exists");
    }
}
