use serde::{Deserialize, Serialize};
use serde_json::Value;
use snapmeal_core::domain::{
    common::entities::app_errors::CoreError,
    user::value_objects::{ResetPasswordInput, SignupInput},
};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct SignupRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Missing fields"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Missing fields"))]
    pub password: String,

    #[serde(default)]
    pub name: Option<String>,
}

impl From<SignupRequest> for SignupInput {
    fn from(request: SignupRequest) -> Self {
        Self {
            email: request.email,
            password: request.password,
            name: request.name,
        }
    }
}

/// Parsed leniently: an unreadable body behaves like `{}`. Field types are
/// checked when converting into [`ResetPasswordInput`].
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub current_password: Option<Value>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub new_password: Option<Value>,
}

impl TryFrom<ResetPasswordRequest> for ResetPasswordInput {
    type Error = CoreError;

    fn try_from(request: ResetPasswordRequest) -> Result<Self, Self::Error> {
        let (Some(current), Some(new)) = (
            request.current_password.filter(is_truthy),
            request.new_password.filter(is_truthy),
        ) else {
            return Err(CoreError::MissingFields);
        };

        let Value::String(new_password) = new else {
            return Err(CoreError::PasswordTooShort);
        };

        // A non-string current password can never match the stored hash.
        let current_password = match current {
            Value::String(password) => password,
            other => other.to_string(),
        };

        Ok(Self {
            current_password,
            new_password,
        })
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
