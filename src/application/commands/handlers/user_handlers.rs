//! User Command Handlers

use serde_json::{Map, Value};
use std::sync::Arc;

use crate::application::commands::{CreateUser, UpdateUser};
use crate::application::error::ApplicationError;
use crate::application::ports::{RepositoryError, UserDirectoryPort};
use crate::contract::{
    codes, format_now, is_valid_email, sanitize_string, validate_required, AppError,
    CreateUserRequest, IdGenerator, UpdateUserRequest, User,
};

/// 创建用户时的必填字段
pub const REQUIRED_USER_FIELDS: &[&str] = &["name", "email"];

fn invalid_email(email: &str) -> ApplicationError {
    ApplicationError::Validation(AppError::new(
        codes::INVALID_EMAIL,
        format!("Invalid email address: {}", email),
    ))
}

/// 清洗对象中所有字符串字段
fn sanitize_fields(payload: Map<String, Value>) -> Map<String, Value> {
    payload
        .into_iter()
        .map(|(key, value)| match value {
            Value::String(s) => (key, Value::String(sanitize_string(&s))),
            other => (key, other),
        })
        .collect()
}

// ============================================================================
// CreateUser
// ============================================================================

/// CreateUser Handler
pub struct CreateUserHandler {
    users: Arc<dyn UserDirectoryPort>,
    id_generator: Arc<dyn IdGenerator>,
}

impl CreateUserHandler {
    pub fn new(users: Arc<dyn UserDirectoryPort>, id_generator: Arc<dyn IdGenerator>) -> Self {
        Self {
            users,
            id_generator,
        }
    }

    pub async fn handle(&self, command: CreateUser) -> Result<User, ApplicationError> {
        let payload = sanitize_fields(command.payload);
        validate_required(&payload, REQUIRED_USER_FIELDS)?;

        let request: CreateUserRequest =
            serde_json::from_value(Value::Object(payload)).map_err(|e| {
                AppError::new(
                    codes::VALIDATION_ERROR,
                    format!("Invalid user payload: {}", e),
                )
            })?;

        if !is_valid_email(&request.email) {
            return Err(invalid_email(&request.email));
        }

        let now = format_now();
        let user = User {
            id: self.id_generator.generate(),
            name: request.name,
            email: request.email,
            created_at: Some(now.clone()),
            updated_at: Some(now),
        };

        self.users.save(&user).await?;

        tracing::info!(user_id = %user.id, email = %user.email, "User created");

        Ok(user)
    }
}

// ============================================================================
// UpdateUser
// ============================================================================

/// UpdateUser Handler
pub struct UpdateUserHandler {
    users: Arc<dyn UserDirectoryPort>,
}

impl UpdateUserHandler {
    pub fn new(users: Arc<dyn UserDirectoryPort>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, command: UpdateUser) -> Result<User, ApplicationError> {
        let changes = UpdateUserRequest {
            name: command.changes.name.as_deref().map(sanitize_string),
            email: command.changes.email.as_deref().map(sanitize_string),
        };

        if changes.is_empty() {
            return Err(AppError::new(codes::VALIDATION_ERROR, "No fields to update").into());
        }

        // 只校验本次提供的字段
        let provided: Vec<&str> = [("name", &changes.name), ("email", &changes.email)]
            .into_iter()
            .filter(|(_, value)| value.is_some())
            .map(|(field, _)| field)
            .collect();
        let record = match serde_json::to_value(&changes) {
            Ok(Value::Object(map)) => map,
            Ok(_) => Map::new(),
            Err(e) => return Err(ApplicationError::internal(e.to_string())),
        };
        validate_required(&record, &provided)?;

        if let Some(email) = &changes.email {
            if !is_valid_email(email) {
                return Err(invalid_email(email));
            }
        }

        let updated_at = format_now();
        let user = self
            .users
            .modify(
                &command.user_id,
                Box::new(move |user: &mut User| {
                    if let Some(name) = changes.name {
                        user.name = name;
                    }
                    if let Some(email) = changes.email {
                        user.email = email;
                    }
                    user.updated_at = Some(updated_at);
                }),
            )
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound(_) => {
                    ApplicationError::not_found("User", command.user_id.as_str())
                }
                other => other.into(),
            })?;

        tracing::info!(user_id = %user.id, "User updated");

        Ok(user)
    }
}
