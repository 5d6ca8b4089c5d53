//! User Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::UserDirectoryPort;
use crate::application::queries::{GetUser, ListUsers};
use crate::contract::User;

/// GetUser Handler
pub struct GetUserHandler {
    users: Arc<dyn UserDirectoryPort>,
}

impl GetUserHandler {
    pub fn new(users: Arc<dyn UserDirectoryPort>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, query: GetUser) -> Result<User, ApplicationError> {
        self.users
            .find_by_id(&query.user_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("User", query.user_id))
    }
}

/// ListUsers Handler
pub struct ListUsersHandler {
    users: Arc<dyn UserDirectoryPort>,
}

impl ListUsersHandler {
    pub fn new(users: Arc<dyn UserDirectoryPort>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, _query: ListUsers) -> Result<Vec<User>, ApplicationError> {
        Ok(self.users.find_all().await?)
    }
}
