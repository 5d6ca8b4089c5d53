//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreateUserHandler, UpdateUserHandler,
    // Query handlers
    GetUserHandler, HealthCheckHandler, ListUsersHandler,
    // Ports
    ProcessInfoPort, UserDirectoryPort,
};
use crate::contract::IdGenerator;

/// 应用状态
pub struct AppState {
    // ========== Command Handlers ==========
    pub create_user_handler: CreateUserHandler,
    pub update_user_handler: UpdateUserHandler,

    // ========== Query Handlers ==========
    pub get_user_handler: GetUserHandler,
    pub list_users_handler: ListUsersHandler,
    pub health_handler: HealthCheckHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        users: Arc<dyn UserDirectoryPort>,
        process_info: Arc<dyn ProcessInfoPort>,
        id_generator: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            create_user_handler: CreateUserHandler::new(users.clone(), id_generator),
            update_user_handler: UpdateUserHandler::new(users.clone()),

            get_user_handler: GetUserHandler::new(users.clone()),
            list_users_handler: ListUsersHandler::new(users),
            health_handler: HealthCheckHandler::new(process_info),
        }
    }
}
