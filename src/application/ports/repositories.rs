//! Repository Ports - 出站端口
//!
//! 定义用户目录的抽象接口
//! 具体实现在 infrastructure 层（进程内存）

use async_trait::async_trait;
use thiserror::Error;

use crate::contract::User;

/// 对已存储用户的原地修改
pub type UserMutation = Box<dyn FnOnce(&mut User) + Send>;

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Duplicate entity: {0}")]
    Duplicate(String),
}

/// User Directory Port
#[async_trait]
pub trait UserDirectoryPort: Send + Sync {
    /// 保存新用户，id 已存在时返回 `Duplicate`
    async fn save(&self, user: &User) -> Result<(), RepositoryError>;

    /// 在持有条目锁期间修改用户并返回修改后的副本，不存在时返回 `NotFound`
    async fn modify(&self, id: &str, mutation: UserMutation) -> Result<User, RepositoryError>;

    /// 根据 ID 查找用户
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, RepositoryError>;

    /// 按创建顺序列出所有用户
    async fn find_all(&self) -> Result<Vec<User>, RepositoryError>;
}
