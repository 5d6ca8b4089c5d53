//! In-Memory User Directory Implementation
//!
//! 进程生命周期内有效，重启后清空

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::application::ports::{RepositoryError, UserDirectoryPort, UserMutation};
use crate::contract::User;

#[derive(Debug, Clone)]
struct StoredUser {
    /// 创建序号，用于稳定的列表顺序
    seq: u64,
    user: User,
}

/// 内存用户目录
pub struct InMemoryUserDirectory {
    users: DashMap<String, StoredUser>,
    next_seq: AtomicU64,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            next_seq: AtomicU64::new(0),
        }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for InMemoryUserDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserDirectoryPort for InMemoryUserDirectory {
    async fn save(&self, user: &User) -> Result<(), RepositoryError> {
        match self.users.entry(user.id.clone()) {
            Entry::Occupied(_) => {
                Err(RepositoryError::Duplicate(user.id.clone()))
            }
            Entry::Vacant(slot) => {
                let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
                slot.insert(StoredUser {
                    seq,
                    user: user.clone(),
                });
                tracing::debug!(user_id = %user.id, "User stored");
                Ok(())
            }
        }
    }

    async fn modify(&self, id: &str, mutation: UserMutation) -> Result<User, RepositoryError> {
        // get_mut 持有分片写锁，读改写之间不会被其他请求插入
        let mut entry = self
            .users
            .get_mut(id)
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))?;
        mutation(&mut entry.user);
        Ok(entry.user.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, RepositoryError> {
        Ok(self.users.get(id).map(|e| e.user.clone()))
    }

    async fn find_all(&self) -> Result<Vec<User>, RepositoryError> {
        let mut entries: Vec<StoredUser> = self.users.iter().map(|e| e.value().clone()).collect();
        entries.sort_by_key(|e| e.seq);
        Ok(entries.into_iter().map(|e| e.user).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str) -> User {
        User {
            id: id.to_string(),
            name: format!("user-{id}"),
            email: format!("{id}@example.com"),
            created_at: None,
            updated_at: None,
        }
    }

    #[tokio::test]
    async fn test_directory_lifecycle() {
        let directory = InMemoryUserDirectory::new();
        assert!(directory.is_empty());

        for id in ["c", "a", "b"] {
            directory.save(&user(id)).await.unwrap();
        }
        assert_eq!(directory.len(), 3);

        // 按创建顺序返回
        let ids: Vec<String> = directory
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.id)
            .collect();
        assert_eq!(ids, ["c", "a", "b"]);

        let renamed = directory
            .modify("a", Box::new(|u: &mut User| u.name = "Alice".to_string()))
            .await
            .unwrap();
        assert_eq!(renamed.name, "Alice");
        let found = directory.find_by_id("a").await.unwrap().unwrap();
        assert_eq!(found.name, "Alice");

        assert!(directory.find_by_id("zzz").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_and_missing() {
        let directory = InMemoryUserDirectory::new();
        directory.save(&user("a")).await.unwrap();

        assert!(matches!(
            directory.save(&user("a")).await,
            Err(RepositoryError::Duplicate(_))
        ));
        assert!(matches!(
            directory.modify("b", Box::new(|_: &mut User| {})).await,
            Err(RepositoryError::NotFound(_))
        ));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_modify_keeps_every_change() {
        let directory = std::sync::Arc::new(InMemoryUserDirectory::new());
        directory.save(&user("a")).await.unwrap();

        let mut tasks = Vec::new();
        for i in 0..64 {
            let directory = directory.clone();
            tasks.push(tokio::spawn(async move {
                directory
                    .modify(
                        "a",
                        Box::new(move |u: &mut User| u.name.push_str(&format!("|{i}"))),
                    )
                    .await
                    .unwrap();
            }));
        }
        for task in tasks {
            task.await.unwrap();
        }

        let found = directory.find_by_id("a").await.unwrap().unwrap();
        assert_eq!(found.name.matches('|').count(), 64);
    }
}
