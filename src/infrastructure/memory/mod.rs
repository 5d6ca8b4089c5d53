//! Memory Layer - In-Memory State Management
//!
//! 实现 UserDirectory，在进程内存中保存用户

mod user_directory;

pub use user_directory::InMemoryUserDirectory;
