//! HTTP Handlers

mod fallback;
mod health;
mod ping;
mod user;

pub use fallback::*;
pub use health::*;
pub use ping::*;
pub use user::*;
