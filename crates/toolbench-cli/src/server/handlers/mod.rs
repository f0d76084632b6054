//! API request handlers.

mod api_keys;
mod health;
mod slug;
mod types;
mod words;

pub use api_keys::*;
pub use health::*;
pub use slug::*;
pub use types::*;
pub use words::*;
