mod auth;
mod chat;
pub mod client;
mod error;
mod records;
pub mod types;

pub use client::*;
pub use error::ApiError;
pub use types::*;
