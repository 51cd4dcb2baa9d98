//! Circulation Desk
//!
//! In-memory circulation records for a small library: members, books and
//! the checkout transactions that lend one to the other, driven from an
//! interactive text menu.

pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod repository;
pub mod seed;
pub mod services;
pub mod shell;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use repository::Repository;
pub use services::Services;
