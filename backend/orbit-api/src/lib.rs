/// Orbit API
///
/// CRUD REST backend for the Orbit platform: per-user task lists plus a
/// shared social feed (posts with comment and like side tables).
///
/// # Modules
///
/// - `handlers`: HTTP request handlers
/// - `models`: Row structs and request/response DTOs
/// - `services`: Business logic layer (pagination, search, ownership rules)
/// - `db`: Repository layer, parameterized sqlx queries
/// - `middleware`: Bearer-token authentication and request timing
/// - `auth`: JWT key handling and token validation
/// - `error`: Error types and HTTP mapping
/// - `config`: Configuration management
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod openapi;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
