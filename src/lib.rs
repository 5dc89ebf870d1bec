pub mod config;
pub mod database;
pub mod middleware;
pub mod post;
pub mod router;
pub mod server;
pub mod utils;

pub use config::AppConfig;
pub use server::{BlogServer, StartupError};
