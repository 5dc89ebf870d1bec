use blog_posts_api::{AppConfig, BlogServer};
use dotenvy::dotenv;
use env_logger::Env;
use log::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Initialize logger with environment variable support
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env();
    info!(
        "Starting server on http://{}:{} (database {})",
        config.host, config.port, config.database.name
    );

    let server = BlogServer::start(&config)
        .await
        .map_err(std::io::Error::other)?;

    // Resolves once actix has handled SIGINT/SIGTERM and drained workers
    server.wait().await.map_err(std::io::Error::other)?;

    info!("Server has stopped");

    Ok(())
}
