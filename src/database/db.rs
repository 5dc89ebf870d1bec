use crate::config::DatabaseConfig;
use mongodb::bson::doc;
use mongodb::{Client, options::ClientOptions};

pub struct Database {
    pub client: Client,
}

impl Database {
    pub async fn init(config: &DatabaseConfig) -> Result<Self, mongodb::error::Error> {
        let mut client_options = ClientOptions::parse(&config.uri).await?;
        client_options.app_name = Some("blog_posts_api".to_string());
        client_options.server_selection_timeout = Some(config.server_selection_timeout);

        let client = Client::with_options(client_options)?;

        // Ping the server to see if you can connect to the cluster
        client.database("admin").run_command(doc! {"ping": 1}).await?;

        log::info!("Connected successfully to MongoDB");

        Ok(Self { client })
    }
}

// This function is a convenience wrapper around Database::init()
pub async fn connect_to_mongo(config: &DatabaseConfig) -> Result<Client, mongodb::error::Error> {
    let database = Database::init(config).await.map_err(|e| {
        log::error!("Failed to initialize database: {}", e);
        e
    })?;
    Ok(database.client)
}
