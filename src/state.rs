use std::sync::Arc;

use anyhow::Context;
use mongodb::{options::ClientOptions, Client, Database};
use tracing::info;

use crate::config::AppConfig;

pub const USERS_COLLECTION: &str = "users";
pub const RECIPES_COLLECTION: &str = "recipes";

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let options = ClientOptions::parse(&config.mongodb_url)
            .await
            .context("parse MongoDB connection string")?;
        let client = Client::with_options(options).context("build MongoDB client")?;
        let db = client.database(&config.mongodb_db);

        ensure_collections(&db).await?;

        Ok(Self { db, config })
    }

    /// Non-connecting state for router tests; the lazy client only dials
    /// out on the first actual operation.
    #[cfg(test)]
    pub fn fake() -> Self {
        use mongodb::options::ServerAddress;

        let options = ClientOptions::builder()
            .hosts(vec![ServerAddress::Tcp {
                host: "localhost".into(),
                port: Some(27017),
            }])
            .build();
        let client = Client::with_options(options).expect("lazy client ok");

        let config = Arc::new(AppConfig {
            mongodb_url: "mongodb://localhost:27017".into(),
            mongodb_db: "cooking".into(),
            host: "0.0.0.0".into(),
            port: 9000,
            env: "production".into(),
        });

        Self {
            db: client.database("cooking"),
            config,
        }
    }
}

async fn ensure_collections(db: &Database) -> anyhow::Result<()> {
    let existing = db
        .list_collection_names(None)
        .await
        .context("list collections")?;
    for name in [USERS_COLLECTION, RECIPES_COLLECTION] {
        if !existing.iter().any(|c| c == name) {
            db.create_collection(name, None)
                .await
                .with_context(|| format!("create collection {name}"))?;
            info!(collection = name, "collection created");
        }
    }
    Ok(())
}
