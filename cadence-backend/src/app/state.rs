use crate::config;
use crate::database::{Database, seed};

#[derive(Debug, Clone)]
pub struct App {
    pub database: Database,
    pub feed: config::Feed,
}

impl App {
    pub fn new(database: &config::Database, feed: config::Feed) -> Self {
        let database = if database.seed {
            tracing::info!("seeding database with the sample catalogue");
            Database::new(seed::data())
        } else {
            Database::default()
        };
        Self { database, feed }
    }
}
