mod database;
mod feed;
pub mod log;
mod server;

use cadence_api::constant;
pub use database::Database;
pub use feed::Feed;
use figment::Figment;
use figment::providers::{Env, Serialized};
pub use log::Log;
use serde::Deserialize;
pub use server::Server;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub server: Server,
    pub database: Database,
    pub feed: Feed,
    pub log: Log,
}

impl Config {
    pub fn figment() -> Figment {
        Figment::new()
            .merge(Env::prefixed(constant::ENV_PREFIX).split("__"))
            .join(Serialized::default("server", Server::default()))
            .join(Serialized::default("database", Database::default()))
            .join(Serialized::default("feed", Feed::default()))
            .join(Serialized::default("log", Log::default()))
    }

    pub fn load() -> color_eyre::Result<Self> {
        Ok(Self::figment().extract()?)
    }
}
