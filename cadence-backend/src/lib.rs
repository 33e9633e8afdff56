mod aggregate;
mod app;
pub mod config;
mod database;
mod error;
mod http;
mod route;

pub use app::build;
use config::log::Format;
use error::Error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

pub fn init_tracing(log: &config::Log) -> Result<(), color_eyre::Report> {
    let registry = tracing_subscriber::registry().with(
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            [concat!(env!("CARGO_CRATE_NAME"), "=info"), "tower_http=info"].join(",").into()
        }),
    );
    match (&log.format, log.time) {
        (Format::Plain, true) => registry.with(fmt::layer()).try_init(),
        (Format::Plain, false) => registry.with(fmt::layer().without_time()).try_init(),
        (Format::Json, true) => registry.with(fmt::layer().json()).try_init(),
        (Format::Json, false) => registry.with(fmt::layer().json().without_time()).try_init(),
    }?;
    Ok(())
}

#[cfg(test)]
mod test;
