use cadence_api::constant;
use cadence_backend::{build, config, init_tracing};

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(?error, "could not listen for the shutdown signal");
    }
    tracing::info!("shutting down");
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let config = config::Config::load()?;
    init_tracing(&config.log)?;
    tracing::info!(server_version =% constant::SERVER_VERSION);
    tracing::info!("{config:#?}");

    let listener = tokio::net::TcpListener::bind(config.server.to_socket_addr()).await?;
    tracing::info!(address = %listener.local_addr()?, "listening");
    axum::serve(listener, build(&config)).with_graceful_shutdown(shutdown_signal()).await?;
    Ok(())
}
