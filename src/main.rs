use clap::Parser;
use config::Settings;
use error::ServerError;
use std::error::Error;
use std::net::IpAddr;
use std::path::PathBuf;

mod app;
mod config;
mod error;
mod models;
mod routes;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML file with `address` and/or `port`.
    #[arg(short, long, env = "MOCK_WEATHER_CONFIG")]
    config: Option<PathBuf>,

    #[arg(short, long, env = "MOCK_WEATHER_ADDRESS")]
    address: Option<IpAddr>,

    #[arg(short, long, env = "PORT")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(err) = run(Args::parse()).await {
        log::error!("{}", err);
        let mut source = err.source();
        while let Some(cause) = source {
            log::error!("  caused by: {}", cause);
            source = cause.source();
        }
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), ServerError> {
    let settings = match &args.config {
        Some(path) => {
            log::info!("reading configuration from {}", path.display());
            Settings::load(path)?
        }
        None => Settings::default(),
    }
    .with_overrides(args.address, args.port);

    let addr = settings.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    log::info!("listening on {}", addr);
    log::info!("health check available at http://{}/health", addr);
    log::info!("weather data available at http://{}/weather", addr);

    axum::serve(listener, app::create_app())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|source| ServerError::Serve { source })?;

    log::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            log::warn!("could not listen for ctrl-c: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                log::warn!("could not listen for SIGTERM: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    log::info!("shutting down, waiting for in-flight requests");
}
