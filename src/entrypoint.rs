use crate::app_context::AppContext;
use crate::config::Config;
use crate::constants::QR_LINK_VERSION;
use crate::http_server::run_http_server;
use nullnet_liberror::{location, Error, ErrorHandler, Location};
use tokio::sync::mpsc;

#[actix_web::main]
pub async fn start_server() -> Result<(), Error> {
    init_logger();

    let config = Config::from_env();
    log::info!(
        "Starting QR link server v{QR_LINK_VERSION} with configuration: {}",
        serde_json::to_string(&config).unwrap_or_default()
    );

    // handle termination signals: SIGINT, SIGTERM, SIGHUP
    let (tx_shutdown, rx_shutdown) = mpsc::unbounded_channel();
    ctrlc::set_handler(move || {
        log::info!("Termination signal received");
        let _ = tx_shutdown.send(());
    })
    .handle_err(location!())?;

    let context = AppContext::new(config).await?;
    run_http_server(context, rx_shutdown).await?;

    log::info!("QR link server stopped");
    Ok(())
}

fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}
