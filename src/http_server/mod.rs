use crate::app_context::AppContext;
use crate::http_server::api::{health, link_existing_asset, qr_link, qr_view};
use actix_cors::Cors;
use actix_web::{http, web, App, HttpServer};
use nullnet_liberror::{location, Error, ErrorHandler, Location};
use tokio::sync::mpsc::UnboundedReceiver;

pub mod api;
pub mod authorization;
pub mod responses;

/// Serves until a message arrives on `shutdown`, then stops gracefully.
pub async fn run_http_server(
    context: AppContext,
    mut shutdown: UnboundedReceiver<()>,
) -> Result<(), Error> {
    let bind_address = context.config.bind_address();
    let cors_max_age = context.config.cors_max_age;
    log::info!(
        "HTTP server listening on {}:{}",
        bind_address.0,
        bind_address.1
    );

    let context = web::Data::new(context);

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![
                http::header::CONTENT_TYPE,
                http::header::AUTHORIZATION,
            ])
            .max_age(cors_max_age);

        App::new()
            .app_data(context.clone())
            .wrap(cors)
            .configure(routes)
    })
    .disable_signals()
    .bind(bind_address)
    .handle_err(location!())?
    .run();

    let handle = server.handle();
    tokio::spawn(async move {
        if shutdown.recv().await.is_some() {
            log::info!("Stopping HTTP server...");
            handle.stop(true).await;
        }
    });

    server.await.handle_err(location!())
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health))
        .route("/qr/{qr_id}", web::get().to(qr_view))
        .route("/qr/{qr_id}/link", web::get().to(qr_link))
        .route(
            "/qr/{qr_id}/link-existing-asset",
            web::post().to(link_existing_asset),
        );
}
