use std::io::Error;
use std::sync::Arc;

use poem::{Route, Server, listener::TcpListener};
use poem_openapi::OpenApiService;
use tokio::main;
use tracing_subscriber::EnvFilter;

use receipt_relay::{
    application::{
        services::{delivery::DeliveryChannel, renderer::RendererBackend},
        usecases::{
            convert_receipt::ConvertReceiptUseCase,
            send_notification::{SendNotificationConfig, SendNotificationUseCase},
            send_receipt::{SendReceiptConfig, SendReceiptUseCase},
        },
    },
    config::Config,
    infrastructure::{
        delivery::websocket::WebSocketTransport,
        rendering::{remote::RemoteBrowserRenderer, svg::SvgRenderer},
        upload::http::HttpUploader,
    },
    presentation::http::endpoints::{
        notifications::NotificationsEndpoints,
        receipts::ReceiptsEndpoints,
        root::{ApiState, Endpoints},
    },
};

#[main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::try_parse().map_err(Error::other)?;

    let server_url = format!("{}://{}:{}", config.scheme, config.host, config.port);

    tracing::info!(%server_url, "starting server");

    let channel = Arc::new(DeliveryChannel::new(WebSocketTransport::new()));
    let renderer = match config.render_backend {
        RendererBackend::Remote => RemoteBrowserRenderer::new(
            config
                .renderer_url
                .clone()
                .expect("renderer url checked during config parsing"),
        ),
        RendererBackend::Svg => SvgRenderer::new(),
    };
    let uploader = HttpUploader::new(config.upload_url.clone());

    let state = Arc::new(ApiState {
        send_notification_usecase: Arc::new(SendNotificationUseCase::new(
            channel.clone(),
            SendNotificationConfig {
                delivery_timeout: config.delivery_timeout,
            },
        )),
        send_receipt_usecase: Arc::new(SendReceiptUseCase::new(
            renderer.clone(),
            uploader,
            channel.clone(),
            SendReceiptConfig {
                delivery_timeout: config.delivery_timeout,
            },
        )),
        convert_receipt_usecase: Arc::new(ConvertReceiptUseCase::new(renderer)),
    });

    let api_service = OpenApiService::new(
        (
            Endpoints,
            NotificationsEndpoints::new(state.clone()),
            ReceiptsEndpoints::new(state),
        ),
        "Receipt Relay API",
        "0.1.0",
    )
    .server(format!("{}/api", server_url));
    let ui = api_service.swagger_ui();
    let app = Route::new().nest("/api", api_service).nest("/", ui);

    Server::new(TcpListener::bind(format!("localhost:{}", config.port)))
        .run(app)
        .await
}
