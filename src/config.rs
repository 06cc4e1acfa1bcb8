use std::env::var;
use std::time::Duration;

use dotenvy::dotenv;

use crate::application::services::delivery::DEFAULT_DELIVERY_TIMEOUT;
use crate::application::services::renderer::RendererBackend;

pub struct Config {
    pub port: u16,
    pub scheme: String,
    pub host: String,
    pub delivery_timeout: Duration,
    pub render_backend: RendererBackend,
    pub renderer_url: Option<String>,
    pub upload_url: String,
}

impl Config {
    pub fn try_parse() -> Result<Config, &'static str> {
        let _ = dotenv();

        let delivery_timeout = match var("DELIVERY_TIMEOUT_MS") {
            Ok(raw) => Duration::from_millis(
                raw.parse::<u64>()
                    .map_err(|_| "An error occured while parsing DELIVERY_TIMEOUT_MS env param")?,
            ),
            Err(_) => DEFAULT_DELIVERY_TIMEOUT,
        };

        let render_backend = match var("RENDER_BACKEND") {
            Ok(raw) => RendererBackend::parse(&raw)
                .ok_or("An error occured while parsing RENDER_BACKEND env param")?,
            Err(_) => RendererBackend::Svg,
        };

        let renderer_url = var("RENDERER_URL").ok();
        if render_backend == RendererBackend::Remote && renderer_url.is_none() {
            return Err("RENDERER_URL env param is required for the remote render backend");
        }

        Ok(Config {
            port: var("PORT")
                .map_err(|_| "An error occured while getting PORT env param")?
                .parse::<u16>()
                .map_err(|_| "An error occured while parsing PORT env param")?,
            scheme: var("SCHEME").map_err(|_| "An error occured while getting SCHEME env param")?,
            host: var("HOST").map_err(|_| "An error occured while getting HOST env param")?,
            delivery_timeout,
            render_backend,
            renderer_url,
            upload_url: var("UPLOAD_URL")
                .map_err(|_| "An error occured while getting UPLOAD_URL env param")?,
        })
    }
}
