//! Front-end entry-point: wires the HTML routes to the backend REST API.

use std::env;
use std::net::SocketAddr;

use actix_web::cookie::Key;
use reqwest::Url;
use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};

use frontend::server::{create_server, ServerConfig};

const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_PORT: u16 = 3000;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let key_path =
        env::var("SESSION_KEY_FILE").unwrap_or_else(|_| "/var/run/secrets/session_key".into());
    let key = match std::fs::read(&key_path) {
        Ok(bytes) => Key::derive_from(&bytes),
        Err(e) => {
            let allow_dev = env::var("SESSION_ALLOW_EPHEMERAL").ok().as_deref() == Some("1");
            if cfg!(debug_assertions) || allow_dev {
                warn!(path = %key_path, error = %e, "using temporary session key (dev only)");
                Key::generate()
            } else {
                return Err(std::io::Error::other(format!(
                    "failed to read session key at {key_path}: {e}"
                )));
            }
        }
    };

    let cookie_secure = env::var("SESSION_COOKIE_SECURE")
        .map(|v| v != "0")
        .unwrap_or(true);

    let api_base_url = env::var("API_BASE_URL")
        .unwrap_or_else(|_| DEFAULT_API_BASE_URL.into());
    let api_base_url = Url::parse(&api_base_url)
        .map_err(|e| std::io::Error::other(format!("invalid API_BASE_URL {api_base_url}: {e}")))?;

    let port = env::var("PORT")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(DEFAULT_PORT);
    let bind_addr = SocketAddr::from(([0, 0, 0, 0], port));

    let config = ServerConfig::new(key, cookie_secure, bind_addr, api_base_url);
    create_server(config)?.await
}
