use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;
use log::{error, info, warn};

// Import our modules
mod audio;
mod config;
mod config_loader;
mod error;
mod file_store;
mod file_utils;
mod handlers;
mod logging;
mod models;
mod pipeline;
mod transcription;

// Import the types we need
use config::{AppConfig, ScribeConfig};
use file_store::FileStore;
use handlers::{download_transcription, health, index, transcribe, transcribe_options};
use pipeline::TranscriptionPipeline;

const DEFAULT_TRANSCRIPT_API_HOST: &str = "127.0.0.1";
const DEFAULT_TRANSCRIPT_API_PORT: &str = "8000";
const DEFAULT_TRANSCRIPT_API_TIMEOUT: u64 = 480;
const DEFAULT_TRANSCRIPT_API_KEEPALIVE: u64 = 480;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    // Promote config file values into the environment, env vars win
    config_loader::load_config();

    // Load configurations
    let app_config = AppConfig::default();
    let scribe_config = ScribeConfig::default();
    if let Err(e) = scribe_config.validate() {
        error!("Configuration error: {}", e);
        return Err(std::io::Error::other(e));
    }
    info!("Configuration validated successfully");

    // Create working directories if they don't exist
    if let Err(e) = app_config.ensure_dirs() {
        warn!("Failed to create working directories: {}", e);
    }

    // Build the shared pipeline and transcript store
    let store = FileStore::new(&app_config.transcriptions_dir);
    let transcription_pipeline =
        TranscriptionPipeline::new(app_config.clone(), scribe_config, store.clone());

    // Server settings
    let host = std::env::var("TRANSCRIPT_API_HOST")
        .unwrap_or_else(|_| DEFAULT_TRANSCRIPT_API_HOST.to_string());
    let port = std::env::var("TRANSCRIPT_API_PORT")
        .unwrap_or_else(|_| DEFAULT_TRANSCRIPT_API_PORT.to_string());
    let timeout = std::time::Duration::from_secs(
        std::env::var("TRANSCRIPT_API_TIMEOUT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TRANSCRIPT_API_TIMEOUT),
    );
    let keep_alive = std::time::Duration::from_secs(
        std::env::var("TRANSCRIPT_API_KEEPALIVE")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TRANSCRIPT_API_KEEPALIVE),
    );

    info!("Starting transcription API server on http://{}:{}", host, port);
    info!("Using temp directory: {}", app_config.temp_dir);
    info!(
        "Using transcriptions directory: {}",
        app_config.transcriptions_dir
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(transcription_pipeline.clone()))
            .app_data(web::Data::new(app_config.clone()))
            .app_data(web::Data::new(store.clone()))
            .service(transcribe)
            .service(transcribe_options)
            .service(download_transcription)
            .service(health)
            .service(index)
    })
    .bind(format!("{}:{}", host, port))?
    .client_disconnect_timeout(timeout)
    .keep_alive(keep_alive)
    .run()
    .await
}
