// API route handlers for the transcription API
//
// This module contains the route handlers for the transcription API.
// It implements the actual HTTP endpoints for the API.

use actix_multipart::Multipart;
use actix_web::http::header::ContentDisposition;
use actix_web::{get, options, post, web, HttpResponse};
use log::info;

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::file_store::FileStore;
use crate::handlers::form::extract_upload;
use crate::logging;
use crate::models::{HealthResponse, IndexResponse, TranscribeResponse};
use crate::pipeline::TranscriptionPipeline;

const SERVICE_NAME: &str = "Transcript Recordings API";

/// Handler for transcription requests
///
/// This endpoint receives a video file as a multipart upload, runs the
/// transcription pipeline on it, and returns the name of the transcript
/// file created on disk together with the recognized text length.
#[post("/transcribe")]
pub async fn transcribe(
    form: Multipart,
    pipeline: web::Data<TranscriptionPipeline>,
    config: web::Data<AppConfig>,
) -> Result<HttpResponse, ApiError> {
    let upload = extract_upload(form, &config).await?;
    logging::api_request(
        "/transcribe",
        "POST",
        Some(&format!("File: {}", upload.filename)),
    );

    let outcome = pipeline.run(upload).await?;
    info!(
        "Transcription process completed successfully. File: {}",
        outcome.transcription_file
    );

    Ok(HttpResponse::Ok().json(TranscribeResponse {
        message: String::from("Transcription completed successfully"),
        transcription_file: outcome.transcription_file,
        text_length: outcome.text_length,
    }))
}

/// Handler for transcript downloads
///
/// The filename path segment passes File Store validation before any
/// filesystem access; invalid and unknown names both answer 404.
#[get("/download-transcription/{filename}")]
pub async fn download_transcription(
    filename: web::Path<String>,
    store: web::Data<FileStore>,
) -> Result<HttpResponse, ApiError> {
    let filename = filename.into_inner();
    logging::api_request(
        "/download-transcription/{filename}",
        "GET",
        Some(&format!("File: {}", filename)),
    );

    let path = store.resolve(&filename)?;
    let content = store.read(&path)?;
    logging::file_operation("download", &path, Some("File served successfully"));

    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .insert_header(ContentDisposition::attachment(filename))
        .body(content))
}

/// Liveness probe, no side effects
#[get("/health")]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: String::from("healthy"),
        service: String::from(SERVICE_NAME),
    })
}

/// Service banner
#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok().json(IndexResponse {
        message: String::from(SERVICE_NAME),
        version: String::from(env!("CARGO_PKG_VERSION")),
    })
}

/// Handler for OPTIONS requests to the transcription endpoint
///
/// Answers CORS pre-flight requests with the supported methods and headers
/// for the /transcribe resource.
#[options("/transcribe")]
pub async fn transcribe_options() -> HttpResponse {
    let allowed_methods = "OPTIONS, POST";

    HttpResponse::Ok()
        .append_header(("Allow", allowed_methods))
        .append_header(("Access-Control-Allow-Methods", allowed_methods))
        .append_header(("Access-Control-Allow-Headers", "Content-Type"))
        .append_header(("Access-Control-Max-Age", "86400"))
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use tempfile::TempDir;

    #[actix_web::test]
    async fn test_health_endpoint() {
        let app = test::init_service(App::new().service(health)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
    }

    #[actix_web::test]
    async fn test_index_endpoint() {
        let app = test::init_service(App::new().service(index)).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[actix_web::test]
    async fn test_download_serves_saved_transcript() {
        let dir = TempDir::new().expect("temp dir");
        let store = FileStore::new(dir.path());
        let filename = store.save("hola mundo").expect("save failed");

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store))
                .service(download_transcription),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/download-transcription/{}", filename))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body = test::read_body(resp).await;
        assert_eq!(&body[..], b"hola mundo");
    }

    #[actix_web::test]
    async fn test_download_rejects_traversal_names() {
        let dir = TempDir::new().expect("temp dir");
        let store = FileStore::new(dir.path());

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store))
                .service(download_transcription),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/download-transcription/transcription_..evil.txt")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "invalid_filename");
    }

    #[actix_web::test]
    async fn test_download_missing_file_is_not_found() {
        let dir = TempDir::new().expect("temp dir");
        let store = FileStore::new(dir.path());

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store))
                .service(download_transcription),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/download-transcription/transcription_20250101_120000.txt")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "not_found");
    }
}
