// Transcription API data models
//
// This module contains the data models used for the transcription API.
// It includes request and response types used across the API.

use serde::Serialize;

/// Response for a successful transcription request
#[derive(Serialize)]
pub struct TranscribeResponse {
    /// Human-readable completion message
    pub message: String,
    /// Name of the transcript file created on disk
    pub transcription_file: String,
    /// Number of characters in the recognized text
    pub text_length: usize,
}

/// Error response for API
#[derive(Serialize)]
pub struct ErrorResponse {
    /// Machine-parseable error kind
    pub error: String,
    /// Human-readable error message
    pub detail: String,
}

/// Response for the liveness probe
#[derive(Serialize)]
pub struct HealthResponse {
    /// Service status, always "healthy" when the process answers
    pub status: String,
    /// Service name
    pub service: String,
}

/// Response for the root endpoint
#[derive(Serialize)]
pub struct IndexResponse {
    /// Service banner
    pub message: String,
    /// Crate version
    pub version: String,
}

/// A video file received through the upload endpoint
///
/// Owned by the pipeline for the duration of one request. The raw bytes are
/// written to a scratch folder before processing and never persisted.
#[derive(Debug)]
pub struct UploadedVideo {
    /// Original filename as declared by the client, for logging only
    pub filename: String,
    /// Declared content type of the upload, if any
    pub content_type: Option<String>,
    /// Raw file content
    pub data: Vec<u8>,
}
