// Error handling for the transcription API
//
// This module defines the error types used across the service and their
// translation into HTTP responses. Every error raised in the pipeline is
// caught at the request boundary and rendered as a structured JSON body.

use std::io;
use thiserror::Error;

use actix_web::{http::StatusCode, HttpResponse, ResponseError};

use crate::models::ErrorResponse;

/// Errors that can occur while handling a transcription or download request
#[derive(Error, Debug)]
pub enum ApiError {
    /// Error when the uploaded file is not an allowed video type
    #[error("File must be a video. Received: {0}")]
    InvalidFileType(String),

    /// Error when an upload exceeds the configured size limit
    #[error("File too large: {0} bytes exceeds limit of {1} bytes")]
    FileTooLarge(usize, usize),

    /// Error when processing multipart form data
    #[error("Form error: {0}")]
    FormError(String),

    /// Error when no video file was provided in the request
    #[error("No video file provided in the request")]
    NoFile,

    /// Error when the uploaded video has no audio track
    #[error("No audio stream found in video")]
    NoAudioStream,

    /// Error when the video container cannot be opened or decoded
    #[error("Unsupported video format: {0}")]
    UnsupportedFormat(String),

    /// Error reported by the remote speech-to-text service,
    /// including network, authentication and quota failures
    #[error("Transcription service error: {0}")]
    TranscriptionService(String),

    /// Error when a requested transcription filename fails validation
    #[error("Invalid filename: {0}")]
    InvalidFilename(String),

    /// Error when a transcription file does not exist
    #[error("Transcription file not found: {0}")]
    NotFound(String),

    /// Error during local file operations
    #[error("File error: {0}")]
    File(#[from] io::Error),
}

impl ApiError {
    /// Create a new FormError
    pub fn form_error<S: Into<String>>(msg: S) -> Self {
        Self::FormError(msg.into())
    }

    /// Stable machine-parseable kind for the error body
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::InvalidFileType(_) => "invalid_file_type",
            ApiError::FileTooLarge(_, _) => "file_too_large",
            ApiError::FormError(_) => "form_error",
            ApiError::NoFile => "no_file",
            ApiError::NoAudioStream => "no_audio_stream",
            ApiError::UnsupportedFormat(_) => "unsupported_format",
            ApiError::TranscriptionService(_) => "transcription_service_error",
            ApiError::InvalidFilename(_) => "invalid_filename",
            ApiError::NotFound(_) => "not_found",
            ApiError::File(_) => "file_error",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidFileType(_)
            | ApiError::FormError(_)
            | ApiError::NoFile
            | ApiError::NoAudioStream
            | ApiError::UnsupportedFormat(_) => StatusCode::BAD_REQUEST,
            ApiError::FileTooLarge(_, _) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::InvalidFilename(_) | ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::TranscriptionService(_) => StatusCode::BAD_GATEWAY,
            ApiError::File(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.kind().to_string(),
            detail: self.to_string(),
        })
    }
}

/// Collapse transport-level failures into the upstream service error kind
impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::TranscriptionService(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_error_kinds_are_stable() {
        assert_eq!(ApiError::NoAudioStream.kind(), "no_audio_stream");
        assert_eq!(
            ApiError::TranscriptionService("boom".to_string()).kind(),
            "transcription_service_error"
        );
        assert_eq!(
            ApiError::InvalidFilename("..".to_string()).kind(),
            "invalid_filename"
        );
    }

    #[test]
    fn test_status_codes_reflect_error_kind() {
        assert_eq!(
            ApiError::InvalidFileType("text/plain".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NoAudioStream.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::FileTooLarge(10, 5).status_code(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(
            ApiError::TranscriptionService("quota exhausted".to_string()).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ApiError::InvalidFilename("../etc/passwd".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::NotFound("transcription_x.txt".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
    }
}
