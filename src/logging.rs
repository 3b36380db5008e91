// Event logging for the transcription API
//
// This module provides a narrow logging interface with one function per
// event kind. The pipeline and handlers depend only on these functions,
// not on any concrete logging implementation.

use std::path::Path;

use log::{error, info};

/// Log the start of a transcription process
pub fn transcription_start(filename: &str) {
    info!("Starting transcription process for file: {}", filename);
}

/// Log successful transcription completion
pub fn transcription_success(filename: &str, text_length: usize) {
    info!(
        "Transcription completed successfully for {}. Text length: {} characters",
        filename, text_length
    );
}

/// Log a transcription failure
pub fn transcription_error(filename: &str, error: &str) {
    error!("Transcription failed for {}: {}", filename, error);
}

/// Log a file operation
pub fn file_operation(operation: &str, path: &Path, details: Option<&str>) {
    match details {
        Some(details) => info!(
            "File operation '{}': {} - {}",
            operation,
            path.display(),
            details
        ),
        None => info!("File operation '{}': {}", operation, path.display()),
    }
}

/// Log an incoming API request
pub fn api_request(endpoint: &str, method: &str, details: Option<&str>) {
    match details {
        Some(details) => info!("API {} request to {} - {}", method, endpoint, details),
        None => info!("API {} request to {}", method, endpoint),
    }
}
