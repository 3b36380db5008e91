// HTTP handlers for the transcription API
//
// This module contains the HTTP handlers for the transcription API.
// It provides the interface between HTTP requests and the pipeline.

pub mod form;
pub mod routes;

// Re-export handlers for easier access
pub use self::routes::{download_transcription, health, index, transcribe, transcribe_options};
