// Transcription API Library
//
// This crate provides an HTTP API for transcribing uploaded video
// recordings. Audio is extracted from the video with ffmpeg, sent to an
// external speech-to-text service, and the resulting transcript is stored
// on disk for later download.

pub mod audio;
pub mod config;
pub mod config_loader;
pub mod error;
pub mod file_store;
pub mod file_utils;
pub mod handlers;
pub mod logging;
pub mod models;
pub mod pipeline;
pub mod transcription;

// Re-export common types for easier access
pub use config::{AppConfig, ScribeConfig};
pub use error::ApiError;
pub use file_store::FileStore;
pub use handlers::{download_transcription, health, index, transcribe, transcribe_options};
pub use models::{ErrorResponse, TranscribeResponse, UploadedVideo};
pub use pipeline::{PipelineOutcome, TranscriptionPipeline};
pub use transcription::{ScribeClient, TranscriptionResult};
