// Transcription API configuration
//
// This module contains configuration structures and constants for the API.
// It centralizes all configuration parameters and provides defaults from
// environment variables. All values are read once at startup.

use std::env;

/// Default values for configuration
pub mod defaults {
    // Directory for per-request scratch files
    pub const TEMP_DIR: &str = "tmp";

    // Directory for persisted transcript files
    pub const TRANSCRIPTIONS_DIR: &str = "transcriptions";

    // Speech-to-text endpoint
    pub const API_URL: &str = "https://api.elevenlabs.io/v1/speech-to-text";

    // Speech-to-text model identifier
    pub const MODEL_ID: &str = "scribe_v1";

    // Target language for transcription
    pub const LANGUAGE_CODE: &str = "es";

    // Speaker diarization flag
    pub const DIARIZE: bool = true;

    // Non-speech audio event tagging flag
    pub const TAG_AUDIO_EVENTS: bool = true;

    // Maximum accepted upload size (2 GiB)
    pub const MAX_FILE_SIZE: usize = 2 * 1024 * 1024 * 1024;

    // Accepted video content types
    pub const ALLOWED_VIDEO_TYPES: [&str; 6] = [
        "video/mp4",
        "video/avi",
        "video/mov",
        "video/mkv",
        "video/webm",
        "video/flv",
    ];
}

/// Configuration for upload handling and storage directories
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Directory for per-request scratch folders
    pub temp_dir: String,
    /// Directory holding persisted transcript files
    pub transcriptions_dir: String,
    /// Maximum accepted upload size in bytes
    pub max_file_size: usize,
    /// Content types accepted by the upload endpoint
    pub allowed_video_types: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            temp_dir: env::var("TRANSCRIPT_TMP_FILES")
                .unwrap_or_else(|_| String::from(defaults::TEMP_DIR)),
            transcriptions_dir: env::var("TRANSCRIPTIONS_DIR")
                .unwrap_or_else(|_| String::from(defaults::TRANSCRIPTIONS_DIR)),
            max_file_size: env::var("MAX_FILE_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults::MAX_FILE_SIZE),
            allowed_video_types: env::var("ALLOWED_VIDEO_TYPES")
                .map(|s| parse_type_list(&s))
                .unwrap_or_else(|_| {
                    defaults::ALLOWED_VIDEO_TYPES
                        .iter()
                        .map(|t| t.to_string())
                        .collect()
                }),
        }
    }
}

impl AppConfig {
    /// Checks whether a declared content type is in the allow-list
    pub fn is_allowed_video_type(&self, content_type: &str) -> bool {
        self.allowed_video_types
            .iter()
            .any(|t| t.eq_ignore_ascii_case(content_type))
    }

    /// Ensures the scratch and transcription directories exist
    pub fn ensure_dirs(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.temp_dir)?;
        std::fs::create_dir_all(&self.transcriptions_dir)
    }
}

/// Configuration for the remote speech-to-text service
///
/// These values are fixed per deployment and passed through unchanged on
/// every transcription call.
#[derive(Clone, Debug)]
pub struct ScribeConfig {
    /// API credential for the transcription service
    pub api_key: String,
    /// Endpoint URL of the transcription service
    pub api_url: String,
    /// Model identifier sent with every request
    pub model_id: String,
    /// Target language code sent with every request
    pub language_code: String,
    /// Whether to request speaker diarization
    pub diarize: bool,
    /// Whether to request tagging of non-speech audio events
    pub tag_audio_events: bool,
}

impl Default for ScribeConfig {
    fn default() -> Self {
        Self {
            api_key: env::var("ELEVENLABS_API_KEY").unwrap_or_default(),
            api_url: env::var("ELEVENLABS_API_URL")
                .unwrap_or_else(|_| String::from(defaults::API_URL)),
            model_id: env::var("ELEVENLABS_MODEL_ID")
                .unwrap_or_else(|_| String::from(defaults::MODEL_ID)),
            language_code: env::var("ELEVENLABS_LANGUAGE_CODE")
                .unwrap_or_else(|_| String::from(defaults::LANGUAGE_CODE)),
            diarize: env::var("TRANSCRIPT_DIARIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults::DIARIZE),
            tag_audio_events: env::var("TRANSCRIPT_TAG_AUDIO_EVENTS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults::TAG_AUDIO_EVENTS),
        }
    }
}

impl ScribeConfig {
    /// Validates that all required configuration is present
    pub fn validate(&self) -> Result<(), String> {
        if self.api_key.trim().is_empty() {
            return Err(String::from(
                "ELEVENLABS_API_KEY environment variable is required",
            ));
        }
        Ok(())
    }
}

/// Parse a comma-separated content-type list, skipping empty entries
fn parse_type_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_type_list() {
        let types = parse_type_list("video/mp4, video/webm ,,video/mkv");
        assert_eq!(types, vec!["video/mp4", "video/webm", "video/mkv"]);
    }

    #[test]
    fn test_allowed_video_type_is_case_insensitive() {
        let config = AppConfig {
            temp_dir: String::new(),
            transcriptions_dir: String::new(),
            max_file_size: 0,
            allowed_video_types: vec![String::from("video/mp4")],
        };
        assert!(config.is_allowed_video_type("video/mp4"));
        assert!(config.is_allowed_video_type("Video/MP4"));
        assert!(!config.is_allowed_video_type("audio/mpeg"));
    }

    #[test]
    fn test_validate_rejects_missing_api_key() {
        let config = ScribeConfig {
            api_key: String::from("  "),
            api_url: String::from(defaults::API_URL),
            model_id: String::from(defaults::MODEL_ID),
            language_code: String::from(defaults::LANGUAGE_CODE),
            diarize: true,
            tag_audio_events: true,
        };
        assert!(config.validate().is_err());
    }
}
