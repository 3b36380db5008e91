// Remote speech-to-text client for the transcription API
//
// This module wraps the single call to the ElevenLabs speech-to-text
// endpoint. The audio bytes are posted as a multipart form together with
// the deployment's fixed model, language and flag configuration. One call
// per request, no retries; the caller decides how to surface failures.

use std::path::Path;

use log::info;
use serde::Deserialize;

use crate::config::ScribeConfig;
use crate::error::ApiError;

/// Recognized text returned by the speech-to-text service
#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionResult {
    /// Recognized transcript text
    pub text: String,
    /// Language code echoed by the service
    #[serde(default)]
    pub language_code: Option<String>,
}

impl TranscriptionResult {
    /// Length of the recognized text in characters
    pub fn text_length(&self) -> usize {
        self.text.chars().count()
    }
}

/// Client for the ElevenLabs speech-to-text endpoint
#[derive(Clone)]
pub struct ScribeClient {
    client: reqwest::Client,
    config: ScribeConfig,
}

impl ScribeClient {
    /// Create a client for the configured endpoint
    ///
    /// No request timeout is set: the upstream call legitimately runs for
    /// seconds to tens of seconds depending on audio length, and the
    /// service's own timeout governs the call.
    pub fn new(config: ScribeConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Send an audio file to the speech-to-text endpoint
    ///
    /// # Errors
    ///
    /// `TranscriptionService` on network failure or any non-2xx response,
    /// carrying the upstream status and message
    pub async fn transcribe(&self, audio_path: &Path) -> Result<TranscriptionResult, ApiError> {
        let audio_data = tokio::fs::read(audio_path).await?;
        info!("Audio file size: {} bytes", audio_data.len());

        let file_name = audio_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| String::from("audio.mp3"));

        let form = reqwest::multipart::Form::new()
            .part(
                "file",
                reqwest::multipart::Part::bytes(audio_data)
                    .file_name(file_name)
                    .mime_str("audio/mpeg")?,
            )
            .text("model_id", self.config.model_id.clone())
            .text("language_code", self.config.language_code.clone())
            .text("diarize", self.config.diarize.to_string())
            .text("tag_audio_events", self.config.tag_audio_events.to_string());

        info!(
            "Starting transcription request: model={} language={}",
            self.config.model_id, self.config.language_code
        );

        let response = self
            .client
            .post(&self.config.api_url)
            .header("xi-api-key", &self.config.api_key)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::TranscriptionService(format!(
                "{}: {}",
                status,
                body.trim()
            )));
        }

        let result: TranscriptionResult = response.json().await?;
        info!("Transcription completed successfully");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_service_response() {
        let body = r#"{
            "language_code": "es",
            "language_probability": 0.98,
            "text": "hola mundo",
            "words": [
                {"text": "hola", "start": 0.0, "end": 0.4, "type": "word"},
                {"text": "mundo", "start": 0.5, "end": 0.9, "type": "word"}
            ]
        }"#;

        let result: TranscriptionResult =
            serde_json::from_str(body).expect("response deserialization failed");
        assert_eq!(result.text, "hola mundo");
        assert_eq!(result.language_code.as_deref(), Some("es"));
        assert_eq!(result.text_length(), 10);
    }

    #[test]
    fn test_text_length_counts_characters() {
        let result = TranscriptionResult {
            text: String::from("años"),
            language_code: None,
        };
        assert_eq!(result.text_length(), 4);
    }
}
