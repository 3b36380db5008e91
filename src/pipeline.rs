// Transcription pipeline for the transcription API
//
// This module drives one uploaded video through the full sequence: content
// type validation, scratch persistence, audio extraction, the remote
// speech-to-text call, and transcript persistence. The steps are strictly
// sequential within a request. The scratch folder holding the temporary
// video and audio files is removed on every exit path by its drop guard,
// so no failure mode leaves temporary files behind, and no failure mode
// writes a partial transcript.

use log::info;

use crate::audio::AudioExtractor;
use crate::config::{AppConfig, ScribeConfig};
use crate::error::ApiError;
use crate::file_store::FileStore;
use crate::file_utils::ScratchDir;
use crate::logging;
use crate::models::UploadedVideo;
use crate::transcription::ScribeClient;

/// Result of one successful pipeline pass
#[derive(Debug)]
pub struct PipelineOutcome {
    /// Name of the transcript file created in the transcription directory
    pub transcription_file: String,
    /// Number of characters in the recognized text
    pub text_length: usize,
}

/// Orchestrates upload -> audio extraction -> transcription -> persistence
#[derive(Clone)]
pub struct TranscriptionPipeline {
    config: AppConfig,
    extractor: AudioExtractor,
    client: ScribeClient,
    store: FileStore,
}

impl TranscriptionPipeline {
    pub fn new(config: AppConfig, scribe: ScribeConfig, store: FileStore) -> Self {
        Self {
            config,
            extractor: AudioExtractor::new(),
            client: ScribeClient::new(scribe),
            store,
        }
    }

    /// Run the full pipeline for one uploaded video
    ///
    /// Exactly one transcript file is created on success, zero on any
    /// failure. Temporary files never outlive the call.
    pub async fn run(&self, upload: UploadedVideo) -> Result<PipelineOutcome, ApiError> {
        logging::transcription_start(&upload.filename);

        let result = self.process(&upload).await;
        match &result {
            Ok(outcome) => {
                logging::transcription_success(&outcome.transcription_file, outcome.text_length)
            }
            Err(e) => logging::transcription_error(&upload.filename, &e.to_string()),
        }
        result
    }

    async fn process(&self, upload: &UploadedVideo) -> Result<PipelineOutcome, ApiError> {
        self.check_content_type(upload.content_type.as_deref())?;

        // The guard removes the folder with both temporary files when this
        // function returns, on success and on every error path
        let scratch = ScratchDir::create(&self.config.temp_dir)?;

        scratch.save_video(&upload.data)?;
        logging::file_operation(
            "save",
            scratch.video_file(),
            Some(&format!("Size: {} bytes", upload.data.len())),
        );

        info!("Request {}: extracting audio", scratch.id());
        self.extractor
            .extract(scratch.video_file(), scratch.audio_file())
            .await?;

        let transcription = self.client.transcribe(scratch.audio_file()).await?;

        let text_length = transcription.text_length();
        let transcription_file = self.store.save(&transcription.text)?;

        Ok(PipelineOutcome {
            transcription_file,
            text_length,
        })
    }

    /// Validate the declared content type against the allow-list
    fn check_content_type(&self, content_type: Option<&str>) -> Result<(), ApiError> {
        match content_type {
            Some(ct) if self.config.is_allowed_video_type(ct) => Ok(()),
            Some(ct) => Err(ApiError::InvalidFileType(ct.to_string())),
            None => Err(ApiError::InvalidFileType(String::from("unknown"))),
        }
    }
}
