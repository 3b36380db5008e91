// Audio extraction for the transcription API
//
// This module isolates the audio track of an uploaded video. The container
// is probed with ffprobe first, then the audio stream is written to an MP3
// file with ffmpeg. Both tools run as child processes; the source video is
// never modified.

use std::path::Path;

use log::info;
use tokio::process::Command;

use crate::error::ApiError;
use crate::logging;

/// Probe summary for the audio side of a video container
#[derive(Debug)]
struct ProbeReport {
    /// Number of audio streams in the container
    audio_streams: usize,
    /// Container duration in seconds, when reported
    duration_seconds: Option<f64>,
}

/// Extracts the audio track of a video file into a temporary MP3 file
#[derive(Clone)]
pub struct AudioExtractor;

impl AudioExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract the audio stream of `video_path` into `audio_path`
    ///
    /// # Errors
    ///
    /// `NoAudioStream` when the container holds no audio track,
    /// `UnsupportedFormat` when the container cannot be opened or decoded
    pub async fn extract(&self, video_path: &Path, audio_path: &Path) -> Result<(), ApiError> {
        let report = self.probe(video_path).await?;
        if report.audio_streams == 0 {
            return Err(ApiError::NoAudioStream);
        }

        if let Some(duration) = report.duration_seconds {
            info!("Audio duration: {} seconds", duration);
        }
        logging::file_operation("convert", audio_path, Some("Video to MP3"));

        let mut command = Command::new("ffmpeg");
        command
            .arg("-i")
            .arg(video_path)
            .args(["-vn", "-acodec", "libmp3lame", "-q:a", "2", "-f", "mp3", "-y"])
            .arg(audio_path);

        let output = command.output().await?;

        if !output.status.success() {
            return Err(ApiError::UnsupportedFormat(command_failure(&output.stderr)));
        }

        info!("Audio extraction completed successfully");
        Ok(())
    }

    /// Probe the container for audio streams and duration
    async fn probe(&self, video_path: &Path) -> Result<ProbeReport, ApiError> {
        let mut command = Command::new("ffprobe");
        command
            .args([
                "-v",
                "error",
                "-print_format",
                "json",
                "-show_format",
                "-show_streams",
                "-select_streams",
                "a",
            ])
            .arg(video_path);

        let output = command.output().await?;

        if !output.status.success() {
            return Err(ApiError::UnsupportedFormat(command_failure(&output.stderr)));
        }

        let json = String::from_utf8_lossy(&output.stdout);
        parse_probe_output(&json)
    }
}

impl Default for AudioExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse the ffprobe JSON report
fn parse_probe_output(json: &str) -> Result<ProbeReport, ApiError> {
    let data: serde_json::Value = serde_json::from_str(json)
        .map_err(|e| ApiError::UnsupportedFormat(format!("unreadable probe output: {}", e)))?;

    let audio_streams = data["streams"].as_array().map(|s| s.len()).unwrap_or(0);
    let duration_seconds = data["format"]["duration"]
        .as_str()
        .and_then(|s| s.parse().ok());

    Ok(ProbeReport {
        audio_streams,
        duration_seconds,
    })
}

/// Turn captured stderr into an error message
fn command_failure(stderr: &[u8]) -> String {
    let message = String::from_utf8_lossy(stderr).trim().to_string();
    if message.is_empty() {
        String::from("media tool exited with an error")
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_probe_with_audio_stream() {
        let json = r#"{
            "streams": [
                {"index": 1, "codec_name": "aac", "codec_type": "audio", "sample_rate": "48000", "channels": 2}
            ],
            "format": {"filename": "clip.mkv", "duration": "12.480000"}
        }"#;

        let report = parse_probe_output(json).expect("probe parse failed");
        assert_eq!(report.audio_streams, 1);
        assert_eq!(report.duration_seconds, Some(12.48));
    }

    #[test]
    fn test_parse_probe_without_audio_stream() {
        let json = r#"{"streams": [], "format": {"filename": "silent.mp4", "duration": "3.000000"}}"#;

        let report = parse_probe_output(json).expect("probe parse failed");
        assert_eq!(report.audio_streams, 0);
    }

    #[test]
    fn test_parse_probe_rejects_garbage() {
        match parse_probe_output("not json") {
            Err(ApiError::UnsupportedFormat(_)) => {}
            other => panic!("expected UnsupportedFormat, got {:?}", other),
        }
    }
}
