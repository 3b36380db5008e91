// Form data processing for the transcription API
//
// This module handles the extraction of the uploaded video from multipart
// form data. The upload size limit is enforced while the body streams in,
// before anything touches the filesystem.

use actix_multipart::Multipart;
use futures::{StreamExt, TryStreamExt};

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::models::UploadedVideo;

/// Extract the single video file field from a multipart form
///
/// # Arguments
///
/// * `form` - The multipart form from the HTTP request
/// * `config` - Application configuration with the upload size limit
///
/// # Returns
///
/// * `Result<UploadedVideo, ApiError>` - The uploaded video, or an error
pub async fn extract_upload(
    mut form: Multipart,
    config: &AppConfig,
) -> Result<UploadedVideo, ApiError> {
    let mut upload: Option<UploadedVideo> = None;

    while let Ok(Some(mut field)) = form.try_next().await {
        let content_disposition = field.content_disposition();
        let field_name = content_disposition
            .and_then(|cd| cd.get_name().map(|name| name.to_string()))
            .unwrap_or_default();

        match field_name.as_str() {
            "file" => {
                let filename = field
                    .content_disposition()
                    .and_then(|cd| cd.get_filename().map(|name| name.to_string()))
                    .unwrap_or_else(|| String::from("unknown_file"));
                let content_type = field.content_type().map(|mime| mime.to_string());

                let mut data = Vec::new();
                while let Some(chunk) = field.next().await {
                    let chunk = chunk.map_err(|e| {
                        ApiError::form_error(format!("Error processing file upload: {}", e))
                    })?;

                    if data.len() + chunk.len() > config.max_file_size {
                        return Err(ApiError::FileTooLarge(
                            data.len() + chunk.len(),
                            config.max_file_size,
                        ));
                    }
                    data.extend_from_slice(&chunk);
                }

                upload = Some(UploadedVideo {
                    filename,
                    content_type,
                    data,
                });
            }
            _ => {
                // Skip unknown fields
                while let Some(_) = field.next().await {}
            }
        }
    }

    upload.ok_or(ApiError::NoFile)
}
