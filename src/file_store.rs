// Transcript file storage for the transcription API
//
// This module owns the transcription directory. It generates
// collision-resistant transcript filenames, validates client-supplied
// filenames before any filesystem access, and reads transcript content
// back for download. Files in the directory are created once and never
// mutated afterwards.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::error::ApiError;
use crate::logging;

/// Filename prefix for persisted transcripts
const TRANSCRIPT_PREFIX: &str = "transcription_";

/// Extension required on every transcript filename
const TRANSCRIPT_EXTENSION: &str = ".txt";

/// Store for persisted transcript files
#[derive(Clone, Debug)]
pub struct FileStore {
    /// Directory holding the transcript files
    dir: PathBuf,
}

impl FileStore {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    /// Persist transcript text under a freshly generated filename
    ///
    /// The filename carries the current timestamp with second granularity.
    /// When two saves land in the same second, later ones get a numeric
    /// suffix; `create_new` makes the claim atomic, so concurrent writers
    /// never overwrite each other's content.
    ///
    /// # Returns
    ///
    /// The generated filename, relative to the transcription directory
    pub fn save(&self, text: &str) -> Result<String, ApiError> {
        let stamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
        self.save_with_stamp(text, &stamp)
    }

    fn save_with_stamp(&self, text: &str, stamp: &str) -> Result<String, ApiError> {
        fs::create_dir_all(&self.dir)?;

        let mut attempt: u32 = 0;
        loop {
            let filename = if attempt == 0 {
                format!("{}{}{}", TRANSCRIPT_PREFIX, stamp, TRANSCRIPT_EXTENSION)
            } else {
                format!(
                    "{}{}_{}{}",
                    TRANSCRIPT_PREFIX, stamp, attempt, TRANSCRIPT_EXTENSION
                )
            };
            let path = self.dir.join(&filename);

            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(mut file) => {
                    file.write_all(text.as_bytes())?;
                    logging::file_operation("save", &path, Some("Transcription result"));
                    return Ok(filename);
                }
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                    attempt += 1;
                }
                Err(e) => return Err(ApiError::File(e)),
            }
        }
    }

    /// Validate a client-supplied filename and resolve it inside the store
    ///
    /// # Errors
    ///
    /// `InvalidFilename` when validation fails, `NotFound` when the
    /// resolved file does not exist
    pub fn resolve(&self, filename: &str) -> Result<PathBuf, ApiError> {
        validate_filename(filename)?;

        let path = self.dir.join(filename);
        if !path.is_file() {
            return Err(ApiError::NotFound(filename.to_string()));
        }
        Ok(path)
    }

    /// Read transcript content for download
    ///
    /// # Errors
    ///
    /// `NotFound` if the file was removed between resolve and read
    pub fn read(&self, path: &Path) -> Result<String, ApiError> {
        fs::read_to_string(path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                ApiError::NotFound(path.display().to_string())
            } else {
                ApiError::File(e)
            }
        })
    }
}

/// Reject filenames that are empty, carry path segments, or miss the
/// transcript extension
fn validate_filename(filename: &str) -> Result<(), ApiError> {
    if filename.is_empty() {
        return Err(ApiError::InvalidFilename(String::from("empty filename")));
    }
    if filename.contains('/') || filename.contains('\\') {
        return Err(ApiError::InvalidFilename(filename.to_string()));
    }
    if filename.contains("..") {
        return Err(ApiError::InvalidFilename(filename.to_string()));
    }
    if !filename.ends_with(TRANSCRIPT_EXTENSION) {
        return Err(ApiError::InvalidFilename(filename.to_string()));
    }
    Ok(())
}
