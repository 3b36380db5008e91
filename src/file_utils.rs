// File utilities for the transcription API
//
// This module manages the per-request scratch folders that hold the uploaded
// video and the extracted audio while a request is being processed. The
// folder is removed when the guard is dropped, on success and on every
// error path alike.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::{error, info};
use uuid::Uuid;

/// Scratch folder for one transcription request
///
/// Holds the temporary video and audio file paths for a single request.
/// Dropping the guard deletes the folder and everything inside it.
#[derive(Debug)]
pub struct ScratchDir {
    /// Unique folder for this request
    folder: PathBuf,
    /// Path for the uploaded video inside the folder
    video_file: PathBuf,
    /// Path for the extracted audio inside the folder
    audio_file: PathBuf,
    /// Request ID (UUID)
    id: String,
}

impl ScratchDir {
    /// Create a uniquely named scratch folder under the base directory
    ///
    /// # Errors
    ///
    /// Returns an IO error if directory creation fails
    pub fn create(base_dir: &str) -> io::Result<Self> {
        let id = Uuid::new_v4().to_string();
        let folder = Path::new(base_dir).join(&id);
        fs::create_dir_all(&folder)?;

        let video_file = folder.join(format!("upload_{}.video", id));
        let audio_file = folder.join(format!("audio_{}.mp3", id));

        Ok(Self {
            folder,
            video_file,
            audio_file,
            id,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn video_file(&self) -> &Path {
        &self.video_file
    }

    pub fn audio_file(&self) -> &Path {
        &self.audio_file
    }

    /// Write the uploaded video bytes into the scratch folder
    pub fn save_video(&self, data: &[u8]) -> io::Result<()> {
        save_file_data(data, &self.video_file)
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        cleanup_folder(&self.folder);
    }
}

/// Save raw file data to the filesystem
pub fn save_file_data(data: &[u8], file_path: &Path) -> io::Result<()> {
    let mut file = File::create(file_path)?;
    file.write_all(data)?;
    Ok(())
}

/// Remove a folder and its contents
///
/// This function logs errors but doesn't return them to the caller
fn cleanup_folder(folder_path: &Path) {
    if let Err(e) = fs::remove_dir_all(folder_path) {
        error!("Failed to clean up folder {}: {}", folder_path.display(), e);
    } else {
        info!("Cleaned up scratch folder: {}", folder_path.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_scratch_dir_is_removed_on_drop() {
        let base = TempDir::new().expect("Failed to create temp base dir");
        let base_path = base.path().to_str().expect("utf-8 path").to_string();

        let folder = {
            let scratch = ScratchDir::create(&base_path).expect("Failed to create scratch dir");
            scratch.save_video(b"fake video bytes").expect("write video");
            fs::write(scratch.audio_file(), b"fake audio bytes").expect("write audio");
            assert!(scratch.video_file().exists());
            assert!(scratch.audio_file().exists());
            scratch.folder.clone()
        };

        // Guard dropped: folder and both files are gone
        assert!(!folder.exists());
    }

    #[test]
    fn test_scratch_dirs_are_distinct() {
        let base = TempDir::new().expect("Failed to create temp base dir");
        let base_path = base.path().to_str().expect("utf-8 path").to_string();

        let a = ScratchDir::create(&base_path).expect("scratch a");
        let b = ScratchDir::create(&base_path).expect("scratch b");
        assert_ne!(a.id(), b.id());
        assert_ne!(a.video_file(), b.video_file());
    }
}
