//! Spooling uploads to disk for analyzers that only accept a file path.

use crate::error::TempUploadError;
use crate::validator::{sanitize_filename_with_limit, MAX_FILENAME_LENGTH};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

const PREFIX: &str = "facecheck-";
const RANDOM_LEN: usize = 6;
// Room left for the sanitized name once prefix, random part and '_' are added
const NAME_BUDGET: usize = MAX_FILENAME_LENGTH - PREFIX.len() - RANDOM_LEN - 1;

/// An upload written to a uniquely named file.
///
/// The file is removed when the guard is dropped, so it never outlives the
/// request that created it, whether the analysis succeeded or not.
#[derive(Debug)]
pub struct TempUpload {
    file: NamedTempFile,
}

impl TempUpload {
    /// Write `data` into a fresh file inside `dir`.
    ///
    /// The name is `facecheck-<random>_<sanitized original name>`, so two
    /// concurrent uploads with the same filename never collide.
    pub fn create(dir: &Path, original_filename: &str, data: &[u8]) -> Result<Self, TempUploadError> {
        let suffix = format!("_{}", sanitize_filename_with_limit(original_filename, NAME_BUDGET));
        let mut file = tempfile::Builder::new()
            .prefix(PREFIX)
            .rand_bytes(RANDOM_LEN)
            .suffix(&suffix)
            .tempfile_in(dir)
            .map_err(TempUploadError::Create)?;

        file.write_all(data).map_err(TempUploadError::Write)?;
        file.flush().map_err(TempUploadError::Write)?;

        tracing::debug!(path = %file.path().display(), bytes = data.len(), "Spooled upload to disk");

        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Delete the file now, reporting failures instead of ignoring them.
    pub fn close(self) -> std::io::Result<()> {
        self.file.close()
    }
}
