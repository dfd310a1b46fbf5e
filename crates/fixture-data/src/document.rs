//! The assembled seed document and its serialization.
//!
//! The document is a single JSON object mapping the seven collection names
//! onto the record sequences produced by the generation stages. Collection
//! names match the downstream database tables and must not be renamed.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use serde::{Deserialize, Serialize};

use crate::atomic_io::write_atomic;
use crate::error::WriteError;
use crate::records::{ApiKey, Company, Device, Reading, Site, User, UserGroup};

/// The complete seed document, one field per database table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedDocument {
    /// Company roster.
    pub master_perusahaan: Vec<Company>,
    /// Monitoring sites.
    pub master_site: Vec<Site>,
    /// Sensor devices.
    pub master_device: Vec<Device>,
    /// Realtime sensor readings.
    pub data_realtime: Vec<Reading>,
    /// Per-company API keys.
    pub api_keys: Vec<ApiKey>,
    /// Per-company login accounts.
    pub users: Vec<User>,
    /// Group memberships for the login accounts.
    pub users_groups: Vec<UserGroup>,
}

impl SeedDocument {
    /// Serializes the document as pretty-printed JSON (two-space indent).
    ///
    /// # Errors
    ///
    /// Returns [`WriteError::Serialize`] if serialization fails; with the
    /// fixed record types this indicates a serializer defect rather than bad
    /// data.
    pub fn to_json(&self) -> Result<String, WriteError> {
        serde_json::to_string_pretty(self).map_err(|err| WriteError::Serialize {
            message: err.to_string(),
        })
    }

    /// Writes the document to `path`, replacing any previous file atomically.
    ///
    /// The parent directory must already exist; the write itself goes through
    /// a temp-file-and-rename so a failed run never leaves a partial
    /// document behind.
    ///
    /// # Errors
    ///
    /// Returns [`WriteError`] if the path does not name a file, the parent
    /// directory cannot be opened, or the write fails.
    pub fn write_to_file(&self, path: &Utf8Path) -> Result<(), WriteError> {
        let json = self.to_json()?;
        let file_name = path.file_name().ok_or_else(|| WriteError::InvalidPath {
            path: path.to_path_buf(),
        })?;
        let parent = path
            .parent()
            .filter(|dir| !dir.as_str().is_empty())
            .unwrap_or_else(|| Utf8Path::new("."));
        let dir = Dir::open_ambient_dir(parent.as_std_path(), ambient_authority()).map_err(
            |err| WriteError::Io {
                path: parent.to_path_buf(),
                message: err.to_string(),
            },
        )?;
        write_atomic(&dir, file_name, &json)
    }
}
