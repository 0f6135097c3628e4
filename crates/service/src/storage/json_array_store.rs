use std::{
    io,
    marker::PhantomData,
    path::{Path, PathBuf},
};

use configs::JsonLayout;
use serde::{de::DeserializeOwned, Serialize};
use tokio::fs;
use tracing::{debug, error, warn};

use crate::errors::ServiceError;

/// Generic JSON file-backed array store.
///
/// The whole file is one JSON array. `load` reads and parses all of it,
/// `save` serializes and overwrites all of it. There is no cache, no lock and
/// no atomic replace, so two concurrent read-modify-write cycles can lose an
/// update.
#[derive(Debug, Clone)]
pub struct JsonArrayStore<T> {
    file_path: PathBuf,
    layout: JsonLayout,
    _records: PhantomData<fn() -> T>,
}

impl<T> JsonArrayStore<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Initialize the store from a path. Writes `[]` if the file is missing;
    /// an existing file is left alone whatever it contains.
    pub async fn open<P: Into<PathBuf>>(path: P, layout: JsonLayout) -> Result<Self, ServiceError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.ok();
        }

        if fs::metadata(&file_path).await.is_err() {
            fs::write(&file_path, b"[]")
                .await
                .map_err(|e| ServiceError::Storage(format!("{}: {e}", file_path.display())))?;
            debug!(path = %file_path.display(), "created empty record file");
        }

        Ok(Self { file_path, layout, _records: PhantomData })
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Read every record. Unreadable or malformed files read as empty.
    pub async fn load(&self) -> Vec<T> {
        let bytes = match fs::read(&self.file_path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.file_path.display(), "record file missing; reading as empty");
                return Vec::new();
            }
            Err(e) => {
                warn!(path = %self.file_path.display(), error = %e, "record file unreadable; reading as empty");
                return Vec::new();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(records) => records,
            Err(e) => {
                warn!(path = %self.file_path.display(), error = %e, "record file malformed; reading as empty");
                Vec::new()
            }
        }
    }

    /// Overwrite the file with `records`. Returns `false` on any failure.
    pub async fn save(&self, records: &[T]) -> bool {
        let data = match self.encode(records) {
            Ok(data) => data,
            Err(e) => {
                error!(path = %self.file_path.display(), error = %e, "error serializing records");
                return false;
            }
        };
        match fs::write(&self.file_path, data).await {
            Ok(()) => true,
            Err(e) => {
                error!(path = %self.file_path.display(), error = %e, "error saving data");
                false
            }
        }
    }

    fn encode(&self, records: &[T]) -> serde_json::Result<Vec<u8>> {
        match self.layout {
            JsonLayout::Compact => serde_json::to_vec(records),
            JsonLayout::Pretty => {
                let mut buf = Vec::new();
                let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
                let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
                records.serialize(&mut ser)?;
                Ok(buf)
            }
        }
    }
}
