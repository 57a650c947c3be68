//! Endpoint store persisted as a JSON document.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::{Deserialize, Serialize};
use std::io;
use tracing::warn;

use crate::scm_server::{
    domain::Endpoint,
    ports::{EndpointStore, EndpointStoreError, EndpointStoreResult},
};

/// On-disk document layout.
#[derive(Debug, Default, Serialize, Deserialize)]
struct EndpointDocument {
    #[serde(default)]
    endpoints: Vec<Endpoint>,
}

/// Endpoint store backed by a JSON file inside a capability directory.
///
/// The document is read once on open. `save` writes a sibling temporary file
/// and renames it over the document so readers never see a torn write.
#[derive(Debug)]
pub struct JsonFileEndpointStore {
    dir: Dir,
    file_name: Utf8PathBuf,
    endpoints: Vec<Endpoint>,
}

impl JsonFileEndpointStore {
    /// Opens the store at `dir_path/document_name`.
    ///
    /// A missing document is treated as an empty store.
    ///
    /// # Errors
    ///
    /// Returns [`EndpointStoreError::Persistence`] when the directory or file
    /// cannot be read, or [`EndpointStoreError::InvalidStoredData`] when the
    /// document is not valid JSON of the expected shape.
    pub fn open(
        dir_path: impl AsRef<Utf8Path>,
        document_name: impl Into<Utf8PathBuf>,
    ) -> EndpointStoreResult<Self> {
        let dir = Dir::open_ambient_dir(dir_path.as_ref(), ambient_authority())
            .map_err(EndpointStoreError::persistence)?;
        let file_name = document_name.into();
        let endpoints = load_endpoints(&dir, &file_name)?;
        Ok(Self {
            dir,
            file_name,
            endpoints,
        })
    }

    /// Returns the document file name.
    #[must_use]
    pub fn file_name(&self) -> &Utf8Path {
        &self.file_name
    }
}

fn load_endpoints(dir: &Dir, file_name: &Utf8Path) -> EndpointStoreResult<Vec<Endpoint>> {
    match dir.read_to_string(file_name) {
        Ok(contents) => serde_json::from_str::<EndpointDocument>(&contents)
            .map(|document| document.endpoints)
            .map_err(EndpointStoreError::invalid_stored_data),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(err) => Err(EndpointStoreError::persistence(err)),
    }
}

impl EndpointStore for JsonFileEndpointStore {
    fn endpoints(&self) -> &[Endpoint] {
        &self.endpoints
    }

    fn set_endpoints(&mut self, endpoints: Vec<Endpoint>) {
        self.endpoints = endpoints;
    }

    fn save(&mut self) -> EndpointStoreResult<()> {
        let document = EndpointDocument {
            endpoints: self.endpoints.clone(),
        };
        let contents =
            serde_json::to_string_pretty(&document).map_err(EndpointStoreError::persistence)?;
        let staging = Utf8PathBuf::from(format!("{}.tmp", self.file_name));
        self.dir
            .write(&staging, contents)
            .map_err(EndpointStoreError::persistence)?;
        self.dir
            .rename(&staging, &self.dir, &self.file_name)
            .map_err(|err| {
                if let Err(cleanup) = self.dir.remove_file(&staging) {
                    warn!(file = %staging, error = %cleanup, "failed to remove staging file");
                }
                EndpointStoreError::persistence(err)
            })
    }
}
