use std::{
    cell::RefCell, collections::HashMap, fs, io, path::PathBuf, rc::Rc,
};

use derive_more::From;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::config;

/// Version stamped into every written collection payload.
pub const SCHEMA_VERSION: u32 = 1;

/// Key-value persistence capability: one serialized payload per
/// collection key. Injected into [`crate::db::Client`] so tests can swap
/// in an in-memory backing.
pub trait Store {
    fn read(&self, collection: &str) -> Result<Option<String>, Error>;

    fn write(&self, collection: &str, payload: &str) -> Result<(), Error>;
}

#[derive(Debug, From)]
pub enum Error {
    #[from]
    Io(io::Error),
    #[from]
    Json(serde_json::Error),
}

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
struct Envelope<T> {
    schema_version: u32,
    records: T,
}

/// Decodes a collection payload.
///
/// Accepts the versioned envelope or, as a legacy layout, a bare JSON
/// array. A malformed payload is reported as an integrity error and
/// falls back to an empty collection instead of failing the operation.
pub(crate) fn decode<T: DeserializeOwned>(
    collection: &str,
    payload: Option<&str>,
) -> Vec<T> {
    let Some(payload) = payload else {
        return Vec::new();
    };

    if let Ok(envelope) = serde_json::from_str::<Envelope<Vec<T>>>(payload) {
        if envelope.schema_version != SCHEMA_VERSION {
            tracing::warn!(
                collection,
                version = envelope.schema_version,
                "unexpected collection schema version"
            );
        }
        return envelope.records;
    }

    // Pre-versioning layout.
    if let Ok(records) = serde_json::from_str::<Vec<T>>(payload) {
        return records;
    }

    tracing::error!(
        collection,
        "corrupt collection payload, falling back to an empty collection"
    );
    Vec::new()
}

pub(crate) fn encode<T: Serialize>(records: &[T]) -> Result<String, Error> {
    Ok(serde_json::to_string(&Envelope {
        schema_version: SCHEMA_VERSION,
        records,
    })?)
}

/// File-backed store: one JSON document per collection under the
/// configured directory. Stands in for the browser-local storage the
/// portal originally persisted to.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(config: &config::Storage) -> Result<Self, Error> {
        fs::create_dir_all(&config.dir)?;
        Ok(Self {
            dir: config.dir.clone(),
        })
    }

    fn path(&self, collection: &str) -> PathBuf {
        self.dir.join(format!("{collection}.json"))
    }
}

impl Store for FileStore {
    fn read(&self, collection: &str) -> Result<Option<String>, Error> {
        match fs::read_to_string(self.path(collection)) {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, collection: &str, payload: &str) -> Result<(), Error> {
        Ok(fs::write(self.path(collection), payload)?)
    }
}

/// In-memory store for tests. Clones share the same backing map, so a
/// test can keep a handle to inspect payloads written through a client.
#[derive(Clone, Default)]
pub struct MemoryStore(Rc<RefCell<HashMap<String, String>>>);

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn read(&self, collection: &str) -> Result<Option<String>, Error> {
        Ok(self.0.borrow().get(collection).cloned())
    }

    fn write(&self, collection: &str, payload: &str) -> Result<(), Error> {
        self.0
            .borrow_mut()
            .insert(collection.to_string(), payload.to_string());
        Ok(())
    }
}
