use std::path::PathBuf;

use serde::Deserialize;

#[derive(Deserialize)]
pub struct Config {
    pub storage: Storage,
}

#[derive(Deserialize)]
pub struct Storage {
    /// Directory holding one JSON document per collection.
    pub dir: PathBuf,
}
