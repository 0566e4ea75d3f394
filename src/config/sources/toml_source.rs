//! TOML config source backed by [`FileSource`].

use std::path::PathBuf;

use super::file_source::FileSource;

#[must_use]
pub fn new(path: PathBuf) -> FileSource {
    FileSource::new(path, |content| {
        toml::from_str::<serde_json::Value>(content)
            .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)
    })
}
