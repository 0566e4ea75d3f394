//! Generic async file-based config source.
//!
//! [`FileSource`] implements [`ConfigSource`] for any file format by
//! accepting a deserialization function at construction time. It reads
//! the file asynchronously via Tokio and hands back the `app` subtree.
//! A missing file is not an error: it simply contributes nothing.
//! [`discover`] probes a directory for `{stem}.{ext}` in the order of
//! [`EXTENSIONS`](super::EXTENSIONS).

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;

use super::take_namespace;
use crate::config::ConfigSource;
use crate::error::TemplateError;

pub type Deserializer = fn(&str) -> Result<Value, Box<dyn std::error::Error + Send + Sync>>;

pub struct FileSource {
    path: PathBuf,
    name: String,
    deserialize: Deserializer,
}

impl FileSource {
    #[must_use]
    pub fn new(path: PathBuf, deserialize: Deserializer) -> Self {
        let name = format!("file:{}", path.display());
        Self {
            path,
            name,
            deserialize,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_content(&self) -> Result<Option<String>, TemplateError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(TemplateError::Io(e)),
        }
    }
}

#[async_trait]
impl ConfigSource for FileSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn load(&self) -> Result<Option<Value>, TemplateError> {
        let Some(content) = self.read_content().await? else {
            return Ok(None);
        };

        let document = (self.deserialize)(&content).map_err(|e| TemplateError::ConfigParse {
            path: self.path.display().to_string(),
            source: e,
        })?;

        Ok(take_namespace(document))
    }
}

/// Find `{dir}/{stem}.{ext}` for the first supported extension that exists.
pub async fn discover(dir: &Path, stem: &str) -> Option<FileSource> {
    for ext in super::EXTENSIONS {
        let path = dir.join(format!("{stem}.{ext}"));
        if tokio::fs::try_exists(&path).await.unwrap_or(false) {
            return for_extension(path, ext);
        }
    }
    None
}

fn for_extension(path: PathBuf, ext: &str) -> Option<FileSource> {
    match ext {
        #[cfg(feature = "yaml")]
        "yaml" | "yml" => Some(super::yaml::new(path)),

        #[cfg(feature = "json")]
        "json" => Some(super::json::new(path)),

        #[cfg(feature = "toml")]
        "toml" => Some(super::toml_source::new(path)),

        _ => None,
    }
}
