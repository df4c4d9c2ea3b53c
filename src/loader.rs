use std::path::{Path, PathBuf};

use crate::models::Person;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The data file could not be read
    #[error("Could not read data file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The content is not a JSON array of person records
    #[error("Could not parse data file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub async fn load_persons(path: &Path) -> Result<Vec<Person>, LoadError> {
    tracing::info!("Loading persons from {}", path.display());

    let data = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let persons: Vec<Person> = serde_json::from_str(&data).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!("Loaded {} root records", persons.len());

    Ok(persons)
}
