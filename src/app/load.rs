//! JSON input files for the CLI.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::domain::{CandidateProfile, RequesterProfile};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub fn load_requester(path: &Path) -> Result<RequesterProfile, LoadError> {
    read_json(path)
}

pub fn load_candidates(path: &Path) -> Result<Vec<CandidateProfile>, LoadError> {
    let candidates: Vec<CandidateProfile> = read_json(path)?;
    tracing::info!(path = %path.display(), count = candidates.len(), "candidates loaded");
    Ok(candidates)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}
