use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::streak::DEFAULT_WINDOW;
use crate::transition::DEFAULT_TOP_TRANSITIONS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Taille de la fenêtre des séries récentes.
    pub window: usize,
    /// Nombre de transitions retenues.
    pub top_transitions: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            top_transitions: DEFAULT_TOP_TRANSITIONS,
        }
    }
}

impl AnalysisConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("lecture impossible : {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON invalide : {0}")]
    Json(#[from] serde_json::Error),
}
