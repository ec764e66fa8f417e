use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// When the resolution flow should compute a "did you mean" correction.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum CorrectionPolicy {
    /// Correct whenever prefix suggestions come back empty, regardless of substring matches.
    #[default]
    NoSuggestions,
    /// Correct only when the substring search finds nothing.
    NoMatches,
    /// Correct when either suggestions or matches are empty.
    Either,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LookupConfig {
    /// The number of suggestions returned when the caller does not ask for a specific limit.
    pub suggestion_limit: usize,
    /// Queries longer than this are truncated before correction, which bounds the edit distance
    /// work. Search and suggest always use the full query.
    pub max_query_chars: usize,
    pub correction_policy: CorrectionPolicy,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            suggestion_limit: 10,
            max_query_chars: 64,
            correction_policy: CorrectionPolicy::default(),
        }
    }
}

impl LookupConfig {
    /// Read a JSON config file. Missing keys take their default values.
    pub fn from_path(path: &Path) -> Result<LookupConfig> {
        let contents = std::fs::read_to_string(path)?;
        serde_json::from_str(&contents).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}
