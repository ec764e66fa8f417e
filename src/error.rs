use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid record JSON at line {line}: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Record {index} has an empty name")]
    EmptyName { index: usize },

    #[error("Unsupported corpus file {0}, expected .json, .ndjson or .jsonl (optionally .gz)")]
    UnsupportedFormat(PathBuf),

    #[error("Failed to build term index: {0}")]
    Fst(#[from] fst::Error),

    #[error("Invalid configuration in {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
