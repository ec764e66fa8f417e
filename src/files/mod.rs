//! Reading corpus snapshots from disk. The record store itself lives elsewhere; these are the
//! export formats it hands us.

use flate2::read::GzDecoder;
use std::{
    io::{BufRead, BufReader, Read},
    path::Path,
};

use crate::{
    error::{Error, Result},
    record::{validate_names, DrugRecord},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorpusFormat {
    /// A single JSON array of records.
    Json,
    /// One JSON record per line.
    NdJson,
}

impl CorpusFormat {
    /// Figure out the format and compression from the file name.
    pub fn detect(path: &Path) -> Option<(CorpusFormat, bool)> {
        let name = path.file_name()?.to_string_lossy().to_lowercase();
        let (name, gzipped) = match name.strip_suffix(".gz") {
            Some(stripped) => (stripped.to_string(), true),
            None => (name, false),
        };

        let format = if name.ends_with(".ndjson") || name.ends_with(".jsonl") {
            CorpusFormat::NdJson
        } else if name.ends_with(".json") {
            CorpusFormat::Json
        } else {
            return None;
        };

        Some((format, gzipped))
    }
}

/// Load every record from a `.json`, `.ndjson` or `.jsonl` file, optionally gzipped.
pub fn load_records(path: &Path) -> Result<Vec<DrugRecord>> {
    let (format, gzipped) =
        CorpusFormat::detect(path).ok_or_else(|| Error::UnsupportedFormat(path.to_path_buf()))?;

    let file = std::fs::File::open(path)?;
    let reader: Box<dyn Read> = if gzipped {
        Box::new(GzDecoder::new(file))
    } else {
        Box::new(file)
    };

    let records = read_records(BufReader::new(reader), format)?;
    tracing::info!(path = %path.display(), records = records.len(), "Loaded corpus");
    Ok(records)
}

pub fn read_records(reader: impl BufRead, format: CorpusFormat) -> Result<Vec<DrugRecord>> {
    let records = match format {
        CorpusFormat::Json => serde_json::from_reader::<_, Vec<DrugRecord>>(reader)
            .map_err(|source| Error::Json { line: source.line(), source })?,
        CorpusFormat::NdJson => reader
            .lines()
            .enumerate()
            .filter(|(_, line)| line.as_ref().map_or(true, |l| !l.trim().is_empty()))
            .map(|(idx, line)| {
                let line = line?;
                serde_json::from_str::<DrugRecord>(&line)
                    .map_err(|source| Error::Json { line: idx + 1, source })
            })
            .collect::<Result<Vec<_>>>()?,
    };

    validate_names(&records)?;
    Ok(records)
}
