pub mod config;
pub mod correct;
pub mod corpus;
pub mod error;
pub mod files;
pub mod index;
pub mod matcher;
pub mod normalize;
pub mod record;
pub mod resolve;
pub mod stats;
pub mod suggest;

pub use config::{CorrectionPolicy, LookupConfig};
pub use correct::Correction;
pub use corpus::{Corpus, DrugLookup};
pub use error::{Error, Result};
pub use index::IndexedCorpus;
pub use record::{Composition, DrugRecord, Field};
pub use resolve::{resolve, Resolution};
