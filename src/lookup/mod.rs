//! Read-only query layer over the built thesaurus index.

pub mod engine;
pub mod types;

pub use engine::Thesaurus;
pub use types::{
    RelatedSynsets, RelatedWords, RelationFilter, SynonymSet, SynsetEntry, SynsetRelatives,
    SynsetRelativesDetailed, SynsetWords,
};
