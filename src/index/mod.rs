//! Index construction for the thesaurus.
//!
//! The builder consumes a [`RecordSource`](crate::record::RecordSource) once,
//! eagerly, and produces an immutable [`ThesaurusIndex`]. No partial index is
//! ever observable: a malformed record aborts the whole build.

pub mod builder;
pub mod types;

pub use builder::build;
pub use types::{
    Definition, IndexStats, LabelEdges, PosPartition, RelationGraph, Sense, SynsetId,
    ThesaurusIndex,
};
