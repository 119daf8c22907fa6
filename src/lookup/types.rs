//! Result types for lookup operations.
//!
//! Every type here is an owned snapshot of index data in query order, and
//! serializes to the same JSON shapes the thesaurus tooling around this
//! library expects (synset_id / synonyms / name keys and relation maps).

use serde::{Deserialize, Serialize};

use crate::index::{Definition, SynsetId};

/// Which relation labels an expansion should include.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RelationFilter {
    /// Every label present on the synset.
    #[default]
    All,
    /// Only the listed labels. Requested labels absent from the data are
    /// silently omitted; an empty list selects nothing.
    Only(Vec<String>),
}

impl RelationFilter {
    /// Filter down to the given labels.
    pub fn only<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RelationFilter::Only(labels.into_iter().map(Into::into).collect())
    }

    /// Whether a relation label passes this filter.
    pub fn matches(&self, label: &str) -> bool {
        match self {
            RelationFilter::All => true,
            RelationFilter::Only(labels) => labels.iter().any(|l| l == label),
        }
    }
}

/// A synset paired with its definition (empty if none was recorded).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynsetEntry {
    /// Synset id.
    pub synset_id: SynsetId,
    /// Stored definition, or `Definition::default()` when absent.
    pub definition: Definition,
}

/// Synonyms of a word within one of its synsets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynonymSet {
    /// Synset id.
    pub synset_id: SynsetId,
    /// Member words with the query word removed (first occurrence only).
    pub synonyms: Vec<String>,
    /// Definition name of the synset, empty when it has none.
    pub name: String,
}

/// Member words of one relation target synset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynsetWords {
    /// Target synset id.
    pub synset_id: SynsetId,
    /// Its member words, in record order.
    pub words: Vec<String>,
}

/// Words reachable through one relation label, flattened across targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedWords {
    /// Relation label.
    pub relation: String,
    /// Words of all target synsets, concatenated in target order.
    pub words: Vec<String>,
}

/// Words reachable through one relation label, grouped by target synset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedSynsets {
    /// Relation label.
    pub relation: String,
    /// Targets in discovery order with their member words.
    pub targets: Vec<SynsetWords>,
}

/// Closest relatives of one sense of a word (flattened words per label).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynsetRelatives {
    /// The sense (synset) these relatives belong to.
    pub synset_id: SynsetId,
    /// Relation expansion for that synset.
    pub relations: Vec<RelatedWords>,
}

/// Closest relatives of one sense of a word, grouped by target synset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynsetRelativesDetailed {
    /// The sense (synset) these relatives belong to.
    pub synset_id: SynsetId,
    /// Relation expansion for that synset.
    pub relations: Vec<RelatedSynsets>,
}
