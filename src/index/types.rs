//! Type definitions for the built thesaurus index.
//!
//! Four index families: word to synsets, synset to words, synset to
//! definition (one triple per part-of-speech partition) and a single
//! relation adjacency graph spanning all partitions. All
//! order-sensitive sequences are plain vectors in input record order;
//! nothing is deduplicated at build time.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::record::PartOfSpeech;

/// Opaque synset identifier (e.g. a part-of-speech-prefixed code like `N12658`).
pub type SynsetId = String;

/// Human-readable information attached to a synset.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Definition {
    /// RuThes concept name of the synset.
    pub name: String,
    /// Free-text definition; frequently empty in the source data.
    pub description: String,
}

impl Definition {
    /// Create a new definition.
    pub fn new<S: Into<String>>(name: S, description: S) -> Self {
        Definition {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// One validated sense record, retained for vocabulary scans.
///
/// `name` and `lemma` are lowercased at build time; `meaning` is the raw
/// 1-based sense index string from the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sense {
    /// Lowercased surface form.
    pub name: String,
    /// Synset this sense belongs to.
    pub synset_id: SynsetId,
    /// 1-based sense index, as recorded.
    pub meaning: String,
    /// Lowercased lemma.
    pub lemma: String,
}

/// Index triple for one part-of-speech partition.
#[derive(Debug, Clone)]
pub struct PosPartition {
    pos: PartOfSpeech,
    word_synsets: AHashMap<String, Vec<SynsetId>>,
    synset_words: AHashMap<SynsetId, Vec<String>>,
    definitions: AHashMap<SynsetId, Definition>,
    senses: Vec<Sense>,
}

impl PosPartition {
    /// Create an empty partition for the given part of speech.
    pub(crate) fn new(pos: PartOfSpeech) -> Self {
        PosPartition {
            pos,
            word_synsets: AHashMap::new(),
            synset_words: AHashMap::new(),
            definitions: AHashMap::new(),
            senses: Vec::new(),
        }
    }

    /// Append one sense to both directions of the word/synset mapping.
    ///
    /// Repeated records for the same pair are appended again, not folded:
    /// the two maps stay exact inverses of the input record stream.
    pub(crate) fn push_sense(&mut self, sense: Sense) {
        self.word_synsets
            .entry(sense.name.clone())
            .or_default()
            .push(sense.synset_id.clone());
        self.synset_words
            .entry(sense.synset_id.clone())
            .or_default()
            .push(sense.name.clone());
        self.senses.push(sense);
    }

    /// Store the definition for a synset. Last write wins on a repeated id.
    pub(crate) fn insert_definition(&mut self, synset_id: SynsetId, definition: Definition) {
        self.definitions.insert(synset_id, definition);
    }

    /// Part of speech of this partition.
    pub fn pos(&self) -> PartOfSpeech {
        self.pos
    }

    /// Synsets containing the given (already lowercased) word, in record order.
    pub fn synsets_of(&self, word: &str) -> Option<&[SynsetId]> {
        self.word_synsets.get(word).map(Vec::as_slice)
    }

    /// Member words of the given synset, in record order.
    pub fn words_of(&self, synset_id: &str) -> Option<&[String]> {
        self.synset_words.get(synset_id).map(Vec::as_slice)
    }

    /// Definition of the given synset, if one was recorded.
    pub fn definition_of(&self, synset_id: &str) -> Option<&Definition> {
        self.definitions.get(synset_id)
    }

    /// All validated sense records of this partition, in input order.
    pub fn senses(&self) -> &[Sense] {
        &self.senses
    }

    /// Number of distinct words in this partition.
    pub fn word_count(&self) -> usize {
        self.word_synsets.len()
    }

    /// Number of distinct synsets with at least one member word.
    pub fn synset_count(&self) -> usize {
        self.synset_words.len()
    }
}

/// Outgoing edges of one synset under one relation label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelEdges {
    /// Relation label (e.g. "hypernym", "part holonym").
    pub label: String,
    /// Target synsets, in input record order.
    pub children: Vec<SynsetId>,
}

/// Relation adjacency over all parts of speech.
///
/// Keyed strictly by parent-id equality: records for the same parent merge
/// correctly even when they are not contiguous in the input stream. Label
/// discovery order and child order within a label are preserved.
#[derive(Debug, Clone, Default)]
pub struct RelationGraph {
    adjacency: AHashMap<SynsetId, Vec<LabelEdges>>,
    edge_count: usize,
}

impl RelationGraph {
    /// Create an empty relation graph.
    pub(crate) fn new() -> Self {
        RelationGraph::default()
    }

    /// Append one directed edge under `(parent_id, label)`.
    pub(crate) fn add_edge(&mut self, parent_id: SynsetId, label: String, child_id: SynsetId) {
        let edges = self.adjacency.entry(parent_id).or_default();
        match edges.iter_mut().find(|e| e.label == label) {
            Some(edge) => edge.children.push(child_id),
            None => edges.push(LabelEdges {
                label,
                children: vec![child_id],
            }),
        }
        self.edge_count += 1;
    }

    /// Outgoing labeled edges of a synset; empty when it has none.
    pub fn outgoing(&self, synset_id: &str) -> &[LabelEdges] {
        self.adjacency
            .get(synset_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of synsets with at least one outgoing edge.
    pub fn parent_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Total number of edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}

/// Statistics about a built index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    /// Distinct words across all partitions.
    pub word_count: usize,
    /// Distinct synsets with member words across all partitions.
    pub synset_count: usize,
    /// Total sense records ingested.
    pub sense_count: usize,
    /// Total relation edges ingested.
    pub relation_count: usize,
}

/// The complete, immutable thesaurus index.
///
/// Built once by [`build`](crate::index::build); read-only afterwards, so
/// shared references may be used from any number of callers.
#[derive(Debug, Clone)]
pub struct ThesaurusIndex {
    partitions: [PosPartition; 3],
    relations: RelationGraph,
}

impl ThesaurusIndex {
    pub(crate) fn new(partitions: [PosPartition; 3], relations: RelationGraph) -> Self {
        ThesaurusIndex {
            partitions,
            relations,
        }
    }

    /// The partition for one part of speech.
    pub fn partition(&self, pos: PartOfSpeech) -> &PosPartition {
        &self.partitions[pos.slot()]
    }

    /// Partitions in resolution order (noun, verb, adjective).
    pub fn partitions(&self) -> impl Iterator<Item = &PosPartition> {
        self.partitions.iter()
    }

    /// The merged relation adjacency graph.
    pub fn relations(&self) -> &RelationGraph {
        &self.relations
    }

    /// Aggregate statistics over all partitions.
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            word_count: self.partitions.iter().map(|p| p.word_count()).sum(),
            synset_count: self.partitions.iter().map(|p| p.synset_count()).sum(),
            sense_count: self.partitions.iter().map(|p| p.senses().len()).sum(),
            relation_count: self.relations.edge_count(),
        }
    }
}
