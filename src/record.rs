//! Record model for the external record source.
//!
//! The thesaurus is distributed as three families of flat, attribute-keyed
//! records per part of speech: sense records (word to synset membership),
//! synset records (synset name and definition) and relation records
//! (directed, labeled synset to synset edges). Parsing the underlying
//! storage format is the loader's job; this module only models the parsed
//! records and aggregates them for the index builder.

use std::fmt;
use std::str::FromStr;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::error::RuWordNetError;

/// A single parsed record: a flat map of string attributes.
pub type AttrRecord = AHashMap<String, String>;

/// Build an [`AttrRecord`] from attribute name/value pairs.
pub fn attrs(pairs: &[(&str, &str)]) -> AttrRecord {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Part-of-speech partition of the thesaurus.
///
/// Lookups that take a word or synset id probe the partitions in a fixed
/// priority order (noun, then verb, then adjective); the first partition
/// containing the key wins. The order is exposed as
/// [`PartOfSpeech::RESOLUTION_ORDER`] so it is data, not repeated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    /// Nouns.
    Noun,
    /// Verbs.
    Verb,
    /// Adjectives.
    Adjective,
}

impl PartOfSpeech {
    /// Partition probe order for word and synset-id resolution.
    pub const RESOLUTION_ORDER: [PartOfSpeech; 3] = [
        PartOfSpeech::Noun,
        PartOfSpeech::Verb,
        PartOfSpeech::Adjective,
    ];

    /// Canonical lowercase tag for this part of speech.
    pub fn tag(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adj",
        }
    }

    /// Slot of this partition in per-pos storage arrays.
    pub(crate) fn slot(self) -> usize {
        match self {
            PartOfSpeech::Noun => 0,
            PartOfSpeech::Verb => 1,
            PartOfSpeech::Adjective => 2,
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for PartOfSpeech {
    type Err = RuWordNetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "noun" | "n" => Ok(PartOfSpeech::Noun),
            "verb" | "v" => Ok(PartOfSpeech::Verb),
            "adj" | "adjective" | "a" => Ok(PartOfSpeech::Adjective),
            _ => Err(RuWordNetError::query(format!(
                "unknown part-of-speech tag: {s}"
            ))),
        }
    }
}

/// Output identity for vocabulary scans: the lemma attribute or the raw
/// surface form, both lowercased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordForm {
    /// Lemmatized form (default).
    #[default]
    Lemma,
    /// Unlemmatized surface form.
    Surface,
}

/// Aggregated record stream for one full thesaurus build.
///
/// Sense and synset records are partitioned by part of speech; relation
/// records form a single stream in file order across all parts of speech.
/// Records for the same parent id need not be contiguous in the relation
/// stream; the builder groups them by id equality.
#[derive(Debug, Clone, Default)]
pub struct RecordSource {
    senses: [Vec<AttrRecord>; 3],
    synsets: [Vec<AttrRecord>; 3],
    relations: Vec<AttrRecord>,
}

impl RecordSource {
    /// Create an empty record source.
    pub fn new() -> Self {
        RecordSource::default()
    }

    /// Append a sense record for the given part of speech.
    pub fn add_sense(&mut self, pos: PartOfSpeech, record: AttrRecord) {
        self.senses[pos.slot()].push(record);
    }

    /// Append a synset record for the given part of speech.
    pub fn add_synset(&mut self, pos: PartOfSpeech, record: AttrRecord) {
        self.synsets[pos.slot()].push(record);
    }

    /// Append a relation record to the global relation stream.
    pub fn add_relation(&mut self, record: AttrRecord) {
        self.relations.push(record);
    }

    /// Sense records for one part of speech, in input order.
    pub fn senses(&self, pos: PartOfSpeech) -> &[AttrRecord] {
        &self.senses[pos.slot()]
    }

    /// Synset records for one part of speech, in input order.
    pub fn synsets(&self, pos: PartOfSpeech) -> &[AttrRecord] {
        &self.synsets[pos.slot()]
    }

    /// Relation records across all parts of speech, in input order.
    pub fn relations(&self) -> &[AttrRecord] {
        &self.relations
    }

    /// Total number of records of all three families.
    pub fn record_count(&self) -> usize {
        let per_pos: usize = PartOfSpeech::RESOLUTION_ORDER
            .iter()
            .map(|pos| self.senses[pos.slot()].len() + self.synsets[pos.slot()].len())
            .sum();
        per_pos + self.relations.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_order() {
        assert_eq!(
            PartOfSpeech::RESOLUTION_ORDER,
            [
                PartOfSpeech::Noun,
                PartOfSpeech::Verb,
                PartOfSpeech::Adjective
            ]
        );
    }

    #[test]
    fn test_pos_from_str() {
        assert_eq!("noun".parse::<PartOfSpeech>().unwrap(), PartOfSpeech::Noun);
        assert_eq!("Verb".parse::<PartOfSpeech>().unwrap(), PartOfSpeech::Verb);
        assert_eq!(
            "ADJECTIVE".parse::<PartOfSpeech>().unwrap(),
            PartOfSpeech::Adjective
        );
        assert_eq!("adj".parse::<PartOfSpeech>().unwrap(), PartOfSpeech::Adjective);
        assert!("adverb".parse::<PartOfSpeech>().is_err());
    }

    #[test]
    fn test_record_source_partitions() {
        let mut source = RecordSource::new();
        source.add_sense(
            PartOfSpeech::Noun,
            attrs(&[("name", "дом"), ("synset_id", "N1"), ("meaning", "1"), ("lemma", "дом")]),
        );
        source.add_synset(
            PartOfSpeech::Verb,
            attrs(&[("id", "V1"), ("ruthes_name", "ЖИТЬ"), ("definition", "")]),
        );
        source.add_relation(attrs(&[("parent_id", "N1"), ("child_id", "N2"), ("name", "hypernym")]));

        assert_eq!(source.senses(PartOfSpeech::Noun).len(), 1);
        assert!(source.senses(PartOfSpeech::Verb).is_empty());
        assert_eq!(source.synsets(PartOfSpeech::Verb).len(), 1);
        assert_eq!(source.relations().len(), 1);
        assert_eq!(source.record_count(), 3);
    }
}
