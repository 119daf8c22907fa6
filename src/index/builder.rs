//! One-shot construction of the thesaurus index from a record source.

use tracing::debug;

use crate::error::{Result, RuWordNetError};
use crate::index::types::{Definition, PosPartition, RelationGraph, Sense, ThesaurusIndex};
use crate::record::{AttrRecord, PartOfSpeech, RecordSource};

/// Fetch a required attribute from a record, or fail the whole build.
fn required<'a>(record: &'a AttrRecord, attr: &str, family: &str) -> Result<&'a str> {
    record.get(attr).map(String::as_str).ok_or_else(|| {
        RuWordNetError::record(format!("{family} record is missing attribute '{attr}'"))
    })
}

/// Build the complete index from a record source.
///
/// Runs eagerly over every record of all three parts of speech and the full
/// relation stream. Any record missing a required attribute aborts the build;
/// empty record families are legal and produce empty index families.
pub fn build(source: &RecordSource) -> Result<ThesaurusIndex> {
    let partitions = [
        build_partition(source, PartOfSpeech::Noun)?,
        build_partition(source, PartOfSpeech::Verb)?,
        build_partition(source, PartOfSpeech::Adjective)?,
    ];

    let mut relations = RelationGraph::new();
    for record in source.relations() {
        let parent_id = required(record, "parent_id", "relation")?;
        let child_id = required(record, "child_id", "relation")?;
        let label = required(record, "name", "relation")?;
        relations.add_edge(parent_id.to_string(), label.to_string(), child_id.to_string());
    }

    let index = ThesaurusIndex::new(partitions, relations);
    let stats = index.stats();
    debug!(
        words = stats.word_count,
        synsets = stats.synset_count,
        senses = stats.sense_count,
        relations = stats.relation_count,
        "thesaurus index built"
    );
    Ok(index)
}

/// Build the word/synset/definition triple for one part of speech.
fn build_partition(source: &RecordSource, pos: PartOfSpeech) -> Result<PosPartition> {
    let mut partition = PosPartition::new(pos);

    for record in source.senses(pos) {
        let name = required(record, "name", "sense")?.to_lowercase();
        let synset_id = required(record, "synset_id", "sense")?.to_string();
        let meaning = required(record, "meaning", "sense")?.to_string();
        let lemma = required(record, "lemma", "sense")?.to_lowercase();
        partition.push_sense(Sense {
            name,
            synset_id,
            meaning,
            lemma,
        });
    }

    for record in source.synsets(pos) {
        let id = required(record, "id", "synset")?.to_string();
        let name = required(record, "ruthes_name", "synset")?;
        let description = required(record, "definition", "synset")?;
        partition.insert_definition(id, Definition::new(name, description));
    }

    Ok(partition)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::attrs;

    fn sense(name: &str, synset_id: &str, meaning: &str) -> AttrRecord {
        attrs(&[
            ("name", name),
            ("synset_id", synset_id),
            ("meaning", meaning),
            ("lemma", name),
        ])
    }

    #[test]
    fn test_build_empty_source() {
        let index = build(&RecordSource::new()).unwrap();
        let stats = index.stats();
        assert_eq!(stats.word_count, 0);
        assert_eq!(stats.synset_count, 0);
        assert_eq!(stats.relation_count, 0);
    }

    #[test]
    fn test_build_lowercases_words() {
        let mut source = RecordSource::new();
        source.add_sense(PartOfSpeech::Noun, sense("Дом", "N1", "1"));

        let index = build(&source).unwrap();
        let partition = index.partition(PartOfSpeech::Noun);
        assert_eq!(partition.synsets_of("дом").unwrap(), &["N1"]);
        assert!(partition.synsets_of("Дом").is_none());
        assert_eq!(partition.words_of("N1").unwrap(), &["дом"]);
    }

    #[test]
    fn test_build_fails_on_missing_sense_attribute() {
        let mut source = RecordSource::new();
        source.add_sense(
            PartOfSpeech::Noun,
            attrs(&[("name", "дом"), ("synset_id", "N1"), ("meaning", "1")]),
        );

        let err = build(&source).unwrap_err();
        assert!(err.to_string().contains("lemma"));
    }

    #[test]
    fn test_build_fails_on_missing_relation_attribute() {
        let mut source = RecordSource::new();
        source.add_relation(attrs(&[("parent_id", "N1"), ("name", "hypernym")]));

        let err = build(&source).unwrap_err();
        assert!(matches!(err, RuWordNetError::Record(_)));
        assert!(err.to_string().contains("child_id"));
    }

    #[test]
    fn test_build_merges_noncontiguous_relation_parents() {
        let mut source = RecordSource::new();
        for (parent, label, child) in [
            ("P1", "hyp", "A"),
            ("P2", "hol", "B"),
            ("P1", "hyp", "C"),
        ] {
            source.add_relation(attrs(&[
                ("parent_id", parent),
                ("child_id", child),
                ("name", label),
            ]));
        }

        let index = build(&source).unwrap();
        let p1 = index.relations().outgoing("P1");
        assert_eq!(p1.len(), 1);
        assert_eq!(p1[0].children, vec!["A", "C"]);
        assert_eq!(index.relations().outgoing("P2")[0].children, vec!["B"]);
    }

    #[test]
    fn test_build_keeps_partitions_separate() {
        let mut source = RecordSource::new();
        source.add_sense(PartOfSpeech::Noun, sense("печь", "N1", "1"));
        source.add_sense(PartOfSpeech::Verb, sense("печь", "V1", "1"));

        let index = build(&source).unwrap();
        assert_eq!(
            index.partition(PartOfSpeech::Noun).synsets_of("печь").unwrap(),
            &["N1"]
        );
        assert_eq!(
            index.partition(PartOfSpeech::Verb).synsets_of("печь").unwrap(),
            &["V1"]
        );
    }
}
