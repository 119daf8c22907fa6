//! The lookup engine: read-only queries over a built [`ThesaurusIndex`].
//!
//! A [`Thesaurus`] is stateless beyond the index it wraps. Queries fold the
//! word to lowercase, probe the part-of-speech partitions in the fixed
//! noun/verb/adjective order and resolve against the first partition that
//! contains the key. An absent key is `None` or an empty collection, never
//! an error.

use ahash::{AHashMap, AHashSet};
use tracing::{error, warn};

use crate::index::{Definition, LabelEdges, SynsetId, ThesaurusIndex};
use crate::lookup::types::{
    RelatedSynsets, RelatedWords, RelationFilter, SynonymSet, SynsetEntry, SynsetRelatives,
    SynsetRelativesDetailed, SynsetWords,
};
use crate::record::{PartOfSpeech, WordForm};

/// Lookup engine over an immutable thesaurus index.
#[derive(Debug, Clone)]
pub struct Thesaurus {
    index: ThesaurusIndex,
}

impl Thesaurus {
    /// Wrap a built index.
    pub fn new(index: ThesaurusIndex) -> Self {
        Thesaurus { index }
    }

    /// The underlying index.
    pub fn index(&self) -> &ThesaurusIndex {
        &self.index
    }

    /// Synsets containing `word` (case-insensitive), in record order.
    ///
    /// Probes the noun, verb and adjective partitions in that order and
    /// returns the list from the first partition containing the word.
    pub fn synsets_of(&self, word: &str) -> Option<&[SynsetId]> {
        let word = word.to_lowercase();
        self.index
            .partitions()
            .find_map(|partition| partition.synsets_of(&word))
    }

    /// Like [`synsets_of`](Self::synsets_of), with each synset paired with
    /// its definition (empty when the synset has no definition record).
    pub fn synsets_with_definitions(&self, word: &str) -> Option<Vec<SynsetEntry>> {
        let synsets = self.synsets_of(word)?;
        Some(
            synsets
                .iter()
                .map(|id| SynsetEntry {
                    synset_id: id.clone(),
                    definition: self.definition_of(id).cloned().unwrap_or_default(),
                })
                .collect(),
        )
    }

    /// Definition stored for a synset id, probing partitions in order.
    pub fn definition_of(&self, synset_id: &str) -> Option<&Definition> {
        self.index
            .partitions()
            .find_map(|partition| partition.definition_of(synset_id))
    }

    /// Member words of a synset (its synonyms), probing partitions in order.
    pub fn words_of(&self, synset_id: &str) -> Option<&[String]> {
        self.index
            .partitions()
            .find_map(|partition| partition.words_of(synset_id))
    }

    /// Synonyms of `word`, one entry per synset containing it.
    ///
    /// The query word itself is removed from each member list, but only its
    /// first occurrence; a synset listing the word twice keeps one copy.
    pub fn synonyms_of(&self, word: &str) -> Option<Vec<SynonymSet>> {
        let folded = word.to_lowercase();
        let synsets = self.synsets_of(&folded)?;
        Some(
            synsets
                .iter()
                .map(|id| {
                    let mut synonyms: Vec<String> = self
                        .words_of(id)
                        .map(|words| words.to_vec())
                        .unwrap_or_default();
                    if let Some(at) = synonyms.iter().position(|w| *w == folded) {
                        synonyms.remove(at);
                    }
                    let name = self
                        .definition_of(id)
                        .map(|d| d.name.clone())
                        .unwrap_or_default();
                    SynonymSet {
                        synset_id: id.clone(),
                        synonyms,
                        name,
                    }
                })
                .collect(),
        )
    }

    /// Outgoing labeled relation edges of a synset; empty when it has none.
    pub fn relations_of(&self, synset_id: &str) -> &[LabelEdges] {
        self.index.relations().outgoing(synset_id)
    }

    /// Words related to a synset, flattened per relation label.
    ///
    /// For each label passing the filter, concatenates the member words of
    /// every target synset in target order. Targets without member words
    /// contribute nothing.
    pub fn relation_words(&self, synset_id: &str, filter: &RelationFilter) -> Vec<RelatedWords> {
        self.relations_of(synset_id)
            .iter()
            .filter(|edge| filter.matches(&edge.label))
            .map(|edge| RelatedWords {
                relation: edge.label.clone(),
                words: edge
                    .children
                    .iter()
                    .flat_map(|child| self.words_of(child).unwrap_or(&[]).iter().cloned())
                    .collect(),
            })
            .collect()
    }

    /// Words related to a synset, grouped by target synset per label.
    ///
    /// A target repeated under the same label is merged into one entry with
    /// its words appended again, mirroring the flattened concatenation.
    pub fn relation_words_by_synset(
        &self,
        synset_id: &str,
        filter: &RelationFilter,
    ) -> Vec<RelatedSynsets> {
        self.relations_of(synset_id)
            .iter()
            .filter(|edge| filter.matches(&edge.label))
            .map(|edge| {
                let mut targets: Vec<SynsetWords> = Vec::new();
                for child in &edge.children {
                    let words = self.words_of(child).unwrap_or(&[]);
                    match targets.iter_mut().find(|t| t.synset_id == *child) {
                        Some(target) => target.words.extend(words.iter().cloned()),
                        None => targets.push(SynsetWords {
                            synset_id: child.clone(),
                            words: words.to_vec(),
                        }),
                    }
                }
                RelatedSynsets {
                    relation: edge.label.clone(),
                    targets,
                }
            })
            .collect()
    }

    /// Closest relatives of `word`, flattened words per relation label.
    ///
    /// With an explicit `synset_id`, the expansion covers that synset only;
    /// an id that is not among the word's resolved synsets is logged as an
    /// inconsistency but used regardless. Without one, every synset of the
    /// word is expanded, keyed by synset id. An unresolved word yields an
    /// empty result.
    pub fn closest_relatives(
        &self,
        word: &str,
        synset_id: Option<&str>,
        filter: &RelationFilter,
    ) -> Vec<SynsetRelatives> {
        self.relatives_for(word, synset_id)
            .into_iter()
            .map(|id| SynsetRelatives {
                relations: self.relation_words(&id, filter),
                synset_id: id,
            })
            .collect()
    }

    /// Closest relatives of `word`, grouped by target synset per label.
    pub fn closest_relatives_by_synset(
        &self,
        word: &str,
        synset_id: Option<&str>,
        filter: &RelationFilter,
    ) -> Vec<SynsetRelativesDetailed> {
        self.relatives_for(word, synset_id)
            .into_iter()
            .map(|id| SynsetRelativesDetailed {
                relations: self.relation_words_by_synset(&id, filter),
                synset_id: id,
            })
            .collect()
    }

    /// The synsets a closest-relatives query expands, deduplicated by id.
    fn relatives_for(&self, word: &str, synset_id: Option<&str>) -> Vec<SynsetId> {
        match synset_id {
            Some(id) => {
                let consistent = self
                    .synsets_of(word)
                    .is_some_and(|ids| ids.iter().any(|s| s == id));
                if !consistent {
                    warn!(
                        word,
                        synset_id = id,
                        "synset id is not among the word's synsets; using the supplied id"
                    );
                }
                vec![id.to_string()]
            }
            None => {
                let mut seen = AHashSet::new();
                self.synsets_of(word)
                    .unwrap_or(&[])
                    .iter()
                    .filter(|id| seen.insert((*id).clone()))
                    .cloned()
                    .collect()
            }
        }
    }

    /// Words of the given part of speech with more than one recorded sense.
    ///
    /// `pos` is a part-of-speech tag ("noun", "verb", "adj"/"adjective",
    /// case-insensitive). An unknown tag is reported as an error and yields
    /// an empty result. Order is first occurrence in the sense records,
    /// deduplicated by the chosen word form.
    pub fn polysemous_words(&self, pos: &str, form: WordForm) -> Vec<String> {
        self.vocabulary_scan(pos, form, true)
    }

    /// Words of the given part of speech whose every sense index is 1.
    ///
    /// Complement of [`polysemous_words`](Self::polysemous_words) over the
    /// same vocabulary: the two sets partition it with no overlap.
    pub fn monosemous_words(&self, pos: &str, form: WordForm) -> Vec<String> {
        self.vocabulary_scan(pos, form, false)
    }

    fn vocabulary_scan(&self, pos: &str, form: WordForm, polysemous: bool) -> Vec<String> {
        let pos: PartOfSpeech = match pos.parse() {
            Ok(pos) => pos,
            Err(err) => {
                error!(%err, "vocabulary scan rejected");
                return Vec::new();
            }
        };

        // First pass collects first-occurrence order and whether any sense
        // of the word carries a meaning index other than "1".
        let mut order: Vec<String> = Vec::new();
        let mut has_later_sense: AHashMap<&str, bool> = AHashMap::new();
        for sense in self.index.partition(pos).senses() {
            let key = match form {
                WordForm::Lemma => sense.lemma.as_str(),
                WordForm::Surface => sense.name.as_str(),
            };
            let later = sense.meaning != "1";
            match has_later_sense.get_mut(key) {
                Some(flag) => *flag |= later,
                None => {
                    order.push(key.to_string());
                    has_later_sense.insert(key, later);
                }
            }
        }

        order
            .into_iter()
            .filter(|word| has_later_sense[word.as_str()] == polysemous)
            .collect()
    }
}
