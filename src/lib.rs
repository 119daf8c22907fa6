//! # RuWordNet
//!
//! An in-memory index and lookup library for RuWordNet-style thesauri.
//!
//! The thesaurus arrives as flat attribute-keyed records: sense records
//! (word to synset membership), synset records (concept name and
//! definition) and relation records (directed labeled edges between
//! synsets), partitioned by part of speech. [`index::build`] ingests them
//! once, eagerly, into an immutable [`ThesaurusIndex`]; [`Thesaurus`]
//! answers queries over it: which synsets contain a word, which words a
//! synset holds, synonyms, relation expansions and polysemous/monosemous
//! vocabulary.
//!
//! ## Example
//!
//! ```
//! use ruwordnet::record::{PartOfSpeech, RecordSource, attrs};
//! use ruwordnet::{Thesaurus, index};
//!
//! let mut source = RecordSource::new();
//! source.add_sense(
//!     PartOfSpeech::Noun,
//!     attrs(&[("name", "дом"), ("synset_id", "N1"), ("meaning", "1"), ("lemma", "дом")]),
//! );
//!
//! let thesaurus = Thesaurus::new(index::build(&source)?);
//! assert_eq!(thesaurus.synsets_of("дом").unwrap(), &["N1"]);
//! assert!(thesaurus.synsets_of("изба").is_none());
//! # Ok::<(), ruwordnet::error::RuWordNetError>(())
//! ```

pub mod error;
pub mod index;
pub mod loader;
pub mod lookup;
pub mod record;

pub use error::{Result, RuWordNetError};
pub use index::{Definition, SynsetId, ThesaurusIndex};
pub use lookup::Thesaurus;

pub mod prelude {
    //! Convenience re-exports for typical usage.

    pub use crate::error::{Result, RuWordNetError};
    pub use crate::index::{self, Definition, SynsetId, ThesaurusIndex};
    pub use crate::loader::{RecordPaths, load_record_source};
    pub use crate::lookup::{RelationFilter, Thesaurus};
    pub use crate::record::{AttrRecord, PartOfSpeech, RecordSource, WordForm, attrs};
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
