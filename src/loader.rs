//! Record-reading shim: JSON-lines files into a [`RecordSource`].
//!
//! The index core only needs attribute-keyed string records; this loader
//! reads them from JSON-lines files (one object of string attributes per
//! line, blank lines skipped). Malformed JSON, a non-object line or a
//! non-string attribute value is a fatal error, in line with the fail-fast
//! build contract.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{Result, RuWordNetError};
use crate::record::{AttrRecord, PartOfSpeech, RecordSource};

/// File layout of one thesaurus distribution.
///
/// Sense and synset files are per part of speech in resolution order
/// (noun, verb, adjective); relation files are read in the given order
/// into the single global relation stream.
#[derive(Debug, Clone)]
pub struct RecordPaths {
    /// Sense record files, one per part of speech.
    pub senses: [PathBuf; 3],
    /// Synset record files, one per part of speech.
    pub synsets: [PathBuf; 3],
    /// Relation record files, concatenated in this order.
    pub relations: Vec<PathBuf>,
}

/// Read one JSON-lines record file.
pub fn read_records<P: AsRef<Path>>(path: P) -> Result<Vec<AttrRecord>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let value: Value = serde_json::from_str(&line)?;
        records.push(record_from_value(value).map_err(|err| {
            RuWordNetError::record(format!(
                "{}:{}: {err}",
                path.display(),
                line_no + 1
            ))
        })?);
    }
    Ok(records)
}

/// Load a full record source from its file layout.
pub fn load_record_source(paths: &RecordPaths) -> Result<RecordSource> {
    let mut source = RecordSource::new();

    for pos in PartOfSpeech::RESOLUTION_ORDER {
        for record in read_records(&paths.senses[pos.slot()])? {
            source.add_sense(pos, record);
        }
        for record in read_records(&paths.synsets[pos.slot()])? {
            source.add_synset(pos, record);
        }
    }
    for path in &paths.relations {
        for record in read_records(path)? {
            source.add_relation(record);
        }
    }

    Ok(source)
}

fn record_from_value(value: Value) -> std::result::Result<AttrRecord, String> {
    let Value::Object(object) = value else {
        return Err("record line is not a JSON object".to_string());
    };

    let mut record = AttrRecord::with_capacity(object.len());
    for (attr, value) in object {
        match value {
            Value::String(s) => {
                record.insert(attr, s);
            }
            other => {
                return Err(format!("attribute '{attr}' is not a string: {other}"));
            }
        }
    }
    Ok(record)
}
