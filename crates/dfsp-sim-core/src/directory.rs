//! Static party directory.
//!
//! The directory is parsed once at startup from a JSON dataset bundled into
//! the binary and is immutable thereafter. The dataset has the shape
//! `{"parties": {idType: {idValue: record}}}`.

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::DatasetError;
use crate::types::Party;

/// The dataset shipped with the simulator.
const BUNDLED_DATASET: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/parties.json"));

#[derive(Deserialize)]
struct Dataset {
    parties: HashMap<String, HashMap<String, Party>>,
}

/// Immutable lookup table of party records keyed by `(idType, idValue)`.
#[derive(Debug)]
pub struct PartyDirectory {
    parties: HashMap<String, HashMap<String, Party>>,
}

impl PartyDirectory {
    /// Load the dataset bundled into the binary.
    pub fn bundled() -> Result<Self, DatasetError> {
        Self::from_json(BUNDLED_DATASET)
    }

    /// Parse a directory from raw dataset JSON.
    pub fn from_json(raw: &str) -> Result<Self, DatasetError> {
        let dataset: Dataset = serde_json::from_str(raw)?;
        if dataset.parties.values().all(|records| records.is_empty()) {
            return Err(DatasetError::Empty);
        }
        Ok(Self {
            parties: dataset.parties,
        })
    }

    /// Exact, case-sensitive lookup.
    pub fn lookup(&self, id_type: &str, id_value: &str) -> Option<&Party> {
        self.parties
            .get(id_type)
            .and_then(|records| records.get(id_value))
    }

    /// Number of records across all identifier types.
    pub fn len(&self) -> usize {
        self.parties.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_dataset_parses_and_is_nonempty() {
        let directory = PartyDirectory::bundled().unwrap();
        assert!(!directory.is_empty());
    }

    #[test]
    fn lookup_finds_bundled_records() {
        let directory = PartyDirectory::bundled().unwrap();
        let party = directory.lookup("MSISDN", "123456789").unwrap();
        assert_eq!(party.id_type, "MSISDN");
        assert_eq!(party.id_value, "123456789");
    }

    #[test]
    fn lookup_is_exact_and_case_sensitive() {
        let directory = PartyDirectory::bundled().unwrap();
        assert!(directory.lookup("msisdn", "123456789").is_none());
        assert!(directory.lookup("MSISDN", "12345678").is_none());
        assert!(directory.lookup("IBAN", "123456789").is_none());
    }

    #[test]
    fn empty_dataset_is_rejected() {
        let raw = r#"{"parties": {"MSISDN": {}}}"#;
        assert!(matches!(
            PartyDirectory::from_json(raw),
            Err(DatasetError::Empty)
        ));
    }

    #[test]
    fn malformed_dataset_is_rejected() {
        assert!(matches!(
            PartyDirectory::from_json("{"),
            Err(DatasetError::Json(_))
        ));
    }
}
