//! Record types shared by every gene source
//!
//! Each source produces a [`GeneRecord`]: an insertion-ordered mapping from a
//! human-readable field name to a [`FieldValue`]. The aggregator combines the
//! per-source records with [`GeneRecord::merge`], where the later record wins
//! on a key collision.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Field names emitted by the sources.
pub mod fields {
    pub const DESCRIPTION: &str = "Description";
    pub const SYNONYMS: &str = "Synonyms";
    pub const LOCATION: &str = "Location";
    pub const GENE_TYPE: &str = "Gene Type";
    pub const REGULATORY_FEATURES: &str = "Regulatory Features";
    pub const OFFICIAL_FULL_NAME: &str = "Official Full Name";
    pub const SUMMARY: &str = "Summary";
    pub const GENECARDS_SUMMARY: &str = "GeneCards Summary";
}

/// Placeholder for optional fields a source did not provide.
pub const NOT_AVAILABLE: &str = "N/A";

/// The upstream service a record came from.
///
/// Declaration order is the merge order used by the aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Ensembl REST genomic annotation
    Ensembl,
    /// NCBI E-utilities gene database
    Ncbi,
    /// GeneCards gene card page
    GeneCards,
}

impl SourceKind {
    /// All sources, in merge order.
    pub const ALL: [SourceKind; 3] = [SourceKind::Ensembl, SourceKind::Ncbi, SourceKind::GeneCards];
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKind::Ensembl => write!(f, "Ensembl"),
            SourceKind::Ncbi => write!(f, "NCBI"),
            SourceKind::GeneCards => write!(f, "GeneCards"),
        }
    }
}

/// A single field value: free text or an ordered list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::Text(_) => None,
            FieldValue::List(items) => Some(items),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        FieldValue::List(value)
    }
}

/// Insertion-ordered mapping of field name to value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneRecord {
    entries: Vec<(String, FieldValue)>,
}

impl GeneRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`.
    ///
    /// An existing key keeps its position and takes the new value; a new key
    /// is appended. Returns the replaced value, if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Option<FieldValue> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            },
        }
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Apply every entry of `other` on top of `self`, last writer wins.
    pub fn merge(&mut self, other: GeneRecord) {
        for (key, value) in other.entries {
            self.insert(key, value);
        }
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for GeneRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = GeneRecord::new();
        for (k, v) in iter {
            record.insert(k, v);
        }
        record
    }
}

impl IntoIterator for GeneRecord {
    type Item = (String, FieldValue);
    type IntoIter = std::vec::IntoIter<(String, FieldValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for GeneRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_insert_keeps_position_on_overwrite() {
        let mut record = GeneRecord::new();
        record.insert("a", "1");
        record.insert("b", "2");
        let old = record.insert("a", "3");

        assert_eq!(old, Some(FieldValue::text("1")));
        assert_eq!(record.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(record.get("a"), Some(&FieldValue::text("3")));
    }

    #[test]
    fn test_merge_empty_records_is_empty() {
        let mut combined = GeneRecord::new();
        combined.merge(GeneRecord::new());
        combined.merge(GeneRecord::new());
        combined.merge(GeneRecord::new());
        assert!(combined.is_empty());
    }

    #[test]
    fn test_serializes_in_insertion_order() {
        let record: GeneRecord = vec![
            (fields::LOCATION, FieldValue::text("X:1-2")),
            (fields::DESCRIPTION, FieldValue::text("desc")),
            (fields::REGULATORY_FEATURES, FieldValue::List(vec![])),
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"Location":"X:1-2","Description":"desc","Regulatory Features":[]}"#
        );
    }

    #[test]
    fn test_source_kind_order_and_display() {
        assert_eq!(SourceKind::ALL[0], SourceKind::Ensembl);
        assert_eq!(SourceKind::ALL[2], SourceKind::GeneCards);
        assert_eq!(SourceKind::Ncbi.to_string(), "NCBI");
        assert_eq!(serde_json::to_string(&SourceKind::GeneCards).unwrap(), "\"genecards\"");
    }

    fn record_strategy() -> impl Strategy<Value = GeneRecord> {
        prop::collection::vec(("[a-d]", "[a-z]{0,4}"), 0..6)
            .prop_map(|pairs| pairs.into_iter().collect::<GeneRecord>())
    }

    proptest! {
        #[test]
        fn prop_merge_last_writer_wins(first in record_strategy(), second in record_strategy()) {
            let mut combined = first.clone();
            combined.merge(second.clone());

            for (key, value) in second.iter() {
                prop_assert_eq!(combined.get(key), Some(value));
            }
            for (key, value) in first.iter() {
                if !second.contains_key(key) {
                    prop_assert_eq!(combined.get(key), Some(value));
                }
            }
            let expected_len = first.len()
                + second.keys().filter(|k| !first.contains_key(k)).count();
            prop_assert_eq!(combined.len(), expected_len);
        }

        #[test]
        fn prop_merge_with_empty_is_identity(record in record_strategy()) {
            let mut combined = GeneRecord::new();
            combined.merge(record.clone());
            combined.merge(GeneRecord::new());
            prop_assert_eq!(combined, record);
        }
    }
}
