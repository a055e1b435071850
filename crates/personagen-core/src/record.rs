use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::fields::{FieldName, FieldSelection};
use crate::value::ScalarValue;

/// One synthesized profile: an insertion-ordered field → value mapping.
///
/// Records are immutable once built; projection returns a new record and
/// leaves the source untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileRecord {
    entries: Vec<(FieldName, ScalarValue)>,
}

/// Ordered batch of records from one generate action. Every record in a
/// batch carries the same field set in the same order.
pub type ProfileBatch = Vec<ProfileRecord>;

impl ProfileRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field, replacing the value if the field is already present.
    pub fn insert(&mut self, field: FieldName, value: ScalarValue) {
        if let Some(entry) = self.entries.iter_mut().find(|(name, _)| *name == field) {
            entry.1 = value;
        } else {
            self.entries.push((field, value));
        }
    }

    pub fn get(&self, field: FieldName) -> Option<&ScalarValue> {
        self.entries
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, value)| value)
    }

    /// Fields in record order.
    pub fn fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.entries.iter().map(|(field, _)| *field)
    }

    /// (field, value) pairs in record order.
    pub fn entries(&self) -> impl Iterator<Item = (FieldName, &ScalarValue)> + '_ {
        self.entries.iter().map(|(field, value)| (*field, value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Narrow this record to the selected fields, keeping the source order
    /// and values unchanged. Selected fields absent from the record are
    /// silently dropped.
    pub fn project(&self, selection: &FieldSelection) -> ProfileRecord {
        ProfileRecord {
            entries: self
                .entries
                .iter()
                .filter(|(field, _)| selection.contains(*field))
                .cloned()
                .collect(),
        }
    }
}

impl FromIterator<(FieldName, ScalarValue)> for ProfileRecord {
    fn from_iter<I: IntoIterator<Item = (FieldName, ScalarValue)>>(iter: I) -> Self {
        let mut record = ProfileRecord::new();
        for (field, value) in iter {
            record.insert(field, value);
        }
        record
    }
}

impl Serialize for ProfileRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (field, value) in &self.entries {
            map.serialize_entry(field.as_str(), value)?;
        }
        map.end()
    }
}
