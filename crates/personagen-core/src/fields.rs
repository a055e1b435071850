use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Fixed set of profile fields. Declaration order is the canonical field
/// order used for records, preview lines, and tabular headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldName {
    Name,
    Username,
    Sex,
    Address,
    Mail,
    Birthdate,
    Job,
    Company,
}

impl FieldName {
    /// Every field, in canonical order.
    pub const ALL: [FieldName; 8] = [
        FieldName::Name,
        FieldName::Username,
        FieldName::Sex,
        FieldName::Address,
        FieldName::Mail,
        FieldName::Birthdate,
        FieldName::Job,
        FieldName::Company,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "name" => Some(Self::Name),
            "username" => Some(Self::Username),
            "sex" => Some(Self::Sex),
            "address" => Some(Self::Address),
            "mail" => Some(Self::Mail),
            "birthdate" => Some(Self::Birthdate),
            "job" => Some(Self::Job),
            "company" => Some(Self::Company),
            _ => None,
        }
    }

    /// Lowercase wire name, used for JSON keys and CSV headers.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Username => "username",
            Self::Sex => "sex",
            Self::Address => "address",
            Self::Mail => "mail",
            Self::Birthdate => "birthdate",
            Self::Job => "job",
            Self::Company => "company",
        }
    }

    /// Capitalized name shown on preview lines.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Username => "Username",
            Self::Sex => "Sex",
            Self::Address => "Address",
            Self::Mail => "Mail",
            Self::Birthdate => "Birthdate",
            Self::Job => "Job",
            Self::Company => "Company",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Non-empty, deduplicated set of fields to include in generated records.
///
/// Order-insensitive on input; stored in canonical field order so headers
/// and preview lines stay stable across runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSelection {
    fields: Vec<FieldName>,
}

impl FieldSelection {
    pub fn new(fields: impl IntoIterator<Item = FieldName>) -> Result<Self> {
        let chosen: BTreeSet<FieldName> = fields.into_iter().collect();
        if chosen.is_empty() {
            return Err(Error::EmptySelection);
        }
        Ok(Self {
            fields: chosen.into_iter().collect(),
        })
    }

    /// Selection covering the full field set.
    pub fn all() -> Self {
        Self {
            fields: FieldName::ALL.to_vec(),
        }
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.fields.contains(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.fields.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Always false: construction rejects empty selections.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn as_slice(&self) -> &[FieldName] {
        &self.fields
    }
}
