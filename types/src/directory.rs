//! Ordered, immutable contact directories.

use std::collections::HashSet;

use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::contact::{ContactId, ContactRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error("duplicate contact id {id}")]
    DuplicateId { id: ContactId },
}

/// Contact records in authored order, with unique ids.
///
/// Construction via [`ContactDirectory::new`] validates id uniqueness.
/// Deserialization validates on load. The directory itself offers no
/// search, filtering, or mutation; consumers that need those build them
/// on top of [`ContactDirectory::records`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactDirectory {
    records: Vec<ContactRecord>,
}

impl<'de> Deserialize<'de> for ContactDirectory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct DirectoryWire {
            records: Vec<ContactRecord>,
        }
        let wire = DirectoryWire::deserialize(deserializer)?;
        ContactDirectory::new(wire.records).map_err(D::Error::custom)
    }
}

impl ContactDirectory {
    pub fn new(records: Vec<ContactRecord>) -> Result<Self, DirectoryError> {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.id()) {
                return Err(DirectoryError::DuplicateId { id: record.id() });
            }
        }
        Ok(Self { records })
    }

    #[must_use]
    pub fn records(&self) -> &[ContactRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
