use serde::Deserialize;
use std::borrow::Cow;
use std::collections::HashMap;
use thiserror::Error;

/// Type labels used when the caller supplies none.
pub const DEFAULT_TYPE_LABELS: [(i64, &str); 2] = [(1, "C"), (2, "Xe")];

const PLACEHOLDER_PREFIX: &str = "Type";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseLabelError {
    #[error("invalid label assignment '{0}' (expected KEY:LABEL with an integer key, e.g. 1:C)")]
    Assignment(String),

    #[error("invalid label table: {0}")]
    Table(String),
}

/// Element labels keyed by atom type and by atom identifier.
///
/// Identifier labels win over type labels for the same atom. Atoms matched
/// by neither get a `Type<n>` placeholder so unmapped types stay visible in
/// the output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelMap {
    by_type: HashMap<i64, String>,
    by_id: HashMap<i64, String>,
}

impl LabelMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_types() -> Self {
        let mut labels = Self::new();
        for (atom_type, label) in DEFAULT_TYPE_LABELS {
            labels.insert_type(atom_type, label);
        }
        labels
    }

    pub fn insert_type(&mut self, atom_type: i64, label: impl Into<String>) {
        self.by_type.insert(atom_type, label.into());
    }

    pub fn insert_id(&mut self, id: i64, label: impl Into<String>) {
        self.by_id.insert(id, label.into());
    }

    pub fn clear_types(&mut self) {
        self.by_type.clear();
    }

    #[inline]
    pub fn type_label(&self, atom_type: i64) -> Option<&str> {
        self.by_type.get(&atom_type).map(String::as_str)
    }

    #[inline]
    pub fn id_label(&self, id: i64) -> Option<&str> {
        self.by_id.get(&id).map(String::as_str)
    }

    pub fn type_count(&self) -> usize {
        self.by_type.len()
    }

    pub fn id_count(&self) -> usize {
        self.by_id.len()
    }

    pub fn resolve(&self, atom_type: i64, id: Option<i64>) -> Cow<'_, str> {
        if let Some(label) = id.and_then(|id| self.id_label(id)) {
            return Cow::Borrowed(label);
        }
        match self.type_label(atom_type) {
            Some(label) => Cow::Borrowed(label),
            None => Cow::Owned(format!("{PLACEHOLDER_PREFIX}{atom_type}")),
        }
    }

    /// Parses a TOML label table with optional `[types]` and `[ids]` tables.
    ///
    /// ```toml
    /// [types]
    /// 1 = "C"
    /// 2 = "Xe"
    ///
    /// [ids]
    /// 5 = "N"
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self, ParseLabelError> {
        let table: LabelTable =
            toml::from_str(text).map_err(|e| ParseLabelError::Table(e.to_string()))?;

        let mut labels = Self::new();
        for (key, label) in table.types {
            labels.insert_type(parse_key(&key)?, label);
        }
        for (key, label) in table.ids {
            labels.insert_id(parse_key(&key)?, label);
        }
        Ok(labels)
    }

    /// Layers `other` on top of `self`; entries in `other` replace existing ones.
    pub fn merge(&mut self, other: LabelMap) {
        self.by_type.extend(other.by_type);
        self.by_id.extend(other.by_id);
    }
}

#[derive(Debug, Default, Deserialize)]
struct LabelTable {
    #[serde(default)]
    types: HashMap<String, String>,
    #[serde(default)]
    ids: HashMap<String, String>,
}

fn parse_key(key: &str) -> Result<i64, ParseLabelError> {
    key.trim()
        .parse::<i64>()
        .map_err(|_| ParseLabelError::Table(format!("key '{key}' is not an integer")))
}

/// Parses a `KEY:LABEL` pair such as `2:Xe`.
pub fn parse_assignment(s: &str) -> Result<(i64, String), ParseLabelError> {
    let invalid = || ParseLabelError::Assignment(s.to_string());

    let mut parts = s.split(':');
    let (Some(key), Some(label), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(invalid());
    };
    let key = key.trim().parse::<i64>().map_err(|_| invalid())?;
    Ok((key, label.to_string()))
}
