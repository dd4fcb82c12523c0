//! Empty form record seeded from column descriptors

use super::descriptor::ColumnDescriptor;
use super::field_type::DataType;
use crate::shared::media::ImageSource;
use chrono::{DateTime, Utc};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Field value tagged with the column's declared kind.
///
/// Serializes as the bare inner value, so an empty field is `null`.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(Option<f64>),
    Date(Option<DateTime<Utc>>),
    Boolean(Option<bool>),
    Image(Option<ImageSource>),
    Table(Option<Vec<serde_json::Value>>),
    Text(Option<String>),
}

impl FieldValue {
    /// Null placeholder for a column of the given kind.
    pub fn empty(data_type: DataType) -> Self {
        match data_type {
            DataType::Number => Self::Number(None),
            DataType::Date => Self::Date(None),
            DataType::Boolean => Self::Boolean(None),
            DataType::Image => Self::Image(None),
            DataType::Table => Self::Table(None),
            DataType::String => Self::Text(None),
        }
    }

    pub fn data_type(&self) -> DataType {
        match self {
            Self::Number(_) => DataType::Number,
            Self::Date(_) => DataType::Date,
            Self::Boolean(_) => DataType::Boolean,
            Self::Image(_) => DataType::Image,
            Self::Table(_) => DataType::Table,
            Self::Text(_) => DataType::String,
        }
    }

    pub fn is_null(&self) -> bool {
        match self {
            Self::Number(value) => value.is_none(),
            Self::Date(value) => value.is_none(),
            Self::Boolean(value) => value.is_none(),
            Self::Image(value) => value.is_none(),
            Self::Table(value) => value.is_none(),
            Self::Text(value) => value.is_none(),
        }
    }
}

/// Insertion-ordered form state, one entry per column key.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormRecord {
    fields: Vec<(String, FieldValue)>,
}

impl FormRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key`; an existing key keeps its position and takes the new value.
    pub fn insert(&mut self, key: impl Into<String>, value: FieldValue) {
        let key = key.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(key, _)| key.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &FieldValue> {
        self.fields.iter().map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Plain JSON object (key order not preserved).
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

impl Serialize for FormRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Builds the blank record an "add" dialog starts from.
///
/// Columns without a key are skipped; a repeated key keeps its first position
/// and the last column's kind.
pub fn create_empty_rule_form(columns: &[ColumnDescriptor]) -> FormRecord {
    let mut form = FormRecord::new();
    for column in columns {
        if let Some(prop) = column.key() {
            form.insert(prop, FieldValue::empty(column.data_type));
        }
    }
    form
}
