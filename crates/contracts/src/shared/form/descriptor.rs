//! Column descriptor shared by list tables and edit forms

use super::field_type::DataType;
use crate::shared::labels::split_camel_case;
use serde::{Deserialize, Serialize};

/// One column of a table / one field of its edit form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDescriptor {
    /// Record key; descriptors without one are display-only
    #[serde(default)]
    pub prop: Option<String>,
    #[serde(default)]
    pub data_type: DataType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub required: bool,
}

impl ColumnDescriptor {
    pub fn new(prop: impl Into<String>, data_type: DataType) -> Self {
        Self {
            prop: Some(prop.into()),
            data_type,
            label: None,
            required: false,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Usable record key: present and non-empty.
    pub fn key(&self) -> Option<&str> {
        self.prop.as_deref().filter(|prop| !prop.is_empty())
    }

    /// Explicit label, or the humanized key.
    pub fn display_label(&self) -> String {
        match (&self.label, self.key()) {
            (Some(label), _) => label.clone(),
            (None, Some(prop)) => split_camel_case(prop),
            (None, None) => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_skips_empty_prop() {
        assert_eq!(ColumnDescriptor::new("qty", DataType::Number).key(), Some("qty"));
        assert_eq!(ColumnDescriptor::new("", DataType::Number).key(), None);
        assert_eq!(ColumnDescriptor::default().key(), None);
    }

    #[test]
    fn test_display_label() {
        assert_eq!(
            ColumnDescriptor::new("supplierID", DataType::String).display_label(),
            "Supplier ID"
        );
        assert_eq!(
            ColumnDescriptor::new("dob", DataType::Date)
                .with_label("Date of birth")
                .display_label(),
            "Date of birth"
        );
        assert_eq!(ColumnDescriptor::default().display_label(), "");
    }

    #[test]
    fn test_deserialize_from_form_config() {
        let columns: Vec<ColumnDescriptor> = serde_json::from_str(
            r#"[
                {"prop": "quantity", "dataType": "number", "required": true},
                {"prop": "note", "dataType": "textarea"},
                {"label": "Actions"}
            ]"#,
        )
        .unwrap();

        assert_eq!(columns[0].data_type, DataType::Number);
        assert!(columns[0].required);
        assert_eq!(columns[1].data_type, DataType::String);
        assert_eq!(columns[2].prop, None);
        assert_eq!(columns[2].data_type, DataType::String);
    }
}
