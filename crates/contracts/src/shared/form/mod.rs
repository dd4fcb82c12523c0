//! Form schema: column descriptors and the empty record built from them
//!
//! ## Usage
//!
//! ```rust
//! use contracts::shared::form::{create_empty_rule_form, ColumnDescriptor, DataType};
//!
//! let columns = vec![
//!     ColumnDescriptor::new("name", DataType::String),
//!     ColumnDescriptor::new("qty", DataType::Number),
//! ];
//! let form = create_empty_rule_form(&columns);
//! assert_eq!(form.keys().collect::<Vec<_>>(), vec!["name", "qty"]);
//! assert!(form.values().all(|value| value.is_null()));
//! ```

mod descriptor;
mod field_type;
mod record;

pub use descriptor::ColumnDescriptor;
pub use field_type::DataType;
pub use record::{create_empty_rule_form, FieldValue, FormRecord};
