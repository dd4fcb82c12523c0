//! Declared data kind of a form column

use serde::{Deserialize, Serialize};

/// What a column holds once the user fills it in.
///
/// Unknown kinds deserialize as `String`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    Number,  // f64
    Date,    // DateTime<Utc>
    Boolean, // bool
    Image,   // URL string or uploaded file
    Table,   // nested rows
    #[default]
    #[serde(other)]
    String,
}

impl DataType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Date => "date",
            Self::Boolean => "boolean",
            Self::Image => "image",
            Self::Table => "table",
            Self::String => "string",
        }
    }
}
