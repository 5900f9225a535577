// src/schema/types.rs

use serde::{Deserialize, Serialize};

use crate::process::raw_table::CellValue;

/// One merged CarData signal definition, language-neutral keys.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Default)]
pub struct MergedRecord {
    pub cardata_element: String,
    pub cardata_element_de: String,
    pub description: String,
    pub description_de: String,
    pub technical_identifier: String,
    pub data_type: String,
    pub typical_value_range: String,
    pub unit: String,
    /// `true`/`false` from an icon, a leftover string, or `null` when unknown.
    pub streaming_capable: Option<CellValue>,
}
