use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single extracted cell: plain text, or a flag read from an icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Flag(bool),
    Text(String),
}

impl CellValue {
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            CellValue::Flag(b) => Some(*b),
            CellValue::Text(_) => None,
        }
    }

    /// Text view of the value; flags render as `"true"` / `"false"`.
    pub fn to_text(&self) -> String {
        match self {
            CellValue::Flag(b) => b.to_string(),
            CellValue::Text(s) => s.clone(),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Flag(b)
    }
}

/// One body row keyed by header label. `None` means the value is unknown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    cells: BTreeMap<String, Option<CellValue>>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, header: impl Into<String>, value: Option<CellValue>) {
        self.cells.insert(header.into(), value);
    }

    /// Builder-style insert, mostly for fixtures.
    pub fn with(mut self, header: &str, value: impl Into<CellValue>) -> Self {
        self.insert(header, Some(value.into()));
        self
    }

    /// Value under `header`, treating a stored `None` the same as a missing key.
    pub fn get(&self, header: &str) -> Option<&CellValue> {
        self.cells.get(header).and_then(Option::as_ref)
    }

    /// Text under `header`, or `""` when absent.
    pub fn text(&self, header: &str) -> String {
        self.get(header).map(CellValue::to_text).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&CellValue>)> {
        self.cells.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }
}

/// Everything pulled out of one document's table.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    /// Header labels in document order. Rows are read up to this many cells.
    pub headers: Vec<String>,
    /// Accepted body rows, in document order.
    pub rows: Vec<RawRow>,
}

impl RawTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
