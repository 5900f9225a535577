// src/extract/mod.rs

pub mod streaming;

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use std::{fs, path::Path};
use thiserror::Error;
use tracing::{debug, instrument, trace};

use crate::process::raw_table::{CellValue, RawRow, RawTable};
use crate::process::utils::clean_text;
use crate::schema::headers::de::STREAMABLE as DE_STREAMABLE;

pub use streaming::{detect_from_text, detect_streaming_capability};

static TABLE: Lazy<Selector> = Lazy::new(|| Selector::parse("table").unwrap());
static THEAD: Lazy<Selector> = Lazy::new(|| Selector::parse("thead").unwrap());
static TBODY: Lazy<Selector> = Lazy::new(|| Selector::parse("tbody").unwrap());
static TR: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").unwrap());
static TH: Lazy<Selector> = Lazy::new(|| Selector::parse("th").unwrap());
static TD: Lazy<Selector> = Lazy::new(|| Selector::parse("td").unwrap());

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("no table found in document")]
    NoTable,
}

/// Read `path` as UTF-8 and extract its first table.
pub fn parse_html_file(path: &Path) -> Result<RawTable> {
    let html =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_html_table(&html).with_context(|| format!("extracting table from {}", path.display()))
}

/// Extract headers and body rows from the first `<table>` in `html`.
#[instrument(level = "debug", skip(html), fields(html_len = html.len()))]
pub fn parse_html_table(html: &str) -> Result<RawTable, ExtractError> {
    let doc = Html::parse_document(html);
    let table = doc.select(&TABLE).next().ok_or(ExtractError::NoTable)?;

    let headers = read_headers(table);
    trace!(?headers, "Parsed headers");

    let mut rows = Vec::new();
    let mut dropped = 0usize;
    if let Some(tbody) = table.select(&TBODY).next() {
        for tr in tbody.select(&TR) {
            match read_row(tr, &headers) {
                Some(row) => rows.push(row),
                None => dropped += 1,
            }
        }
    }

    debug!(
        headers = headers.len(),
        rows = rows.len(),
        dropped,
        "Finished table extraction"
    );
    Ok(RawTable { headers, rows })
}

fn read_headers(table: ElementRef<'_>) -> Vec<String> {
    table
        .select(&THEAD)
        .next()
        .and_then(|thead| thead.select(&TR).next())
        .map(|tr| tr.select(&TH).map(cell_text).collect())
        .unwrap_or_default()
}

/// `None` when the row has fewer cells than there are headers.
fn read_row(tr: ElementRef<'_>, headers: &[String]) -> Option<RawRow> {
    let cells: Vec<ElementRef<'_>> = tr.select(&TD).collect();
    if cells.len() < headers.len() {
        trace!(cells = cells.len(), "Skipping short row");
        return None;
    }

    let mut row = RawRow::new();
    for (header, cell) in headers.iter().zip(cells) {
        let value = if header == DE_STREAMABLE {
            streaming::detect_streaming_capability(cell).map(CellValue::Flag)
        } else {
            Some(CellValue::Text(cell_text(cell)))
        };
        row.insert(header.as_str(), value);
    }
    Some(row)
}

fn cell_text(el: ElementRef<'_>) -> String {
    let raw: String = el.text().collect();
    clean_text(&raw)
}
