use crate::process::raw_table::{CellValue, RawRow};
use crate::schema::headers::{de, en};
use crate::schema::MergedRecord;

/// Batch size for progress reports during a conversion run.
pub const PROGRESS_EVERY: usize = 100;

/// Zip English and German rows by position into merged records.
pub fn merge(english: &[RawRow], german: &[RawRow]) -> Vec<MergedRecord> {
    merge_with_progress(english, german, 0, |_| {})
}

/// Like [`merge`], calling `on_progress(n)` after every `every` merged rows.
/// `every == 0` disables the callback.
pub fn merge_with_progress<F>(
    english: &[RawRow],
    german: &[RawRow],
    every: usize,
    mut on_progress: F,
) -> Vec<MergedRecord>
where
    F: FnMut(usize),
{
    let empty = RawRow::new();
    let total = english.len().max(german.len());
    let mut out = Vec::with_capacity(total);

    for i in 0..total {
        let en_row = english.get(i).unwrap_or(&empty);
        let de_row = german.get(i).unwrap_or(&empty);
        out.push(merge_row(en_row, de_row));

        if every > 0 && (i + 1) % every == 0 {
            on_progress(i + 1);
        }
    }
    out
}

/// Merge a single pair of rows.
pub fn merge_row(en_row: &RawRow, de_row: &RawRow) -> MergedRecord {
    MergedRecord {
        cardata_element: en_row.text(en::ELEMENT),
        cardata_element_de: de_row.text(de::ELEMENT),
        description: en_row.text(en::DESCRIPTION),
        description_de: de_row.text(de::DESCRIPTION),
        technical_identifier: first_non_empty(
            en_row.text(en::TECHNICAL_IDENTIFIER),
            de_row.text(de::TECHNICAL_IDENTIFIER),
        ),
        data_type: first_non_empty(en_row.text(en::DATA_TYPE), de_row.text(de::DATA_TYPE)),
        typical_value_range: first_non_empty(
            en_row.text(en::VALUE_RANGE),
            de_row.text(de::VALUE_RANGE),
        ),
        unit: first_non_empty(en_row.text(en::UNIT), de_row.text(de::UNIT)),
        streaming_capable: resolve_streaming(
            en_row.get(en::STREAMABLE),
            de_row.get(de::STREAMABLE),
        ),
    }
}

fn first_non_empty(primary: String, fallback: String) -> String {
    if primary.is_empty() {
        fallback
    } else {
        primary
    }
}

/// Booleans beat leftover strings; German beats English at equal footing.
pub fn resolve_streaming(
    en_value: Option<&CellValue>,
    de_value: Option<&CellValue>,
) -> Option<CellValue> {
    match (de_value, en_value) {
        (Some(v @ CellValue::Flag(_)), _) => Some(v.clone()),
        (_, Some(v @ CellValue::Flag(_))) => Some(v.clone()),
        (Some(v), _) => Some(v.clone()),
        (None, Some(v)) => Some(v.clone()),
        (None, None) => None,
    }
}
