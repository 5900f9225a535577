// src/catalog/mod.rs

use anyhow::Result;
use serde::Serialize;
use serde_json::Value;
use std::{collections::BTreeMap, path::Path};
use tracing::{info, warn};

use crate::schema::{load_records, MergedRecord};

/// Lookup tables keyed by technical identifier.
#[derive(Debug, Default, Serialize, PartialEq)]
pub struct TelematicCatalog {
    /// identifier → English element name
    pub descriptions: BTreeMap<String, String>,
    /// identifier → allowed values, only where the value range is a list
    pub states: BTreeMap<String, Vec<Value>>,
}

pub fn build_catalog(records: &[MergedRecord]) -> TelematicCatalog {
    let mut catalog = TelematicCatalog::default();
    for rec in records {
        if rec.technical_identifier.is_empty() || rec.cardata_element.is_empty() {
            continue;
        }
        catalog
            .descriptions
            .insert(rec.technical_identifier.clone(), rec.cardata_element.clone());

        if let Some(values) = parse_value_list(&rec.typical_value_range) {
            catalog.states.insert(rec.technical_identifier.clone(), values);
        }
    }
    info!("Generated {} descriptions", catalog.descriptions.len());
    info!(
        "Generated {} states with value ranges",
        catalog.states.len()
    );
    catalog
}

/// A value range only counts as states when it is a JSON array.
fn parse_value_list(range: &str) -> Option<Vec<Value>> {
    let trimmed = range.trim();
    if !trimmed.starts_with('[') {
        return None;
    }
    serde_json::from_str(trimmed).ok()
}

/// Load an artifact and build its catalog; a missing file gives an empty one.
pub fn load_catalog(path: &Path) -> Result<TelematicCatalog> {
    if !path.exists() {
        warn!("{} not found", path.display());
        return Ok(TelematicCatalog::default());
    }
    let records = load_records(path)?;
    Ok(build_catalog(&records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::write_records;
    use serde_json::json;
    use tempfile::tempdir;

    fn rec(id: &str, name: &str, range: &str) -> MergedRecord {
        MergedRecord {
            technical_identifier: id.into(),
            cardata_element: name.into(),
            typical_value_range: range.into(),
            ..Default::default()
        }
    }

    #[test]
    fn descriptions_need_identifier_and_name() {
        let catalog = build_catalog(&[
            rec("vehicle.speed", "Vehicle speed", "0 - 300"),
            rec("", "No identifier", ""),
            rec("vehicle.orphan", "", ""),
        ]);
        assert_eq!(catalog.descriptions.len(), 1);
        assert_eq!(catalog.descriptions["vehicle.speed"], "Vehicle speed");
        assert!(catalog.states.is_empty());
    }

    #[test]
    fn list_ranges_become_states() {
        let catalog = build_catalog(&[rec(
            "vehicle.door.state",
            "Door state",
            r#"["OPEN", "CLOSED"]"#,
        )]);
        assert_eq!(
            catalog.states["vehicle.door.state"],
            vec![json!("OPEN"), json!("CLOSED")]
        );
    }

    #[test]
    fn later_duplicates_win() {
        let catalog = build_catalog(&[rec("x", "First", ""), rec("x", "Second", "")]);
        assert_eq!(catalog.descriptions["x"], "Second");
    }

    #[test]
    fn missing_artifact_is_empty() {
        let dir = tempdir().unwrap();
        let catalog = load_catalog(&dir.path().join("telematic.json")).unwrap();
        assert_eq!(catalog, TelematicCatalog::default());
    }

    #[test]
    fn loads_from_artifact() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("telematic.json");
        write_records(&path, &[rec("vehicle.speed", "Vehicle speed", "")]).unwrap();
        let catalog = load_catalog(&path).unwrap();
        assert_eq!(catalog.descriptions["vehicle.speed"], "Vehicle speed");
    }
}
