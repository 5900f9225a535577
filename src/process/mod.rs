// src/process/mod.rs
pub mod merge;
pub mod raw_table;
pub mod utils;

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::ConvertConfig;
use crate::extract::parse_html_file;
use crate::schema::{write_records, MergedRecord};

pub use merge::{merge, merge_with_progress};
pub use raw_table::{CellValue, RawRow, RawTable};

/// What a conversion run produced.
#[derive(Debug)]
pub struct ConversionReport {
    pub english_rows: usize,
    pub german_rows: usize,
    pub records: Vec<MergedRecord>,
    pub output: PathBuf,
}

/// Extract both tables, merge them by row position and write the artifact.
///
/// Both documents must parse before anything is written; a document
/// without a table aborts the run and leaves `output` untouched.
#[tracing::instrument(level = "info", skip(config), fields(output = %config.output.display()))]
pub fn convert_tables(config: &ConvertConfig) -> Result<ConversionReport> {
    // 1) English table
    let english = extract_logged(&config.english)?;
    // 2) German table
    let german = extract_logged(&config.german)?;

    // 3) Positional merge
    let records = merge_with_progress(
        &english.rows,
        &german.rows,
        merge::PROGRESS_EVERY,
        |n| info!("Combined {} rows...", n),
    );

    // 4) Write out
    write_records(&config.output, &records)?;
    info!("Combined {} rows", records.len());
    info!("Output saved to: {}", config.output.display());

    Ok(ConversionReport {
        english_rows: english.len(),
        german_rows: german.len(),
        records,
        output: config.output.clone(),
    })
}

fn extract_logged(path: &Path) -> Result<RawTable> {
    info!("Processing {}...", path.display());
    let table = parse_html_file(path)?;
    info!("Found {} rows in {}", table.len(), path.display());
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::streaming::CROSS_GLYPH;
    use crate::extract::ExtractError;
    use crate::schema::load_records;
    use std::fs;
    use tempfile::tempdir;

    const CHECK: &str = r#"<svg viewBox="0 0 24 24"><path d="M9 16.17L4.83 12l-1.42 1.41L9 19 21 7z"></path></svg>"#;

    fn english_html() -> String {
        r#"<!DOCTYPE html><html><body>
        <table>
          <thead><tr>
            <th>CarData item</th><th>Description</th><th>Technical identifier</th>
            <th>Data type</th><th>Typical value range</th><th>Unit</th><th>Streamable</th>
          </tr></thead>
          <tbody>
            <tr><td>Vehicle speed</td><td>Current speed</td><td>vehicle.speed</td>
                <td>double</td><td>0 - 300</td><td>km/h</td><td></td></tr>
            <tr><td>Door state</td><td>Driver door</td><td></td>
                <td>string</td><td></td><td></td><td></td></tr>
            <tr><td>broken row</td></tr>
          </tbody>
        </table></body></html>"#
            .to_string()
    }

    fn german_html() -> String {
        format!(
            r#"<!DOCTYPE html><html><body>
        <table>
          <thead><tr>
            <th>CarData Element</th><th>Beschreibung</th><th>Technischer Bezeichner</th>
            <th>Datentyp</th><th>Typischer Wertebereich</th><th>Einheit</th><th>Streamingfähig</th>
          </tr></thead>
          <tbody>
            <tr><td>Fahrzeuggeschwindigkeit</td><td>Aktuelle Geschwindigkeit</td><td>vehicle.speed</td>
                <td>double</td><td>0 - 300</td><td>km/h</td><td>{check}</td></tr>
            <tr><td>Türstatus</td><td>Fahrertür</td><td>vehicle.door.driver</td>
                <td>string</td><td>OPEN, CLOSED</td><td></td><td><svg><path d="{cross}"></path></svg></td></tr>
            <tr><td>Kilometerstand</td><td></td><td>vehicle.mileage</td>
                <td>integer</td><td></td><td>km</td><td>unbekannt</td></tr>
          </tbody>
        </table></body></html>"#,
            check = CHECK,
            cross = CROSS_GLYPH
        )
    }

    fn setup(dir: &Path, de: &str) -> ConvertConfig {
        let english = dir.join("telematic.html");
        let german = dir.join("telematic_de.html");
        fs::write(&english, english_html()).unwrap();
        fs::write(&german, de).unwrap();
        ConvertConfig {
            english,
            german,
            output: dir.join("telematic.json"),
        }
    }

    #[test]
    fn converts_both_documents() {
        let dir = tempdir().unwrap();
        let config = setup(dir.path(), &german_html());

        let report = convert_tables(&config).unwrap();
        assert_eq!(report.english_rows, 2);
        assert_eq!(report.german_rows, 3);
        assert_eq!(report.records.len(), 3);

        let speed = &report.records[0];
        assert_eq!(speed.cardata_element, "Vehicle speed");
        assert_eq!(speed.cardata_element_de, "Fahrzeuggeschwindigkeit");
        assert_eq!(speed.streaming_capable, Some(CellValue::Flag(true)));

        let door = &report.records[1];
        assert_eq!(door.technical_identifier, "vehicle.door.driver");
        assert_eq!(door.typical_value_range, "OPEN, CLOSED");
        assert_eq!(door.streaming_capable, Some(CellValue::Flag(false)));

        let mileage = &report.records[2];
        assert_eq!(mileage.cardata_element, "");
        assert_eq!(mileage.cardata_element_de, "Kilometerstand");
        assert_eq!(mileage.unit, "km");
        assert_eq!(mileage.streaming_capable, None);

        assert_eq!(load_records(&config.output).unwrap(), report.records);
    }

    #[test]
    fn missing_table_aborts_without_output() {
        let dir = tempdir().unwrap();
        let config = setup(dir.path(), "<html><body><p>Seite nicht gefunden</p></body></html>");

        let err = convert_tables(&config).unwrap_err();
        assert_eq!(err.downcast_ref::<ExtractError>(), Some(&ExtractError::NoTable));
        assert!(!config.output.exists());
    }

    #[test]
    fn missing_input_file_is_an_error() {
        let dir = tempdir().unwrap();
        let mut config = setup(dir.path(), &german_html());
        config.english = dir.path().join("absent.html");

        let err = convert_tables(&config).unwrap_err();
        assert!(format!("{:#}", err).contains("absent.html"));
        assert!(!config.output.exists());
    }
}
