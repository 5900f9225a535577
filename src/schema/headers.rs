// src/schema/headers.rs
//! Header labels as they appear in the published tables.

pub mod en {
    pub const ELEMENT: &str = "CarData item";
    pub const DESCRIPTION: &str = "Description";
    pub const TECHNICAL_IDENTIFIER: &str = "Technical identifier";
    pub const DATA_TYPE: &str = "Data type";
    pub const VALUE_RANGE: &str = "Typical value range";
    pub const UNIT: &str = "Unit";
    pub const STREAMABLE: &str = "Streamable";
}

pub mod de {
    pub const ELEMENT: &str = "CarData Element";
    pub const DESCRIPTION: &str = "Beschreibung";
    pub const TECHNICAL_IDENTIFIER: &str = "Technischer Bezeichner";
    pub const DATA_TYPE: &str = "Datentyp";
    pub const VALUE_RANGE: &str = "Typischer Wertebereich";
    pub const UNIT: &str = "Einheit";
    /// The only column whose cells carry an icon instead of text.
    pub const STREAMABLE: &str = "Streamingfähig";
}
