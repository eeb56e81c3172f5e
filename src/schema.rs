// src/schema.rs
//
// Ordered output column schema. Draft records are unordered field→value
// maps; the schema imposes the column set and order at projection time.
// Every exported row has exactly one cell per column.

use std::collections::HashMap;

/// One specimen's draft record: field name → string value. Absent fields
/// read as empty, never as a distinct "missing" state.
pub type Record = HashMap<String, String>;

/// Field names the parser, corrector and runner read or write.
pub mod field {
    pub const CATALOG_NUMBER: &str = "catalogNumber";
    pub const OTHER_CATALOG_NUMBERS: &str = "otherCatalogNumbers";
    pub const COLLECTOR: &str = "collector";
    pub const COLLECTOR_NUMBER: &str = "collectorNumber";
    pub const COUNTRY: &str = "country";
    pub const HABITAT: &str = "habitat";
    pub const SUBSTRATE: &str = "substrate";
    pub const VERBATIM_LATITUDE: &str = "verbatimLatitude";
    pub const VERBATIM_LONGITUDE: &str = "verbatimLongitude";
    pub const VERBATIM_ELEVATION: &str = "verbatimElevation";
    pub const OCCURRENCE_REMARKS: &str = "occurrenceRemarks";
    pub const RAW_MODEL_OUTPUT: &str = "rawGPTOutput";
}

/// Scientific-name columns appended when the supplied template lacks them.
pub const NAME_COLUMNS: [&str; 3] = ["sciname", "scientificname", "scientificNameAuthorship"];

/// Column set used when no template is supplied.
const DEFAULT_COLUMNS: [&str; 25] = [
    "catalogNumber",
    "otherCatalogNumbers",
    "collector",
    "collectorNumber",
    "associatedCollectors",
    "eventDate",
    "verbatimEventDate",
    "country",
    "stateProvince",
    "county",
    "locality",
    "habitat",
    "substrate",
    "verbatimLatitude",
    "verbatimLongitude",
    "decimalLatitude",
    "decimalLongitude",
    "verbatimElevation",
    "occurrenceRemarks",
    "identifiedBy",
    "DateIdentified",
    "sciname",
    "scientificname",
    "scientificNameAuthorship",
    "rawGPTOutput",
];

#[derive(Clone, Debug)]
pub struct Schema {
    columns: Vec<String>,
}

impl Schema {
    /// Build from template columns. The scientific-name columns are
    /// appended when missing so the name fields always have somewhere to go.
    pub fn new(mut columns: Vec<String>) -> Self {
        for extra in NAME_COLUMNS {
            if !columns.iter().any(|c| c == extra) {
                columns.push(s!(extra));
            }
        }
        Self { columns }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Project a record onto the schema: one cell per column, in column
    /// order, absent fields filled with empty strings. Record fields with
    /// no matching column are dropped.
    pub fn row_from(&self, record: &Record) -> Vec<String> {
        self.columns
            .iter()
            .map(|c| record.get(c).cloned().unwrap_or_default())
            .collect()
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::new(DEFAULT_COLUMNS.iter().map(|c| s!(*c)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_columns_appended_when_missing() {
        let schema = Schema::new(vec![s!("catalogNumber"), s!("locality")]);
        let cols = schema.columns();
        assert_eq!(cols.len(), 5);
        assert_eq!(cols[2], "sciname");
        assert_eq!(cols[4], "scientificNameAuthorship");
    }

    #[test]
    fn name_columns_not_duplicated() {
        let schema = Schema::new(vec![s!("sciname"), s!("locality")]);
        let n = schema.columns().iter().filter(|c| *c == "sciname").count();
        assert_eq!(n, 1);
    }

    #[test]
    fn projection_fills_and_orders() {
        let schema = Schema::new(vec![s!("a"), s!("b"), s!("c")]);
        let mut record = Record::new();
        record.insert(s!("c"), s!("3"));
        record.insert(s!("a"), s!("1"));
        record.insert(s!("unknown"), s!("x"));

        let row = schema.row_from(&record);
        assert_eq!(&row[..3], &[s!("1"), s!(), s!("3")]);
    }

    #[test]
    fn default_schema_covers_corrected_fields() {
        let schema = Schema::default();
        for name in [
            field::CATALOG_NUMBER,
            field::OTHER_CATALOG_NUMBERS,
            field::VERBATIM_LATITUDE,
            field::VERBATIM_LONGITUDE,
            field::VERBATIM_ELEVATION,
            field::SUBSTRATE,
            field::OCCURRENCE_REMARKS,
            field::RAW_MODEL_OUTPUT,
        ] {
            assert!(schema.columns().iter().any(|c| c == name), "missing {name}");
        }
    }
}
