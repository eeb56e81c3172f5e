// src/template.rs
//
// Upload-template loading. The template's header row fixes the output
// column schema; the first rows after it are boilerplate the upload
// format expects, carried into the output untouched.

use std::error::Error;
use std::fs;
use std::path::Path;

use crate::core::sanitize::normalize_ws;
use crate::csv::parse_rows;
use crate::schema::Schema;

/// How many leading template data rows are preserved.
pub const STATIC_ROW_COUNT: usize = 2;

#[derive(Clone, Debug, Default)]
pub struct Template {
    pub schema: Schema,
    pub static_rows: Vec<Vec<String>>,
}

pub fn load(path: &Path) -> Result<Template, Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    let mut rows = parse_rows(&text, ',');
    if rows.is_empty() {
        return Err(format!("Template has no header row: {}", path.display()).into());
    }

    let header = rows.remove(0);
    let columns: Vec<String> = header.iter().map(|c| normalize_ws(c)).collect();
    if columns.iter().all(|c| c.is_empty()) {
        return Err(format!("Template header row is empty: {}", path.display()).into());
    }

    let static_rows = rows.into_iter().take(STATIC_ROW_COUNT).collect();
    Ok(Template {
        schema: Schema::new(columns),
        static_rows,
    })
}
