// src/file.rs

use std::{
    error::Error,
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use serde_json::{Map, Value};

use crate::csv::write_row;
use crate::schema::Schema;

/// Write a delimited export: optional header row, preserved template rows,
/// then one row per record.
pub fn write_delimited(
    path: &Path,
    headers: Option<&[String]>,
    static_rows: &[Vec<String>],
    rows: &[Vec<String>],
    sep: char,
) -> Result<(), Box<dyn Error>> {
    ensure_parent(path)?;
    let file = File::create(path)?; // truncate/overwrite
    let mut out = BufWriter::new(file);

    if let Some(h) = headers {
        write_row(&mut out, h, sep)?;
    }
    for row in static_rows {
        write_row(&mut out, row, sep)?;
    }
    for row in rows {
        write_row(&mut out, row, sep)?;
    }
    out.flush()?;
    Ok(())
}

/// Write rows as a JSON array of objects keyed by column name, in schema
/// column order.
pub fn write_json(path: &Path, schema: &Schema, rows: &[Vec<String>]) -> Result<(), Box<dyn Error>> {
    ensure_parent(path)?;

    let mut records = Vec::with_capacity(rows.len());
    for row in rows {
        let mut object = Map::new();
        for (column, cell) in schema.columns().iter().zip(row) {
            object.insert(column.clone(), Value::String(cell.clone()));
        }
        records.push(Value::Object(object));
    }

    let text = serde_json::to_string_pretty(&Value::Array(records))?;
    fs::write(path, text)?;
    Ok(())
}

/// Resolve a user-supplied `-o` value: empty → default name in cwd,
/// directory (existing or trailing-slash hint) → default name inside it,
/// anything else → taken as the file path.
pub fn resolve_single_out_path(user_o: &str, default_filename: &str) -> Result<PathBuf, Box<dyn Error>> {
    if user_o.is_empty() { return Ok(PathBuf::from(default_filename)); }
    let p = PathBuf::from(normalize_separators(user_o));
    if looks_like_dir_hint(&p) || p.is_dir() {
        ensure_directory(&p)?;
        Ok(p.join(default_filename))
    } else {
        Ok(p)
    }
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c=='/'||c=='\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}

fn ensure_parent(path: &Path) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    Ok(())
}
