// src/runner.rs
use std::error::Error;
use std::path::PathBuf;

use crate::{
    correct, file,
    input::{self, InputItem},
    params::{DEFAULT_OUT_DIR, DEFAULT_OUT_STEM, Params},
    parse,
    schema::{Schema, field},
    template::{self, Template},
};

/// Optional progress sink for frontends.
/// Implement this in the frontend (CLI: print lines; tests: pass None).
pub trait Progress {
    fn begin(&mut self, _total: usize) {}
    fn log(&mut self, _msg: &str) {}
    fn item_done(&mut self, _id: &str) {}
    fn update_status(&mut self, _msg: &str) {}
}

/// A no-op progress sink you can pass when you don't care.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Summary of what was produced.
pub struct RunSummary {
    pub rows_written: usize,
    pub out_path: PathBuf,
}

/// Top-level runner: load the schema, collect items, run each through the
/// engine, export once at the end.
pub fn run(
    params: &Params,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    let template = match &params.template {
        Some(path) => template::load(path)?,
        None => Template::default(),
    };

    let items = input::collect_items(&params.input_dir)?;
    if let Some(p) = progress.as_deref_mut() {
        p.begin(items.len());
    }

    let mut rows = Vec::with_capacity(items.len());
    for item in &items {
        rows.push(process_item(&template.schema, item));
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(&item.id);
        }
    }

    let out_path = resolve_out_path(params)?;
    write_output(&out_path, params, &template, &rows)?;

    Ok(RunSummary { rows_written: rows.len(), out_path })
}

/// One item through the engine: parse, seed identity fields, correct,
/// project onto the schema. Total — malformed input degrades to a
/// remarks-only record, it never errors.
pub fn process_item(schema: &Schema, item: &InputItem) -> Vec<String> {
    let mut record = match parse::try_parse_mapping(&item.raw_text) {
        Some(record) => record,
        None => {
            logf!("{}: no structured mapping; keeping raw text as remarks", item.id);
            parse::fallback_record(&item.raw_text)
        }
    };

    // The item id is the default catalog number; a transcribed one wins.
    if record.get(field::CATALOG_NUMBER).is_none_or(|v| v.is_empty()) {
        record.insert(s!(field::CATALOG_NUMBER), item.id.clone());
    }
    record.insert(s!(field::RAW_MODEL_OUTPUT), item.raw_text.clone());

    correct::clean_and_correct(&mut record, &item.raw_text);
    schema.row_from(&record)
}

fn resolve_out_path(params: &Params) -> Result<PathBuf, Box<dyn Error>> {
    let default_name = join!(DEFAULT_OUT_STEM, ".", params.format.ext());
    match &params.out {
        Some(p) => file::resolve_single_out_path(&p.to_string_lossy(), &default_name),
        None => Ok(PathBuf::from(DEFAULT_OUT_DIR).join(default_name)),
    }
}

fn write_output(
    path: &std::path::Path,
    params: &Params,
    template: &Template,
    rows: &[Vec<String>],
) -> Result<(), Box<dyn Error>> {
    match params.format.delim() {
        Some(sep) => {
            let headers = params
                .include_headers
                .then(|| template.schema.columns().to_vec());
            file::write_delimited(path, headers.as_deref(), &template.static_rows, rows, sep)
        }
        None => file::write_json(path, &template.schema, rows),
    }
}
