// src/params.rs
use std::path::PathBuf;

pub const DEFAULT_INPUT_DIR: &str = "transcripts";
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_OUT_STEM: &str = "occurrences";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
    Json,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Json => "json",
        }
    }

    /// Cell separator for the delimited formats; None for JSON.
    pub fn delim(&self) -> Option<char> {
        match self {
            ExportFormat::Csv => Some(','),
            ExportFormat::Tsv => Some('\t'),
            ExportFormat::Json => None,
        }
    }
}

#[derive(Clone)]
pub struct Params {
    pub input_dir: PathBuf,        // directory of *.txt transcriptions
    pub template: Option<PathBuf>, // upload template CSV; built-in schema if absent
    pub out: Option<PathBuf>,      // output file (or directory hint)
    pub format: ExportFormat,
    pub include_headers: bool,     // header row in delimited output
}

impl Params {
    pub fn new() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            template: None,
            out: None,
            format: ExportFormat::Csv,
            include_headers: true,
        }
    }
}
