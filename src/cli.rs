// src/cli.rs
use std::{env, path::PathBuf};

use crate::params::{ExportFormat, Params};
use crate::runner::{self, Progress};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut params = Params::new();
    parse_cli(&mut params)?;

    let mut progress = PrintProgress;
    let summary = runner::run(&params, Some(&mut progress))?;
    println!("Wrote {} record(s) to {}", summary.rows_written, summary.out_path.display());
    Ok(())
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-i" | "--in" => {
                let v = args.next().ok_or("Missing value for --in")?;
                params.input_dir = PathBuf::from(v);
            }
            "--template" => {
                let v = args.next().ok_or("Missing value for --template")?;
                params.template = Some(PathBuf::from(v));
            }
            "-o" | "--out" => params.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?)),
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    "json" => ExportFormat::Json,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };}
            "--no-headers" => params.include_headers = false,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(())
}

/// Line-per-item progress for terminal runs.
struct PrintProgress;

impl Progress for PrintProgress {
    fn begin(&mut self, total: usize) {
        println!("Processing {} transcription(s)...", total);
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{}", msg);
    }
    fn item_done(&mut self, id: &str) {
        println!("  done: {}", id);
    }
}
