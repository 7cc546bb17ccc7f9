//! FastQC Report Converter
//!
//! Parse one or more FastQC results (flat file, result directory or zip
//! archive) and re-encode each as JSON, JSON-LD, Turtle or TSV.

use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use fastqc_convert::convert::{Converter, OutputFormat};
use fastqc_convert::reader::read_report;
use fastqc_convert::Summary;
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let matches = Command::new("fastqc-convert")
        .version("0.1.0")
        .about("Convert FastQC reports into JSON, JSON-LD, Turtle or TSV")
        .author("Megan Johnson")
        .arg(
            Arg::new("inputs")
                .value_name("PATH")
                .help("FastQC data file, result directory or zip archive")
                .action(ArgAction::Append)
                .required(true),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("FORMAT")
                .help("Output format: json, json-ld, turtle or tsv")
                .default_value("json"),
        )
        .arg(
            Arg::new("output_dir")
                .short('o')
                .long("output-dir")
                .value_name("DIRECTORY")
                .help("Write <input-name>.<ext> files here instead of stdout"),
        )
        .arg(
            Arg::new("id")
                .long("id")
                .value_name("IDENTIFIER")
                .help("Identifier override (instead of the filename stem)"),
        )
        .get_matches();

    let format: OutputFormat = matches.get_one::<String>("format").unwrap().parse()?;
    let output_dir = matches.get_one::<String>("output_dir").map(PathBuf::from);
    let id = matches.get_one::<String>("id").map(String::as_str);
    let inputs: Vec<PathBuf> = matches
        .get_many::<String>("inputs")
        .unwrap()
        .map(PathBuf::from)
        .collect();

    if let Some(dir) = &output_dir {
        std::fs::create_dir_all(dir)?;
    }

    // One input's failure must not abort the rest
    let mut failures = 0usize;
    for input in &inputs {
        match process(input, format, id, output_dir.as_deref()) {
            Ok(()) => {}
            Err(err) => {
                eprintln!("❌ {}: {err}", input.display());
                failures += 1;
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} of {} input(s) failed", inputs.len());
    }
    Ok(())
}

fn process(
    input: &Path,
    format: OutputFormat,
    id: Option<&str>,
    output_dir: Option<&Path>,
) -> Result<()> {
    let text = read_report(input)?;
    let summary = Summary::from_text(&text)?;
    let output = Converter::new(&summary, id).convert_to(format)?;

    match output_dir {
        Some(dir) => {
            let name = input
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("fastqc_data");
            let path = dir.join(format!("{name}.{}", format.extension()));
            std::fs::write(&path, format!("{output}\n"))?;
            println!("💾 {} -> {}", input.display(), path.display());
        }
        None => println!("{output}"),
    }
    Ok(())
}
