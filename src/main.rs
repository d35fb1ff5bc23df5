use afx_ingredients::parse_ingredient_list;
use anyhow::Result;
use log::info;
use std::env;
use std::fs;
use std::io::{self, Read};

/// Reads ingredient lines from a file argument (or stdin) and writes one
/// AFX JSON record per line, or a single JSON array with `--array`.
fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let array_output = args.iter().any(|arg| arg == "--array");
    let path = args.iter().find(|arg| !arg.starts_with("--"));

    let input = match path {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let lines: Vec<&str> = input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    info!("Parsing {} ingredient lines", lines.len());
    let parsed = parse_ingredient_list(lines);

    if array_output {
        println!("{}", serde_json::to_string_pretty(&parsed)?);
    } else {
        for record in &parsed {
            println!("{}", serde_json::to_string(record)?);
        }
    }

    Ok(())
}
